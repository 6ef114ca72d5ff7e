//! complib - Main entry point
//!
//! A terminal installer that copies UI component source folders from the
//! bundled catalog into a consumer project's tree.

use std::io::stdout;

use anyhow::Context;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use complib::catalog::{self, Component};
use complib::cli::Cli;
use complib::error::InstallerError;
use complib::framework::{self, Framework};
use complib::installer::{InstallSession, bundled_payload_root};
use complib::resolver::resolve_install_set;
use complib::SelectorApp;

/// Initialize tracing with RUST_LOG override support.
///
/// Logs go to stderr so stdout stays clean for the install report; default
/// level is warn to keep normal runs quiet.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    init_tracing();
    info!("complib starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    // Listing mode: print the catalog and exit without touching the
    // filesystem.
    if cli.list {
        list_components(cli.json)?;
        return Ok(());
    }

    // Selection: interactive checklist or --add flag.
    let requested: Vec<Component> = if cli.interactive {
        run_interactive_selector()?
    } else if let Some(spec) = cli.add.as_deref() {
        match catalog::parse_list(spec) {
            Ok(components) => components,
            Err(e) => {
                eprintln!("✗ {e}");
                print_available_components();
                std::process::exit(1);
            }
        }
    } else {
        eprintln!(
            "✗ Nothing to do: pass -a/--add <component>, -i/--interactive, or -l/--list"
        );
        std::process::exit(1);
    };

    if requested.is_empty() {
        println!("No components selected. Exiting...");
        return Ok(());
    }

    let install_set = resolve_install_set(&requested);
    debug!(requested = requested.len(), resolved = install_set.len(), "install set resolved");

    // Destination: explicit framework flag wins, otherwise probe the
    // project directory for marker files.
    let explicit = match cli.framework.as_deref() {
        Some(raw) => match raw.parse::<Framework>() {
            Ok(framework) => Some(framework),
            Err(_) => {
                eprintln!("✗ Unknown framework: {raw}");
                eprintln!("  Valid frameworks: next, vite");
                std::process::exit(1);
            }
        },
        None => None,
    };
    let project_root = std::env::current_dir().context("failed to read current directory")?;
    let framework = match framework::locate(explicit, &project_root) {
        Ok(framework) => framework,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };
    let dest_root = project_root.join(framework.dest_root());
    info!(framework = %framework, dest = %dest_root.display(), "destination resolved");

    let payload_root = bundled_payload_root().context("failed to locate bundled source")?;
    let mut session = InstallSession::new(payload_root, &dest_root);

    println!("Installing {} component(s)...", install_set.len());
    if let Err(e) = session.install_all(&install_set) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }

    // Show which components came in as dependencies rather than by request.
    let dependencies: Vec<Component> = install_set
        .iter()
        .copied()
        .filter(|c| !requested.contains(c))
        .collect();
    if !dependencies.is_empty() {
        println!("\nDependencies installed:");
        for dep in &dependencies {
            println!("- {dep}");
        }
    }

    println!(
        "\n✓ Installed {} component(s) to {}",
        session.installed().len(),
        dest_root.display()
    );
    Ok(())
}

/// Print the catalog, either human-readable or as JSON.
fn list_components(json: bool) -> anyhow::Result<()> {
    if json {
        let entries = catalog::catalog_entries();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Available components:");
    for component in Component::all() {
        let deps = component.dependencies();
        if deps.is_empty() {
            println!("- {component}");
        } else {
            let names = deps
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            println!("- {component} (requires: {names})");
        }
    }
    Ok(())
}

fn print_available_components() {
    eprintln!("\nAvailable components:");
    for component in Component::all() {
        eprintln!("- {component}");
    }
}

/// Run the interactive checklist, always restoring the terminal afterwards.
fn run_interactive_selector() -> anyhow::Result<Vec<Component>> {
    enable_raw_mode()
        .map_err(|e| InstallerError::terminal(format!("failed to enable raw mode: {e}")))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| InstallerError::terminal(format!("failed to enter alternate screen: {e}")))?;

    let backend = CrosstermBackend::new(stdout());
    let result = match Terminal::new(backend) {
        Ok(mut terminal) => {
            let mut app = SelectorApp::new();
            app.run(&mut terminal).map_err(anyhow::Error::from)
        }
        Err(e) => Err(InstallerError::terminal(format!("failed to create terminal: {e}")).into()),
    };

    // Cleanup terminal (always attempt cleanup, even if the selector failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}
