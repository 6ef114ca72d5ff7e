use clap::Parser;

/// complib — copy UI components from the bundled catalog into your project
#[derive(Parser)]
#[command(name = "complib")]
#[command(about = "Install UI components from the bundled catalog into your project tree")]
#[command(version)]
#[command(after_help = "\
Examples:
  complib -a Button                Install a single component
  complib -a Button,Card,Modal     Install multiple components
  complib -i                       Interactive selection mode
  complib -l                       List available components")]
pub struct Cli {
    /// Component(s) to install: a single name or a comma-separated list
    #[arg(short, long, value_name = "NAME[,NAME...]")]
    pub add: Option<String>,

    /// Interactive component selection (full-screen checklist)
    #[arg(short, long, conflicts_with = "add")]
    pub interactive: bool,

    /// List available components and exit
    #[arg(short, long)]
    pub list: bool,

    /// With --list: emit the catalog as JSON
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Target framework (next or vite); probed from config marker files when omitted
    #[arg(short, long, value_name = "FRAMEWORK")]
    pub framework: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_args() {
        let result = Cli::try_parse_from(["complib"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert!(cli.add.is_none());
        assert!(!cli.interactive);
        assert!(!cli.list);
    }

    #[test]
    fn test_cli_add_single_component() {
        let cli = Cli::try_parse_from(["complib", "--add", "Button"]).unwrap();
        assert_eq!(cli.add.as_deref(), Some("Button"));
    }

    #[test]
    fn test_cli_add_short_flag_with_list() {
        let cli = Cli::try_parse_from(["complib", "-a", "Button,Card,Modal"]).unwrap();
        assert_eq!(cli.add.as_deref(), Some("Button,Card,Modal"));
    }

    #[test]
    fn test_cli_interactive_flag() {
        let cli = Cli::try_parse_from(["complib", "-i"]).unwrap();
        assert!(cli.interactive);
    }

    #[test]
    fn test_cli_list_flag() {
        let cli = Cli::try_parse_from(["complib", "-l"]).unwrap();
        assert!(cli.list);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_json_requires_list() {
        assert!(Cli::try_parse_from(["complib", "--json"]).is_err());
        let cli = Cli::try_parse_from(["complib", "--list", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_interactive_conflicts_with_add() {
        assert!(Cli::try_parse_from(["complib", "-i", "-a", "Button"]).is_err());
    }

    #[test]
    fn test_cli_framework_override() {
        let cli = Cli::try_parse_from(["complib", "-a", "Button", "-f", "vite"]).unwrap();
        assert_eq!(cli.framework.as_deref(), Some("vite"));
    }
}
