//! Installation orchestration
//!
//! `InstallSession` carries the explicit per-invocation state (payload
//! location, destination, whether the shared files were handled) through the
//! copy loop, rather than keeping any module-level mutable state. A session
//! lives for exactly one CLI invocation; the only record of what has been
//! installed is the copied folders themselves.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::catalog::Component;
use crate::copier;
use crate::error::{InstallerError, Result};

/// Name of the payload directory shipped alongside the binary.
const PAYLOAD_DIR: &str = "source";

/// Subdirectory of the payload holding one folder per component.
const COMPONENTS_DIR: &str = "components";

/// Locate the bundled payload: the `source/` directory next to the running
/// executable.
pub fn bundled_payload_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        InstallerError::validation("cannot locate bundled source: executable has no parent directory")
    })?;
    Ok(dir.join(PAYLOAD_DIR))
}

/// State for one installer invocation.
pub struct InstallSession {
    payload_root: PathBuf,
    dest_root: PathBuf,
    common_handled: bool,
    installed: Vec<Component>,
}

impl InstallSession {
    /// Create a session copying from `payload_root` (the directory holding
    /// `components/` and the shared support files) into `dest_root` (the
    /// project's `component-lib` directory).
    pub fn new(payload_root: impl Into<PathBuf>, dest_root: impl Into<PathBuf>) -> Self {
        Self {
            payload_root: payload_root.into(),
            dest_root: dest_root.into(),
            common_handled: false,
            installed: Vec::new(),
        }
    }

    pub fn dest_root(&self) -> &Path {
        &self.dest_root
    }

    /// Components successfully installed so far, in copy order.
    pub fn installed(&self) -> &[Component] {
        &self.installed
    }

    /// Install every component in the resolved set, in order.
    ///
    /// The destination directory is created up front. A missing payload
    /// folder aborts the run with an error; components copied before the
    /// failure stay on disk (no rollback).
    pub fn install_all(&mut self, install_set: &[Component]) -> Result<()> {
        fs::create_dir_all(&self.dest_root)?;
        for &component in install_set {
            self.install_component(component)?;
        }
        Ok(())
    }

    /// Copy one component's folder into the destination, overwriting whatever
    /// is there. The first successful copy also installs the shared support
    /// files, unless a previous run already left them at the destination.
    fn install_component(&mut self, component: Component) -> Result<()> {
        let src = self
            .payload_root
            .join(COMPONENTS_DIR)
            .join(component.source_dir());
        if !src.is_dir() {
            warn!(component = %component, path = %src.display(), "payload folder missing");
            return Err(InstallerError::missing_source(component.to_string(), src));
        }

        let dest = self.dest_root.join(component.source_dir());
        copier::copy_dir_recursive(&src, &dest)?;
        info!(component = %component, dest = %dest.display(), "component installed");
        println!("✓ Component {component} installed successfully");
        if let Some(notice) = component.deprecation_notice() {
            println!("  ⚠ {notice}");
        }

        if !self.common_handled {
            if copier::common_files_present(&self.dest_root) {
                info!("common files already present, skipping");
            } else {
                copier::copy_common_files(&self.payload_root, &self.dest_root)?;
            }
            self.common_handled = true;
        }

        self.installed.push(component);
        Ok(())
    }
}
