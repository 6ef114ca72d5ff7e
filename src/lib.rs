//! complib library
//!
//! Core functionality for the component-library installer: the static
//! catalog, one-level dependency resolution, framework-based destination
//! detection, overwrite-copy plumbing, and the interactive selector.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod copier;
pub mod error;
pub mod framework;
pub mod installer;
pub mod resolver;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{SelectorApp, SelectorResult};
pub use catalog::{CatalogEntry, Component, catalog_entries, parse_list};
pub use cli::Cli;
pub use error::{InstallerError, Result};
pub use framework::Framework;
pub use installer::{InstallSession, bundled_payload_root};
pub use resolver::resolve_install_set;
