//! Static component catalog
//!
//! This module replaces the stringly-typed component table with a proper Rust
//! enum that provides compile-time validation and exhaustive matching. The
//! catalog is compiled into the binary; the only fallible operation is
//! validating a user-supplied name against it.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{InstallerError, Result};

/// An installable component. Variant names are the catalog identifiers users
/// pass on the command line (`--add FormRenderer`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Component {
    Card,
    Select,
    SideBar,
    MultiSelect,
    Button,
    DatePicker,
    Checkbox,
    DarkMode,
    Dialog,
    Grid,
    Input,
    Modal,
    Spinner,
    Toast,
    Tabs,
    Uploader,
    FormRenderer,
    MaterialInput,
    TextArea,
    ContextMenu,
    Navbar,
    DataGrid,
    BreadCrumb,
    Bargraph,
    UsePaginatedData,
    UseUploader,
    DataGridBeta,
}

impl Component {
    /// Folder name for this component, both under the payload's `components/`
    /// directory and under the destination `component-lib/` directory.
    /// Always the lower-cased catalog name.
    pub fn source_dir(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Select => "select",
            Self::SideBar => "sidebar",
            Self::MultiSelect => "multiselect",
            Self::Button => "button",
            Self::DatePicker => "datepicker",
            Self::Checkbox => "checkbox",
            Self::DarkMode => "darkmode",
            Self::Dialog => "dialog",
            Self::Grid => "grid",
            Self::Input => "input",
            Self::Modal => "modal",
            Self::Spinner => "spinner",
            Self::Toast => "toast",
            Self::Tabs => "tabs",
            Self::Uploader => "uploader",
            Self::FormRenderer => "formrenderer",
            Self::MaterialInput => "materialinput",
            Self::TextArea => "textarea",
            Self::ContextMenu => "contextmenu",
            Self::Navbar => "navbar",
            Self::DataGrid => "datagrid",
            Self::BreadCrumb => "breadcrumb",
            Self::Bargraph => "bargraph",
            Self::UsePaginatedData => "usepaginateddata",
            Self::UseUploader => "useuploader",
            Self::DataGridBeta => "datagridbeta",
        }
    }

    /// Declared dependencies of this component, expanded exactly one level
    /// deep by the resolver. Only FormRenderer declares any.
    pub fn dependencies(&self) -> &'static [Component] {
        match self {
            Self::FormRenderer => &[
                Self::Select,
                Self::MultiSelect,
                Self::Input,
                Self::DatePicker,
            ],
            _ => &[],
        }
    }

    /// Notice printed after installing a component slated for removal.
    pub fn deprecation_notice(&self) -> Option<&'static str> {
        match self {
            Self::Grid => Some(
                "This version of Grid will be deprecated soon. \
                 Please install the new DataGrid component.",
            ),
            _ => None,
        }
    }

    /// All catalog components in declaration order.
    pub fn all() -> Vec<Component> {
        Self::iter().collect()
    }
}

/// One row of the catalog in serializable form, for `--list --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: Component,
    pub path: String,
    pub dependencies: Vec<Component>,
}

/// The full catalog as serializable entries.
pub fn catalog_entries() -> Vec<CatalogEntry> {
    Component::iter()
        .map(|c| CatalogEntry {
            name: c,
            path: format!("components/{}", c.source_dir()),
            dependencies: c.dependencies().to_vec(),
        })
        .collect()
}

/// Parse a single component name, mapping parse failures to a validation
/// error that carries the offending name.
pub fn parse_component(name: &str) -> Result<Component> {
    name.parse::<Component>()
        .map_err(|_| InstallerError::unknown_component(name))
}

/// Parse a comma-separated component list from the `--add` flag.
///
/// Names are trimmed and empty segments dropped. The whole batch is rejected
/// on the first unknown name; an input with no names at all is a validation
/// error (nothing to install).
pub fn parse_list(input: &str) -> Result<Vec<Component>> {
    let components = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_component)
        .collect::<Result<Vec<_>>>()?;

    if components.is_empty() {
        return Err(InstallerError::validation(
            "no component names given (expected e.g. --add Button,Select)",
        ));
    }
    Ok(components)
}

/// Shared support files copied once per destination, alongside the first
/// installed component: utility module, global style tokens, icon assets.
pub const COMMON_ENTRIES: &[&str] = &["utils.ts", "globalStyle.ts", "icon"];

/// Presence of this file at the destination means the common files have
/// already been installed there.
pub const COMMON_SENTINEL: &str = "utils.ts";
