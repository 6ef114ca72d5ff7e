//! Target framework detection
//!
//! Determines the destination root inside the consumer project: an explicit
//! `--framework` flag wins; otherwise the working directory is probed for
//! known config marker files. With no flag and no marker the invocation is
//! aborted before anything is copied.

use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{InstallerError, Result};

/// Supported consumer project frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Framework {
    #[strum(serialize = "next")]
    Next,
    #[strum(serialize = "vite")]
    Vite,
}

impl Framework {
    /// Config filenames that identify a project as using this framework.
    pub fn marker_files(&self) -> &'static [&'static str] {
        match self {
            Self::Next => &["next.config.js", "next.config.mjs", "next.config.ts"],
            Self::Vite => &[
                "vite.config.js",
                "vite.config.ts",
                "vite.config.mjs",
                "vite.config.mts",
            ],
        }
    }

    /// Destination root template, relative to the project directory.
    /// The component folders land in subdirectories of this path.
    pub fn dest_root(&self) -> &'static str {
        match self {
            Self::Next => "app/component-lib",
            Self::Vite => "src/component-lib",
        }
    }

    /// Probe a project directory for marker files. Frameworks are checked in
    /// declaration order, so a project carrying both a Next and a Vite config
    /// resolves to Next.
    pub fn detect(project_root: &Path) -> Option<Framework> {
        Self::iter().find(|framework| {
            framework
                .marker_files()
                .iter()
                .any(|marker| project_root.join(marker).is_file())
        })
    }
}

/// Resolve the target framework for one invocation: explicit flag first,
/// marker probing second, hard error third.
pub fn locate(explicit: Option<Framework>, project_root: &Path) -> Result<Framework> {
    if let Some(framework) = explicit {
        return Ok(framework);
    }
    Framework::detect(project_root).ok_or_else(|| {
        InstallerError::unresolved_framework(
            "no next.config.* or vite.config.* found in the current directory; \
             pass --framework <next|vite>",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_framework_parse_and_display() {
        assert_eq!("next".parse::<Framework>().unwrap(), Framework::Next);
        assert_eq!("vite".parse::<Framework>().unwrap(), Framework::Vite);
        assert_eq!(Framework::Next.to_string(), "next");
        assert!("angular".parse::<Framework>().is_err());
    }

    #[test]
    fn test_dest_root_templates() {
        assert_eq!(Framework::Next.dest_root(), "app/component-lib");
        assert_eq!(Framework::Vite.dest_root(), "src/component-lib");
    }

    #[test]
    fn test_detect_next_marker() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("next.config.mjs"), "export default {}").unwrap();
        assert_eq!(Framework::detect(dir.path()), Some(Framework::Next));
    }

    #[test]
    fn test_detect_vite_marker() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vite.config.ts"), "export default {}").unwrap();
        assert_eq!(Framework::detect(dir.path()), Some(Framework::Vite));
    }

    #[test]
    fn test_detect_prefers_next_when_both_present() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("next.config.js"), "").unwrap();
        fs::write(dir.path().join("vite.config.js"), "").unwrap();
        assert_eq!(Framework::detect(dir.path()), Some(Framework::Next));
    }

    #[test]
    fn test_detect_ignores_directories_named_like_markers() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("next.config.js")).unwrap();
        assert_eq!(Framework::detect(dir.path()), None);
    }

    #[test]
    fn test_locate_explicit_flag_wins_over_markers() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("next.config.js"), "").unwrap();
        let framework = locate(Some(Framework::Vite), dir.path()).unwrap();
        assert_eq!(framework, Framework::Vite);
    }

    #[test]
    fn test_locate_errors_without_flag_or_marker() {
        let dir = TempDir::new().unwrap();
        let err = locate(None, dir.path()).unwrap_err();
        assert!(matches!(err, InstallerError::UnresolvedFramework(_)));
    }
}
