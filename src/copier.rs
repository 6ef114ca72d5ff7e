//! Filesystem copier
//!
//! Recursive directory copies with overwrite-without-merge semantics: the
//! last copy wins, existing files at the destination are replaced, and extra
//! files already present at the destination are left alone. No diffing, no
//! backups.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::catalog::{COMMON_ENTRIES, COMMON_SENTINEL};
use crate::error::Result;

/// Recursively copy a directory tree, creating the destination as needed and
/// overwriting any files that already exist there.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Copy a payload entry that may be a single file or a directory.
fn copy_entry(src: &Path, dest: &Path) -> Result<()> {
    if src.is_dir() {
        copy_dir_recursive(src, dest)
    } else {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, dest)?;
        Ok(())
    }
}

/// Whether the shared support files are already installed at a destination.
pub fn common_files_present(dest_root: &Path) -> bool {
    dest_root.join(COMMON_SENTINEL).exists()
}

/// Copy the shared support files (utility module, global style tokens, icon
/// assets) from the payload root into the destination root.
pub fn copy_common_files(payload_root: &Path, dest_root: &Path) -> Result<()> {
    for name in COMMON_ENTRIES {
        let src = payload_root.join(name);
        let dest = dest_root.join(name);
        debug!(entry = name, "copying common file");
        copy_entry(&src, &dest)?;
        println!("✓ {name} copied successfully");
    }
    Ok(())
}
