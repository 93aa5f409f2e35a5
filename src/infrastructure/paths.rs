//! Path utilities for locating artlist's files.

use std::path::{Path, PathBuf};

/// Returns the data directory for artlist files.
///
/// Resolves to `<local data dir>/artlist`, e.g. `~/.local/share/artlist` on
/// Linux. Falls back to the system temporary directory when the platform has
/// no data directory.
///
/// # Examples
///
/// ```
/// use artlist::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("artlist"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("artlist")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and all paths on platforms without a home
/// directory, are returned unchanged.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use artlist::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde(Path::new("/absolute/path")), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
