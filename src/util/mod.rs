use crate::{Error, Result};
use std::path::PathBuf;

/// Return the home directory of the process owner.
///
/// Unlike joining `$HOME` blindly, an unset or empty home is reported instead of producing a
/// node store rooted at an empty segment.
pub fn home_dir() -> Result<PathBuf> {
    match dirs::home_dir() {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Err(Error::HomeDirectoryUnavailable),
    }
}
