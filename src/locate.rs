//! Resolve the directory that holds the alias file.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Environment variable that overrides the home directory lookup.
pub const HOME_OVERRIDE_VAR: &str = "OPN_HOME";

/// Return the directory the alias file lives in, using the process environment.
///
/// # Errors
///
/// Returns [`Error::HomeNotFound`] when no home directory can be determined.
pub fn locate() -> Result<PathBuf> {
    locate_with(|key| std::env::var_os(key), cfg!(windows))
        .or_else(dirs::home_dir)
        .ok_or(Error::HomeNotFound)
}

/// Resolve the home directory from `env`.
///
/// `OPN_HOME` wins when set. On Windows `HOMEDRIVE` + `HOMEPATH` is tried
/// before `USERPROFILE`; everywhere else `HOME` is used. Empty values count
/// as unset.
#[must_use]
pub fn locate_with<F>(env: F, windows: bool) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    let var = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(dir) = var(HOME_OVERRIDE_VAR) {
        return Some(PathBuf::from(dir));
    }

    if windows {
        if let (Some(drive), Some(path)) = (var("HOMEDRIVE"), var("HOMEPATH")) {
            let mut home = drive;
            home.push(path);
            return Some(PathBuf::from(home));
        }
        return var("USERPROFILE").map(PathBuf::from);
    }

    var("HOME").map(PathBuf::from)
}
