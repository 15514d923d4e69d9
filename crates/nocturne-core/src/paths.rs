use std::env;
use std::path::PathBuf;

/// Return the user's home directory path.
///
/// Uses HOME on Unix-like systems and USERPROFILE on Windows.
pub fn get_home_dir() -> Result<String, String> {
    if let Ok(home) = env::var("HOME") {
        if !home.is_empty() {
            return Ok(home);
        }
    }

    if let Ok(profile) = env::var("USERPROFILE") {
        if !profile.is_empty() {
            return Ok(profile);
        }
    }

    Err("Home directory not set".to_string())
}

/// Return the application's private data directory.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/nocturne`
/// 2. `$APPDATA/nocturne` (Windows)
/// 3. `$HOME/.local/share/nocturne` (or USERPROFILE equivalent)
///
/// The directory is not created here; the persistence backend creates it on
/// first save.
pub fn data_dir() -> Result<PathBuf, String> {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join("nocturne"));
        }
    }

    if let Ok(appdata) = env::var("APPDATA") {
        if !appdata.is_empty() {
            return Ok(PathBuf::from(appdata).join("nocturne"));
        }
    }

    let home = get_home_dir()?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("nocturne"))
}
