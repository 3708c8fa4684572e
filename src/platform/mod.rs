// MyVacation platform abstraction
// Provides platform-specific config and data paths for Windows, macOS, and Linux.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "MYVACATION_DATA_DIR";

/// Returns the platform-specific configuration directory for MyVacation.
///
/// - **Linux**: `~/.config/myvacation` (or `$XDG_CONFIG_HOME/myvacation`)
/// - **macOS**: `~/Library/Application Support/MyVacation`
/// - **Windows**: `%APPDATA%/MyVacation`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the directory holding the history database.
///
/// `$MYVACATION_DATA_DIR` wins when set; otherwise the platform data directory.
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
