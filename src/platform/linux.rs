// MyVacation platform paths for Linux
// Config: ~/.config/myvacation
// Data:   ~/.local/share/myvacation

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Uses `$XDG_CONFIG_HOME/myvacation` if set, otherwise `~/.config/myvacation`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg).join("myvacation"),
        Err(_) => home_dir().join(".config").join("myvacation"),
    }
}

/// Uses `$XDG_DATA_HOME/myvacation` if set, otherwise `~/.local/share/myvacation`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) => PathBuf::from(xdg).join("myvacation"),
        Err(_) => home_dir().join(".local").join("share").join("myvacation"),
    }
}
