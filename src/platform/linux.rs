// pocketbin platform paths for Linux
// Config: ~/.config/pocketbin

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for pocketbin on Linux.
/// Uses `$XDG_CONFIG_HOME/pocketbin` if set, otherwise `~/.config/pocketbin`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("pocketbin")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("pocketbin")
    }
}
