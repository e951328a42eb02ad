//! Platform-aware path resolution for gridboard.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/gridboard` or `~/.config/gridboard`
//! - Data (persisted layouts/widgets): `$XDG_DATA_HOME/gridboard` or
//!   `~/.local/share/gridboard`
//!
//! On **macOS**, uses Apple conventions with XDG env var overrides:
//! - Config: `$XDG_CONFIG_HOME/gridboard` or `~/Library/Application Support/gridboard`
//! - Data: `$XDG_DATA_HOME/gridboard` or `~/Library/Application Support/gridboard`

use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "gridboard";

/// Returns the configuration directory for gridboard.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/gridboard` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/gridboard`
///    - macOS: `~/Library/Application Support/gridboard`
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::config_dir().expect("could not determine config directory")
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::home_dir()
            .expect("could not determine home directory")
            .join(".config")
    }
}

/// Returns the path to the main configuration file.
///
/// Resolves to `config_dir()/config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns the data directory holding the persisted dashboard records.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/gridboard` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.local/share/gridboard`
///    - macOS: `~/Library/Application Support/gridboard`
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    dirs::data_dir()
        .expect("could not determine data directory")
        .join(APP_NAME)
}

/// Creates a directory and all parent directories with mode 0700.
///
/// Equivalent to `mkdir -p` with restricted permissions.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

/// Creates the configuration directory if it does not exist, returning its path.
pub fn ensure_config_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir();
    ensure_dir(&dir)?;
    Ok(dir)
}
