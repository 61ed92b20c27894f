//! Locating the high-score file.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use directories::BaseDirs;

/// Directory created under the config home.
pub const APP_DIR: &str = "term2048";
/// File name inside [`APP_DIR`].
pub const HIGHSCORE_FILE: &str = "highscore";
/// Used when no config directory can be determined.
pub const FALLBACK_FILE: &str = ".term2048_highscore";

/// Resolve the high-score path from the process environment.
///
/// `$XDG_CONFIG_HOME` wins when set, then the platform config directory,
/// then a file in the working directory.
pub fn highscore_path() -> PathBuf {
    let default_config = BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf());
    resolve_highscore_path(env::var_os("XDG_CONFIG_HOME"), default_config)
}

/// Pure form of [`highscore_path`]. An empty `config_home` counts as unset.
pub fn resolve_highscore_path(
    config_home: Option<OsString>,
    default_config: Option<PathBuf>,
) -> PathBuf {
    config_home
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .or(default_config)
        .map(|base| base.join(APP_DIR).join(HIGHSCORE_FILE))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_FILE))
}
