// SPDX-License-Identifier: MPL-2.0
//! Directory resolution for settings and persisted preferences.
//!
//! Both directories resolve the same way, most specific first:
//! 1. **Explicit override** passed to [`resolve`] (tests, embedders)
//! 2. **CLI arguments** `--config-dir` / `--data-dir`, see [`init_cli_overrides`]
//! 3. **Environment variables** `OG_DASHBOARD_CONFIG_DIR` / `OG_DASHBOARD_DATA_DIR`
//! 4. **Platform default** from the `dirs` crate, with the app name appended
//!
//! `settings.toml` lives in the config directory. Application-managed
//! state such as the language preference lives in the data directory.

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "OgDashboard";

pub const ENV_DATA_DIR: &str = "OG_DASHBOARD_DATA_DIR";

pub const ENV_CONFIG_DIR: &str = "OG_DASHBOARD_CONFIG_DIR";

/// The two directories the dashboard writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
    Config,
    Data,
}

impl AppDir {
    fn env_var(self) -> &'static str {
        match self {
            AppDir::Config => ENV_CONFIG_DIR,
            AppDir::Data => ENV_DATA_DIR,
        }
    }

    fn platform_base(self) -> Option<PathBuf> {
        match self {
            AppDir::Config => dirs::config_dir(),
            AppDir::Data => dirs::data_dir(),
        }
    }
}

#[derive(Debug, Default)]
struct CliOverrides {
    config_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
}

static CLI_OVERRIDES: OnceLock<CliOverrides> = OnceLock::new();

/// Records `--data-dir` / `--config-dir` once at startup.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) -> Result<()> {
    CLI_OVERRIDES
        .set(CliOverrides {
            config_dir: config_dir.map(PathBuf::from),
            data_dir: data_dir.map(PathBuf::from),
        })
        .map_err(|_| Error::Config("directory overrides already initialized".into()))
}

fn cli_override(dir: AppDir) -> Option<PathBuf> {
    let overrides = CLI_OVERRIDES.get()?;
    match dir {
        AppDir::Config => overrides.config_dir.clone(),
        AppDir::Data => overrides.data_dir.clone(),
    }
}

/// Resolves `dir`. `None` only when no platform directory exists.
pub fn resolve(dir: AppDir, override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path.or_else(|| cli_override(dir)) {
        return Some(path);
    }

    match std::env::var(dir.env_var()) {
        Ok(env_path) if !env_path.is_empty() => return Some(PathBuf::from(env_path)),
        _ => {}
    }

    dir.platform_base().map(|base| base.join(APP_NAME))
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(AppDir::Config, override_path)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(AppDir::Data, override_path)
}
