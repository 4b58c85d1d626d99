use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::PathBuf,
    sync::{RwLock, RwLockReadGuard},
};

use crate::docket_error;
use crate::utils::errors::{DocketError, DocketErrorType};
use crate::utils::files::{expand_path, home_dir};
use crate::CONFIG;

/// Configuration sections:
///
/// - **appearance**: UI preferences (icon size).
/// - **files**: Overrides for the panel config file and the descriptor
///   directory.
///
/// Read from `~/.config/docket/config.toml`; every key is optional and
/// defaults to the panel's well-known locations.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct DocketConfig {
    #[serde(default)]
    pub appearance: ConfigAppearance,

    #[serde(default)]
    pub files: ConfigFiles,
}

impl DocketConfig {
    /// Loads the user config, falling back to defaults when the file does not
    /// exist. A present-but-invalid file is an error the caller reports; the
    /// program still starts on defaults.
    pub fn load() -> Result<Self, DocketError> {
        let home = home_dir()?;
        let path = home.join(".config/docket/config.toml");
        let mut config: DocketConfig = match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content)
                .map_err(|e| docket_error!(DocketErrorType::FileParseError(path), e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => DocketConfig::default(),
            Err(e) => {
                return Err(docket_error!(
                    DocketErrorType::FileReadError(path),
                    e.to_string()
                ))
            }
        };
        config.files.panel_config = expand_path(&config.files.panel_config, &home);
        config.files.applications_dir = expand_path(&config.files.applications_dir, &home);
        Ok(config)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ConfigAppearance {
    #[serde(default = "OtherDefaults::icon_size")]
    pub icon_size: i32,
}

impl Default for ConfigAppearance {
    fn default() -> Self {
        Self {
            icon_size: OtherDefaults::icon_size(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ConfigFiles {
    #[serde(default = "FileDefaults::panel_config")]
    pub panel_config: PathBuf,

    #[serde(default = "FileDefaults::applications_dir")]
    pub applications_dir: PathBuf,
}

impl Default for ConfigFiles {
    fn default() -> Self {
        Self {
            panel_config: FileDefaults::panel_config(),
            applications_dir: FileDefaults::applications_dir(),
        }
    }
}

pub struct FileDefaults;
impl FileDefaults {
    pub fn panel_config() -> PathBuf {
        PathBuf::from("~/.config/wf-panel-pi.ini")
    }
    pub fn applications_dir() -> PathBuf {
        PathBuf::from("/usr/share/applications")
    }
}

pub struct OtherDefaults;
impl OtherDefaults {
    pub fn icon_size() -> i32 {
        24
    }
    pub fn fallback_icon() -> String {
        String::from("application-x-executable")
    }
}

pub struct ConfigGuard;
impl<'g> ConfigGuard {
    fn get_config() -> Result<&'g RwLock<DocketConfig>, DocketError> {
        CONFIG.get().ok_or_else(|| {
            docket_error!(
                DocketErrorType::ConfigError(None),
                "Config not initialized".to_string()
            )
        })
    }

    pub fn read() -> Result<RwLockReadGuard<'g, DocketConfig>, DocketError> {
        Self::get_config()?.read().map_err(|_| {
            docket_error!(
                DocketErrorType::ConfigError(None),
                "Failed to acquire read lock on config".to_string()
            )
        })
    }
}
