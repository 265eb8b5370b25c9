//! User configuration, read from `~/.config/stickynote/config.toml`.
//!
//! ```toml
//! commands_file = "~/notes/vim.json"
//! missing_file = "strict"   # or "defaults"
//! theme = "nord"
//! frameless = true
//!
//! [keys.custom]
//! save = "ctrl+w"
//! ```

use super::keymap::KeyConfig;
use crate::domain::store::MissingFilePolicy;
use crate::infrastructure::json_file::DEFAULT_COMMANDS_FILE;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const APP_NAME: &str = "stickynote";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub commands_file: Option<PathBuf>,
    pub missing_file: Option<MissingFilePolicy>,
    pub theme: PaletteType,
    pub frameless: bool,
    pub keys: KeyConfig,
}

/// `~/.config/stickynote`
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push(APP_NAME);
        path
    })
}

#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

impl AppConfig {
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupOverrides {
    pub file: Option<PathBuf>,
    pub policy: Option<MissingFilePolicy>,
    pub theme: Option<PaletteType>,
}

/// Which file to open at startup and what to do when it does not exist.
///
/// With nothing configured the legacy `commands.json` in the working
/// directory is used and a missing file shows the built-in defaults. A file
/// named on the command line starts empty when missing unless a policy flag
/// says otherwise; a configured file follows `missing_file`, strict if unset.
#[must_use]
pub fn resolve_startup(
    overrides: &StartupOverrides,
    config: &AppConfig,
) -> (PathBuf, MissingFilePolicy) {
    let policy = match (&overrides.file, overrides.policy) {
        (_, Some(policy)) => policy,
        (Some(_), None) => MissingFilePolicy::Strict,
        (None, None) => config.missing_file.unwrap_or(if config.commands_file.is_some() {
            MissingFilePolicy::Strict
        } else {
            MissingFilePolicy::WithDefaults
        }),
    };

    let path = overrides
        .file
        .clone()
        .or_else(|| config.commands_file.clone())
        .map_or_else(|| PathBuf::from(DEFAULT_COMMANDS_FILE), |p| expand_home(&p));
    (path, policy)
}

/// Expands a leading `~/`.
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), home::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_legacy_default() {
        let (path, policy) = resolve_startup(&StartupOverrides::default(), &AppConfig::default());
        assert_eq!(path, PathBuf::from(DEFAULT_COMMANDS_FILE));
        assert_eq!(policy, MissingFilePolicy::WithDefaults);
    }

    #[test]
    fn test_resolve_explicit_path_is_strict() {
        let overrides = StartupOverrides {
            file: Some(PathBuf::from("notes/git.json")),
            ..Default::default()
        };
        let (path, policy) = resolve_startup(&overrides, &AppConfig::default());
        assert_eq!(path, PathBuf::from("notes/git.json"));
        assert_eq!(policy, MissingFilePolicy::Strict);

        let config = AppConfig {
            commands_file: Some(PathBuf::from("vim.json")),
            ..Default::default()
        };
        let (path, policy) = resolve_startup(&StartupOverrides::default(), &config);
        assert_eq!(path, PathBuf::from("vim.json"));
        assert_eq!(policy, MissingFilePolicy::Strict);
    }

    #[test]
    fn test_resolve_policy_precedence() {
        let config = AppConfig {
            commands_file: Some(PathBuf::from("vim.json")),
            missing_file: Some(MissingFilePolicy::WithDefaults),
            ..Default::default()
        };
        let (_, policy) = resolve_startup(&StartupOverrides::default(), &config);
        assert_eq!(policy, MissingFilePolicy::WithDefaults);

        let overrides = StartupOverrides {
            policy: Some(MissingFilePolicy::Strict),
            ..Default::default()
        };
        let (_, policy) = resolve_startup(&overrides, &config);
        assert_eq!(policy, MissingFilePolicy::Strict);

        // A file named on the command line ignores the configured policy
        let overrides = StartupOverrides {
            file: Some(PathBuf::from("git.json")),
            ..Default::default()
        };
        let (path, policy) = resolve_startup(&overrides, &config);
        assert_eq!(path, PathBuf::from("git.json"));
        assert_eq!(policy, MissingFilePolicy::Strict);
    }

    #[test]
    fn test_load_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "missing_file = \"strict\"\ntheme = \"nord\"\nframeless = true\n\n[keys.custom]\nsave = \"ctrl+w\"\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.missing_file, Some(MissingFilePolicy::Strict));
        assert_eq!(config.theme, PaletteType::Nord);
        assert!(config.frameless);
        assert_eq!(
            config.keys.custom.unwrap().get("save").map(String::as_str),
            Some("ctrl+w")
        );
    }

    #[test]
    fn test_load_missing_and_broken_config() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        assert_eq!(AppConfig::load(&missing).unwrap(), AppConfig::default());

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "theme = [").unwrap();
        assert!(matches!(
            AppConfig::load(&broken),
            Err(ConfigError::Parse { .. })
        ));
    }
}
