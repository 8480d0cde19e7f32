//! Settings file resolution
//!
//! Resolution order: explicit path (flag or `SNIPCRAFT_CONFIG`) → `snipcraft.yaml`
//! in the working directory → built-in defaults.

use super::locale::Locale;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "snipcraft.yaml";

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "SNIPCRAFT_CONFIG";

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow terminal detection
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Apply to the global `colored` switch
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }
}

/// Presentation preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub color: ColorMode,

    pub locale: Locale,

    /// Print the intro banner before commands
    pub show_banner: bool,

    /// Type → color name overrides, merged over the built-in palette
    pub type_colors: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            locale: Locale::En,
            show_banner: true,
            type_colors: BTreeMap::new(),
        }
    }
}

/// Where the effective settings came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Settings plus their origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub settings: Settings,
    pub source: ConfigSource,
}

impl Settings {
    /// Resolve settings once at startup.
    ///
    /// A missing `explicit` file is an error; a missing implicit file is not.
    pub fn resolve(
        explicit: Option<&Path>,
        working_dir: &Path,
    ) -> Result<ResolvedSettings, ConfigError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::from_file(path);
        }

        let implicit = working_dir.join(CONFIG_FILE);
        if implicit.is_file() {
            return Self::from_file(&implicit);
        }

        Ok(ResolvedSettings {
            settings: Settings::default(),
            source: ConfigSource::Defaults,
        })
    }

    fn from_file(path: &Path) -> Result<ResolvedSettings, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file means "all defaults"
        let settings = if content.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };

        Ok(ResolvedSettings {
            settings,
            source: ConfigSource::File(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let tmp = TempDir::new().unwrap();
        let resolved = Settings::resolve(None, tmp.path()).unwrap();
        assert_eq!(resolved.source, ConfigSource::Defaults);
        assert_eq!(resolved.settings, Settings::default());
    }

    #[test]
    fn test_implicit_file_in_working_dir() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE),
            "color: never\nlocale: es\ntype_colors:\n  css: green\n",
        )
        .unwrap();

        let resolved = Settings::resolve(None, tmp.path()).unwrap();
        assert_eq!(resolved.settings.color, ColorMode::Never);
        assert_eq!(resolved.settings.locale, Locale::Es);
        assert!(resolved.settings.show_banner);
        assert_eq!(resolved.settings.type_colors["css"], "green");
    }

    #[test]
    fn test_explicit_path_wins() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "locale: es\n").unwrap();
        let explicit = tmp.path().join("other.yaml");
        std::fs::write(&explicit, "show_banner: false\n").unwrap();

        let resolved = Settings::resolve(Some(&explicit), tmp.path()).unwrap();
        assert_eq!(resolved.source, ConfigSource::File(explicit));
        assert_eq!(resolved.settings.locale, Locale::En);
        assert!(!resolved.settings.show_banner);
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.yaml");
        let err = Settings::resolve(Some(&missing), tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "colour: never\n").unwrap();
        let err = Settings::resolve(None, tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_empty_file_means_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "\n").unwrap();
        let resolved = Settings::resolve(None, tmp.path()).unwrap();
        assert_eq!(resolved.settings, Settings::default());
        assert!(matches!(resolved.source, ConfigSource::File(_)));
    }
}
