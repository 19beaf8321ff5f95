//! Configuration management for DPE report generation.
//!
//! Parses `dpe.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `theme.primary_color`
//! - `theme.secondary_color`
//! - `assets.default_cover`

mod expand;

use dpe_render::Rgb;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override primary theme color.
    pub primary_color: Option<String>,
    /// Override secondary theme color.
    pub secondary_color: Option<String>,
    /// Override default cover image path.
    pub default_cover: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "dpe.toml";

/// Default cover image, relative to the config directory.
const DEFAULT_COVER: &str = "assets/couverture.png";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme colors.
    pub theme: ThemeConfig,
    /// Asset configuration (paths are relative strings from TOML).
    #[serde(default)]
    assets: AssetsConfigRaw,

    /// Resolved asset configuration (set after loading).
    #[serde(skip)]
    pub assets_resolved: AssetsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Theme configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Primary color, `#RRGGBB`.
    pub primary_color: String,
    /// Secondary color, `#RRGGBB`.
    pub secondary_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: "#5590ee".to_owned(),
            secondary_color: "#3b7dd8".to_owned(),
        }
    }
}

/// Raw assets configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct AssetsConfigRaw {
    default_cover: Option<String>,
}

/// Resolved asset configuration with absolute paths.
#[derive(Debug, Default)]
pub struct AssetsConfig {
    /// Cover image used when a report has none of its own.
    ///
    /// Read best-effort: a missing file means no cover page.
    pub default_cover: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`theme.primary_color`").
        field: String,
        /// Error message (e.g., "${`DPE_PRIMARY`} not set").
        message: String,
    },
}

/// Require a color field to be `#` followed by six hex digits.
fn require_hex_color(value: &str, field: &str) -> Result<(), ConfigError> {
    Rgb::from_hex(value)
        .map(|_| ())
        .map_err(|e| ConfigError::Validation(format!("{field}: {e}")))
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `dpe.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, and the
    /// result is validated again so overridden colors are checked too.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or a theme color is malformed.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(primary) = &settings.primary_color {
            self.theme.primary_color.clone_from(primary);
        }
        if let Some(secondary) = &settings.secondary_color {
            self.theme.secondary_color.clone_from(secondary);
        }
        if let Some(cover) = &settings.default_cover {
            self.assets_resolved.default_cover.clone_from(cover);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            theme: ThemeConfig::default(),
            assets: AssetsConfigRaw::default(),
            assets_resolved: AssetsConfig {
                default_cover: base.join(DEFAULT_COVER),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a theme color is not `#RRGGBB`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_hex_color(&self.theme.primary_color, "theme.primary_color")?;
        require_hex_color(&self.theme.secondary_color, "theme.secondary_color")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.theme.primary_color =
            expand::expand_env(&self.theme.primary_color, "theme.primary_color")?;
        self.theme.secondary_color =
            expand::expand_env(&self.theme.secondary_color, "theme.secondary_color")?;

        if let Some(ref cover) = self.assets.default_cover {
            self.assets.default_cover = Some(expand::expand_env(cover, "assets.default_cover")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let cover = self.assets.default_cover.as_deref().unwrap_or(DEFAULT_COVER);
        self.assets_resolved = AssetsConfig {
            default_cover: config_dir.join(cover),
        };
    }
}
