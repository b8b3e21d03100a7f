//! Configuration management for compdoc.
//!
//! Parses `compdoc.toml` configuration files with serde and provides
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
//! - `components.source_dir`
//! - `output.dir`
//! - `output.tabs`

mod expand;

use compdoc_render::TabsStyle;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override component definitions directory.
    pub source_dir: Option<PathBuf>,
    /// Override rendered docs directory.
    pub output_dir: Option<PathBuf>,
    /// Override snippet nesting.
    pub nest: Option<bool>,
    /// Override tabs markup style.
    pub tabs: Option<TabsStyle>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "compdoc.toml";

const DEFAULT_SOURCE_DIR: &str = "components";
const DEFAULT_OUTPUT_DIR: &str = "docs/components";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Component definitions (paths are relative strings from TOML).
    components: ComponentsConfigRaw,
    /// Rendered output (paths are relative strings from TOML).
    output: OutputConfigRaw,

    /// Resolved components configuration (set after loading).
    #[serde(skip)]
    pub components_resolved: ComponentsConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ComponentsConfigRaw {
    source_dir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
    nest: Option<bool>,
    tabs: Option<String>,
}

/// Resolved component definitions configuration.
#[derive(Debug, Default)]
pub struct ComponentsConfig {
    /// Directory holding `*.yaml` component definition files.
    pub source_dir: PathBuf,
}

/// Resolved output configuration.
#[derive(Debug)]
pub struct OutputConfig {
    /// Directory that receives `<type>/<name>.md` pages.
    pub dir: PathBuf,
    /// Wrap config snippets under the component type key.
    pub nest: bool,
    /// Tabs markup style.
    pub tabs: TabsStyle,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            nest: false,
            tabs: TabsStyle::default(),
        }
    }
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
        /// Config field path (e.g., "`output.dir`").
        field: String,
        /// Error message (e.g., "${`DOCS_ROOT`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `compdoc.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, so CLI
    /// arguments take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the resulting configuration is invalid.
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

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.components_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.output_resolved.dir.clone_from(output_dir);
        }
        if let Some(nest) = settings.nest {
            self.output_resolved.nest = nest;
        }
        if let Some(tabs) = settings.tabs {
            self.output_resolved.tabs = tabs;
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

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            components: ComponentsConfigRaw::default(),
            output: OutputConfigRaw::default(),
            components_resolved: ComponentsConfig {
                source_dir: base.join(DEFAULT_SOURCE_DIR),
            },
            output_resolved: OutputConfig {
                dir: base.join(DEFAULT_OUTPUT_DIR),
                ..OutputConfig::default()
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate resolved configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the output directory is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_resolved.dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output.dir cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.components.source_dir {
            self.components.source_dir = Some(expand::expand_env(dir, "components.source_dir")?);
        }
        if let Some(ref dir) = self.output.dir {
            self.output.dir = Some(expand::expand_env(dir, "output.dir")?);
        }
        if let Some(ref tabs) = self.output.tabs {
            self.output.tabs = Some(expand::expand_env(tabs, "output.tabs")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory and parse the
    /// tabs style.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        if self.output.dir.as_deref() == Some("") {
            return Err(ConfigError::Validation(
                "output.dir cannot be empty".to_owned(),
            ));
        }

        let tabs = match self.output.tabs.as_deref() {
            Some(tabs) => tabs
                .parse::<TabsStyle>()
                .map_err(|e| ConfigError::Validation(format!("output.tabs: {e}")))?,
            None => TabsStyle::default(),
        };

        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.components_resolved = ComponentsConfig {
            source_dir: resolve(self.components.source_dir.as_deref(), DEFAULT_SOURCE_DIR),
        };
        self.output_resolved = OutputConfig {
            dir: resolve(self.output.dir.as_deref(), DEFAULT_OUTPUT_DIR),
            nest: self.output.nest.unwrap_or(false),
            tabs,
        };

        Ok(())
    }
}
