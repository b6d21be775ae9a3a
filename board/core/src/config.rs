//! TOML Configuration File Support
//!
//! Optional configuration at `~/.config/taskboard/taskboard.toml`.
//!
//! # Configuration Priority
//!
//! Values are resolved with the following priority (highest first):
//! 1. CLI arguments (applied by the caller after loading)
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [labels]
//! header_title = "My Tasks"
//! summary = "{completed} of {total} done"
//! empty_message = "Nothing to do!"
//!
//! [ui]
//! ascii_icons = true
//! mouse = false
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable forcing ASCII glyphs
pub const ENV_ASCII_ICONS: &str = "TASKBOARD_ASCII_ICONS";

/// Environment variable enabling/disabling mouse capture
pub const ENV_MOUSE: &str = "TASKBOARD_MOUSE";

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// Labels
// =============================================================================

/// User-facing strings
///
/// `summary` is a template: `{completed}` and `{total}` are substituted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    /// Header title
    pub header_title: String,
    /// Header subtitle
    pub header_subtitle: String,
    /// Completed/total summary template
    pub summary: String,
    /// Heading above the input form
    pub form_title: String,
    /// Title input label
    pub title_label: String,
    /// Title input placeholder
    pub title_placeholder: String,
    /// Description input label
    pub description_label: String,
    /// Description input placeholder
    pub description_placeholder: String,
    /// Duration input label
    pub duration_label: String,
    /// Duration input placeholder
    pub duration_placeholder: String,
    /// Add button text
    pub add_button: String,
    /// Shown when the list is empty
    pub empty_message: String,
    /// Second line of the empty state
    pub empty_hint: String,
    /// Unit appended to durations on task cards
    pub duration_suffix: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            header_title: "✨ Minhas Tarefas ✨".to_string(),
            header_subtitle: "Organize seu dia com carinho".to_string(),
            summary: "{completed} de {total} tarefas concluídas 💕".to_string(),
            form_title: "Adicionar Nova Tarefa".to_string(),
            title_label: "Título da tarefa".to_string(),
            title_placeholder: "Ex: Fazer exercícios".to_string(),
            description_label: "Descrição (opcional)".to_string(),
            description_placeholder: "Ex: Yoga".to_string(),
            duration_label: "Duração em minutos (opcional)".to_string(),
            duration_placeholder: "Ex: 30".to_string(),
            add_button: "Adicionar Tarefa".to_string(),
            empty_message: "Ainda não há tarefas! 💫".to_string(),
            empty_hint: "Adicione sua primeira tarefa acima".to_string(),
            duration_suffix: "min".to_string(),
        }
    }
}

impl Labels {
    /// Render the summary template
    #[must_use]
    pub fn summary(&self, completed: usize, total: usize) -> String {
        self.summary
            .replace("{completed}", &completed.to_string())
            .replace("{total}", &total.to_string())
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Labels section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsToml {
    /// Header title
    pub header_title: Option<String>,
    /// Header subtitle
    pub header_subtitle: Option<String>,
    /// Summary template
    pub summary: Option<String>,
    /// Form heading
    pub form_title: Option<String>,
    /// Title input label
    pub title_label: Option<String>,
    /// Title input placeholder
    pub title_placeholder: Option<String>,
    /// Description input label
    pub description_label: Option<String>,
    /// Description input placeholder
    pub description_placeholder: Option<String>,
    /// Duration input label
    pub duration_label: Option<String>,
    /// Duration input placeholder
    pub duration_placeholder: Option<String>,
    /// Add button text
    pub add_button: Option<String>,
    /// Empty state message
    pub empty_message: Option<String>,
    /// Empty state hint
    pub empty_hint: Option<String>,
    /// Duration unit
    pub duration_suffix: Option<String>,
}

/// UI section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiToml {
    /// Use ASCII glyphs instead of unicode icons
    pub ascii_icons: Option<bool>,

    /// Capture the mouse for click/scroll support
    pub mouse: Option<bool>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskboardToml {
    /// Labels section
    pub labels: LabelsToml,

    /// UI section
    pub ui: UiToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskboardConfig {
    /// User-facing strings
    pub labels: Labels,

    /// Use ASCII glyphs instead of unicode icons
    pub ascii_icons: bool,

    /// Capture the mouse
    pub mouse: bool,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    source: ConfigSource,
}

impl Default for TaskboardConfig {
    fn default() -> Self {
        Self {
            labels: Labels::default(),
            ascii_icons: false,
            mouse: true,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl TaskboardConfig {
    /// Create a configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Check values that would break rendering
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if a required label is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("header_title", &self.labels.header_title),
            ("add_button", &self.labels.add_button),
            ("title_label", &self.labels.title_label),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "labels.{name} must not be empty"
                )));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/taskboard/taskboard.toml` or
/// `~/.config/taskboard/taskboard.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("taskboard").join("taskboard.toml"))
}

/// Load configuration from the default path and the environment
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or if the
/// resulting values are invalid. A missing file is not an error.
pub fn load_config() -> Result<TaskboardConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path and the environment
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the resulting
/// values are invalid.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<TaskboardConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load configuration with a custom environment lookup
///
/// # Errors
///
/// See [`load_config_from_path`].
pub fn load_config_with_env(
    path: Option<PathBuf>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<TaskboardConfig, ConfigError> {
    let mut config = TaskboardConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: TaskboardToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config, env);
    config.validate()?;

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut TaskboardConfig, toml: TaskboardToml) {
    let TaskboardToml { labels, ui } = toml;
    let target = &mut config.labels;

    let overrides = [
        (labels.header_title, &mut target.header_title),
        (labels.header_subtitle, &mut target.header_subtitle),
        (labels.summary, &mut target.summary),
        (labels.form_title, &mut target.form_title),
        (labels.title_label, &mut target.title_label),
        (labels.title_placeholder, &mut target.title_placeholder),
        (labels.description_label, &mut target.description_label),
        (
            labels.description_placeholder,
            &mut target.description_placeholder,
        ),
        (labels.duration_label, &mut target.duration_label),
        (labels.duration_placeholder, &mut target.duration_placeholder),
        (labels.add_button, &mut target.add_button),
        (labels.empty_message, &mut target.empty_message),
        (labels.empty_hint, &mut target.empty_hint),
        (labels.duration_suffix, &mut target.duration_suffix),
    ];
    for (value, slot) in overrides {
        if let Some(value) = value {
            *slot = value;
        }
    }

    if let Some(ascii) = ui.ascii_icons {
        config.ascii_icons = ascii;
    }
    if let Some(mouse) = ui.mouse {
        config.mouse = mouse;
    }
}

/// Apply environment variable overrides
fn apply_env_config(config: &mut TaskboardConfig, env: impl Fn(&str) -> Option<String>) {
    if let Some(ascii) = env(ENV_ASCII_ICONS).and_then(|v| parse_bool(&v)) {
        config.ascii_icons = ascii;
        config.source = ConfigSource::Env;
    }
    if let Some(mouse) = env(ENV_MOUSE).and_then(|v| parse_bool(&v)) {
        config.mouse = mouse;
        config.source = ConfigSource::Env;
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            tracing::warn!(value = other, "Ignoring unrecognized boolean");
            None
        }
    }
}
