use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::form::form_model::{
    DEFAULT_CONFIRMATION_PENDING_PATH, DEFAULT_HOME_PATH, FormKind, FormSettings,
};
use crate::ui::flash::FlashBoard;

pub const DEFAULT_CONFIG_PATH: &str = "auth-forms.yaml";
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "auth-forms",
    version,
    about = "Drive the login and registration forms against an auth server"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: auth-forms.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Server base URL, overrides the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Append a JSONL transition trace to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit the login form
    Login {
        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        password: String,
    },

    /// Submit the registration form
    Register {
        /// Full name
        #[arg(long, default_value = "")]
        nome: String,

        /// Phone number
        #[arg(long, default_value = "")]
        telefone: String,

        /// Instagram handle
        #[arg(long, default_value = "")]
        instagram: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        password: String,

        #[arg(long, default_value = "")]
        confirm_password: String,
    },

    /// Check a string against the email shape rule
    CheckEmail { value: String },

    /// Check a string against the password length rule
    CheckPassword { value: String },

    /// Show a flash message until the configured delay dismisses it
    Flash {
        /// Message category (success, danger, info, ...)
        #[arg(long, default_value = "info")]
        category: String,

        text: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `auth-forms.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub login: FormTextConfig,
    #[serde(default)]
    pub register: FormTextConfig,
    #[serde(default)]
    pub flash: FlashConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Unset means the HTTP client's own default applies.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_home")]
    pub home: String,

    #[serde(default = "default_confirmation_pending")]
    pub confirmation_pending: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            home: DEFAULT_HOME_PATH.to_string(),
            confirmation_pending: DEFAULT_CONFIRMATION_PENDING_PATH.to_string(),
        }
    }
}

/// Per-form overrides. Anything left out keeps the built-in text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormTextConfig {
    pub endpoint: Option<String>,
    pub caption: Option<String>,
    pub busy_caption: Option<String>,
    pub rejected_message: Option<String>,
    pub transport_failed_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashConfig {
    #[serde(default = "default_dismiss_after")]
    pub dismiss_after_secs: u64,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            dismiss_after_secs: default_dismiss_after(),
        }
    }
}

// Serde default helpers
fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }
fn default_home() -> String { DEFAULT_HOME_PATH.to_string() }
fn default_confirmation_pending() -> String { DEFAULT_CONFIRMATION_PENDING_PATH.to_string() }
fn default_dismiss_after() -> u64 { 5 }

impl AppConfig {
    /// Built-in settings for `kind` with this config's overrides applied.
    pub fn form_settings(&self, kind: FormKind) -> FormSettings {
        let overrides = match kind {
            FormKind::Login => &self.login,
            FormKind::Register => &self.register,
        };

        let mut settings = FormSettings::for_kind(kind);
        settings.home_path = self.paths.home.clone();
        settings.confirmation_pending_path = self.paths.confirmation_pending.clone();

        let fields = [
            (&overrides.endpoint, &mut settings.endpoint),
            (&overrides.caption, &mut settings.idle_caption),
            (&overrides.busy_caption, &mut settings.busy_caption),
            (&overrides.rejected_message, &mut settings.rejected_message),
            (&overrides.transport_failed_message, &mut settings.transport_failed_message),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }

        settings
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.server.timeout_secs.map(Duration::from_secs)
    }

    pub fn flash_board(&self) -> FlashBoard {
        FlashBoard::new(Duration::from_secs(self.flash.dismiss_after_secs))
    }
}

// ============================================================================
// Config File Loading
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match load_config_strict(config_path) {
        Ok(config) => config,
        Err(ConfigError::Io { .. }) => AppConfig::default(),
        Err(e) => {
            warn!("{}; using defaults", e);
            AppConfig::default()
        }
    }
}

pub fn load_config_strict(path: &str) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Base URL resolution: CLI > config file > built-in default.
pub fn resolve_base_url<'a>(cli: Option<&'a str>, config: &'a AppConfig) -> &'a str {
    cli.unwrap_or(&config.server.base_url)
}
