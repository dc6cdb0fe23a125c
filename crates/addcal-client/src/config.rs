//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/addcal/config.toml` by default. Every section is optional.

use std::path::{Path, PathBuf};

use addcal_core::Provider;
use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the addcal client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Button rendering defaults.
    #[serde(default)]
    pub buttons: ButtonSettings,

    /// Link building defaults.
    #[serde(default)]
    pub links: LinkSettings,
}

/// Defaults for the `buttons` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonSettings {
    /// Providers to render when none are given on the command line.
    pub providers: Vec<String>,

    /// Use inline styles instead of CSS classes.
    pub inline_style: bool,

    /// ICS generator endpoint; inline calendars are used when unset.
    pub generator_url: Option<String>,
}

impl Default for ButtonSettings {
    fn default() -> Self {
        Self {
            providers: Provider::ALL.iter().map(|p| p.as_str().to_string()).collect(),
            inline_style: false,
            generator_url: None,
        }
    }
}

/// Defaults shared by links and buttons.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSettings {
    /// Percent-encode field values in link query strings.
    pub url_encode: bool,
}

impl ClientConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("addcal")
    }

    /// Checks provider names and the generator URL.
    pub fn validate(&self) -> Result<(), String> {
        if self.buttons.providers.is_empty() {
            return Err("buttons.providers must not be empty".to_string());
        }

        for name in &self.buttons.providers {
            if Provider::from_button_name(name).is_none() {
                return Err(format!("unknown provider in buttons.providers: {}", name));
            }
        }

        if let Some(ref generator_url) = self.buttons.generator_url {
            validate_generator_url(generator_url)?;
        }

        Ok(())
    }
}

/// Checks that an ICS generator endpoint is an absolute http(s) URL.
pub fn validate_generator_url(raw: &str) -> Result<(), String> {
    let parsed =
        Url::parse(raw).map_err(|e| format!("invalid generator_url {:?}: {}", raw, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!(
            "generator_url must use http or https, got {:?}",
            other
        )),
    }
}
