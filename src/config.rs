use crate::api::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_STUB_DELAY_MS, ENDPOINT_ENV_VAR,
};
use crate::api::{DeliveryMode, GatewaySettings};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Names accepted by `config get/set/reset`
pub const SETTING_NAMES: &[&str] = &[
    "collector-url",
    "stub-delay-ms",
    "request-timeout-secs",
    "connect-timeout-secs",
    "delivery-mode",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Collector endpoint; unset or empty runs the gateway in stub mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collector_url: Option<String>,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_stub_delay_ms")]
    pub stub_delay_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default)]
    pub delivery_mode: DeliveryMode,
}

fn default_stub_delay_ms() -> u64 {
    DEFAULT_STUB_DELAY_MS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stub_delay_ms: default_stub_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            delivery_mode: DeliveryMode::default(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("event-hub")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".event-hub")
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config = Self::from_toml_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config, collector configured: {}", config.collector_url.is_some());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    /// Collector URL after applying `EVENT_HUB_COLLECTOR_URL`
    pub fn resolved_endpoint(&self) -> Option<String> {
        self.endpoint_with_override(std::env::var(ENDPOINT_ENV_VAR).ok())
    }

    /// A non-blank override wins; blank values on either side mean "none".
    pub fn endpoint_with_override(&self, override_url: Option<String>) -> Option<String> {
        override_url
            .filter(|u| !u.trim().is_empty())
            .or_else(|| self.collector_url.clone())
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
    }

    pub fn gateway_settings(&self) -> GatewaySettings {
        self.gateway_settings_for(self.resolved_endpoint())
    }

    pub fn gateway_settings_for(&self, endpoint: Option<String>) -> GatewaySettings {
        GatewaySettings {
            endpoint,
            stub_delay: Duration::from_millis(self.settings.stub_delay_ms),
            request_timeout: Duration::from_secs(self.settings.request_timeout_secs),
            connect_timeout: Duration::from_secs(self.settings.connect_timeout_secs),
            delivery_mode: self.settings.delivery_mode,
        }
    }

    pub fn get_setting(&self, name: &str) -> Result<String> {
        let value = match name {
            "collector-url" => self.collector_url.clone().unwrap_or_default(),
            "stub-delay-ms" => self.settings.stub_delay_ms.to_string(),
            "request-timeout-secs" => self.settings.request_timeout_secs.to_string(),
            "connect-timeout-secs" => self.settings.connect_timeout_secs.to_string(),
            "delivery-mode" => self.settings.delivery_mode.to_string(),
            _ => anyhow::bail!("Unknown setting: {}", name),
        };
        Ok(value)
    }

    pub fn set_setting(&mut self, name: &str, value: &str) -> Result<()> {
        info!("Updating setting {} to: {}", name, value);
        match name {
            "collector-url" => {
                let value = value.trim();
                if value.is_empty() {
                    self.collector_url = None;
                } else {
                    let url = reqwest::Url::parse(value)
                        .with_context(|| format!("Invalid collector URL: {}", value))?;
                    if !matches!(url.scheme(), "http" | "https") {
                        anyhow::bail!("Collector URL must use http or https, got '{}'", url.scheme());
                    }
                    self.collector_url = Some(value.to_string());
                }
            }
            "stub-delay-ms" => self.settings.stub_delay_ms = parse_number(name, value)?,
            "request-timeout-secs" => {
                self.settings.request_timeout_secs = parse_positive(name, value)?
            }
            "connect-timeout-secs" => {
                self.settings.connect_timeout_secs = parse_positive(name, value)?
            }
            "delivery-mode" => self.settings.delivery_mode = value.parse()?,
            _ => anyhow::bail!("Unknown setting: {}", name),
        }
        Ok(())
    }

    pub fn reset_setting(&mut self, name: &str) -> Result<()> {
        let defaults = Settings::default();
        match name {
            "collector-url" => self.collector_url = None,
            "stub-delay-ms" => self.settings.stub_delay_ms = defaults.stub_delay_ms,
            "request-timeout-secs" => self.settings.request_timeout_secs = defaults.request_timeout_secs,
            "connect-timeout-secs" => self.settings.connect_timeout_secs = defaults.connect_timeout_secs,
            "delivery-mode" => self.settings.delivery_mode = defaults.delivery_mode,
            _ => anyhow::bail!("Unknown setting: {}", name),
        }
        Ok(())
    }

    pub fn reset_all(&mut self) {
        *self = Self::default();
    }
}

fn parse_number(name: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .with_context(|| format!("Setting '{}' expects a whole number, got '{}'", name, value))
}

fn parse_positive(name: &str, value: &str) -> Result<u64> {
    let n = parse_number(name, value)?;
    if n == 0 {
        anyhow::bail!("Setting '{}' must be greater than zero", name);
    }
    Ok(n)
}
