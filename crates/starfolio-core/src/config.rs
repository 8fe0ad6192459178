use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds (the animation clock, ~30fps)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Persisted theme preference: "dark" or "light".
    /// Absent means "follow the OS color scheme".
    #[serde(default)]
    pub theme: Option<String>,
    /// Delay between sequential timeline reveals in milliseconds
    #[serde(default = "default_sequential_interval")]
    pub sequential_interval_ms: u64,
    /// Fraction of a section that must be on screen before it reveals
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: None,
            sequential_interval_ms: default_sequential_interval(),
            reveal_threshold: default_reveal_threshold(),
        }
    }
}

/// EmailJS delivery settings for the contact form.
/// All three identifiers must be present for sending to work; a partial
/// configuration surfaces as a user-visible error, never a panic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// EmailJS service id
    #[serde(default)]
    pub service_id: Option<String>,
    /// EmailJS template id
    #[serde(default)]
    pub template_id: Option<String>,
    /// EmailJS public key
    #[serde(default)]
    pub public_key: Option<String>,
    /// Recipient name passed to the template
    #[serde(default = "default_to_name")]
    pub to_name: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            to_name: default_to_name(),
            request_timeout_secs: default_timeout(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    33
}

fn default_sequential_interval() -> u64 {
    150
}

fn default_reveal_threshold() -> f32 {
    0.1
}

fn default_to_name() -> String {
    "Harshabad Singh".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub(crate) fn load_from(config_path: &std::path::Path) -> crate::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub(crate) fn save_to(&self, config_path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/starfolio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("starfolio")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 33);
        assert_eq!(config.ui.sequential_interval_ms, 150);
        assert!(config.ui.theme.is_none());
        assert!(config.contact.service_id.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "light"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme.as_deref(), Some("light"));
        assert_eq!(config.ui.tick_rate_ms, 33);
    }

    #[test]
    fn test_roundtrip() {
        let mut config = AppConfig::default();
        config.ui.theme = Some("dark".to_string());
        config.contact.service_id = Some("service_abc".to_string());

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.ui.theme.as_deref(), Some("dark"));
        assert_eq!(parsed.contact.service_id.as_deref(), Some("service_abc"));
    }
}
