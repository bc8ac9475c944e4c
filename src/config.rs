use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub delivery: DeliveryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeliveryConfig {
    /// Link placed behind the Download Video button. Parsed as a full URL so
    /// a bad value fails at startup instead of at button-press time.
    pub download_url: Url,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
        [telegram]
        bot_token = "123456:TEST-TOKEN"

        [delivery]
        download_url = "https://downloads.example.com/video.mp4"
    "#;

    #[test]
    fn test_valid_config_parses() {
        let config: Config = toml::from_str(VALID).unwrap();
        assert_eq!(config.telegram.bot_token, "123456:TEST-TOKEN");
        assert_eq!(
            config.delivery.download_url.as_str(),
            "https://downloads.example.com/video.mp4"
        );
    }

    #[test]
    fn test_missing_delivery_section_fails() {
        let toml = r#"
            [telegram]
            bot_token = "123456:TEST-TOKEN"
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_missing_token_fails() {
        let toml = r#"
            [telegram]

            [delivery]
            download_url = "https://downloads.example.com/video.mp4"
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_invalid_download_url_fails() {
        let toml = r#"
            [telegram]
            bot_token = "123456:TEST-TOKEN"

            [delivery]
            download_url = "not a url"
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = Config::load(Path::new("/nonexistent/vidbot-config.toml"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("Failed to read config file"));
    }
}
