use bevy::prelude::*;
use serde::Deserialize;

const PROMO_JSON: &str = include_str!("../assets/promo.json");

/// Resource holding the promo copy and timing configuration
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct PromoConfig {
    /// Hero title text
    pub title: String,
    /// Tagline shown under the title
    pub tagline: String,
    /// Seconds between app start and the advertised launch moment
    pub launch_in_secs: f32,
    /// Prompt shown on the void screen
    pub withdraw_hint: String,
}

impl PromoConfig {
    /// Load the promo configuration from embedded JSON data
    pub fn load() -> Result<Self, String> {
        Self::from_json(PROMO_JSON)
    }

    fn from_json(data: &str) -> Result<Self, String> {
        let config: PromoConfig =
            serde_json::from_str(data).map_err(|e| format!("Promo config parse error: {e}"))?;

        if config.launch_in_secs < 0.0 {
            return Err(format!(
                "Promo config: launch_in_secs must be non-negative, got {}",
                config.launch_in_secs
            ));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = PromoConfig::load().expect("embedded promo.json should parse");
        assert!(!config.title.is_empty());
        assert!(config.launch_in_secs > 0.0);
    }

    #[test]
    fn test_rejects_negative_launch_offset() {
        let json = r#"{
            "title": "X",
            "tagline": "Y",
            "launch_in_secs": -5.0,
            "withdraw_hint": "Z"
        }"#;
        assert!(PromoConfig::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_missing_fields() {
        assert!(PromoConfig::from_json(r#"{ "title": "X" }"#).is_err());
    }
}
