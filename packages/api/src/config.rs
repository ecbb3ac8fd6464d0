//! Client configuration.
//!
//! The deployment base path of the REST backend varies per environment
//! (reverse proxy prefix, tunnel hosts), so it is configuration rather than
//! code. A missing or empty config is equivalent to the default.

use serde::{Deserialize, Serialize};

/// Where the backend REST API is mounted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(ApiConfig::default().base_url, "/api");
    }

    #[test]
    fn test_missing_field_falls_back_to_default() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_explicit_base_url() {
        let config: ApiConfig =
            serde_json::from_str(r#"{"base_url":"https://expo.example.com/api"}"#).unwrap();
        assert_eq!(config.base_url, "https://expo.example.com/api");
    }
}
