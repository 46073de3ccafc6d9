//! REST layer configuration.

use serde::{Deserialize, Serialize};

/// Settings the resource layer reads at request time.
///
/// The host process owns loading and merging; this struct only defines the
/// keys and their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RestConfig {
    /// Prefix for canonical resource URIs, e.g. `/ws/rest/v1`.
    pub base_uri: String,
    /// Page size used when the caller does not ask for one.
    pub default_limit: usize,
    /// Hard upper bound on any requested page size.
    pub absolute_limit: usize,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_uri: "/ws/rest/v1".to_string(),
            default_limit: 50,
            absolute_limit: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RestConfig::default();
        assert_eq!(config.base_uri, "/ws/rest/v1");
        assert_eq!(config.default_limit, 50);
        assert_eq!(config.absolute_limit, 1000);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: RestConfig = serde_json::from_str(r#"{"default_limit": 25}"#).unwrap();
        assert_eq!(config.default_limit, 25);
        assert_eq!(config.base_uri, "/ws/rest/v1");
    }
}
