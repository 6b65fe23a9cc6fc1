use contracts::shared::list_query::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Ключ localStorage, в котором можно переопределить настройки списка
pub const CONFIG_STORAGE_KEY: &str = "products_list_config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"{
    "page_size": 10,
    "loading_delay_ms": 1000
}"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductsListConfig {
    /// Строк на странице
    pub page_size: usize,
    /// Имитация сетевой задержки перед показом списка
    pub loading_delay_ms: u32,
}

impl Default for ProductsListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            loading_delay_ms: 1000,
        }
    }
}

pub fn parse_config(json: &str) -> Result<ProductsListConfig, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load configuration
///
/// Search order:
/// 1. JSON override in localStorage
/// 2. Falls back to embedded default config
pub fn load_config() -> ProductsListConfig {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    if let Some(json) = stored {
        match parse_config(&json) {
            Ok(config) => {
                log::info!("Loaded list config from localStorage: {:?}", config);
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid {}: {}", CONFIG_STORAGE_KEY, e),
        }
    }

    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::warn!("Embedded list config is invalid: {}", e);
        ProductsListConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, ProductsListConfig::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = parse_config(r#"{"page_size": 25}"#).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.loading_delay_ms, 1000);
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(parse_config(r#"{"page_size": "many"}"#).is_err());
        assert!(parse_config("not json").is_err());
    }
}
