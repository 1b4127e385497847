use std::env;

use tracing::warn;

use crate::messages::Locale;

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub locale: Locale,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let locale = match lookup("ANSWER_LOCALE") {
            Some(value) => value.parse().unwrap_or_else(|e| {
                warn!("{}, falling back to en", e);
                Locale::En
            }),
            None => Locale::default(),
        };

        Self {
            backend_url: lookup("ANSWER_BACKEND_URL")
                .unwrap_or_else(|| "http://127.0.0.1:8000".to_string()),
            locale,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]);
        assert_eq!(config.backend_url, "http://127.0.0.1:8000");
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("ANSWER_BACKEND_URL", "http://qa.internal:9000/"),
            ("ANSWER_LOCALE", "ru"),
        ]);
        assert_eq!(config.locale, Locale::Ru);
        assert_eq!(config.backend_url, "http://qa.internal:9000/");
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        let config = config_with(&[("ANSWER_LOCALE", "klingon")]);
        assert_eq!(config.locale, Locale::En);
    }
}
