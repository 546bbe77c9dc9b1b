//! Environment-driven configuration.
//!
//! | variable              | meaning                                   | default |
//! |-----------------------|-------------------------------------------|---------|
//! | `SKINTILLA_THEME`     | `light` or `dark`                         | `light` |
//! | `SKINTILLA_LOG_FORMAT`| `json` or `pretty`                        | `json`  |
//! | `SKINTILLA_ROUTINE`   | comma-separated ids for the morning routine | empty |
//! | `SKINTILLA_QUIZ`      | three quiz answers, comma-separated       | unset   |
//! | `SKINTILLA_ZIP`       | zip code for a shipping estimate          | unset   |
//! | `SKINTILLA_COMPARE`   | comma-separated product names to compare  | empty   |
//!
//! Invalid values fall back to the default and leave a warning behind; logging
//! is not up yet when configuration is read, so the caller logs them.

use skintilla_catalog::ProductId;
use skintilla_observability::LogFormat;
use skintilla_storefront::{Theme, ZipCode};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub theme: Theme,
    pub log_format: LogFormat,
    pub preload: Vec<ProductId>,
    pub quiz_answers: Option<Vec<String>>,
    pub zip: Option<ZipCode>,
    /// Product names for the comparison drawer.
    pub compare: Vec<String>,
    /// Problems found while reading configuration.
    pub warnings: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(raw) = lookup("SKINTILLA_THEME") {
            match raw.parse() {
                Ok(theme) => config.theme = theme,
                Err(err) => config
                    .warnings
                    .push(format!("SKINTILLA_THEME ignored ({err}); using light")),
            }
        }

        if let Some(raw) = lookup("SKINTILLA_LOG_FORMAT") {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(err) => config
                    .warnings
                    .push(format!("SKINTILLA_LOG_FORMAT ignored ({err}); using json")),
            }
        }

        if let Some(raw) = lookup("SKINTILLA_ROUTINE") {
            config.preload = split_list(&raw).map(ProductId::new).collect();
        }

        if let Some(raw) = lookup("SKINTILLA_QUIZ") {
            let answers: Vec<String> = split_list(&raw).map(str::to_string).collect();
            if answers.len() == 3 {
                config.quiz_answers = Some(answers);
            } else {
                config.warnings.push(format!(
                    "SKINTILLA_QUIZ ignored: expected 3 answers, got {}",
                    answers.len()
                ));
            }
        }

        if let Some(raw) = lookup("SKINTILLA_ZIP") {
            match ZipCode::parse(raw.trim()) {
                Ok(zip) => config.zip = Some(zip),
                Err(err) => config.warnings.push(format!("SKINTILLA_ZIP ignored ({err})")),
            }
        }

        if let Some(raw) = lookup("SKINTILLA_COMPARE") {
            config.compare = split_list(&raw).map(str::to_string).collect();
        }

        config
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("SKINTILLA_THEME", "dark"),
            ("SKINTILLA_LOG_FORMAT", "pretty"),
            ("SKINTILLA_ROUTINE", "serum, toner,,"),
            ("SKINTILLA_QUIZ", "dry,hydration,minimal"),
            ("SKINTILLA_ZIP", " 94103 "),
            ("SKINTILLA_COMPARE", "Radiance Serum, Botanical Toner"),
        ]);

        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.preload, vec![ProductId::new("serum"), ProductId::new("toner")]);
        assert_eq!(config.quiz_answers.as_ref().map(Vec::len), Some(3));
        assert_eq!(config.zip.as_ref().map(ZipCode::as_str), Some("94103"));
        assert_eq!(config.compare, vec!["Radiance Serum", "Botanical Toner"]);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn invalid_values_fall_back_with_warnings() {
        let config = config_from(&[
            ("SKINTILLA_THEME", "neon"),
            ("SKINTILLA_LOG_FORMAT", "xml"),
            ("SKINTILLA_QUIZ", "dry"),
            ("SKINTILLA_ZIP", "abc"),
        ]);

        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.quiz_answers, None);
        assert_eq!(config.zip, None);
        assert_eq!(config.warnings.len(), 4);
    }
}
