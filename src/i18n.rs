//! Dashboard language selection
//!
//! Translation tables live in `locales/` and are loaded by the `i18n!` call in
//! lib.rs. Library code uses `t!` directly; the `distvis` binary goes through
//! [`tr`].

use serde::{Deserialize, Serialize};

/// Languages the dashboard labels are translated into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh-TW")]
    TraditionalChinese,
}

const LANGUAGES: [(Language, &str, &str); 2] = [
    (Language::English, "en", "English"),
    (Language::TraditionalChinese, "zh-TW", "繁體中文"),
];

impl Language {
    /// Locale code as used by the translation tables
    pub fn code(&self) -> &'static str {
        self.entry().1
    }

    /// Name of the language written in that language
    pub fn display_name(&self) -> &'static str {
        self.entry().2
    }

    pub fn all() -> &'static [Language] {
        &[Language::English, Language::TraditionalChinese]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        LANGUAGES
            .iter()
            .find(|(_, c, _)| c.eq_ignore_ascii_case(code))
            .map(|(lang, _, _)| *lang)
    }

    fn entry(&self) -> &'static (Language, &'static str, &'static str) {
        // LANGUAGES is indexed in declaration order.
        &LANGUAGES[*self as usize]
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| {
            let known: Vec<_> = LANGUAGES.iter().map(|(_, code, _)| *code).collect();
            format!("unsupported language '{}' (expected one of {})", s, known.join(", "))
        })
    }
}

/// Make `lang` the process-wide translation locale
pub fn set_language(lang: Language) {
    rust_i18n::set_locale(lang.code());
}

/// The active translation locale, English when it is not one of ours
pub fn current_language() -> Language {
    Language::from_code(&rust_i18n::locale()).unwrap_or_default()
}

/// Translate `key` in the active locale
pub fn tr(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterSlot;
    use serial_test::serial;

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!("zh-tw".parse::<Language>(), Ok(Language::TraditionalChinese));
        assert!("fr".parse::<Language>().unwrap_err().contains("zh-TW"));
    }

    #[test]
    fn test_serialized_as_code() {
        let json = serde_json::to_string(&Language::TraditionalChinese).unwrap();
        assert_eq!(json, "\"zh-TW\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }

    #[test]
    #[serial]
    fn test_switch_language() {
        set_language(Language::TraditionalChinese);
        assert_eq!(current_language(), Language::TraditionalChinese);
        assert_eq!(FilterSlot::SupplierId.label(), "供應商 ID");

        set_language(Language::English);
        assert_eq!(current_language(), Language::English);
        assert_eq!(FilterSlot::SupplierId.label(), "Supplier ID");
        assert_eq!(tr("chart_top_models"), "Top Models");
    }

    #[test]
    #[serial]
    fn test_dashboard_labels_translated() {
        const KEYS: &[&str] = &[
            "app_subtitle",
            "filter_dataset",
            "node_level",
            "node_count",
            "activity_title",
            "activity_load_more",
        ];
        for lang in Language::all() {
            set_language(*lang);
            for key in KEYS {
                let text = tr(key);
                assert!(
                    !text.is_empty() && !text.contains(key),
                    "{} missing in {}",
                    key,
                    lang.code()
                );
            }
        }
        set_language(Language::English);
        assert_eq!(tr("node_count"), "Count");
    }
}
