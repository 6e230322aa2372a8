//! Embedded translation catalogs for the reader.
//!
//! Each locale ships a JSON file with three sections (`panel`, `option`,
//! `article`) deserialized into a typed catalog. Lookups fall back to English,
//! then to the caller's default.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Deserialize;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    En,
    /// Russian.
    Ru,
}

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Ru]
    }

    /// Two-letter language code for the locale.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Map a browser language tag (`ru-RU`, `en_GB`) to a supported locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all().into_iter().find(|locale| locale.code() == base)
    }

    const fn raw_catalog(self) -> &'static str {
        match self {
            Self::En => include_str!("../../i18n/en.json"),
            Self::Ru => include_str!("../../i18n/ru.json"),
        }
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

type Section = BTreeMap<String, String>;

/// Translated strings for one locale, grouped by screen area.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Catalog {
    #[serde(default)]
    panel: Section,
    #[serde(default)]
    option: Section,
    #[serde(default)]
    article: Section,
}

impl Catalog {
    fn parse(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    fn lookup(&self, path: &str) -> Option<&str> {
        let (section, key) = path.split_once('.')?;
        let table = match section {
            "panel" => &self.panel,
            "option" => &self.option,
            "article" => &self.article,
            _ => return None,
        };
        table.get(key).map(String::as_str)
    }
}

static ENGLISH: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::parse(LocaleCode::En.raw_catalog()).unwrap_or_default());

/// Translation bundle for the active locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    catalog: Catalog,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Load the embedded catalog for `locale`.
    ///
    /// A catalog that fails to parse behaves as empty, so every lookup
    /// degrades to English.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let catalog = Catalog::parse(locale.raw_catalog()).unwrap_or_default();
        Self { locale, catalog }
    }

    /// Resolve `section.key`, falling back to English and then to `default`.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        self.catalog
            .lookup(path)
            .or_else(|| ENGLISH.lookup(path))
            .unwrap_or(default)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::article::ArticleField;

    #[test]
    fn embedded_catalogs_parse() {
        for locale in LocaleCode::all() {
            let catalog = Catalog::parse(locale.raw_catalog());
            assert!(catalog.is_ok(), "{locale:?}: {catalog:?}");
        }
    }

    #[test]
    fn unknown_sections_are_rejected() {
        assert!(Catalog::parse(r#"{"footer": {"note": "x"}}"#).is_err());
        assert_eq!(Catalog::parse("{}").ok(), Some(Catalog::default()));
    }

    #[test]
    fn lookup_needs_a_known_section() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.text("title", "fallback"), "fallback");
        assert_eq!(bundle.text("footer.note", "fallback"), "fallback");
    }

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::Ru);
        assert_eq!(bundle.text("panel.nonexistent", "fallback"), "fallback");
    }

    #[test]
    fn missing_locale_key_falls_back_to_english() {
        let bundle = TranslationBundle::new(LocaleCode::Ru);
        assert_eq!(bundle.text("option.cormorant_garamond", ""), "Cormorant Garamond");
        assert_eq!(bundle.text("option.purple", ""), "Фиолетовый");
    }

    #[test]
    fn english_bundle_labels_every_option() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        for field in ArticleField::all() {
            for option in field.options() {
                assert_eq!(bundle.text(&option.label_key(), "<missing>"), option.title);
            }
        }
    }

    #[test]
    fn panel_labels_resolve_in_every_locale() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert_eq!(bundle.locale, locale);
            for key in ["panel.title", "panel.apply", "panel.reset", "article.title"] {
                assert!(!bundle.text(key, "").is_empty(), "{key} missing for {locale:?}");
            }
        }
    }

    #[test]
    fn lang_tags_map_to_supported_locales() {
        assert_eq!(LocaleCode::from_lang_tag("ru-RU"), Some(LocaleCode::Ru));
        assert_eq!(LocaleCode::from_lang_tag("EN_gb"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("fr"), None);
    }
}
