//! Per-locale phrase cache

use std::collections::HashMap;

/// locale -> (English phrase -> translated phrase)
#[derive(Debug, Clone, Default)]
pub struct LocaleTranslationCache {
    locales: HashMap<String, HashMap<String, String>>,
}

impl LocaleTranslationCache {
    /// Cache with an empty table for each locale
    pub fn with_locales<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locales: locales
                .into_iter()
                .map(|l| (l.into(), HashMap::new()))
                .collect(),
        }
    }

    pub fn get(&self, locale: &str, phrase: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|table| table.get(phrase))
            .map(String::as_str)
    }

    pub fn contains(&self, locale: &str, phrase: &str) -> bool {
        self.get(locale, phrase).is_some()
    }

    pub fn insert(&mut self, locale: &str, phrase: impl Into<String>, translated: impl Into<String>) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(phrase.into(), translated.into());
    }

    /// Number of cached phrases across all locales
    pub fn len(&self) -> usize {
        self.locales.values().map(HashMap::len).sum()
    }

}

#[cfg(test)]
impl LocaleTranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut cache = LocaleTranslationCache::with_locales(["en", "fr"]);
        assert!(cache.is_empty());

        cache.insert("fr", "Editor", "Éditeur");
        assert_eq!(cache.get("fr", "Editor"), Some("Éditeur"));
        assert!(!cache.contains("en", "Editor"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_unknown_locale_grows_on_insert() {
        let mut cache = LocaleTranslationCache::new();
        assert_eq!(cache.get("de", "Text"), None);
        cache.insert("de", "Text", "Text");
        assert!(cache.contains("de", "Text"));
    }
}
