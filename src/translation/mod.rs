//! Machine translation of desktop entry text
//!
//! Phrases are translated once per locale through an external translator,
//! with brand terms shielded by placeholders and the best candidate picked
//! from the translator's freeform output.

mod backend;
mod cache;
mod protected;
mod scorer;

pub use backend::{TransCommand, TranslationBackend};
pub use cache::LocaleTranslationCache;
pub use protected::ProtectedTermTable;

use scorer::{best_candidate, filter_candidates, split_candidates};

use crate::config::{Settings, SOURCE_LOCALE};
use crate::error::Result;

/// Anything that can render an English phrase into a locale
pub trait Localize {
    fn localize(&mut self, phrase: &str, locale: &str) -> Result<String>;
}

/// Caching translator over a [`TranslationBackend`]
#[derive(Debug)]
pub struct Translator<B> {
    backend: B,
    cache: LocaleTranslationCache,
    protected: ProtectedTermTable,
    unprotected: Vec<String>,
}

impl<B: TranslationBackend> Translator<B> {
    pub fn new(
        backend: B,
        cache: LocaleTranslationCache,
        protected: ProtectedTermTable,
        unprotected: Vec<String>,
    ) -> Self {
        Self {
            backend,
            cache,
            protected,
            unprotected,
        }
    }

    /// Translator with an empty cache for the configured locales
    pub fn from_settings(backend: B, settings: &Settings) -> Self {
        Self::new(
            backend,
            LocaleTranslationCache::with_locales(settings.locales.iter().cloned()),
            ProtectedTermTable::from_settings(&settings.protected_terms),
            settings.unprotected_terms.clone(),
        )
    }

    pub fn cache(&self) -> &LocaleTranslationCache {
        &self.cache
    }

    /// Translate a phrase, consulting and filling the cache
    pub fn translate(&mut self, phrase: &str, locale: &str) -> Result<String> {
        if locale == SOURCE_LOCALE {
            return Ok(phrase.to_string());
        }
        if let Some(hit) = self.cache.get(locale, phrase) {
            return Ok(hit.to_string());
        }

        let (protected_text, used) = self.protected.protect(phrase);
        let mut translated = self.translate_text(&protected_text, locale)?;

        for term in &self.unprotected {
            if let Some(local_term) = self.cache.get(locale, term) {
                translated = translated.replace(term.as_str(), local_term);
            }
        }

        let translated = ProtectedTermTable::restore(&translated, &used);
        self.cache.insert(locale, phrase, translated.clone());
        Ok(translated)
    }

    /// Translate the unprotected terms once for every non-source locale
    pub fn pre_translate_unprotected_terms(&mut self, locales: &[String]) -> Result<()> {
        for locale in locales.iter().filter(|l| l.as_str() != SOURCE_LOCALE) {
            for term in &self.unprotected {
                if self.cache.contains(locale, term) {
                    continue;
                }
                let translated = self.translate_text(term, locale)?;
                tracing::debug!(locale = locale.as_str(), term = term.as_str(), "Pre-translated as {:?}", translated);
                self.cache.insert(locale, term.clone(), translated);
            }
        }
        Ok(())
    }

    /// One uncached round trip: fetch, split, filter, score
    fn translate_text(&self, text: &str, locale: &str) -> Result<String> {
        let raw = self.backend.fetch(text, locale)?;
        let candidates = filter_candidates(split_candidates(&raw), &self.protected);
        Ok(best_candidate(text, &candidates, &self.protected))
    }
}

impl<B: TranslationBackend> Localize for Translator<B> {
    fn localize(&mut self, phrase: &str, locale: &str) -> Result<String> {
        self.translate(phrase, locale)
    }
}

#[cfg(test)]
impl<B: TranslationBackend> Translator<B> {
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
