//! Settings for a generation run
//!
//! Built-in defaults reproduce the stock Wine asset set. An optional TOML
//! file can change the locale list, the translator invocation and add
//! protected/unprotected terms.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AssetError, Result};

/// Vendor prefix for generated file names
pub const VENDOR_ID: &str = "wine";

/// Locale whose text is written untranslated
pub const SOURCE_LOCALE: &str = "en";

/// Locales written into every localized entry, in output order
pub const DEFAULT_LOCALES: &[&str] = &[
    "en", "ar", "bg", "ca", "cs", "da", "de", "el", "eo", "es", "fa", "fi", "fr", "he", "hi",
    "hr", "hu", "it", "ja", "ko", "lt", "ml", "nl", "pa", "pl", "pt", "pt-BR", "pt-PT", "ro",
    "ru", "sk", "sl", "sr", "sr-Cyrl", "sr-Latn", "sv", "te", "th", "tr", "uk", "zh", "zh-CN",
    "zh-TW",
];

/// Terms shielded from translation and their fixed placeholder tokens
pub const DEFAULT_PROTECTED_TERMS: &[(&str, &str)] = &[
    ("C:", "001116292070"),
    ("Microsoft®", "002181990571"),
    ("Windows", "001391736148"),
    ("Wine", "002712425879"),
];

/// Short words that are translated once per locale and reused
pub const DEFAULT_UNPROTECTED_TERMS: &[&str] =
    &["Component", "Editor", "Object", "Model", "Text", "Viewer"];

/// File name looked up under the user config directory
const SETTINGS_FILE: &str = "config.toml";

/// Translator invocation settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslatorSettings {
    /// Program name or path of the translation utility
    pub program: String,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            program: "trans".to_string(),
            timeout_secs: 30,
        }
    }
}

impl TranslatorSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// An extra protected term from the settings file
#[derive(Debug, Clone, Deserialize)]
pub struct ProtectedTermSetting {
    pub term: String,
    /// Explicit placeholder; derived from the term when absent
    pub placeholder: Option<String>,
}

/// Settings as read from the TOML file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locales: Vec<String>,
    pub translator: TranslatorSettings,
    pub protected_terms: Vec<ProtectedTermSetting>,
    pub unprotected_terms: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locales: DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect(),
            translator: TranslatorSettings::default(),
            protected_terms: Vec::new(),
            unprotected_terms: DEFAULT_UNPROTECTED_TERMS
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self> {
        let settings: Self = toml::from_str(text).map_err(|e| AssetError::Settings {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        let locales = settings.locales.clone();
        Ok(settings.with_locales(&locales))
    }

    /// Load settings from an explicit file, the user config directory, or defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_settings_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    tracing::debug!("No settings file found, using built-in defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = std::fs::read_to_string(&path).map_err(|e| AssetError::io(&path, e))?;
        tracing::debug!("Loaded settings from {}", path.display());
        Self::from_toml(&text, &path)
    }

    /// Restrict output to the source locale only
    pub fn without_translations(mut self) -> Self {
        self.locales = vec![SOURCE_LOCALE.to_string()];
        self
    }

    /// Replace the locale list, keeping the source locale first and
    /// dropping duplicates
    pub fn with_locales(mut self, locales: &[String]) -> Self {
        let mut list = vec![SOURCE_LOCALE.to_string()];
        for locale in locales {
            if !list.contains(locale) {
                list.push(locale.clone());
            }
        }
        self.locales = list;
        self
    }
}

/// `<config dir>/wine-desktop-assets/config.toml`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME")).join(SETTINGS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.locales.first().map(String::as_str), Some("en"));
        assert_eq!(settings.locales.len(), DEFAULT_LOCALES.len());
        assert_eq!(settings.translator.program, "trans");
        assert_eq!(settings.unprotected_terms.len(), 6);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let text = r#"
            locales = ["en", "fr", "de"]

            [translator]
            timeout_secs = 5

            [[protected_terms]]
            term = "Direct3D"
        "#;
        let settings = Settings::from_toml(text, Path::new("test.toml")).unwrap();
        assert_eq!(settings.locales, vec!["en", "fr", "de"]);
        assert_eq!(settings.translator.program, "trans");
        assert_eq!(settings.translator.timeout(), Duration::from_secs(5));
        assert_eq!(settings.protected_terms.len(), 1);
        assert!(settings.protected_terms[0].placeholder.is_none());
        assert_eq!(settings.unprotected_terms.len(), 6);
    }

    #[test]
    fn test_bad_toml_is_settings_error() {
        let err = Settings::from_toml("locales = 3", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, AssetError::Settings { .. }));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "unprotected_terms = [\"Editor\"]\n").unwrap();
        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.unprotected_terms, vec!["Editor"]);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Settings::load(Some(Path::new("/no/such/settings.toml"))).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn test_locale_overrides() {
        let settings = Settings::default().without_translations();
        assert_eq!(settings.locales, vec!["en"]);

        let settings =
            Settings::default().with_locales(&["fr".to_string(), "en".to_string(), "fr".to_string()]);
        assert_eq!(settings.locales, vec!["en", "fr"]);
    }

    #[test]
    fn test_file_locales_always_start_with_source() {
        let settings = Settings::from_toml(r#"locales = ["fr"]"#, Path::new("fr.toml")).unwrap();
        assert_eq!(settings.locales, vec!["en", "fr"]);

        let settings =
            Settings::from_toml(r#"locales = ["de", "en", "de", "ja"]"#, Path::new("x.toml")).unwrap();
        assert_eq!(settings.locales, vec!["en", "de", "ja"]);

        let settings = Settings::from_toml("locales = []", Path::new("empty.toml")).unwrap();
        assert_eq!(settings.locales, vec!["en"]);
    }
}
