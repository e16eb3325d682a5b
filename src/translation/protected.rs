//! Protected terms
//!
//! Brand and product names are swapped for long digit placeholders before a
//! phrase goes to the translator, then swapped back afterwards. Translators
//! pass digit runs through untouched, so the terms survive verbatim.

use std::sync::OnceLock;

use regex_lite::Regex;
use sha2::{Digest, Sha256};

use crate::config::ProtectedTermSetting;

/// Shortest digit run treated as a placeholder-like token
pub const MIN_PLACEHOLDER_DIGITS: usize = 10;

/// Digits in a derived placeholder
const DERIVED_PLACEHOLDER_DIGITS: u32 = 12;

fn digit_run_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(&format!("[0-9]{{{},}}", MIN_PLACEHOLDER_DIGITS))
            .expect("Invalid digit run regex")
    })
}

/// A term and the token standing in for it during translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedTerm {
    pub term: String,
    pub placeholder: String,
}

/// Ordered table of protected terms
#[derive(Debug, Clone, Default)]
pub struct ProtectedTermTable {
    entries: Vec<ProtectedTerm>,
}

impl ProtectedTermTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the built-in Wine terms
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for (term, placeholder) in crate::config::DEFAULT_PROTECTED_TERMS {
            table.insert(*term, *placeholder);
        }
        table
    }

    /// Built-in terms plus any from the settings file
    pub fn from_settings(extra: &[ProtectedTermSetting]) -> Self {
        let mut table = Self::with_defaults();
        for setting in extra {
            match &setting.placeholder {
                Some(placeholder) => table.insert(setting.term.clone(), placeholder.clone()),
                None => table.insert_derived(setting.term.clone()),
            }
        }
        table
    }

    /// Add or replace a term with an explicit placeholder
    pub fn insert(&mut self, term: impl Into<String>, placeholder: impl Into<String>) {
        let term = term.into();
        let placeholder = placeholder.into();
        if let Some(existing) = self.entries.iter_mut().find(|e| e.term == term) {
            existing.placeholder = placeholder;
        } else {
            self.entries.push(ProtectedTerm { term, placeholder });
        }
    }

    /// Add a term whose placeholder is derived from the term itself
    pub fn insert_derived(&mut self, term: impl Into<String>) {
        let term = term.into();
        let placeholder = derive_placeholder(&term);
        self.insert(term, placeholder);
    }

    pub fn is_placeholder(&self, token: &str) -> bool {
        self.entries.iter().any(|e| e.placeholder == token)
    }

    /// Replace every protected term in `text` with its placeholder.
    ///
    /// Returns the rewritten text and the terms that were actually replaced.
    pub fn protect(&self, text: &str) -> (String, Vec<&ProtectedTerm>) {
        let mut protected = text.to_string();
        let mut used = Vec::new();
        for entry in &self.entries {
            if protected.contains(&entry.term) {
                protected = protected.replace(&entry.term, &entry.placeholder);
                used.push(entry);
            }
        }
        (protected, used)
    }

    /// Put the original terms back in place of their placeholders
    pub fn restore(text: &str, used: &[&ProtectedTerm]) -> String {
        used.iter().fold(text.to_string(), |acc, entry| {
            acc.replace(&entry.placeholder, &entry.term)
        })
    }

    /// A candidate is corrupt if it holds a long digit run that is not one
    /// of our placeholders
    pub fn is_valid_candidate(&self, candidate: &str) -> bool {
        digit_run_regex()
            .find_iter(candidate)
            .all(|m| self.is_placeholder(m.as_str()))
    }
}

/// Deterministic 12-digit token for a term
pub fn derive_placeholder(term: &str) -> String {
    let digest = Sha256::digest(term.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let value = u64::from_be_bytes(prefix) % 10u64.pow(DERIVED_PLACEHOLDER_DIGITS);
    format!("{:0width$}", value, width = DERIVED_PLACEHOLDER_DIGITS as usize)
}

#[cfg(test)]
impl ProtectedTermTable {
    pub fn entries(&self) -> &[ProtectedTerm] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protect_and_restore() {
        let table = ProtectedTermTable::with_defaults();
        let (text, used) = table.protect("A clone of the Microsoft® Windows Notepad");
        assert_eq!(text, "A clone of the 002181990571 001391736148 Notepad");
        assert_eq!(used.len(), 2);

        let translated = "Un clone du 002181990571 001391736148 Bloc-notes";
        assert_eq!(
            ProtectedTermTable::restore(translated, &used),
            "Un clone du Microsoft® Windows Bloc-notes"
        );
    }

    #[test]
    fn test_protect_drive_letter() {
        let table = ProtectedTermTable::with_defaults();
        let (text, used) = table.protect("Browse your virtual C: disk-drive");
        assert_eq!(text, "Browse your virtual 001116292070 disk-drive");
        assert_eq!(used[0].term, "C:");
    }

    #[test]
    fn test_candidate_validity() {
        let table = ProtectedTermTable::with_defaults();
        assert!(table.is_valid_candidate("Bloc-notes 002712425879"));
        assert!(table.is_valid_candidate("version 123456789"));
        assert!(!table.is_valid_candidate("Bloc-notes 002712425878"));
        assert!(!table.is_valid_candidate("0027124258791"));
    }

    #[test]
    fn test_derived_placeholder() {
        let a = derive_placeholder("Direct3D");
        let b = derive_placeholder("Direct3D");
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        assert!(a.len() >= MIN_PLACEHOLDER_DIGITS);
        assert!(a.chars().all(|c| c.is_ascii_digit()));
        assert_ne!(a, derive_placeholder("DirectX"));
    }

    #[test]
    fn test_from_settings() {
        let extra = vec![
            ProtectedTermSetting {
                term: "Direct3D".to_string(),
                placeholder: None,
            },
            ProtectedTermSetting {
                term: "Wine".to_string(),
                placeholder: Some("009999999999".to_string()),
            },
        ];
        let table = ProtectedTermTable::from_settings(&extra);
        assert_eq!(table.entries().len(), 5);
        assert!(table.is_placeholder("009999999999"));
        assert!(!table.is_placeholder("002712425879"));
        assert!(table.is_placeholder(&derive_placeholder("Direct3D")));
    }
}
