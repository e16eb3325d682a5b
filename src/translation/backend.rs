//! Translation backends
//!
//! A backend turns (text, locale) into the raw, unparsed output of a
//! translator. The production backend shells out to `trans`.

use crate::config::{TranslatorSettings, SOURCE_LOCALE};
use crate::error::{AssetError, Result};
use crate::host::{CommandOptions, CommandRunner};

/// Source of raw translator output
pub trait TranslationBackend {
    /// Translate `text` from English into `locale`, returning raw output
    fn fetch(&self, text: &str, locale: &str) -> Result<String>;
}

/// The `trans` command-line translator
#[derive(Debug)]
pub struct TransCommand {
    runner: CommandRunner,
    program: String,
    options: CommandOptions,
}

impl TransCommand {
    pub fn new(settings: &TranslatorSettings) -> Self {
        Self {
            runner: CommandRunner::new(),
            program: settings.program.clone(),
            options: CommandOptions {
                timeout: settings.timeout(),
                ..Default::default()
            },
        }
    }

    /// Arguments for one call; `text` is passed as a single argument
    pub fn arguments(text: &str, locale: &str) -> Vec<String> {
        [
            "-indent", "0",
            "-no-ansi",
            "-no-auto",
            "-show-languages", "N",
            "-show-dictionary", "N",
            "-show-prompt-message", "N",
            "-show-original", "N",
            "-s", SOURCE_LOCALE,
            "-t", locale,
            text,
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

impl TranslationBackend for TransCommand {
    fn fetch(&self, text: &str, locale: &str) -> Result<String> {
        tracing::debug!(locale, text, "Running {}", self.program);

        let unavailable = |reason: String| AssetError::TranslationUnavailable {
            phrase: text.to_string(),
            locale: locale.to_string(),
            reason,
        };

        let result = self
            .runner
            .run(&self.program, &Self::arguments(text, locale), &self.options)
            .map_err(|e| unavailable(e.to_string()))?;

        if !result.success() {
            let reason = match result.exit_code {
                Some(code) => format!("exit status {}", code),
                None => "terminated by signal".to_string(),
            };
            return Err(unavailable(reason));
        }

        Ok(result.text)
    }
}
