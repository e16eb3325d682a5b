//! wine-desktop-assets - distribution-agnostic desktop integration for Wine
//!
//! Clones the icons out of a Wine source tree and produces:
//! - hicolor SVG application and places icons (with the Wine logo overlaid)
//! - localized `.desktop` launchers and `.directory` files
//! - an XDG menu file and a Makefile to install all of it

mod assets;
mod catalog;
mod cli;
mod config;
mod error;
mod host;
mod logging;
mod makefile;
mod svg;
mod translation;
mod xdg;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser};

use cli::{exit_codes, Cli};
use config::Settings;
use error::AssetError;
use host::CommandRunner;
use translation::{TransCommand, Translator};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_output) {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    match execute(cli) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            if matches!(
                e.downcast_ref::<AssetError>(),
                Some(AssetError::InvalidTarget(_) | AssetError::MissingSource | AssetError::InvalidSource(_))
            ) {
                let _ = Cli::command().print_help();
                eprintln!();
            }
            eprintln!("Error: {:#}", e);
            categorize_error(&e)
        }
    }
}

/// Resolve a directory argument the way `realpath` would, requiring it to exist
fn existing_dir(path: &Path) -> Option<PathBuf> {
    std::fs::canonicalize(path).ok().filter(|p| p.is_dir())
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    let target = match cli.target {
        Some(target) => target,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };
    let target = existing_dir(&target).ok_or(AssetError::InvalidTarget(target))?;

    let source = cli.wine.ok_or(AssetError::MissingSource)?;
    let source = existing_dir(&source).ok_or(AssetError::InvalidSource(source))?;

    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.no_translate {
        settings = settings.without_translations();
    } else if !cli.locales.is_empty() {
        settings = settings.with_locales(&cli.locales);
    }

    if settings.locales.len() > 1 && CommandRunner::which(&settings.translator.program).is_none() {
        tracing::warn!(
            "Translator '{}' not found on PATH; pass --no-translate to skip translations",
            settings.translator.program
        );
    }

    tracing::info!(
        output = %target.display(),
        wine_source = %source.display(),
        locales = settings.locales.len(),
        "Generating Wine desktop assets"
    );

    let backend = TransCommand::new(&settings.translator);
    let mut translator = Translator::from_settings(backend, &settings);
    let summary = assets::generate(&target, &source, &settings, &mut translator)?;

    tracing::info!(
        app_icons = summary.app_icons,
        places_icons = summary.places_icons,
        desktop_files = summary.desktop_files,
        directory_files = summary.directory_files,
        cached_translations = translator.cache().len(),
        "Done"
    );
    Ok(())
}

/// Map the root cause of a failed run to an exit code
fn categorize_error(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<AssetError>() {
        Some(AssetError::InvalidTarget(_)) => exit_codes::INVALID_TARGET,
        Some(AssetError::MissingSource | AssetError::InvalidSource(_) | AssetError::Settings { .. }) => {
            exit_codes::INVALID_SOURCE
        }
        Some(AssetError::TranslationUnavailable { .. }) => exit_codes::TRANSLATION_UNAVAILABLE,
        Some(AssetError::Io { .. } | AssetError::SvgParse { .. }) => exit_codes::FILESYSTEM_ERROR,
        None => exit_codes::UNEXPECTED_FAILURE,
    }
}
