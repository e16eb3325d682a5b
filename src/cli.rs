//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

/// Generate Wine .svg/.ico icons, .desktop launchers, XDG menu files and
/// an install Makefile from a Wine source tree
#[derive(Parser, Debug)]
#[command(name = "wine-desktop-assets")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory target for building (must already exist)
    #[arg(short, long, value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Wine source directory (must already exist)
    #[arg(short, long, value_name = "DIR", env = "WINE_SOURCE_DIR")]
    pub wine: Option<PathBuf>,

    /// Settings file (defaults to the user config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only emit these locales besides English (repeatable)
    #[arg(long = "locale", value_name = "CODE")]
    pub locales: Vec<String>,

    /// Emit English entries only and never run the translator
    #[arg(long, conflicts_with = "locales")]
    pub no_translate: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long = "json")]
    pub json_output: bool,
}

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_TARGET: i32 = 1;
    pub const INVALID_SOURCE: i32 = 2;
    pub const TRANSLATION_UNAVAILABLE: i32 = 3;
    pub const FILESYSTEM_ERROR: i32 = 4;
    pub const UNEXPECTED_FAILURE: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from(["wine-desktop-assets", "-t", "/tmp/out", "-w", "/src/wine", "-v"])
            .unwrap();
        assert_eq!(cli.target, Some(PathBuf::from("/tmp/out")));
        assert_eq!(cli.wine, Some(PathBuf::from("/src/wine")));
        assert!(cli.verbose);
        assert!(!cli.no_translate);
        assert!(cli.locales.is_empty());
    }

    #[test]
    fn test_parse_locales() {
        let cli = Cli::try_parse_from([
            "wine-desktop-assets",
            "--wine",
            "/src/wine",
            "--locale",
            "fr",
            "--locale",
            "de",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.locales, vec!["fr", "de"]);
        assert!(cli.json_output);
        assert_eq!(cli.target, None);
    }

    #[test]
    fn test_no_translate_conflicts_with_locale() {
        let result = Cli::try_parse_from([
            "wine-desktop-assets",
            "--no-translate",
            "--locale",
            "fr",
        ]);
        assert!(result.is_err());
    }
}
