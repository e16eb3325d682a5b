//! End-to-end generation of the desktop asset tree
//!
//! The target root is wiped of previous output, then repopulated with
//! icons, launchers, menu files and a Makefile, in that order.

use std::fs;
use std::path::Path;

use crate::catalog::{self, IconSource, MENU_CATEGORIES};
use crate::config::Settings;
use crate::error::{AssetError, Result};
use crate::makefile::{
    self, APPLICATIONS_DIR, APPS_ICONS_DIR, DIRECTORIES_DIR, ICONS_DIR, MAKEFILE_NAME,
    PLACES_ICONS_DIR, XDG_DIR,
};
use crate::svg::{self, SvgDocument};
use crate::translation::{TranslationBackend, Translator};
use crate::xdg;

/// Document that arrives split into several tagged groups
const FRAGMENTED_PLACES_ICON: &str = "document.svg";

/// What a run produced
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub app_icons: usize,
    pub places_icons: usize,
    pub desktop_files: usize,
    pub directory_files: usize,
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| AssetError::io(path, e))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| AssetError::io(path, e))
}

/// Remove everything a previous run may have left under `target`
pub fn clean(target: &Path) -> Result<()> {
    for dir in [APPLICATIONS_DIR, DIRECTORIES_DIR, ICONS_DIR, XDG_DIR] {
        let path = target.join(dir);
        if path.is_dir() {
            fs::remove_dir_all(&path).map_err(|e| AssetError::io(&path, e))?;
            tracing::debug!("Removed {}", path.display());
        }
    }
    let makefile = target.join(MAKEFILE_NAME);
    if makefile.is_file() {
        fs::remove_file(&makefile).map_err(|e| AssetError::io(&makefile, e))?;
    }
    Ok(())
}

/// Create the output directory layout under `target`
pub fn create_layout(target: &Path) -> Result<()> {
    for dir in [
        APPLICATIONS_DIR,
        DIRECTORIES_DIR,
        ICONS_DIR,
        XDG_DIR,
        APPS_ICONS_DIR,
        PLACES_ICONS_DIR,
    ] {
        create_dir(&target.join(dir))?;
    }
    Ok(())
}

fn source_path(source: &Path, icon: &IconSource) -> std::path::PathBuf {
    source.join(icon.source_dir).join(icon.file_name)
}

fn copy_logo_ico(target: &Path, source: &Path) -> Result<()> {
    let from = source.join(catalog::LOGO_DIR).join(catalog::LOGO_ICO);
    let to = target.join(ICONS_DIR).join(catalog::LOGO_ICO);
    fs::copy(&from, &to).map_err(|e| AssetError::io(&from, e))?;
    tracing::info!("Copied {}", to.display());
    Ok(())
}

fn process_app_icons(target: &Path, source: &Path) -> Result<usize> {
    let out_dir = target.join(APPS_ICONS_DIR);
    for icon in catalog::app_icons() {
        let mut doc = SvgDocument::load(&source_path(source, icon))?;
        svg::normalize_app_icon(&mut doc, icon.file_name);
        svg::normalize_size(&mut doc);

        let path = out_dir.join(icon.app_target_name());
        doc.write(&path)?;
        tracing::info!("Wrote {}", path.display());
    }
    Ok(catalog::app_icons().len())
}

fn process_places_icons(target: &Path, source: &Path) -> Result<usize> {
    let logo_icon = catalog::logo_icon();
    let mut logo = SvgDocument::load(&source_path(source, &logo_icon))?;
    if let Err(e) = svg::reduce_to_single_group(&mut logo) {
        tracing::warn!("{}: {}", logo_icon.file_name, e);
    }

    let out_dir = target.join(PLACES_ICONS_DIR);
    for icon in catalog::places_icons() {
        let mut doc = SvgDocument::load(&source_path(source, icon))?;

        if icon.file_name == FRAGMENTED_PLACES_ICON {
            match svg::merge_fragments(&mut doc) {
                Ok(moved) => tracing::debug!("Merged {} groups in {}", moved, icon.file_name),
                Err(e) => tracing::warn!("{}: {}", icon.file_name, e),
            }
        }

        match svg::overlay(&mut doc, &logo, icon.file_name) {
            Ok(count) => tracing::debug!("Overlaid {} logo copies on {}", count, icon.file_name),
            Err(e) => tracing::warn!("{}: {}", icon.file_name, e),
        }
        svg::normalize_size(&mut doc);

        let path = out_dir.join(icon.places_target_name());
        doc.write(&path)?;
        tracing::info!("Wrote {}", path.display());
    }
    Ok(catalog::places_icons().len())
}

fn write_desktop_files<B: TranslationBackend>(
    target: &Path,
    locales: &[String],
    translator: &mut Translator<B>,
) -> Result<usize> {
    let launchers = catalog::launchers();
    for launcher in &launchers {
        let text = xdg::render(&launcher.entry, locales, translator)?;
        let path = target
            .join(APPLICATIONS_DIR)
            .join(format!("{}.desktop", launcher.id));
        write_text(&path, &text)?;
    }
    Ok(launchers.len())
}

fn write_directory_files<B: TranslationBackend>(
    target: &Path,
    locales: &[String],
    translator: &mut Translator<B>,
) -> Result<usize> {
    for category in MENU_CATEGORIES {
        let text = xdg::render(&xdg::directory_descriptor(category), locales, translator)?;
        let path = target
            .join(DIRECTORIES_DIR)
            .join(xdg::directory_file_name(category));
        write_text(&path, &text)?;
    }
    Ok(MENU_CATEGORIES.len())
}

/// Regenerate the full asset tree under `target` from the Wine tree at `source`.
///
/// Both directories must already exist. Translation failures abort the run;
/// structural oddities in individual icons are logged and skipped over.
pub fn generate<B: TranslationBackend>(
    target: &Path,
    source: &Path,
    settings: &Settings,
    translator: &mut Translator<B>,
) -> Result<GenerationSummary> {
    if !target.is_dir() {
        return Err(AssetError::InvalidTarget(target.to_path_buf()));
    }
    if !source.is_dir() {
        return Err(AssetError::InvalidSource(source.to_path_buf()));
    }

    tracing::info!("Pre-translating unprotected terms for {} locales", settings.locales.len());
    translator.pre_translate_unprotected_terms(&settings.locales)?;

    clean(target)?;
    create_layout(target)?;

    copy_logo_ico(target, source)?;
    let app_icons = process_app_icons(target, source)?;
    let places_icons = process_places_icons(target, source)?;

    let desktop_files = write_desktop_files(target, &settings.locales, translator)?;

    let menu_path = target
        .join(XDG_DIR)
        .join(xdg::menu_file_name(MENU_CATEGORIES));
    write_text(&menu_path, &xdg::render_menu(MENU_CATEGORIES))?;

    let directory_files = write_directory_files(target, &settings.locales, translator)?;

    let makefile = makefile::write_makefile(target)?;
    tracing::info!("Wrote {}", makefile.display());

    Ok(GenerationSummary {
        app_icons,
        places_icons,
        desktop_files,
        directory_files,
    })
}
