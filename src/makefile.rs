//! Makefile that installs the generated tree

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssetError, Result};

pub const APPLICATIONS_DIR: &str = "applications";
pub const DIRECTORIES_DIR: &str = "desktop-directories";
pub const ICONS_DIR: &str = "icons";
pub const XDG_DIR: &str = "xdg";
pub const APPS_ICONS_DIR: &str = "icons/hicolor/scalable/apps";
pub const PLACES_ICONS_DIR: &str = "icons/hicolor/scalable/places";
pub const MAKEFILE_NAME: &str = "Makefile";

/// One group of generated files and where `make install` puts them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallSet {
    pub variable: &'static str,
    pub extension: &'static str,
    /// Directory relative to the target root
    pub directory: &'static str,
    pub destination: &'static str,
}

pub const INSTALL_SETS: &[InstallSet] = &[
    InstallSet {
        variable: "MENU_FILES",
        extension: "menu",
        directory: XDG_DIR,
        destination: "/etc/xdg/menus/applications-merged",
    },
    InstallSet {
        variable: "DESKTOP_FILES",
        extension: "desktop",
        directory: APPLICATIONS_DIR,
        destination: "/usr/share/applications",
    },
    InstallSet {
        variable: "DIRECTORY_FILES",
        extension: "directory",
        directory: DIRECTORIES_DIR,
        destination: "/usr/share/desktop-directories",
    },
    InstallSet {
        variable: "APPS_ICONS",
        extension: "svg",
        directory: APPS_ICONS_DIR,
        destination: "/usr/share/icons/hicolor/scalable/apps",
    },
    InstallSet {
        variable: "PLACES_ICONS",
        extension: "svg",
        directory: PLACES_ICONS_DIR,
        destination: "/usr/share/icons/hicolor/scalable/places",
    },
    InstallSet {
        variable: "WINE_ICO",
        extension: "ico",
        directory: ICONS_DIR,
        destination: "/usr/share/wine/icons",
    },
];

/// Non-hidden regular files with the set's extension, relative to `root`
fn collect_files(root: &Path, set: &InstallSet) -> Result<Vec<String>> {
    let dir = root.join(set.directory);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let suffix = format!(".{}", set.extension);
    let mut files = Vec::new();
    for entry in fs::read_dir(&dir).map_err(|e| AssetError::io(&dir, e))? {
        let entry = entry.map_err(|e| AssetError::io(&dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_file = entry
            .file_type()
            .map_err(|e| AssetError::io(entry.path(), e))?
            .is_file();
        if is_file && !name.starts_with('.') && name.ends_with(&suffix) {
            files.push(format!("{}/{}", set.directory, name));
        }
    }
    files.sort();
    Ok(files)
}

fn variable_block(variable: &str, files: &[String]) -> String {
    match files {
        [] => String::new(),
        [single] => format!("{} = {}\n\n", variable, single),
        many => {
            let mut text = format!("{}  =", variable);
            for file in many {
                text.push_str(" \\\n\t");
                text.push_str(file);
            }
            text.push_str("\n\n");
            text
        }
    }
}

/// Makefile text for whatever is currently under `root`
pub fn render_makefile(root: &Path) -> Result<String> {
    let mut text = String::new();
    for set in INSTALL_SETS {
        text.push_str(&variable_block(set.variable, &collect_files(root, set)?));
    }

    text.push_str("all:");
    for set in INSTALL_SETS {
        text.push_str(&format!(" $({})", set.variable));
    }
    text.push_str("\n\ninstall: all\n");
    for set in INSTALL_SETS {
        text.push_str(&format!(
            "\tinstall -d \"$(DESTDIR)$(EPREFIX){}\"\n",
            set.destination
        ));
        text.push_str(&format!(
            "\tinstall -m0644 $({}) \"$(DESTDIR)$(EPREFIX){}\"\n",
            set.variable, set.destination
        ));
    }
    Ok(text)
}

/// Write `Makefile` at the target root
pub fn write_makefile(root: &Path) -> Result<PathBuf> {
    let text = render_makefile(root)?;
    let path = root.join(MAKEFILE_NAME);
    fs::write(&path, text).map_err(|e| AssetError::io(&path, e))?;
    Ok(path)
}
