//! Static tables: launchers, menu categories and icon sources
//!
//! Everything here is fixed data about the Wine source tree and the
//! launchers shipped for it.

use crate::config::VENDOR_ID;
use crate::xdg::DesktopEntryDescriptor;

pub const CATEGORY_WINE: &str = "Wine";
pub const CATEGORY_PROGRAMS: &str = "Wine-Programs";
pub const CATEGORY_ACCESSORIES: &str = "Wine-Programs-Accessories";
pub const CATEGORY_GAME: &str = "Game";
pub const CATEGORY_LOGIC_GAME: &str = "LogicGame";

/// Submenu chain, outermost first
pub const MENU_CATEGORIES: &[&str] = &[CATEGORY_WINE, CATEGORY_PROGRAMS, CATEGORY_ACCESSORIES];

/// Directory of the Wine logo inside the source tree
pub const LOGO_DIR: &str = "dlls/user32/resources";
pub const LOGO_SVG: &str = "oic_winlogo.svg";
pub const LOGO_ICO: &str = "oic_winlogo.ico";

const SHELL32_DIR: &str = "dlls/shell32";

/// An icon to clone out of the Wine source tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSource {
    pub file_name: &'static str,
    /// Directory relative to the source root
    pub source_dir: &'static str,
}

impl IconSource {
    const fn new(file_name: &'static str, source_dir: &'static str) -> Self {
        Self {
            file_name,
            source_dir,
        }
    }

    /// Output file name under the `apps` icon directory
    pub fn app_target_name(&self) -> String {
        if self.file_name == LOGO_SVG {
            format!("{}.svg", VENDOR_ID)
        } else {
            format!("{}-{}", VENDOR_ID, self.file_name)
        }
    }

    /// Output file name under the `places` icon directory, e.g. `drive-wine.svg`
    pub fn places_target_name(&self) -> String {
        let stem = self.file_name.strip_suffix(".svg").unwrap_or(self.file_name);
        format!("{}-{}.svg", stem, VENDOR_ID)
    }
}

const APP_ICONS: &[IconSource] = &[
    IconSource::new("notepad.svg", "programs/notepad"),
    IconSource::new("taskmgr.svg", "programs/taskmgr"),
    IconSource::new("regedit.svg", "programs/regedit"),
    IconSource::new("msiexec.svg", "programs/msiexec"),
    IconSource::new(LOGO_SVG, LOGO_DIR),
    IconSource::new("winecfg.svg", "programs/winecfg"),
    IconSource::new("winefile.svg", "programs/winefile"),
    IconSource::new("winemine.svg", "programs/winemine"),
    IconSource::new("wcmd.svg", "programs/cmd"),
    IconSource::new("iexplore.svg", "programs/iexplore"),
    IconSource::new("winhelp.svg", "programs/winhlp32"),
    IconSource::new("wordpad.svg", "programs/wordpad"),
];

const PLACES_ICONS: &[IconSource] = &[
    IconSource::new("document.svg", SHELL32_DIR),
    IconSource::new("mydocs.svg", SHELL32_DIR),
    IconSource::new("desktop.svg", SHELL32_DIR),
    IconSource::new("printer.svg", SHELL32_DIR),
    IconSource::new("drive.svg", SHELL32_DIR),
    IconSource::new("control.svg", SHELL32_DIR),
    IconSource::new("cdrom.svg", SHELL32_DIR),
    IconSource::new("netdrive.svg", SHELL32_DIR),
    IconSource::new("mycomputer.svg", SHELL32_DIR),
];

pub fn app_icons() -> &'static [IconSource] {
    APP_ICONS
}

pub fn places_icons() -> &'static [IconSource] {
    PLACES_ICONS
}

/// The logo every places icon is overlaid with
pub fn logo_icon() -> IconSource {
    IconSource::new(LOGO_SVG, LOGO_DIR)
}

/// A `.desktop` launcher and the file stem it is written under
#[derive(Debug, Clone, PartialEq)]
pub struct Launcher {
    pub id: String,
    pub entry: DesktopEntryDescriptor,
}

fn launcher(suffix: &str, entry: DesktopEntryDescriptor) -> Launcher {
    Launcher {
        id: format!("{}{}", VENDOR_ID, suffix),
        entry,
    }
}

/// All launchers, in the order they are written
pub fn launchers() -> Vec<Launcher> {
    use DesktopEntryDescriptor as Entry;

    let wine = &[CATEGORY_WINE][..];
    let accessories = &[CATEGORY_WINE, CATEGORY_ACCESSORIES][..];

    vec![
        launcher(
            "browsecdrive",
            Entry::application("Wine C: disk-drive")
                .comment("Browse your virtual C: disk-drive")
                .exec("sh -c \"xdg-open $(winepath -u 'C:' 2>/dev/null)\"")
                .icon("drive-wine")
                .terminal(false)
                .categories(wine),
        ),
        launcher(
            "cmd",
            Entry::application("Wine Command interpreter")
                .comment("Starts a new instance of the command interpreter CMD")
                .exec("wine cmd.exe")
                .icon("wine-wcmd")
                .hidden()
                .startup_wm_class("cmd.exe")
                .categories(accessories),
        ),
        launcher(
            "control",
            Entry::application("Wine Control")
                .comment("A clone of the Microsoft® Windows Control Panel")
                .exec("wine control.exe")
                .icon("control-wine")
                .terminal(false)
                .startup_wm_class("control.exe")
                .categories(accessories),
        ),
        launcher(
            "explorer",
            Entry::application("Wine Explorer")
                .comment("A clone of Microsoft® Windows Explorer")
                .exec("wine explorer.exe")
                .icon("wine-winefile")
                .terminal(false)
                .startup_wm_class("explorer.exe")
                .categories(wine),
        ),
        launcher(
            "iexplore",
            Entry::application("Wine Internet Explorer")
                .comment("Builtin clone of Microsoft® Windows Internet Explorer®")
                .exec("wine iexplore.exe %U")
                .icon("wine-iexplore")
                .terminal(false)
                .startup_wm_class("iexplore.exe")
                .categories(wine),
        ),
        launcher(
            "notepad",
            Entry::application("Wine Notepad")
                .comment("A clone of the Microsoft® Windows Notepad Text Editor")
                .exec("notepad %f")
                .icon("wine-notepad")
                .terminal(false)
                .startup_wm_class("notepad.exe")
                .categories(accessories),
        ),
        launcher(
            "oleview",
            Entry::application("Wine OLE/COM Object Viewer")
                .comment(
                    "Microsoft® Windows Object Linking and Embedding/Component Object Model Object Viewer",
                )
                .exec("wine oleview.exe")
                .icon("control-wine")
                .terminal(false)
                .startup_wm_class("oleview.exe")
                .categories(accessories),
        ),
        launcher(
            "regedit",
            Entry::application("Wine Registry Editor")
                .comment("A clone of the Microsoft® Windows Registry Editor")
                .exec("regedit")
                .icon("wine-regedit")
                .terminal(false)
                .startup_wm_class("regedit.exe")
                .categories(wine),
        ),
        launcher(
            "taskmgr",
            Entry::application("Wine Task Manager")
                .comment("A clone of the Microsoft® Windows Task Manager")
                .exec("wine taskmgr.exe")
                .icon("wine-taskmgr")
                .terminal(false)
                .startup_wm_class("taskmgr.exe")
                .categories(accessories),
        ),
        launcher(
            "uninstaller",
            Entry::application("Wine Software uninstaller")
                .comment("A clone of the Microsoft® Windows Add and Remove Programs Utility")
                .exec("wine uninstaller.exe")
                .icon("control-wine")
                .terminal(false)
                .startup_wm_class("uninstaller.exe")
                .categories(wine),
        ),
        launcher(
            "boot",
            Entry::application("Wine System-Boot")
                .comment("Simulate System-reboot / System-halt")
                .exec("wineboot")
                .icon("mycomputer-wine")
                .terminal(false)
                .startup_wm_class("wineboot.exe")
                .categories(wine),
        ),
        launcher(
            "cfg",
            Entry::application("Wine Configuration")
                .comment("Change general Wine options and application overrides/options")
                .exec("winecfg")
                .icon("wine-winecfg")
                .terminal(false)
                .startup_wm_class("winecfg.exe")
                .categories(accessories),
        ),
        launcher(
            "file",
            Entry::application("Wine File Browser")
                .comment("A clone of Microsoft® Windows Explorer")
                .exec("winefile")
                .icon("wine-winefile")
                .terminal(false)
                .startup_wm_class("winefile.exe")
                .categories(wine),
        ),
        launcher(
            "mine",
            Entry::application("Wine Minesweeper")
                .comment("A clone of the Microsoft® Windows Minesweeper game")
                .exec("winemine")
                .icon("wine-winemine")
                .terminal(false)
                .startup_wm_class("winemine.exe")
                .categories(&[CATEGORY_WINE, CATEGORY_GAME, CATEGORY_LOGIC_GAME]),
        ),
        launcher(
            "winhelp",
            Entry::application("Wine Help")
                .comment("A clone of the Microsoft® Windows Help File browser")
                .exec("wine winhlp32.exe %f")
                .icon("wine-winhelp")
                .terminal(false)
                .startup_wm_class("winhlp32.exe")
                .categories(wine),
        ),
        launcher(
            "wordpad",
            Entry::application("Wine Wordpad")
                .comment("A clone of the Microsoft® Windows Wordpad Text Editor")
                .exec("wine wordpad %f")
                .icon("wine-wordpad")
                .terminal(false)
                .startup_wm_class("wordpad.exe")
                .categories(wine),
        ),
        launcher(
            "msiexec",
            Entry::application("Wine clone of Microsoft® Installer")
                .comment("Wine installer utility for MSI packages")
                .exec("wine msiexec /i %f")
                .no_display()
                .icon("wine-msiexec")
                .terminal(false)
                .startup_wm_class("msiexec.exe")
                .categories(wine),
        ),
        launcher(
            "-mime-msi",
            Entry::application("Microsoft® Windows Installer File")
                .exec("wine %f")
                .hidden()
                .mime_types(&["application/x-ole-storage", "text/mspg-legacyinfo"])
                .terminal(false)
                .categories(wine),
        ),
    ]
}
