//! Per-icon layout tables
//!
//! The numbers here are design constants tuned by eye against the Wine
//! shell32 and program icons. They are looked up by icon file name.

use super::transform::Transform;

/// Icon size variants kept as separate top-level groups in one SVG
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconTier {
    Large,
    Medium,
    Small,
}

impl IconTier {
    /// Group id written for this tier
    pub fn id(self) -> &'static str {
        match self {
            IconTier::Large => "icon:large-scaleable",
            IconTier::Medium => "icon:medium-scaleable",
            IconTier::Small => "icon:small-scaleable",
        }
    }
}

const LARGE_FIRST: &[IconTier] = &[IconTier::Large, IconTier::Medium, IconTier::Small];
const MEDIUM_FIRST: &[IconTier] = &[IconTier::Medium, IconTier::Large];
const SMALL_FIRST: &[IconTier] = &[IconTier::Small, IconTier::Medium, IconTier::Large];

/// Places icon that gets tier ids but no logo
const OVERLAY_EXEMPT: &[&str] = &["control.svg"];

/// Scale and position of the logo overlay inside one tier group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPlacement {
    pub x_scale: f64,
    pub y_scale: f64,
    pub x: f64,
    pub y: f64,
}

impl OverlayPlacement {
    pub fn transform(&self) -> Transform {
        Transform::scale_and_offset(self.x_scale, self.y_scale, self.x, self.y)
    }
}

/// Tier order of the top-level groups in a places icon
pub fn places_tier_order(icon: &str) -> &'static [IconTier] {
    match icon {
        "desktop.svg" | "document.svg" | "mycomputer.svg" => MEDIUM_FIRST,
        _ => LARGE_FIRST,
    }
}

pub fn is_overlay_exempt(icon: &str) -> bool {
    OVERLAY_EXEMPT.contains(&icon)
}

/// Logo placement for a tier of a places icon; small tiers get none
pub fn overlay_placement(tier: IconTier, icon: &str) -> Option<OverlayPlacement> {
    match tier {
        IconTier::Large => {
            let (x, y) = match icon {
                "document.svg" | "desktop.svg" | "mydocs.svg" | "drive.svg"
                | "mycomputer.svg" | "netdrive.svg" | "printer.svg" => (24.0, 16.0),
                _ => (20.0, 10.0),
            };
            Some(OverlayPlacement {
                x_scale: 0.70,
                y_scale: 0.66,
                x,
                y,
            })
        }
        IconTier::Medium => {
            let (x, y) = match icon {
                "desktop.svg" | "mydocs.svg" | "drive.svg" | "netdrive.svg" | "printer.svg" => {
                    (187.0, 29.0)
                }
                "mycomputer.svg" => (188.0, 28.0),
                "document.svg" => (10.0, 5.0),
                _ => (13.0, 7.0),
            };
            Some(OverlayPlacement {
                x_scale: 0.48,
                y_scale: 0.44,
                x,
                y,
            })
        }
        IconTier::Small => None,
    }
}

/// Tier order of the top-level groups in an application icon
pub fn app_tier_order(icon: &str) -> &'static [IconTier] {
    match icon {
        "iexplore.svg" | "notepad.svg" | "msiexec.svg" => SMALL_FIRST,
        "taskmgr.svg" | "winecfg.svg" | "wordpad.svg" => MEDIUM_FIRST,
        _ => LARGE_FIRST,
    }
}

/// Offset applied to the first group of an oversized application icon
pub fn app_offset(icon: &str) -> (f64, f64) {
    match icon {
        "taskmgr.svg" | "wcmd.svg" | "winefile.svg" | "winhelp.svg" | "winemine.svg" => (8.0, 8.0),
        "winecfg.svg" => (176.0, 24.0),
        _ => (0.0, 0.0),
    }
}
