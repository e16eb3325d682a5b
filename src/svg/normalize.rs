//! Application icon clean-up and size normalization

use std::sync::OnceLock;

use regex_lite::Regex;

use super::document::{Element, Node, SvgDocument};
use super::placement::{app_offset, app_tier_order};
use super::transform::Transform;

/// Edge length every generated icon is declared with
pub const NORMALIZED_ICON_SIZE: i64 = 64;

/// Inkscape version stamped on generated icons
pub const INKSCAPE_VERSION: &str = "0.92";

fn sized_id_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^icon:[0-9]+-[0-9]+$").expect("Invalid sized id regex"))
}

/// Numeric prefix of an SVG length such as `256`, `48px` or `64.0`
fn parse_length(value: &str) -> Option<f64> {
    let value = value.trim();
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

/// Re-seat embedded bitmaps and drop oversized fixed-size renditions
fn fix_sized_elements(parent: &mut Element, size: i64) {
    let border = (size - (size * 3) / 4) / 2;

    parent.children.retain_mut(|node| {
        let Node::Element(el) = node else {
            return true;
        };

        let sized = el.attr("id").is_some_and(|id| sized_id_regex().is_match(id));
        let height = el.attr("height").and_then(parse_length).map(|h| h as i64);
        if let (true, Some(height)) = (sized, height) {
            if el.is_svg("image") {
                el.set_attr("y", (size - height - border).to_string());
            } else if height > size {
                tracing::debug!("Dropping oversized <{}> {:?}", el.name, el.attr("id"));
                return false;
            }
        }

        fix_sized_elements(el, size);
        true
    });
}

/// Tidy an application icon so its tiers line up at the normalized size.
///
/// Fixed-size renditions are fixed up first, then top-level groups receive
/// tier ids. Group transforms are only rewritten when the source icon is
/// taller than [`NORMALIZED_ICON_SIZE`].
pub fn normalize_app_icon(doc: &mut SvgDocument, icon_name: &str) {
    let size = NORMALIZED_ICON_SIZE;
    fix_sized_elements(&mut doc.root, size);

    let oversized = doc
        .root
        .attr("height")
        .and_then(parse_length)
        .is_some_and(|h| h > size as f64);

    let mut tiers = app_tier_order(icon_name).iter();
    let mut first = true;

    doc.root.children.retain_mut(|node| {
        let el = match node {
            Node::Element(el) if el.is_svg("g") => el,
            _ => return true,
        };

        if let Some(tier) = tiers.next() {
            el.set_attr("id", tier.id());
        }
        if !oversized {
            return true;
        }

        let (x, y) = if first {
            first = false;
            app_offset(icon_name)
        } else {
            (0.0, 0.0)
        };

        match Transform::of(el) {
            Some(Transform::Matrix(m)) => {
                if m[0].round_ties_even() == 1.0 && m[3].round_ties_even() == 1.0 {
                    Transform::Identity.apply_to(el);
                    true
                } else {
                    tracing::debug!("Dropping scaled group {:?} from {}", el.attr("id"), icon_name);
                    false
                }
            }
            Some(Transform::Translate { .. }) => {
                Transform::Translate { x, y }.apply_to(el);
                true
            }
            _ => true,
        }
    });
}

/// Declare the normalized icon size and Inkscape version on the root
pub fn normalize_size(doc: &mut SvgDocument) {
    let size = NORMALIZED_ICON_SIZE.to_string();
    doc.root.set_attr("inkscape:version", INKSCAPE_VERSION);
    doc.root.set_attr("height", size.as_str());
    doc.root.set_attr("width", size);
}
