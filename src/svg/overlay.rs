//! Logo overlay compositing for "places" icons

use super::document::{Element, Node, SvgDocument};
use super::placement::{is_overlay_exempt, overlay_placement, places_tier_order};
use super::transform::Transform;
use crate::error::MalformedSvgInput;

/// Keep only the first top-level group of the overlay logo.
///
/// The kept group's transform is reset to identity so it can be placed at
/// any scale.
pub fn reduce_to_single_group(doc: &mut SvgDocument) -> Result<(), MalformedSvgInput> {
    let mut kept = false;
    doc.root.children.retain_mut(|node| match node {
        Node::Element(el) if el.is_svg("g") => {
            if kept {
                return false;
            }
            kept = true;
            Transform::Identity.apply_to(el);
            true
        }
        _ => true,
    });

    if kept {
        Ok(())
    } else {
        Err(MalformedSvgInput::MissingOverlayGroup)
    }
}

/// Move every top-level group that carries an `id` into one wrapper group.
///
/// The wrapper is appended at the end of the root. Returns the number of
/// groups moved; the document is untouched when none carries an `id`.
pub fn merge_fragments(doc: &mut SvgDocument) -> Result<usize, MalformedSvgInput> {
    if !doc.top_level_groups().any(|g| g.attr("id").is_some()) {
        return Err(MalformedSvgInput::NoTaggedGroups);
    }

    let children = std::mem::take(&mut doc.root.children);
    let mut wrapper: Option<Element> = None;
    let mut moved = 0;

    for node in children {
        match node {
            Node::Element(el) if el.is_svg("g") && el.attr("id").is_some() => {
                let wrapper = wrapper.get_or_insert_with(|| {
                    let mut shell = el.clone();
                    shell.children.retain(|child| !matches!(child, Node::Element(_)));
                    shell.set_attr("id", "");
                    Transform::Translate { x: 0.0, y: 0.0 }.apply_to(&mut shell);
                    shell
                });
                wrapper.children.push(Node::Element(el));
                moved += 1;
            }
            other => doc.root.children.push(other),
        }
    }

    if let Some(wrapper) = wrapper {
        doc.root.children.push(Node::Element(wrapper));
    }
    Ok(moved)
}

/// Composite the (reduced) overlay logo onto each tier group of a places icon.
///
/// Returns the number of overlay copies appended. The base document is left
/// untouched when either document lacks the structure this relies on.
pub fn overlay(
    base: &mut SvgDocument,
    logo: &SvgDocument,
    icon_name: &str,
) -> Result<usize, MalformedSvgInput> {
    let logo_defs = logo
        .root
        .first_child("defs")
        .ok_or(MalformedSvgInput::MissingOverlayDefs)?;
    let logo_group = logo
        .root
        .first_child("g")
        .ok_or(MalformedSvgInput::MissingOverlayGroup)?;
    let base_defs = base
        .root
        .first_child_mut("defs")
        .ok_or(MalformedSvgInput::MissingBaseDefs)?;

    base_defs
        .children
        .extend(logo_defs.elements().cloned().map(Node::Element));

    let exempt = is_overlay_exempt(icon_name);
    let mut tiers = places_tier_order(icon_name).iter();
    let mut appended = 0;

    for group in base.root.elements_mut().filter(|el| el.is_svg("g")) {
        let Some(&tier) = tiers.next() else {
            break;
        };
        group.set_attr("id", tier.id());
        if exempt {
            continue;
        }

        match overlay_placement(tier, icon_name) {
            Some(placement) => {
                let mut copy = logo_group.clone();
                placement.transform().apply_to(&mut copy);
                group.children.push(Node::Element(copy));
                appended += 1;
            }
            None => tracing::debug!("No overlay placement for {:?} tier of {}", tier, icon_name),
        }
    }

    Ok(appended)
}
