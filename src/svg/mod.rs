//! SVG icon transform engine
//!
//! Icons are cloned from the Wine source tree, lightly rewritten in an owned
//! XML tree and written back out. Nothing here renders.

mod document;
mod normalize;
mod overlay;
mod placement;
mod transform;

pub use document::SvgDocument;
pub use normalize::{normalize_app_icon, normalize_size};
pub use overlay::{merge_fragments, overlay, reduce_to_single_group};
