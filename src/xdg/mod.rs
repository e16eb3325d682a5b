//! freedesktop.org desktop entry and menu output

mod entry;
mod menu;

pub use entry::{render, DesktopEntryDescriptor};
pub use menu::{directory_descriptor, directory_file_name, menu_file_name, render_menu};
