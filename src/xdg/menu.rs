//! XDG menu and `.directory` files for the Wine submenu tree

use super::entry::{DesktopEntryDescriptor, EntryType};
use crate::config::VENDOR_ID;

const INDENT: &str = "  ";

const MENU_DOCTYPE: &str = "<!DOCTYPE Menu PUBLIC \"-//freedesktop//DTD Menu 1.0//EN\"\n \"http://www.freedesktop.org/standards/menu-spec/menu-1.0.dtd\">\n";

/// Name of the merged menu file, e.g. `wine-wine.menu`
pub fn menu_file_name(categories: &[&str]) -> String {
    let root = categories.first().copied().unwrap_or("Wine");
    format!("{}-{}.menu", VENDOR_ID, root.to_lowercase())
}

/// `.directory` file name for a category
///
/// `Wine-Programs` becomes `wine-programs.directory`; the root `Wine`
/// category becomes `wine-wine.directory`.
pub fn directory_file_name(category: &str) -> String {
    let lower = category.to_lowercase();
    let stem = lower
        .strip_prefix(&format!("{}-", VENDOR_ID))
        .unwrap_or(&lower);
    format!("{}-{}.directory", VENDOR_ID, stem)
}

/// Descriptor for a category's `.directory` file
pub fn directory_descriptor(category: &str) -> DesktopEntryDescriptor {
    let name = category.rsplit('-').next().unwrap_or(category);
    let icon = if category.eq_ignore_ascii_case(VENDOR_ID) {
        VENDOR_ID
    } else {
        "folder"
    };
    DesktopEntryDescriptor::new(name, EntryType::Directory).icon(icon)
}

fn push_menu(out: &mut String, depth: usize, categories: &[&str]) {
    let Some((category, rest)) = categories.split_first() else {
        return;
    };
    let outer = INDENT.repeat(depth);
    let inner = INDENT.repeat(depth + 1);

    out.push_str(&format!("{outer}<Menu>\n"));
    out.push_str(&format!("{inner}<Name>{category}</Name>\n"));
    out.push_str(&format!(
        "{inner}<Directory>{}</Directory>\n",
        directory_file_name(category)
    ));
    out.push_str(&format!("{inner}<Include>\n"));
    out.push_str(&format!("{inner}{INDENT}<Category>{category}</Category>\n"));
    out.push_str(&format!("{inner}</Include>\n"));
    push_menu(out, depth + 1, rest);
    out.push_str(&format!("{outer}</Menu>\n"));
}

/// Nested menu document: each category is a submenu of the one before it,
/// all under `Applications`
pub fn render_menu(categories: &[&str]) -> String {
    let mut out = String::from(MENU_DOCTYPE);
    out.push_str("<Menu>\n");
    out.push_str(&format!("{INDENT}<Name>Applications</Name>\n"));
    push_menu(&mut out, 1, categories);
    out.push_str("</Menu>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: &[&str] = &["Wine", "Wine-Programs", "Wine-Programs-Accessories"];

    #[test]
    fn test_directory_file_names() {
        assert_eq!(directory_file_name("Wine"), "wine-wine.directory");
        assert_eq!(directory_file_name("Wine-Programs"), "wine-programs.directory");
        assert_eq!(
            directory_file_name("Wine-Programs-Accessories"),
            "wine-programs-accessories.directory"
        );
    }

    #[test]
    fn test_directory_descriptors() {
        let root = directory_descriptor("Wine");
        assert_eq!(root.name, "Wine");
        assert_eq!(root.icon.as_deref(), Some("wine"));
        assert_eq!(root.entry_type, EntryType::Directory);

        let accessories = directory_descriptor("Wine-Programs-Accessories");
        assert_eq!(accessories.name, "Accessories");
        assert_eq!(accessories.icon.as_deref(), Some("folder"));
    }

    #[test]
    fn test_menu_file_name() {
        assert_eq!(menu_file_name(CATEGORIES), "wine-wine.menu");
    }

    #[test]
    fn test_render_menu() {
        let menu = render_menu(CATEGORIES);
        let expected = r#"<!DOCTYPE Menu PUBLIC "-//freedesktop//DTD Menu 1.0//EN"
 "http://www.freedesktop.org/standards/menu-spec/menu-1.0.dtd">
<Menu>
  <Name>Applications</Name>
  <Menu>
    <Name>Wine</Name>
    <Directory>wine-wine.directory</Directory>
    <Include>
      <Category>Wine</Category>
    </Include>
    <Menu>
      <Name>Wine-Programs</Name>
      <Directory>wine-programs.directory</Directory>
      <Include>
        <Category>Wine-Programs</Category>
      </Include>
      <Menu>
        <Name>Wine-Programs-Accessories</Name>
        <Directory>wine-programs-accessories.directory</Directory>
        <Include>
          <Category>Wine-Programs-Accessories</Category>
        </Include>
      </Menu>
    </Menu>
  </Menu>
</Menu>
"#;
        assert_eq!(menu, expected);
    }
}
