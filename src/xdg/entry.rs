//! `[Desktop Entry]` rendering with per-locale Name/Comment lines

use crate::config::SOURCE_LOCALE;
use crate::error::Result;
use crate::translation::Localize;

/// The `Type` key of a desktop entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Application,
    Directory,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Application => "Application",
            EntryType::Directory => "Directory",
        }
    }
}

/// Abstract description of one launcher or menu directory
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopEntryDescriptor {
    pub name: String,
    pub comment: Option<String>,
    pub entry_type: EntryType,
    pub exec: Option<String>,
    pub icon: Option<String>,
    pub terminal: Option<bool>,
    pub hidden: bool,
    pub no_display: bool,
    pub mime_types: Vec<String>,
    pub categories: Vec<String>,
    pub startup_wm_class: Option<String>,
}

impl DesktopEntryDescriptor {
    pub fn new(name: impl Into<String>, entry_type: EntryType) -> Self {
        Self {
            name: name.into(),
            comment: None,
            entry_type,
            exec: None,
            icon: None,
            terminal: None,
            hidden: false,
            no_display: false,
            mime_types: Vec::new(),
            categories: Vec::new(),
            startup_wm_class: None,
        }
    }

    pub fn application(name: impl Into<String>) -> Self {
        Self::new(name, EntryType::Application)
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn exec(mut self, exec: impl Into<String>) -> Self {
        self.exec = Some(exec.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn terminal(mut self, terminal: bool) -> Self {
        self.terminal = Some(terminal);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn no_display(mut self) -> Self {
        self.no_display = true;
        self
    }

    pub fn mime_types(mut self, mime_types: &[&str]) -> Self {
        self.mime_types = mime_types.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn categories(mut self, categories: &[&str]) -> Self {
        self.categories = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn startup_wm_class(mut self, class: impl Into<String>) -> Self {
        self.startup_wm_class = Some(class.into());
        self
    }

    /// Applications need an `Exec` line for launchers to run anything
    pub fn is_launchable(&self) -> bool {
        self.entry_type != EntryType::Application || self.exec.is_some()
    }
}

fn push_line(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push('=');
    out.push_str(value);
    out.push('\n');
}

/// `a;b;` list form used by MimeType and Categories
fn semicolon_list(values: &[String]) -> String {
    values.iter().map(|v| format!("{};", v)).collect()
}

fn push_localized(
    out: &mut String,
    key: &str,
    value: &str,
    locales: &[String],
    translator: &mut impl Localize,
) -> Result<()> {
    for locale in locales {
        if locale == SOURCE_LOCALE {
            push_line(out, key, value);
        } else {
            let translated = translator.localize(value, locale)?;
            push_line(out, &format!("{}[{}]", key, locale), &translated);
        }
    }
    Ok(())
}

/// Render a descriptor as a `[Desktop Entry]` block.
///
/// `Name` and `Comment` get one line per locale; every other key is written
/// once. Keys with no value are left out.
pub fn render(
    descriptor: &DesktopEntryDescriptor,
    locales: &[String],
    translator: &mut impl Localize,
) -> Result<String> {
    if !descriptor.is_launchable() {
        tracing::warn!("Application entry {:?} has no Exec line", descriptor.name);
    }

    let mut out = String::from("[Desktop Entry]\n");

    push_localized(&mut out, "Name", &descriptor.name, locales, translator)?;
    if let Some(comment) = &descriptor.comment {
        push_localized(&mut out, "Comment", comment, locales, translator)?;
    }

    if descriptor.entry_type == EntryType::Application {
        if let Some(exec) = &descriptor.exec {
            push_line(&mut out, "Exec", exec);
        }
        if let Some(terminal) = descriptor.terminal {
            push_line(&mut out, "Terminal", if terminal { "true" } else { "false" });
        }
    }
    push_line(&mut out, "Type", descriptor.entry_type.as_str());

    if let Some(icon) = &descriptor.icon {
        push_line(&mut out, "Icon", icon);
    }
    if !descriptor.mime_types.is_empty() {
        push_line(&mut out, "MimeType", &semicolon_list(&descriptor.mime_types));
    }
    if descriptor.hidden {
        push_line(&mut out, "Hidden", "true");
    }
    if descriptor.no_display {
        push_line(&mut out, "NoDisplay", "true");
    }
    if let Some(class) = &descriptor.startup_wm_class {
        push_line(&mut out, "StartupWMClass", class);
    }
    if !descriptor.categories.is_empty() {
        push_line(&mut out, "Categories", &semicolon_list(&descriptor.categories));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::error::AssetError;
    use crate::translation::tests::ScriptedBackend;
    use crate::translation::{LocaleTranslationCache, ProtectedTermTable, Translator};

    fn locales(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    fn translator(backend: ScriptedBackend) -> Translator<ScriptedBackend> {
        Translator::new(
            backend,
            LocaleTranslationCache::new(),
            ProtectedTermTable::with_defaults(),
            Vec::new(),
        )
    }

    fn notepad() -> DesktopEntryDescriptor {
        DesktopEntryDescriptor::application("Wine Notepad")
            .exec("notepad %f")
            .icon("wine-notepad")
            .terminal(false)
            .categories(&["Wine", "Wine-Programs-Accessories"])
    }

    #[test]
    fn test_render_notepad_two_locales() {
        let backend = ScriptedBackend::default().with(
            "002712425879 Notepad",
            "fr",
            "Bloc-notes 002712425879\n",
        );
        let mut t = translator(backend);
        let text = render(&notepad(), &locales(&["en", "fr"]), &mut t).unwrap();

        assert_eq!(
            text,
            "[Desktop Entry]\n\
             Name=Wine Notepad\n\
             Name[fr]=Bloc-notes Wine\n\
             Exec=notepad %f\n\
             Terminal=false\n\
             Type=Application\n\
             Icon=wine-notepad\n\
             Categories=Wine;Wine-Programs-Accessories;\n"
        );
        assert_eq!(text.lines().filter(|l| l.starts_with("Name")).count(), 2);
        assert_eq!(text.lines().filter(|l| l.starts_with("Exec=")).count(), 1);
    }

    #[test]
    fn test_file_locales_keep_plain_name() {
        let settings =
            Settings::from_toml(r#"locales = ["fr"]"#, std::path::Path::new("fr.toml")).unwrap();
        let backend = ScriptedBackend::default().with(
            "002712425879 Notepad",
            "fr",
            "Bloc-notes 002712425879\n",
        );
        let mut t = translator(backend);
        let text = render(&notepad(), &settings.locales, &mut t).unwrap();

        let names: Vec<_> = text.lines().filter(|l| l.starts_with("Name")).collect();
        assert_eq!(names, vec!["Name=Wine Notepad", "Name[fr]=Bloc-notes Wine"]);
    }

    #[test]
    fn test_render_optional_keys() {
        let entry = DesktopEntryDescriptor::application("Installer File")
            .exec("wine %f")
            .hidden()
            .no_display()
            .startup_wm_class("msiexec.exe")
            .mime_types(&["application/x-ole-storage", "text/mspg-legacyinfo"]);
        let mut t = translator(ScriptedBackend::default());
        let text = render(&entry, &locales(&["en"]), &mut t).unwrap();

        assert!(text.contains("MimeType=application/x-ole-storage;text/mspg-legacyinfo;\n"));
        assert!(text.contains("Hidden=true\n"));
        assert!(text.contains("NoDisplay=true\n"));
        assert!(text.contains("StartupWMClass=msiexec.exe\n"));
        assert!(!text.contains("Terminal"));
        assert!(!text.contains("Categories"));
        assert!(!text.contains("Comment"));
    }

    #[test]
    fn test_directory_skips_exec_and_terminal() {
        let mut entry = DesktopEntryDescriptor::new("Programs", EntryType::Directory).icon("folder");
        entry.exec = Some("ignored".to_string());
        entry.terminal = Some(true);
        let mut t = translator(ScriptedBackend::default());
        let text = render(&entry, &locales(&["en"]), &mut t).unwrap();
        assert_eq!(text, "[Desktop Entry]\nName=Programs\nType=Directory\nIcon=folder\n");
    }

    #[test]
    fn test_application_without_exec() {
        let entry = DesktopEntryDescriptor::application("Broken");
        assert!(!entry.is_launchable());
        let mut t = translator(ScriptedBackend::default());
        let text = render(&entry, &locales(&["en"]), &mut t).unwrap();
        assert!(!text.contains("Exec"));
        assert!(text.contains("Type=Application\n"));
    }

    #[test]
    fn test_translation_failure_propagates() {
        let mut t = translator(ScriptedBackend::default());
        let err = render(&notepad(), &locales(&["en", "de"]), &mut t).unwrap_err();
        assert!(matches!(err, AssetError::TranslationUnavailable { ref locale, .. } if locale == "de"));
    }
}
