use std::fmt;

/// A section/key-value document in the panel's INI-style format.
///
/// Sections and keys keep their file order so a load → save cycle passes
/// unrelated content through unmodified. The parser is deliberately tolerant:
/// lines it cannot make sense of are skipped, since the editor must stay
/// usable on a malformed or partially-written panel config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn retain<F: FnMut(&str) -> bool>(&mut self, mut keep: F) {
        self.entries.retain(|(k, _)| keep(k));
    }
}

impl ConfigDocument {
    /// Parses document text. Keys outside any section, comment lines and
    /// lines without a `=` are dropped. No `%`-style interpolation happens.
    pub fn parse(content: &str) -> Self {
        let mut document = ConfigDocument::default();
        let mut current: Option<usize> = None;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current = Some(document.position_or_insert(name.trim()));
                continue;
            }
            if let (Some(index), Some((key, value))) = (current, line.split_once('=')) {
                let key = key.trim();
                if !key.is_empty() {
                    document.sections[index].set(key, value.trim());
                }
            }
        }
        document
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> + '_ {
        self.sections.iter()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        let index = self.position_or_insert(name);
        &mut self.sections[index]
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    fn position_or_insert(&mut self, name: &str) -> usize {
        match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        }
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "[{}]", section.name())?;
            for (key, value) in section.entries() {
                writeln!(f, "{} = {}", key, value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[panel]
launcher_000001 = firefox.desktop
launcher_000002 = lxterminal.desktop
autohide = true

[notify]
timeout = 5000
";

    #[test]
    fn parses_sections_and_entries() {
        let document = ConfigDocument::parse(SAMPLE);
        assert_eq!(
            document.get("panel", "launcher_000001"),
            Some("firefox.desktop")
        );
        assert_eq!(document.get("notify", "timeout"), Some("5000"));
        assert_eq!(document.get("panel", "missing"), None);
        assert_eq!(document.get("missing", "timeout"), None);
    }

    #[test]
    fn skips_malformed_lines() {
        let document = ConfigDocument::parse(
            "stray = before any section\n\
             [panel]\n\
             # a comment\n\
             ; another comment\n\
             not a key value line\n\
             = empty key\n\
             autohide = true\n",
        );
        let panel = document.section("panel").unwrap();
        assert_eq!(panel.entries().count(), 1);
        assert_eq!(panel.get("autohide"), Some("true"));
    }

    #[test]
    fn values_may_contain_equals_signs() {
        let document = ConfigDocument::parse("[panel]\ncommand = foo --flag=bar\n");
        assert_eq!(document.get("panel", "command"), Some("foo --flag=bar"));
    }

    #[test]
    fn repeated_keys_keep_the_last_value() {
        let document = ConfigDocument::parse("[panel]\nkey = one\nkey = two\n");
        assert_eq!(document.get("panel", "key"), Some("two"));
    }

    #[test]
    fn duplicate_section_headers_merge() {
        let document = ConfigDocument::parse("[panel]\na = 1\n[other]\nx = y\n[panel]\nb = 2\n");
        assert_eq!(document.sections().count(), 2);
        assert_eq!(document.get("panel", "a"), Some("1"));
        assert_eq!(document.get("panel", "b"), Some("2"));
    }

    #[test]
    fn render_then_reparse_is_identity() {
        let document = ConfigDocument::parse(SAMPLE);
        let reparsed = ConfigDocument::parse(&document.to_string());
        assert_eq!(document, reparsed);
    }

    #[test]
    fn unrelated_sections_pass_through() {
        let document = ConfigDocument::parse(SAMPLE);
        let rendered = document.to_string();
        assert!(rendered.contains("[notify]"));
        assert!(rendered.contains("timeout = 5000"));
        assert!(rendered.contains("autohide = true"));
    }
}
