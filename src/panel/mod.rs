use std::fs;
use std::path::{Path, PathBuf};

use crate::docket_error;
use crate::utils::errors::{DocketError, DocketErrorType};

pub mod document;

use document::ConfigDocument;

pub const PANEL_SECTION: &str = "panel";
const LAUNCHER_PREFIX: &str = "launcher_";

/// The panel's configuration file, with the launcher-list invariants behind
/// one boundary. The `launcher_NNNNNN` keys of the `panel` section define the
/// ordered launcher list; everything else is opaque pass-through.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    path: PathBuf,
    document: ConfigDocument,
}

impl PanelConfig {
    /// Reads the config at `path`. A missing or unreadable file yields an
    /// empty document; the editor starts with no launchers rather than
    /// failing.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let document = fs::read_to_string(&path)
            .map(|content| ConfigDocument::parse(&content))
            .unwrap_or_default();
        Self { path, document }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The launcher list, ordered by key. The writer zero-pads key suffixes
    /// to a fixed width, so a plain lexicographic sort is the file order.
    pub fn ordered_launchers(&self) -> Vec<String> {
        let Some(section) = self.document.section(PANEL_SECTION) else {
            return Vec::new();
        };
        let mut keyed: Vec<(&str, &str)> = section
            .entries()
            .filter(|(key, _)| key.starts_with(LAUNCHER_PREFIX))
            .collect();
        keyed.sort_by_key(|(key, _)| *key);
        keyed.into_iter().map(|(_, value)| value.to_string()).collect()
    }

    /// Replaces the launcher list with `names`, renumbering from
    /// `launcher_000001` upwards in the given order.
    pub fn replace_launchers(&mut self, names: &[String]) {
        let section = self.document.section_mut(PANEL_SECTION);
        section.retain(|key| !key.starts_with(LAUNCHER_PREFIX));
        for (index, name) in names.iter().enumerate() {
            section.set(&format!("{}{:06}", LAUNCHER_PREFIX, index + 1), name);
        }
    }

    /// Writes the whole document back, overwriting the file. Unlike loading,
    /// a failure here must reach the user.
    pub fn save(&self) -> Result<(), DocketError> {
        fs::write(&self.path, self.document.to_string()).map_err(|e| {
            docket_error!(
                DocketErrorType::FileWriteError(self.path.clone()),
                e.to_string()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_file_yields_no_launchers() {
        let config = PanelConfig::load("/nonexistent/wf-panel-pi.ini");
        assert!(config.ordered_launchers().is_empty());
    }

    #[test]
    fn replace_then_list_roundtrips_any_order() {
        let mut config = PanelConfig::load("/nonexistent/wf-panel-pi.ini");
        let launchers = names(&["c.desktop", "a.desktop", "b.desktop"]);
        config.replace_launchers(&launchers);
        assert_eq!(config.ordered_launchers(), launchers);
    }

    #[test]
    fn replace_numbers_keys_contiguously() {
        let mut config = PanelConfig::load("/nonexistent/wf-panel-pi.ini");
        config.replace_launchers(&names(&["a.desktop", "b.desktop", "c.desktop"]));
        let section = config.document.section(PANEL_SECTION).unwrap();
        let keys: Vec<&str> = section
            .entries()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with(LAUNCHER_PREFIX))
            .collect();
        assert_eq!(
            keys,
            vec!["launcher_000001", "launcher_000002", "launcher_000003"]
        );
    }

    #[test]
    fn replace_discards_stale_launcher_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wf-panel-pi.ini");
        std::fs::write(
            &path,
            "[panel]\n\
             launcher_000001 = a.desktop\n\
             launcher_000002 = b.desktop\n\
             launcher_000003 = c.desktop\n",
        )
        .unwrap();

        let mut config = PanelConfig::load(&path);
        config.replace_launchers(&names(&["c.desktop"]));
        config.save().unwrap();

        let reloaded = PanelConfig::load(&path);
        assert_eq!(reloaded.ordered_launchers(), names(&["c.desktop"]));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("launcher_000002"));
    }

    #[test]
    fn load_save_load_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wf-panel-pi.ini");
        std::fs::write(
            &path,
            "[panel]\n\
             launcher_000001 = firefox.desktop\n\
             launcher_000002 = geany.desktop\n\
             autohide = true\n\
             [notify]\n\
             timeout = 5000\n",
        )
        .unwrap();

        let first = PanelConfig::load(&path);
        first.save().unwrap();
        let second = PanelConfig::load(&path);
        assert_eq!(first.ordered_launchers(), second.ordered_launchers());
        assert_eq!(second.document.get("notify", "timeout"), Some("5000"));
        assert_eq!(second.document.get("panel", "autohide"), Some("true"));
    }

    #[test]
    fn add_then_save_scenario() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wf-panel-pi.ini");

        let mut config = PanelConfig::load(&path);
        config.replace_launchers(&names(&["firefox.desktop"]));
        config.save().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[panel]"));
        assert!(content.contains("launcher_000001 = firefox.desktop"));
        assert!(!content.contains("launcher_000002"));
    }

    #[test]
    fn remove_first_scenario() {
        let mut config = PanelConfig::load("/nonexistent/wf-panel-pi.ini");
        config.replace_launchers(&names(&["a.desktop", "b.desktop"]));
        config.replace_launchers(&names(&["b.desktop"]));
        assert_eq!(config.ordered_launchers(), names(&["b.desktop"]));
        let section = config.document.section(PANEL_SECTION).unwrap();
        assert_eq!(section.get("launcher_000001"), Some("b.desktop"));
        assert_eq!(section.get("launcher_000002"), None);
    }

    #[test]
    fn reorder_scenario() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wf-panel-pi.ini");

        let mut config = PanelConfig::load(&path);
        config.replace_launchers(&names(&["a.desktop", "b.desktop"]));
        config.replace_launchers(&names(&["b.desktop", "a.desktop"]));
        config.save().unwrap();

        let reloaded = PanelConfig::load(&path);
        let section = reloaded.document.section(PANEL_SECTION).unwrap();
        assert_eq!(section.get("launcher_000001"), Some("b.desktop"));
        assert_eq!(section.get("launcher_000002"), Some("a.desktop"));
    }

    #[test]
    fn save_into_missing_directory_errors() {
        let mut config = PanelConfig::load("/nonexistent/dir/wf-panel-pi.ini");
        config.replace_launchers(&names(&["a.desktop"]));
        let err = config.save().unwrap_err();
        assert!(matches!(err.error, DocketErrorType::FileWriteError(_)));
    }
}
