use std::fs;
use std::path::Path;

use super::Loader;
use crate::panel::document::ConfigDocument;
use crate::utils::config::ConfigGuard;

const DESKTOP_SECTION: &str = "Desktop Entry";
const ICON_KEY: &str = "Icon";

impl Loader {
    /// Extracts the declared icon identifier from a descriptor in the
    /// applications directory. Missing or unparseable descriptors yield
    /// `None`; nothing on this path is worth interrupting the user for.
    pub fn icon_identifier(desktop_file: &str) -> Option<String> {
        let config = ConfigGuard::read().ok()?;
        icon_identifier_in(&config.files.applications_dir, desktop_file)
    }
}

fn icon_identifier_in(applications_dir: &Path, desktop_file: &str) -> Option<String> {
    let content = fs::read_to_string(applications_dir.join(desktop_file)).ok()?;
    ConfigDocument::parse(&content)
        .get(DESKTOP_SECTION, ICON_KEY)
        .map(str::to_string)
}
