use std::path::{Path, PathBuf};

use gtk4::{prelude::*, AlertDialog, FileDialog, FileFilter, Window};

use crate::utils::config::ConfigGuard;
use crate::utils::errors::DocketError;

/// Opens the modal descriptor picker, rooted at the applications directory
/// and filtered to `*.desktop`. `on_accept` runs only for an accepted file;
/// cancellation changes nothing.
pub fn pick_desktop_file<F>(parent: &impl IsA<Window>, on_accept: F)
where
    F: Fn(PathBuf) + 'static,
{
    let filter = FileFilter::new();
    filter.set_name(Some("Desktop files"));
    filter.add_pattern("*.desktop");

    let filters = gio::ListStore::new::<FileFilter>();
    filters.append(&filter);

    let dialog = FileDialog::builder()
        .title("Select Desktop File")
        .modal(true)
        .build();
    dialog.set_filters(Some(&filters));
    dialog.set_default_filter(Some(&filter));
    if let Ok(config) = ConfigGuard::read() {
        dialog.set_initial_folder(Some(&gio::File::for_path(
            &config.files.applications_dir,
        )));
    }

    dialog.open(Some(parent), gio::Cancellable::NONE, move |result| {
        if let Ok(file) = result {
            if let Some(path) = file.path() {
                on_accept(path);
            }
        }
    });
}

pub fn confirm_save(parent: &impl IsA<Window>, path: &Path) {
    let dialog = AlertDialog::builder()
        .message("Configuration Saved")
        .detail(format!("Settings saved to {}", path.display()))
        .modal(true)
        .build();
    dialog.show(Some(parent));
}

/// Same shape as the confirmation dialog, carrying the write error instead.
pub fn report_save_failure(parent: &impl IsA<Window>, error: &DocketError) {
    let dialog = AlertDialog::builder()
        .message("Save Failed")
        .detail(error.to_string())
        .modal(true)
        .build();
    dialog.show(Some(parent));
}
