use gio::prelude::*;
use gtk4::prelude::{GtkWindowExt, WidgetExt};
use gtk4::Application;
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::process;
use std::sync::RwLock;

mod application;
mod g_subclasses;
mod loader;
mod panel;
pub mod prelude;
mod ui;
mod utils;

use application::lock::LockFile;
use utils::config::DocketConfig;

const LOCK_FILE: &str = "docket.lock";

static CONFIG: OnceCell<RwLock<DocketConfig>> = OnceCell::new();

fn main() {
    let lock = LockFile::single_instance(LOCK_FILE).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    // A broken user config still starts the editor on defaults
    let app_config = DocketConfig::load().unwrap_or_else(|e| {
        eprintln!("{}", e);
        DocketConfig::default()
    });
    let _ = CONFIG.set(RwLock::new(app_config));

    let application = Application::builder()
        .flags(gio::ApplicationFlags::NON_UNIQUE)
        .build();
    application.connect_activate(|app| {
        let window = ui::window::window(app);
        window.connect_show(|_| check_icon_parsers());
        window.present();
    });
    application.run();
    drop(lock);
}

/// Print messages if icon parsers aren't installed
fn check_icon_parsers() {
    let available: HashSet<String> = gdk_pixbuf::Pixbuf::formats()
        .into_iter()
        .filter_map(|f| f.name())
        .map(|s| s.to_string())
        .collect();
    let required = vec![("svg", "librsvg"), ("png", "gdk-pixbuf2")];

    required
        .into_iter()
        .filter(|(t, _)| !available.contains(*t))
        .for_each(|(t, d)| {
            eprintln!(
                "Icon parser for {} not found.\n\
                This could hinder docket from rendering .{} icons.\n\
            Please ensure that \"{}\" is installed correctly.",
                t, t, d
            );
        });
}
