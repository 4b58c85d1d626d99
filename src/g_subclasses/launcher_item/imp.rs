use std::cell::RefCell;

use gdk_pixbuf::Pixbuf;
use gtk4::glib;
use gtk4::subclass::prelude::*;

/// ## Fields:
#[derive(Default)]
pub struct LauncherItem {
    /// Basename of the application descriptor, e.g. `firefox.desktop`
    pub desktop_file: RefCell<String>,

    /// Resolved icon; `None` renders as a blank cell
    pub icon: RefCell<Option<Pixbuf>>,
}

// The central trait for subclassing a GObject
#[glib::object_subclass]
impl ObjectSubclass for LauncherItem {
    const NAME: &'static str = "LauncherObject";
    type Type = super::LauncherItem;
    type ParentType = glib::Object;
}

// Trait shared by all GObjects
impl ObjectImpl for LauncherItem {
    fn constructed(&self) {
        self.parent_constructed();
    }
}
