mod imp;

use gdk_pixbuf::Pixbuf;
use gtk4::glib;
use gtk4::subclass::prelude::ObjectSubclassIsExt;

glib::wrapper! {
    pub struct LauncherItem(ObjectSubclass<imp::LauncherItem>);
}

/// One row of the launcher list: a descriptor filename plus the icon
/// resolved for it. Icons live only on the row; saving persists names.
impl LauncherItem {
    pub fn new(desktop_file: &str, icon: Option<Pixbuf>) -> Self {
        let obj = glib::Object::new::<Self>();
        let imp = obj.imp();
        *imp.desktop_file.borrow_mut() = desktop_file.to_string();
        *imp.icon.borrow_mut() = icon;
        obj
    }

    pub fn desktop_file(&self) -> String {
        self.imp().desktop_file.borrow().clone()
    }

    pub fn icon(&self) -> Option<Pixbuf> {
        self.imp().icon.borrow().clone()
    }
}
