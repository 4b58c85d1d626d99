use gdk_pixbuf::Pixbuf;
use gtk4::{prelude::WidgetExt, Image};

/// Apply a resolved launcher icon, or clear the cell when there is none
pub trait IconComp {
    fn set_launcher_icon(&self, icon: Option<&Pixbuf>);
}

impl IconComp for Image {
    fn set_launcher_icon(&self, icon: Option<&Pixbuf>) {
        match icon {
            Some(pixbuf) => {
                self.set_from_pixbuf(Some(pixbuf));
                self.set_visible(true);
            }
            // Keep the cell's footprint so names stay aligned
            None => {
                self.clear();
                self.set_visible(true);
            }
        }
    }
}
