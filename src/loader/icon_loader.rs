use std::path::Path;

use gdk_pixbuf::{InterpType, Pixbuf};
use gio::prelude::FileExt;
use gtk4::{gdk::Display, IconLookupFlags, IconTheme, TextDirection};

use super::Loader;
use crate::utils::config::{ConfigGuard, OtherDefaults};

impl Loader {
    /// Resolves a launcher's icon end to end: descriptor → identifier →
    /// pixbuf.
    pub fn launcher_icon(desktop_file: &str) -> Option<Pixbuf> {
        let identifier = Self::icon_identifier(desktop_file);
        Self::resolve_icon(identifier.as_deref())
    }

    /// Resolves an icon identifier to a pixbuf of exactly the configured
    /// size. Attempts, first success wins:
    ///
    /// 1. themed icon of that name,
    /// 2. the identifier as an image file path,
    /// 3. the stock executable fallback icon.
    ///
    /// Every miss falls through; `None` means even the fallback theme icon
    /// is unavailable and the caller renders a blank cell.
    pub fn resolve_icon(identifier: Option<&str>) -> Option<Pixbuf> {
        let size = icon_size();
        identifier
            .and_then(|name| themed_pixbuf(name, size).or_else(|| file_pixbuf(name, size)))
            .or_else(|| themed_pixbuf(&OtherDefaults::fallback_icon(), size))
            .map(|pixbuf| force_size(pixbuf, size))
    }
}

fn icon_size() -> i32 {
    ConfigGuard::read()
        .map(|config| config.appearance.icon_size)
        .unwrap_or_else(|_| OtherDefaults::icon_size())
}

/// Looks `name` up in the display's icon theme and decodes the backing file.
fn themed_pixbuf(name: &str, size: i32) -> Option<Pixbuf> {
    let display = Display::default()?;
    let theme = IconTheme::for_display(&display);
    if !theme.has_icon(name) {
        return None;
    }
    let paintable = theme.lookup_icon(
        name,
        &[],
        size,
        1,
        TextDirection::None,
        IconLookupFlags::empty(),
    );
    let path = paintable.file()?.path()?;
    Pixbuf::from_file_at_size(path, size, size).ok()
}

fn file_pixbuf(identifier: &str, size: i32) -> Option<Pixbuf> {
    let path = Path::new(identifier);
    if !path.exists() {
        return None;
    }
    Pixbuf::from_file_at_size(path, size, size).ok()
}

/// Decoders keep the aspect ratio, so even a successful load can come back
/// at e.g. 24×17. The list renders fixed square cells.
fn force_size(pixbuf: Pixbuf, size: i32) -> Pixbuf {
    if pixbuf.width() == size && pixbuf.height() == size {
        return pixbuf;
    }
    pixbuf
        .scale_simple(size, size, InterpType::Bilinear)
        .unwrap_or(pixbuf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdk_pixbuf::Colorspace;

    fn blank(width: i32, height: i32) -> Pixbuf {
        Pixbuf::new(Colorspace::Rgb, true, 8, width, height).unwrap()
    }

    #[test]
    fn oversized_pixbufs_are_scaled_down() {
        let scaled = force_size(blank(48, 48), 24);
        assert_eq!((scaled.width(), scaled.height()), (24, 24));
    }

    #[test]
    fn non_square_pixbufs_are_squared() {
        let scaled = force_size(blank(24, 17), 24);
        assert_eq!((scaled.width(), scaled.height()), (24, 24));
    }

    #[test]
    fn exact_size_is_untouched() {
        let pixbuf = blank(24, 24);
        let scaled = force_size(pixbuf.clone(), 24);
        assert_eq!(scaled, pixbuf);
    }

    #[test]
    fn nonexistent_file_path_misses() {
        assert!(file_pixbuf("/nonexistent/icon.png", 24).is_none());
    }
}
