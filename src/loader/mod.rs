pub mod desktop_loader;
pub mod icon_loader;

pub struct Loader;
