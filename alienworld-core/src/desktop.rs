/// Where the desktop will go. Static.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DesktopPlaceholder;

impl DesktopPlaceholder {
    pub const CAPTION: &'static str = "desktop is still in development";

    pub fn caption(&self) -> &'static str {
        Self::CAPTION
    }
}
