use std::path::{Path, PathBuf};

/// The two images the boot screen shows. The core only knows their names
/// and the size they are drawn at; it never reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    BootLogo,
    SecondaryLogo,
}

impl Asset {
    pub fn all() -> &'static [Asset] {
        &[Asset::BootLogo, Asset::SecondaryLogo]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Asset::BootLogo => "boot logo",
            Asset::SecondaryLogo => "secondary logo",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Asset::BootLogo => "windows-boot-logo.png",
            Asset::SecondaryLogo => "microsoft-logo.png",
        }
    }

    /// Drawn size in logical pixels (width, height).
    pub fn size(&self) -> (f32, f32) {
        match self {
            Asset::BootLogo => (400.0, 200.0),
            Asset::SecondaryLogo => (60.0, 20.0),
        }
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}
