use std::path::{Path, PathBuf};

/// Icon set directory, relative to the project root.
pub const ICONSET_DIR: &str = "Ascend/Assets.xcassets/AppIcon.appiconset";

/// Name of the vector logo inside the icon set directory.
pub const SOURCE_FILENAME: &str = "logo.svg";

/// The directory holding the app icon set and its vector source.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct IconSetDir(PathBuf);

impl IconSetDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        IconSetDir(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn source_svg(&self) -> PathBuf {
        self.0.join(SOURCE_FILENAME)
    }

    pub fn icon(&self, filename: &str) -> PathBuf {
        self.0.join(filename)
    }
}

impl Default for IconSetDir {
    fn default() -> Self {
        IconSetDir(PathBuf::from(ICONSET_DIR))
    }
}

impl From<Option<PathBuf>> for IconSetDir {
    fn from(path: Option<PathBuf>) -> Self {
        path.map(IconSetDir).unwrap_or_default()
    }
}

impl std::fmt::Display for IconSetDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
