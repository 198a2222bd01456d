//! Asset classification by file extension

use std::path::Path;

/// Static asset kinds that receive an integrity hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Stylesheet,
    Script,
}

impl AssetKind {
    /// Detect asset kind from a file extension (without the dot)
    ///
    /// Matching is case-sensitive: `CSS` and `Js` are not assets.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "css" => Some(Self::Stylesheet),
            "js" => Some(Self::Script),
            _ => None,
        }
    }

    /// Detect asset kind from a file name or path
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Get the file extension for this asset kind
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Stylesheet => "css",
            Self::Script => "js",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stylesheet => write!(f, "stylesheet"),
            Self::Script => write!(f, "script"),
        }
    }
}

/// Whether a file should be hashed
///
/// This is an allow-list: only `.css` and `.js` files qualify, everything
/// else (images, fonts, markup, extensionless files) is skipped.
#[must_use]
pub fn is_eligible(file_name: impl AsRef<Path>) -> bool {
    AssetKind::from_path(file_name.as_ref()).is_some()
}
