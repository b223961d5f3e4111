//! Image file-extension registry.
//!
//! The registry is the set of file-extension strings that count as image
//! pages during a scan. It is populated once, either from the image codec
//! catalog linked into this crate or from a host-supplied list, and is
//! read-only afterwards, so it can be shared freely across threads.
//!
//! Matching is an exact string comparison against the stored casing; no
//! normalization is applied. The codec catalog reports lowercase extensions,
//! so archives naming files `PAGE.PNG` are only picked up if the host adds
//! the uppercase spelling itself.

use std::collections::HashSet;

use image::ImageFormat;

/// The set of file extensions recognized as image pages.
#[derive(Debug, Clone, Default)]
pub struct ExtensionRegistry {
    extensions: HashSet<String>,
}

impl ExtensionRegistry {
    /// Builds the registry from the image codec catalog.
    ///
    /// Every format the linked `image` crate can read contributes all of its
    /// known extensions. This is queried once, typically at process or
    /// session start, and the result injected into [`Document::open`].
    ///
    /// [`Document::open`]: crate::Document::open
    pub fn from_codec_catalog() -> Self {
        let extensions = ImageFormat::all()
            .filter(|format| format.reading_enabled())
            .flat_map(|format| format.extensions_str())
            .map(|ext| ext.to_string())
            .collect();

        Self { extensions }
    }

    /// Builds a registry from an explicit list of extensions.
    ///
    /// Extensions are stored exactly as supplied (no case normalization) and
    /// matched exactly. Leading dots are not expected: pass `"png"`, not
    /// `".png"`.
    pub fn from_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `extension` is in the registry (exact match).
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }

    /// Returns the number of registered extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Returns true if no extensions are registered.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Iterates over the registered extensions (unspecified order).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

/// Extracts the extension of an archive entry path: the substring after the
/// last `.`. A path without a dot, or ending in a dot, has no extension.
pub(crate) fn entry_extension(path: &str) -> Option<&str> {
    match path.rfind('.') {
        Some(pos) if pos + 1 < path.len() => Some(&path[pos + 1..]),
        _ => None,
    }
}
