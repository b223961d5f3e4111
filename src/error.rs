//! Error types for comic book archive operations.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes when opening and rendering comic book archives, along with
//! a convenient [`Result<T>`] type alias.
//!
//! # Error Scope
//!
//! Errors fall into two scopes:
//!
//! | Scope | Variants | Effect |
//! |-------|----------|--------|
//! | Open | [`Io`][Error::Io], [`UnsupportedFormat`][Error::UnsupportedFormat], [`Corrupt`][Error::Corrupt], [`Collation`][Error::Collation] | Document construction aborts entirely |
//! | Render | [`Decode`][Error::Decode], [`EntryNotFound`][Error::EntryNotFound], [`PageOutOfRange`][Error::PageOutOfRange] | Only the single render call fails |
//!
//! A failed render never invalidates the document: other pages remain
//! renderable. Entries that merely fail to probe as images during a scan are
//! not errors at all; they are silently excluded from the page list.
//!
//! ```rust,no_run
//! use comicbox::{Document, Error, ExtensionRegistry};
//!
//! fn open(path: &str) -> comicbox::Result<Document> {
//!     let registry = ExtensionRegistry::from_codec_catalog();
//!     match Document::open(path, &registry) {
//!         Ok(doc) => Ok(doc),
//!         Err(Error::UnsupportedFormat(msg)) => {
//!             eprintln!("not a recognized archive: {msg}");
//!             Err(Error::UnsupportedFormat(msg))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

use std::io;

/// The main error type for comic book archive operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred during file operations.
    ///
    /// This wraps [`std::io::Error`] and is returned when the archive file
    /// cannot be read at all (missing file, permission denied, and so on).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a recognized archive container.
    ///
    /// Container detection is signature-based; this error means none of the
    /// supported container or compression-wrapper signatures matched, or the
    /// matching format was disabled at build time via feature flags.
    #[error("unsupported archive format: {0}")]
    UnsupportedFormat(String),

    /// A stream-level read error occurred while walking the archive.
    ///
    /// This is more severe than a recoverable warning: the container itself
    /// could not be read past this point. During a scan it aborts the whole
    /// document open, and a partial page list is never surfaced. During a fetch
    /// it fails that render call.
    #[error("corrupt archive: {0}")]
    Corrupt(String),

    /// An entry's content did not decode as a valid image during rendering.
    ///
    /// Fatal to the single render call only; the page index and all other
    /// pages remain usable.
    #[error("cannot decode image '{path}': {reason}")]
    Decode {
        /// The archive-internal path of the entry that failed to decode.
        path: String,
        /// A description of the decoder failure.
        reason: String,
    },

    /// No archive entry matched the requested path during a fetch.
    ///
    /// This can happen when the archive changed on disk between open and
    /// render. Fatal to the single render call only.
    #[error("entry not found in archive: {0}")]
    EntryNotFound(String),

    /// A page index outside `[0, page_count)` was requested.
    #[error("page index {index} out of range (document has {count} pages)")]
    PageOutOfRange {
        /// The requested page index.
        index: usize,
        /// The number of pages in the document.
        count: usize,
    },

    /// The locale-aware path collator could not be constructed.
    ///
    /// Collation data lookup is fallible in the underlying ICU4X crate; this
    /// should not occur with compiled-in collation data.
    #[error("collator unavailable: {0}")]
    Collation(String),
}

impl Error {
    /// Creates an [`Error::UnsupportedFormat`] from anything displayable.
    pub(crate) fn unsupported(reason: impl std::fmt::Display) -> Self {
        Error::UnsupportedFormat(reason.to_string())
    }

    /// Creates an [`Error::Corrupt`] from anything displayable.
    pub(crate) fn corrupt(reason: impl std::fmt::Display) -> Self {
        Error::Corrupt(reason.to_string())
    }

    /// Returns true if this error is fatal to document construction
    /// (as opposed to a single render call).
    pub fn is_open_error(&self) -> bool {
        matches!(
            self,
            Error::Io(_) | Error::UnsupportedFormat(_) | Error::Corrupt(_) | Error::Collation(_)
        )
    }
}

/// A specialized `Result` type for comic book archive operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = Error::PageOutOfRange { index: 7, count: 3 };
        assert_eq!(
            e.to_string(),
            "page index 7 out of range (document has 3 pages)"
        );

        let e = Error::Decode {
            path: "pages/001.png".into(),
            reason: "bad signature".into(),
        };
        assert!(e.to_string().contains("pages/001.png"));
        assert!(e.to_string().contains("bad signature"));

        let e = Error::EntryNotFound("gone.jpg".into());
        assert!(e.to_string().contains("gone.jpg"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(e.is_open_error());
    }

    #[test]
    fn test_render_errors_are_not_open_errors() {
        let e = Error::EntryNotFound("x".into());
        assert!(!e.is_open_error());
        let e = Error::PageOutOfRange { index: 0, count: 0 };
        assert!(!e.is_open_error());
    }
}
