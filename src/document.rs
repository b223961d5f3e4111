//! The host-facing document: an archive presented as ordered pages.
//!
//! This is the narrow adapter the host embeds: a plain synchronous API with
//! no dependency on any host object model. Opening scans the archive once
//! and fixes the page order; rendering re-opens the archive per call.
//! Dropping the document releases all retained metadata; there is no
//! separate close step, and the source archive file is never modified.

use std::path::{Path, PathBuf};

use crate::bitmap::{RenderedBitmap, Surface};
use crate::collate::PathComparator;
use crate::extensions::ExtensionRegistry;
use crate::page::PageIndex;
use crate::{fetch, scan, Result};

/// An open comic book document.
///
/// All state is read-only after construction, so a `Document` can be shared
/// across threads; concurrent renders each open their own archive handle.
#[derive(Debug)]
pub struct Document {
    archive_path: PathBuf,
    comparator: PathComparator,
    pages: PageIndex,
}

impl Document {
    /// Opens the archive at `path`: detects the container format, scans
    /// every entry, and builds the page index.
    ///
    /// Entries count as pages when their extension is in `registry` and
    /// their content yields positive pixel dimensions; everything else is
    /// excluded silently. An archive with no usable pages opens fine with a
    /// page count of zero.
    ///
    /// # Errors
    ///
    /// Open-time errors ([`Error::Io`], [`Error::UnsupportedFormat`],
    /// [`Error::Corrupt`], [`Error::Collation`]) abort construction
    /// entirely; a partially-populated document is never returned.
    ///
    /// [`Error::Io`]: crate::Error::Io
    /// [`Error::UnsupportedFormat`]: crate::Error::UnsupportedFormat
    /// [`Error::Corrupt`]: crate::Error::Corrupt
    /// [`Error::Collation`]: crate::Error::Collation
    pub fn open(path: impl AsRef<Path>, registry: &ExtensionRegistry) -> Result<Self> {
        let archive_path = path.as_ref().to_path_buf();
        let comparator = PathComparator::new()?;

        let pages = scan::scan(&archive_path, registry, &comparator)?;
        if pages.is_empty() {
            log::warn!("'{}' contains no usable pages", archive_path.display());
        }

        Ok(Self {
            archive_path,
            comparator,
            pages: PageIndex::new(pages),
        })
    }

    /// Returns the number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the intrinsic pixel dimensions of the page at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PageOutOfRange`] for an index outside
    /// `[0, page_count())`.
    ///
    /// [`Error::PageOutOfRange`]: crate::Error::PageOutOfRange
    pub fn page_dimensions(&self, index: usize) -> Result<(u32, u32)> {
        Ok(self.pages.get(index)?.dimensions())
    }

    /// Renders the page at `index` into a fresh bitmap.
    ///
    /// The archive is re-opened, scanned forward to the entry that
    /// contributed this index at open time, and the entry's content is
    /// fully decoded. Nothing is cached: rendering the same page twice
    /// decodes twice.
    ///
    /// # Errors
    ///
    /// Render-time errors are scoped to this call; the document and its
    /// other pages remain usable. [`Error::PageOutOfRange`] for a bad
    /// index, [`Error::EntryNotFound`] if the archive no longer contains
    /// the entry (changed on disk), [`Error::Corrupt`] for stream-level
    /// read failures, [`Error::Decode`] if the content does not decode as
    /// an image.
    ///
    /// [`Error::PageOutOfRange`]: crate::Error::PageOutOfRange
    /// [`Error::EntryNotFound`]: crate::Error::EntryNotFound
    /// [`Error::Corrupt`]: crate::Error::Corrupt
    /// [`Error::Decode`]: crate::Error::Decode
    pub fn render_page(&self, index: usize) -> Result<RenderedBitmap> {
        let page = self.pages.get(index)?;
        let data = fetch::fetch(&self.archive_path, page.entry_path(), &self.comparator)?;
        RenderedBitmap::decode(page.entry_path(), &data)
    }

    /// Renders the page at `index` and paints it onto `surface` at origin
    /// (0, 0), replacing existing content.
    ///
    /// # Errors
    ///
    /// Same as [`render_page`](Self::render_page).
    pub fn render_page_into(&self, index: usize, surface: &mut Surface) -> Result<()> {
        let bitmap = self.render_page(index)?;
        surface.paint(&bitmap);
        Ok(())
    }

    /// The page index backing this document.
    pub fn pages(&self) -> &PageIndex {
        &self.pages
    }

    /// The filesystem path this document was opened from.
    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }
}
