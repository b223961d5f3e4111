//! Archive scanner: one forward pass that turns an archive into page
//! metadata.
//!
//! For every regular-file entry whose extension is in the registry, the
//! scanner streams data blocks into a [`DimensionProbe`] and stops feeding
//! the moment dimensions are known; image headers sit in the first blocks,
//! so large pages cost almost nothing at scan time. Entries that never
//! resolve to positive dimensions are discarded silently: one malformed
//! image must not block access to the archive's valid pages. A stream-level
//! container error, by contrast, aborts the whole scan: partial documents
//! are not offered.

use std::path::Path;

use crate::collate::PathComparator;
use crate::container::{self, BlockFlow, Disposition, EntryKind, EntryVisitor, WalkFlow};
use crate::extensions::{ExtensionRegistry, entry_extension};
use crate::page::PageMeta;
use crate::probe::{DimensionProbe, ProbeStatus};
use crate::Result;

/// Scans the archive at `path` and returns its pages, sorted by `comparator`.
pub(crate) fn scan(
    path: &Path,
    registry: &ExtensionRegistry,
    comparator: &PathComparator,
) -> Result<Vec<PageMeta>> {
    let mut visitor = ScanVisitor {
        registry,
        current: None,
        pages: Vec::new(),
    };
    container::walk(path, &mut visitor)?;

    let mut pages = visitor.pages;
    pages.sort_by(|a, b| comparator.compare(a.entry_path(), b.entry_path()));

    log::debug!("scanned '{}': {} pages", path.display(), pages.len());
    Ok(pages)
}

struct ScanVisitor<'a> {
    registry: &'a ExtensionRegistry,
    /// Path and probe of the entry currently being streamed.
    current: Option<(String, DimensionProbe)>,
    pages: Vec<PageMeta>,
}

impl EntryVisitor for ScanVisitor<'_> {
    fn begin_entry(&mut self, path: &str, kind: EntryKind) -> Result<Disposition> {
        if kind != EntryKind::File {
            return Ok(Disposition::Skip);
        }
        let recognized = entry_extension(path).is_some_and(|ext| self.registry.contains(ext));
        if !recognized {
            return Ok(Disposition::Skip);
        }

        self.current = Some((path.to_string(), DimensionProbe::new()));
        Ok(Disposition::Stream)
    }

    fn data_block(&mut self, block: &[u8]) -> Result<BlockFlow> {
        let Some((_, probe)) = self.current.as_mut() else {
            return Ok(BlockFlow::StopEntry);
        };
        match probe.feed(block) {
            ProbeStatus::NeedMore => Ok(BlockFlow::Continue),
            // Known or hopeless: either way the pixel payload is not needed.
            ProbeStatus::Known { .. } | ProbeStatus::Failed => Ok(BlockFlow::StopEntry),
        }
    }

    fn end_entry(&mut self) -> Result<WalkFlow> {
        if let Some((path, probe)) = self.current.take() {
            match probe.finish() {
                Some((width, height)) => {
                    self.pages.push(PageMeta::new(path, width, height));
                }
                None => {
                    // Not an error: recognized extension, unusable content.
                    log::debug!("discarding '{path}': no image dimensions");
                }
            }
        }
        Ok(WalkFlow::Continue)
    }
}
