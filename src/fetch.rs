//! Entry fetcher: re-opens the archive and retrieves one entry's bytes.
//!
//! No handle state is retained between renders, so each fetch re-opens the
//! archive (with the same signature auto-detection as the scanner) and
//! walks forward until the comparator reports an exact match. A forward
//! scan per fetch is the simplest algorithm every supported container
//! shares (the streaming-compressed ones offer no uniform random access),
//! and renders are rare next to scans, typically hitting nearby pages.

use std::path::Path;

use crate::collate::PathComparator;
use crate::container::{self, BlockFlow, Disposition, EntryKind, EntryVisitor, WalkFlow};
use crate::{Error, Result};

/// Reads the full content of the entry matching `entry_path`.
///
/// The match uses the same case-insensitive collation as page ordering.
/// Blocks are copied into one growable buffer in arrival order before the
/// container reuses its read buffer.
pub(crate) fn fetch(
    path: &Path,
    entry_path: &str,
    comparator: &PathComparator,
) -> Result<Vec<u8>> {
    let mut visitor = FetchVisitor {
        comparator,
        target: entry_path,
        data: Vec::new(),
        found: false,
    };
    container::walk(path, &mut visitor)?;

    if visitor.found {
        Ok(visitor.data)
    } else {
        Err(Error::EntryNotFound(entry_path.to_string()))
    }
}

struct FetchVisitor<'a> {
    comparator: &'a PathComparator,
    target: &'a str,
    data: Vec<u8>,
    found: bool,
}

impl EntryVisitor for FetchVisitor<'_> {
    fn begin_entry(&mut self, path: &str, kind: EntryKind) -> Result<Disposition> {
        if kind != EntryKind::File || !self.comparator.matches(path, self.target) {
            return Ok(Disposition::Skip);
        }
        self.found = true;
        Ok(Disposition::Stream)
    }

    fn data_block(&mut self, block: &[u8]) -> Result<BlockFlow> {
        self.data.extend_from_slice(block);
        Ok(BlockFlow::Continue)
    }

    fn end_entry(&mut self) -> Result<WalkFlow> {
        // First exact match wins; no point walking the rest of the archive.
        Ok(WalkFlow::Stop)
    }
}
