//! 7z (cb7) container backend.
//!
//! 7z folders may pack several entries into one solid stream, so entry data
//! is materialized per entry through the archive reader rather than streamed
//! in fixed blocks: a streamed entry produces a single data block.

use std::path::Path;

use sevenz_rust2::{Archive, Password, SevenZReader};

use super::{Disposition, EntryKind, EntryVisitor, WalkFlow};
use crate::{Error, Result};

pub(crate) fn walk(path: &Path, visitor: &mut dyn EntryVisitor) -> Result<()> {
    let archive = Archive::open(path).map_err(Error::unsupported)?;
    let mut reader =
        SevenZReader::open(path, Password::empty()).map_err(Error::unsupported)?;

    for entry in &archive.files {
        let kind = if entry.is_directory() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        if visitor.begin_entry(entry.name(), kind)? == Disposition::Skip {
            continue;
        }

        let data = reader.read_file(entry.name()).map_err(Error::corrupt)?;
        if !data.is_empty() {
            // One complete block; an early-stop verdict changes nothing.
            let _ = visitor.data_block(&data)?;
        }

        if visitor.end_entry()? == WalkFlow::Stop {
            return Ok(());
        }
    }

    Ok(())
}
