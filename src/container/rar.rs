//! RAR (cbr) container backend.
//!
//! The unrar library hands back each entry's data as one complete buffer,
//! so a streamed entry produces a single data block. Its cursor alternates
//! between "before header" and "before file" states; the walk threads the
//! archive value through `read_header`/`read`/`skip` accordingly.

use std::path::Path;

use unrar::Archive;

use super::{Disposition, EntryKind, EntryVisitor, WalkFlow};
use crate::{Error, Result};

pub(crate) fn walk(path: &Path, visitor: &mut dyn EntryVisitor) -> Result<()> {
    let mut archive = Archive::new(path)
        .open_for_processing()
        .map_err(Error::unsupported)?;

    while let Some(header) = archive.read_header().map_err(Error::corrupt)? {
        let entry = header.entry();

        let kind = if entry.is_directory() {
            EntryKind::Directory
        } else if entry.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        let entry_path = entry.filename.to_string_lossy().into_owned();

        archive = match visitor.begin_entry(&entry_path, kind)? {
            Disposition::Skip => header.skip().map_err(Error::corrupt)?,
            Disposition::Stream => {
                let (data, rest) = header.read().map_err(Error::corrupt)?;
                if !data.is_empty() {
                    // One complete block; an early-stop verdict changes nothing.
                    let _ = visitor.data_block(&data)?;
                }
                if visitor.end_entry()? == WalkFlow::Stop {
                    return Ok(());
                }
                rest
            }
        };
    }

    Ok(())
}
