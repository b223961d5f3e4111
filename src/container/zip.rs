//! ZIP (cbz) container backend.

use std::io::{Read, Seek};

use zip::ZipArchive;

use super::{BlockFlow, Disposition, EntryKind, EntryVisitor, WalkFlow};
use crate::{Error, READ_BUFFER_SIZE, Result};

/// Unix file mode bits identifying a symlink.
const S_IFMT: u32 = 0o170000;
const S_IFLNK: u32 = 0o120000;

pub(crate) fn walk<R: Read + Seek>(reader: R, visitor: &mut dyn EntryVisitor) -> Result<()> {
    let mut archive = ZipArchive::new(reader).map_err(Error::unsupported)?;

    for index in 0..archive.len() {
        let mut file = archive.by_index(index).map_err(Error::corrupt)?;

        let kind = if file.is_dir() {
            EntryKind::Directory
        } else if file
            .unix_mode()
            .is_some_and(|mode| mode & S_IFMT == S_IFLNK)
        {
            EntryKind::Other
        } else {
            EntryKind::File
        };

        let path = file.name().to_string();
        if visitor.begin_entry(&path, kind)? == Disposition::Skip {
            continue;
        }

        let mut buf = [0u8; READ_BUFFER_SIZE];
        loop {
            let n = file.read(&mut buf).map_err(Error::corrupt)?;
            if n == 0 {
                break;
            }
            if visitor.data_block(&buf[..n])? == BlockFlow::StopEntry {
                break;
            }
        }

        if visitor.end_entry()? == WalkFlow::Stop {
            return Ok(());
        }
    }

    Ok(())
}
