//! TAR (cbt) container backend.
//!
//! Also serves the compression wrappers: the dispatcher hands this backend
//! a gzip/bzip2/xz/zstd decoder wrapped around the file, which makes the
//! walk a pure forward pass, exactly what a non-seekable decoder supports.

use std::io::Read;

use super::{BlockFlow, Disposition, EntryKind, EntryVisitor, WalkFlow};
use crate::{Error, READ_BUFFER_SIZE, Result};

pub(crate) fn walk<R: Read>(reader: R, visitor: &mut dyn EntryVisitor) -> Result<()> {
    let mut archive = tar::Archive::new(reader);

    for entry in archive.entries().map_err(Error::corrupt)? {
        let mut entry = entry.map_err(Error::corrupt)?;

        let kind = match entry.header().entry_type() {
            tar::EntryType::Regular | tar::EntryType::Continuous | tar::EntryType::GNUSparse => {
                EntryKind::File
            }
            tar::EntryType::Directory => EntryKind::Directory,
            _ => EntryKind::Other,
        };

        let path = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
        if visitor.begin_entry(&path, kind)? == Disposition::Skip {
            continue;
        }

        let mut buf = [0u8; READ_BUFFER_SIZE];
        loop {
            let n = entry.read(&mut buf).map_err(Error::corrupt)?;
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
