//! Streaming access to archive containers.
//!
//! One call to [`walk`] is one streaming-read session over one archive file:
//! the container format is auto-detected by signature, the matching backend
//! is selected, and every entry is presented to an [`EntryVisitor`] in the
//! container's physical order: single-pass, forward-only, no random seek.
//! Each logical scan opens its own session; no handle state survives between
//! calls, and every backend releases its resources on all exit paths.
//!
//! The visitor decides per entry whether its data is wanted
//! ([`Disposition::Stream`]) and can stop a streamed entry early
//! ([`BlockFlow::StopEntry`], used by the dimension probe once the header
//! has answered) or end the whole walk ([`WalkFlow::Stop`], used by the
//! fetcher once its entry is found). Data blocks are only valid for the
//! duration of the `data_block` call, because the backends reuse their read
//! buffers; a visitor keeps what it needs by copying.

mod detect;
mod tar;
mod zip;

#[cfg(feature = "rar")]
mod rar;

#[cfg(feature = "sevenz")]
mod sevenz;

pub use detect::{ContainerFormat, detect};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{Error, Result};

/// The filetype of an archive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    /// A regular file with data.
    File,
    /// A directory.
    Directory,
    /// Anything else (symlink, device, ...).
    Other,
}

/// Visitor's verdict on one entry, before any data is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Disposition {
    /// Skip this entry's data entirely.
    Skip,
    /// Stream this entry's data blocks to the visitor.
    Stream,
}

/// Visitor's verdict after one data block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockFlow {
    /// Keep streaming this entry.
    Continue,
    /// Stop feeding this entry; proceed to `end_entry`.
    StopEntry,
}

/// Visitor's verdict after a streamed entry ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WalkFlow {
    /// Keep walking subsequent entries.
    Continue,
    /// Stop the walk; `walk` returns `Ok` immediately.
    Stop,
}

/// Receives every entry of one archive walk.
///
/// For each entry the backend calls `begin_entry`; when it answers
/// [`Disposition::Stream`], zero or more `data_block` calls follow (zero for
/// empty entries) and then exactly one `end_entry`. Skipped entries get
/// neither. Errors returned by the visitor abort the walk and propagate
/// unchanged.
pub(crate) trait EntryVisitor {
    /// Announces the next entry.
    fn begin_entry(&mut self, path: &str, kind: EntryKind) -> Result<Disposition>;

    /// Feeds the next data block of the current streamed entry.
    ///
    /// The block is only valid for this call.
    fn data_block(&mut self, block: &[u8]) -> Result<BlockFlow>;

    /// Marks the end of the current streamed entry.
    fn end_entry(&mut self) -> Result<WalkFlow>;
}

/// Opens `path`, auto-detects its container format and walks every entry.
///
/// Compression wrappers (gzip, bzip2, xz, zstd) are unwrapped in front of a
/// tar backend; formats gated off by feature flags fail with
/// [`Error::UnsupportedFormat`].
pub(crate) fn walk(path: &Path, visitor: &mut dyn EntryVisitor) -> Result<()> {
    let mut file = File::open(path)?;
    let format = detect::detect(&mut file)?;
    log::debug!("detected {} container in '{}'", format, path.display());

    match format {
        ContainerFormat::Zip => zip::walk(BufReader::new(file), visitor),

        ContainerFormat::Tar => tar::walk(BufReader::new(file), visitor),
        ContainerFormat::Gzip => {
            tar::walk(flate2::read::MultiGzDecoder::new(BufReader::new(file)), visitor)
        }
        ContainerFormat::Bzip2 => {
            tar::walk(bzip2::read::MultiBzDecoder::new(BufReader::new(file)), visitor)
        }

        #[cfg(feature = "xz")]
        ContainerFormat::Xz => {
            tar::walk(lzma_rust2::XzReader::new(BufReader::new(file), true), visitor)
        }
        #[cfg(not(feature = "xz"))]
        ContainerFormat::Xz => Err(disabled(format, "xz")),

        #[cfg(feature = "zstd")]
        ContainerFormat::Zstd => {
            let decoder = zstd::stream::read::Decoder::new(file).map_err(Error::corrupt)?;
            tar::walk(decoder, visitor)
        }
        #[cfg(not(feature = "zstd"))]
        ContainerFormat::Zstd => Err(disabled(format, "zstd")),

        #[cfg(feature = "rar")]
        ContainerFormat::Rar | ContainerFormat::Rar5 => {
            drop(file);
            rar::walk(path, visitor)
        }
        #[cfg(not(feature = "rar"))]
        ContainerFormat::Rar | ContainerFormat::Rar5 => Err(disabled(format, "rar")),

        #[cfg(feature = "sevenz")]
        ContainerFormat::SevenZip => {
            drop(file);
            sevenz::walk(path, visitor)
        }
        #[cfg(not(feature = "sevenz"))]
        ContainerFormat::SevenZip => Err(disabled(format, "sevenz")),
    }
}

#[allow(dead_code)] // only referenced when a format feature is disabled
fn disabled(format: ContainerFormat, feature: &str) -> Error {
    Error::unsupported(format!(
        "{format} support not enabled (requires the '{feature}' feature)"
    ))
}

/// Visitor that records a walk as a call trace. Shared by backend tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Default)]
    pub(crate) struct TraceVisitor {
        pub entries: Vec<(String, bool)>,
        pub bytes: Vec<Vec<u8>>,
        pub stream_files: bool,
    }

    impl EntryVisitor for TraceVisitor {
        fn begin_entry(&mut self, path: &str, kind: EntryKind) -> Result<Disposition> {
            let is_file = kind == EntryKind::File;
            self.entries.push((path.to_string(), is_file));
            if self.stream_files && is_file {
                self.bytes.push(Vec::new());
                Ok(Disposition::Stream)
            } else {
                Ok(Disposition::Skip)
            }
        }

        fn data_block(&mut self, block: &[u8]) -> Result<BlockFlow> {
            self.bytes
                .last_mut()
                .expect("data_block before begin_entry")
                .extend_from_slice(block);
            Ok(BlockFlow::Continue)
        }

        fn end_entry(&mut self) -> Result<WalkFlow> {
            Ok(WalkFlow::Continue)
        }
    }
}
