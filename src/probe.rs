//! Bounded partial decode: pixel dimensions from image header bytes.
//!
//! Scanning an archive must not decode full images just to learn their
//! dimensions: archives routinely hold hundreds of large pages and only the
//! headers matter at scan time. [`DimensionProbe`] is fed the entry's data
//! blocks in order and reports dimensions as soon as they appear in the
//! stream header; the caller then stops feeding and moves on without ever
//! touching the pixel payload.
//!
//! Some formats need more than one block before dimensions are known (JPEGs
//! can carry large metadata segments ahead of the frame header), so `feed`
//! is designed to be looped until it answers.

/// Outcome of feeding one block to a [`DimensionProbe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// The header is still incomplete; feed the next block.
    NeedMore,
    /// Dimensions were found; stop feeding.
    Known {
        /// Image width in pixels, > 0.
        width: u32,
        /// Image height in pixels, > 0.
        height: u32,
    },
    /// The data cannot be a supported image; stop feeding.
    Failed,
}

/// Incremental dimension reader over an entry's leading bytes.
///
/// Feed blocks with [`feed`](Self::feed) until it returns something other
/// than [`ProbeStatus::NeedMore`], then call [`finish`](Self::finish) for
/// the terminal answer. A probe that never resolves (truncated or invalid
/// image) finishes as `None`; the entry is simply not a page.
#[derive(Debug, Default)]
pub struct DimensionProbe {
    header: Vec<u8>,
    resolved: Option<(u32, u32)>,
    failed: bool,
}

/// Bytes of leading data after which an unrecognized signature is decisive.
///
/// Every format the probe understands declares itself within its first few
/// bytes; once this much data is buffered a `NotSupported` answer cannot be
/// changed by further input.
const SIGNATURE_DECISIVE_LEN: usize = 32;

impl DimensionProbe {
    /// Creates an empty probe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next data block and probes the accumulated header.
    pub fn feed(&mut self, block: &[u8]) -> ProbeStatus {
        if let Some((width, height)) = self.resolved {
            return ProbeStatus::Known { width, height };
        }
        if self.failed {
            return ProbeStatus::Failed;
        }

        self.header.extend_from_slice(block);

        match imagesize::blob_size(&self.header) {
            Ok(size) => match (u32::try_from(size.width), u32::try_from(size.height)) {
                (Ok(width), Ok(height)) if width > 0 && height > 0 => {
                    self.resolved = Some((width, height));
                    ProbeStatus::Known { width, height }
                }
                _ => {
                    self.failed = true;
                    ProbeStatus::Failed
                }
            },
            Err(imagesize::ImageError::NotSupported)
                if self.header.len() >= SIGNATURE_DECISIVE_LEN =>
            {
                self.failed = true;
                ProbeStatus::Failed
            }
            Err(imagesize::ImageError::CorruptedImage) => {
                self.failed = true;
                ProbeStatus::Failed
            }
            // Header incomplete so far (short signature or truncated fields).
            Err(_) => ProbeStatus::NeedMore,
        }
    }

    /// Consumes the probe and returns the dimensions, if they were found.
    pub fn finish(self) -> Option<(u32, u32)> {
        self.resolved
    }
}
