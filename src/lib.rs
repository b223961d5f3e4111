//! # comicbox
//!
//! A Rust library for reading comic book archives (CBZ, CBR, CB7, CBT and
//! their compressed variants) as an ordered sequence of image pages.
//!
//! The container format is auto-detected from file signatures (never from
//! the file extension), entries are filtered against an injected image
//! extension registry, and each page's pixel dimensions are read from the
//! image header alone; full decoding only happens when a page is actually
//! rendered. Page order is case-insensitive and locale-aware, so
//! `Page01.JPG` and `page02.jpg` sort the way a reader expects regardless
//! of which tool produced the archive.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use comicbox::{Document, ExtensionRegistry, Result};
//!
//! fn main() -> Result<()> {
//!     // Query the image codec catalog once, at startup.
//!     let registry = ExtensionRegistry::from_codec_catalog();
//!
//!     let doc = Document::open("issue-01.cbz", &registry)?;
//!     println!("{} pages", doc.page_count());
//!
//!     for index in 0..doc.page_count() {
//!         let (width, height) = doc.page_dimensions(index)?;
//!         println!("page {index}: {width}x{height}");
//!     }
//!
//!     // Decode one page on demand.
//!     let bitmap = doc.render_page(0)?;
//!     println!("decoded {} bytes of RGBA", bitmap.as_raw().len());
//!     Ok(())
//! }
//! ```
//!
//! ## Supported Containers
//!
//! | Container | Extension | Feature |
//! |-----------|-----------|---------|
//! | ZIP | `.cbz` / `.zip` | always |
//! | TAR | `.cbt` / `.tar` | always |
//! | TAR + gzip / bzip2 | `.tar.gz` / `.tar.bz2` | always |
//! | TAR + xz | `.tar.xz` | `xz` |
//! | TAR + zstd | `.tar.zst` | `zstd` |
//! | RAR 4/5 | `.cbr` / `.rar` | `rar` |
//! | 7z | `.cb7` / `.7z` | `sevenz` |
//!
//! All format features are enabled by default. Encrypted archives and
//! archive writing are out of scope.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. Open-time failures abort document
//! construction; render-time failures are scoped to the single call. See
//! [`error`] for the full taxonomy.
//!
//! ## Concurrency
//!
//! Scanning and rendering are synchronous, blocking passes over their own
//! archive handle. A [`Document`] is `Send + Sync`: concurrent renders of
//! different (or the same) pages are safe because every render opens an
//! independent handle and the shared state is read-only.
//!
//! ## Minimum Supported Rust Version (MSRV)
//!
//! This crate requires **Rust 1.85** or later.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Default buffer size for streaming reads from a container (8 KiB).
pub(crate) const READ_BUFFER_SIZE: usize = 8192;

pub mod bitmap;
pub mod collate;
pub mod container;
pub mod document;
pub mod error;
pub mod extensions;
pub mod page;
pub mod probe;

mod fetch;
mod scan;

pub use bitmap::{RenderedBitmap, Surface};
pub use collate::PathComparator;
pub use container::ContainerFormat;
pub use document::Document;
pub use error::{Error, Result};
pub use extensions::ExtensionRegistry;
pub use page::{PageIndex, PageMeta};
pub use probe::{DimensionProbe, ProbeStatus};
