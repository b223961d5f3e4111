//! Decoded bitmaps and the paint target surface.
//!
//! A [`RenderedBitmap`] is the transient product of one render call: the
//! fetched entry bytes run through the full image decoder and come out as a
//! tightly-packed RGBA8 buffer owned by the caller. Nothing is cached: the
//! next render of the same page decodes again.

use crate::{Error, Result};

/// A decoded page image: tightly-packed RGBA8, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RenderedBitmap {
    /// Decodes a complete, in-memory image. `entry_path` is only used for
    /// error context.
    pub(crate) fn decode(entry_path: &str, data: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(data).map_err(|e| Error::Decode {
            path: entry_path.to_string(),
            reason: e.to_string(),
        })?;

        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA8 pixel data, `width * height * 4` bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// Consumes the bitmap and returns its pixel buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }
}

/// A caller-supplied RGBA8 paint target with fixed dimensions.
///
/// [`paint`](Self::paint) copies a bitmap onto the surface at origin (0, 0),
/// replacing whatever was there (no blending) and clips to the
/// overlapping region. Pixels outside the painted region are untouched.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// Creates a zeroed (transparent black) surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA8 pixel data, `width * height * 4` bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// Paints `bitmap` at the origin, replacing existing content.
    pub fn paint(&mut self, bitmap: &RenderedBitmap) {
        let copy_width = self.width.min(bitmap.width()) as usize * 4;
        let copy_height = self.height.min(bitmap.height()) as usize;
        let dst_stride = self.width as usize * 4;
        let src_stride = bitmap.width() as usize * 4;

        for row in 0..copy_height {
            let dst = &mut self.pixels[row * dst_stride..row * dst_stride + copy_width];
            dst.copy_from_slice(&bitmap.as_raw()[row * src_stride..row * src_stride + copy_width]);
        }
    }
}
