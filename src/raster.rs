// src/raster.rs
//
// Borrowed view over caller-owned 8-bit pixel data.
//
// The view is validated once at construction; after that, pixel access is
// unchecked-by-construction (debug assertions only) so the sampling loop
// stays branch-light.

use crate::error::ExtractError;
use image::{RgbImage, RgbaImage};

/// Immutable view over an interleaved 8-bit raster (RGB or RGBA).
///
/// `stride` is the distance between row starts in bytes and may exceed
/// `width * channels` when rows are padded. The underlying buffer is never
/// copied; the caller keeps ownership and must not mutate it for the
/// duration of a transform.
#[derive(Debug, Clone, Copy)]
pub struct Raster<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    stride: usize,
    channels: u8,
}

impl<'a> Raster<'a> {
    /// Wrap caller-owned pixel data with an explicit row stride.
    ///
    /// Returns a typed error when the channel count is not 3/4, a dimension
    /// is zero, the stride is smaller than a row, or the buffer cannot hold
    /// `height` rows at that stride.
    pub fn new(
        data: &'a [u8],
        width: u32,
        height: u32,
        stride: usize,
        channels: u8,
    ) -> Result<Self, ExtractError> {
        if channels != 3 && channels != 4 {
            return Err(ExtractError::unsupported_channel_layout(channels));
        }
        if width == 0 || height == 0 {
            return Err(ExtractError::EmptyRaster { width, height });
        }
        let row_bytes = width as usize * channels as usize;
        if stride < row_bytes {
            return Err(ExtractError::InvalidStride {
                stride,
                width,
                channels,
            });
        }
        // The final row does not need trailing padding.
        let required = stride * (height as usize - 1) + row_bytes;
        if data.len() < required {
            return Err(ExtractError::BufferTooSmall {
                required,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
            channels,
        })
    }

    /// Tightly packed RGB view (stride = width * 3).
    pub fn from_rgb(data: &'a [u8], width: u32, height: u32) -> Result<Self, ExtractError> {
        Self::new(data, width, height, width as usize * 3, 3)
    }

    /// Tightly packed RGBA view (stride = width * 4).
    pub fn from_rgba(data: &'a [u8], width: u32, height: u32) -> Result<Self, ExtractError> {
        Self::new(data, width, height, width as usize * 4, 4)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Channel bytes of the pixel at integer coordinates.
    ///
    /// Coordinates must be in bounds; construction guarantees the slice is.
    #[inline]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> &[u8] {
        debug_assert!(x < self.width && y < self.height);
        let offset = y as usize * self.stride + x as usize * self.channels as usize;
        &self.data[offset..offset + self.channels as usize]
    }
}

impl<'a> From<&'a RgbImage> for Raster<'a> {
    fn from(img: &'a RgbImage) -> Self {
        // An RgbImage buffer is tightly packed and non-empty by construction.
        Self {
            data: img.as_raw(),
            width: img.width(),
            height: img.height(),
            stride: img.width() as usize * 3,
            channels: 3,
        }
    }
}

impl<'a> From<&'a RgbaImage> for Raster<'a> {
    fn from(img: &'a RgbaImage) -> Self {
        Self {
            data: img.as_raw(),
            width: img.width(),
            height: img.height(),
            stride: img.width() as usize * 4,
            channels: 4,
        }
    }
}
