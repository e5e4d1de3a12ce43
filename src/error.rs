// src/error.rs
//
// Unified error handling for roi-tensor
// Uses thiserror for simple, type-safe error handling
//
// Every failure is detected synchronously before any sampling work begins.
// The transform is deterministic, so nothing here is retryable: callers
// either fix their inputs or skip the frame.

use thiserror::Error;

/// roi-tensor error types
///
/// All errors carry the offending values so callers can report them without
/// re-deriving anything. No numeric error codes - just clear variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    // Region / geometry errors
    #[error("Region resolves to a degenerate source window: {width}x{height} px")]
    InvalidRegion { width: f32, height: f32 },

    #[error("Invalid output geometry: {width}x{height} (both dimensions must be non-zero)")]
    InvalidOutputGeometry { width: u32, height: u32 },

    // Range errors
    #[error("Invalid value range: min={min} must be less than max={max}")]
    InvalidRange { min: f32, max: f32 },

    // Raster errors
    #[error("Unsupported channel layout: {channels} channels (expected 3 for RGB or 4 for RGBA)")]
    UnsupportedChannelLayout { channels: u8 },

    #[error("Empty raster: {width}x{height}")]
    EmptyRaster { width: u32, height: u32 },

    #[error("Row stride {stride} is smaller than row size ({width} px x {channels} channels)")]
    InvalidStride {
        stride: usize,
        width: u32,
        channels: u8,
    },

    #[error("Raster buffer too small: need {required} bytes, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },
}

impl ExtractError {
    pub fn invalid_region(width: f32, height: f32) -> Self {
        Self::InvalidRegion { width, height }
    }

    pub fn invalid_output_geometry(width: u32, height: u32) -> Self {
        Self::InvalidOutputGeometry { width, height }
    }

    pub fn invalid_range(min: f32, max: f32) -> Self {
        Self::InvalidRange { min, max }
    }

    pub fn unsupported_channel_layout(channels: u8) -> Self {
        Self::UnsupportedChannelLayout { channels }
    }
}
