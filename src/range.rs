// src/range.rs
//
// Intensity range remapping: [0, 255] channel values -> caller range.

use crate::error::ExtractError;

/// Desired output value range. Source channel range is fixed at [0, 255].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
    pub min: f32,
    pub max: f32,
}

impl RangeSpec {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// Affine intensity transform derived from a [`RangeSpec`].
///
/// `output = input * scale + offset`, mapping 0 -> min and 255 -> max.
/// Applied values are clamped to [min, max] so the documented range bound
/// holds under floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeTransform {
    scale: f32,
    offset: f32,
    min: f32,
    max: f32,
}

impl RangeTransform {
    /// Fails with `InvalidRange` unless `min < max`. NaN bounds are rejected
    /// by the same comparison.
    pub fn new(spec: RangeSpec) -> Result<Self, ExtractError> {
        if !(spec.min < spec.max) {
            return Err(ExtractError::invalid_range(spec.min, spec.max));
        }
        Ok(Self {
            scale: (spec.max - spec.min) / 255.0,
            offset: spec.min,
            min: spec.min,
            max: spec.max,
        })
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[inline]
    pub fn apply(&self, value: f32) -> f32 {
        (value * self.scale + self.offset).clamp(self.min, self.max)
    }
}
