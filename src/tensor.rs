// src/tensor.rs
//
// Destination tensor and the row-parallel write loop.

use crate::geometry::AffineMap;
use crate::range::RangeTransform;
use crate::raster::Raster;
use crate::sampler::sample_bilinear;
use rayon::prelude::*;

/// Color channels written per destination pixel. Alpha is never part of the
/// output; a 4-channel source contributes its color channels only.
pub const TENSOR_CHANNELS: usize = 3;

/// Flat f32 buffer shaped (height, width, 3), row-major.
///
/// Handed back fully populated; never partially written.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: Vec<f32>,
    width: u32,
    height: u32,
}

impl Tensor {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Logical shape as (height, width, channels).
    pub fn shape(&self) -> (u32, u32, usize) {
        (self.height, self.width, TENSOR_CHANNELS)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<f32> {
        self.data
    }

    /// Value at destination pixel (x, y), channel c.
    pub fn get(&self, x: u32, y: u32, c: usize) -> f32 {
        assert!(x < self.width && y < self.height && c < TENSOR_CHANNELS);
        self.data[(y as usize * self.width as usize + x as usize) * TENSOR_CHANNELS + c]
    }
}

/// Populate a fresh tensor: one bilinear sample and one range remap per
/// destination pixel.
///
/// Rows are filled in parallel; each rayon task owns a disjoint row slice,
/// so the loop needs no synchronization beyond the final join.
pub(crate) fn write(
    raster: &Raster<'_>,
    map: &AffineMap,
    transform: &RangeTransform,
    out_width: u32,
    out_height: u32,
) -> Tensor {
    let row_len = out_width as usize * TENSOR_CHANNELS;
    let mut data = vec![0.0f32; row_len * out_height as usize];
    let channels = raster.channels() as usize;

    data.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            let mut sample = [0.0f32; 4];
            for x in 0..out_width as usize {
                let (sx, sy) = map.apply(x as f32, y as f32);
                sample_bilinear(raster, sx, sy, &mut sample[..channels]);
                let cell = &mut row[x * TENSOR_CHANNELS..(x + 1) * TENSOR_CHANNELS];
                for c in 0..TENSOR_CHANNELS {
                    cell[c] = transform.apply(sample[c]);
                }
            }
        });

    Tensor {
        data,
        width: out_width,
        height: out_height,
    }
}
