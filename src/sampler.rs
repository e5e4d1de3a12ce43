// src/sampler.rs
//
// Bilinear sampling with replicate-border semantics.
//
// Coordinates are in pixel-center space: integer (x, y) is exactly the
// center of source pixel (x, y). Out-of-bounds coordinates clamp to the
// nearest edge pixel before interpolation, so the sampler never reads
// outside the raster and never invents a border color.

use crate::raster::Raster;

/// Bilinearly interpolate the raster at a fractional coordinate.
///
/// Writes one f32 per channel into `out` (length 3 or 4 to match the
/// raster). Values stay in [0, 255]; quantization back to 8 bits, if any,
/// is the consumer's business.
#[inline]
pub fn sample_bilinear(raster: &Raster<'_>, x: f32, y: f32, out: &mut [f32]) {
    debug_assert_eq!(out.len(), raster.channels() as usize);

    let max_x = (raster.width() - 1) as f32;
    let max_y = (raster.height() - 1) as f32;
    let x = x.clamp(0.0, max_x);
    let y = y.clamp(0.0, max_y);

    let x0f = x.floor();
    let y0f = y.floor();
    let fx = x - x0f;
    let fy = y - y0f;

    let x0 = x0f as u32;
    let y0 = y0f as u32;
    let x1 = (x0 + 1).min(raster.width() - 1);
    let y1 = (y0 + 1).min(raster.height() - 1);

    let p00 = raster.pixel(x0, y0);
    let p10 = raster.pixel(x1, y0);
    let p01 = raster.pixel(x0, y1);
    let p11 = raster.pixel(x1, y1);

    for (c, slot) in out.iter_mut().enumerate() {
        let top = p00[c] as f32 + (p10[c] as f32 - p00[c] as f32) * fx;
        let bottom = p01[c] as f32 + (p11[c] as f32 - p01[c] as f32) * fx;
        *slot = top + (bottom - top) * fy;
    }
}
