// src/geometry.rs
//
// Geometry resolver: normalized region descriptor -> destination-to-source
// affine map.
//
// The map sends destination pixel indices to source sampling coordinates
// where integer coordinates are pixel centers. Composition (applied to the
// destination pixel center):
//   1. normalize to the centered unit square of the output
//   2. scale by the source window extents
//   3. rotate about the window center (counter-clockwise positive)
//   4. translate to the window center in source pixel space
//   5. shift by -0.5 into pixel-center sampling space
// With keep_aspect_ratio the source window is padded on its short axis so
// its aspect ratio matches the output; destination pixels that land outside
// the original window extrapolate through the same map and are resolved by
// the sampler's replicate-border policy.

use crate::error::ExtractError;

/// Region of interest in normalized image coordinates.
///
/// Center and size are fractions of the source dimensions and are not
/// confined to [0, 1]: a region may extend beyond the image. Rotation is in
/// radians, counter-clockwise positive, about the region's own center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionDescriptor {
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
}

impl RegionDescriptor {
    pub fn new(center_x: f32, center_y: f32, width: f32, height: f32, rotation: f32) -> Self {
        Self {
            center_x,
            center_y,
            width,
            height,
            rotation,
        }
    }

    /// The whole image, unrotated.
    pub fn full() -> Self {
        Self::new(0.5, 0.5, 1.0, 1.0, 0.0)
    }
}

/// Output tensor geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputGeometry {
    pub width: u32,
    pub height: u32,
    pub keep_aspect_ratio: bool,
}

impl OutputGeometry {
    pub fn new(width: u32, height: u32, keep_aspect_ratio: bool) -> Self {
        Self {
            width,
            height,
            keep_aspect_ratio,
        }
    }
}

/// 2x3 affine map from destination pixel index to source sampling coordinate.
///
/// Plain struct of six floats; derived once per transform, immutable after.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMap {
    m: [f32; 6],
}

impl AffineMap {
    /// Row-major coefficients `[m00, m01, m02, m10, m11, m12]`.
    pub fn coefficients(&self) -> [f32; 6] {
        self.m
    }

    #[inline]
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        let [m00, m01, m02, m10, m11, m12] = self.m;
        (m00 * x + m01 * y + m02, m10 * x + m11 * y + m12)
    }
}

/// Resolve a normalized region against concrete source and output dimensions.
///
/// The composition is carried out in f64 and rounded to f32 once, so the
/// resulting map is as stable as the inputs allow.
pub fn resolve(
    region: &RegionDescriptor,
    src_width: u32,
    src_height: u32,
    out: &OutputGeometry,
) -> Result<AffineMap, ExtractError> {
    if out.width == 0 || out.height == 0 {
        return Err(ExtractError::invalid_output_geometry(out.width, out.height));
    }

    let src_w = src_width as f64;
    let src_h = src_height as f64;
    let mut win_w = region.width as f64 * src_w;
    let mut win_h = region.height as f64 * src_h;
    // Non-finite descriptor fields would poison every sampled coordinate,
    // so they fall under the same rejection as degenerate extents.
    let finite = region.center_x.is_finite()
        && region.center_y.is_finite()
        && region.rotation.is_finite();
    if !finite || !(win_w > 0.0 && win_h > 0.0) || !win_w.is_finite() || !win_h.is_finite() {
        return Err(ExtractError::invalid_region(win_w as f32, win_h as f32));
    }

    let out_w = out.width as f64;
    let out_h = out.height as f64;
    if out.keep_aspect_ratio {
        // Pad the short axis of the source window until its aspect ratio
        // matches the output. Uniform scale, original window fully covered.
        let out_aspect = out_w / out_h;
        let win_aspect = win_w / win_h;
        if win_aspect < out_aspect {
            win_w = win_h * out_aspect;
        } else {
            win_h = win_w / out_aspect;
        }
    }

    let cx = region.center_x as f64 * src_w;
    let cy = region.center_y as f64 * src_h;
    let (sin, cos) = (region.rotation as f64).sin_cos();

    // Source pixels advanced per destination pixel, per axis.
    let sx = win_w / out_w;
    let sy = win_h / out_h;

    let m00 = cos * sx;
    let m01 = -sin * sy;
    let m10 = sin * sx;
    let m11 = cos * sy;

    // Offset of the first destination pixel center from the output center,
    // in destination pixels.
    let dx0 = 0.5 - out_w * 0.5;
    let dy0 = 0.5 - out_h * 0.5;
    let m02 = cx + m00 * dx0 + m01 * dy0 - 0.5;
    let m12 = cy + m10 * dx0 + m11 * dy0 - 0.5;

    Ok(AffineMap {
        m: [
            m00 as f32, m01 as f32, m02 as f32, m10 as f32, m11 as f32, m12 as f32,
        ],
    })
}
