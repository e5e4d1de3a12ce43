// lib.rs
//
// roi-tensor: rotated region-of-interest extraction into float tensors
//
// Design goals:
// - One operation: (raster, region, output geometry, value range) -> tensor
// - Pure function of its inputs, deterministic down to the bit
// - Replicate-border bilinear sampling, alpha dropped on write
// - Row-parallel fill with no shared mutable state
//
// Decoding, pipeline wiring, and inference are the caller's business; this
// crate only turns a decoded raster plus a region descriptor into a
// populated numeric buffer.

pub mod error;
pub mod geometry;
pub mod range;
pub mod raster;
pub mod sampler;
pub mod tensor;

pub use error::ExtractError;
pub use geometry::{resolve, AffineMap, OutputGeometry, RegionDescriptor};
pub use range::{RangeSpec, RangeTransform};
pub use raster::Raster;
pub use tensor::{Tensor, TENSOR_CHANNELS};

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Extract a region of interest into a fresh float tensor.
///
/// Resolves the region against the raster dimensions, then fills a
/// `geometry.height` x `geometry.width` x 3 tensor by bilinear sampling
/// through the resulting affine map and remapping [0, 255] intensities into
/// `range`. A 4-channel source contributes its color channels; alpha is
/// dropped.
///
/// All error conditions are checked before any sampling starts: the tensor
/// comes back fully populated or not at all.
///
/// ```
/// use roi_tensor::{extract, OutputGeometry, RangeSpec, Raster, RegionDescriptor};
///
/// let pixels = vec![128u8; 8 * 8 * 3];
/// let raster = Raster::from_rgb(&pixels, 8, 8)?;
/// let region = RegionDescriptor::new(0.5, 0.5, 0.5, 0.5, 0.0);
/// let tensor = extract(
///     &raster,
///     &region,
///     &OutputGeometry::new(4, 4, true),
///     RangeSpec::new(0.0, 1.0),
/// )?;
/// assert_eq!(tensor.shape(), (4, 4, 3));
/// # Ok::<(), roi_tensor::ExtractError>(())
/// ```
pub fn extract(
    raster: &Raster<'_>,
    region: &RegionDescriptor,
    geometry: &OutputGeometry,
    range: RangeSpec,
) -> Result<Tensor> {
    let transform = RangeTransform::new(range)?;
    let map = geometry::resolve(region, raster.width(), raster.height(), geometry)?;

    #[cfg(feature = "trace")]
    tracing::debug!(
        coefficients = ?map.coefficients(),
        out_width = geometry.width,
        out_height = geometry.height,
        scale = transform.scale(),
        offset = transform.offset(),
        "resolved roi transform"
    );

    Ok(tensor::write(
        raster,
        &map,
        &transform,
        geometry.width,
        geometry.height,
    ))
}
