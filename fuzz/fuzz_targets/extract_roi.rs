#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use roi_tensor::{extract, OutputGeometry, RangeSpec, Raster, RegionDescriptor};

#[derive(Arbitrary, Debug)]
struct ExtractSeed {
    src_w: u8,
    src_h: u8,
    out_w: u8,
    out_h: u8,
    keep_aspect: bool,
    rgba: bool,
    center_x: f32,
    center_y: f32,
    width: f32,
    height: f32,
    rotation: f32,
    min: f32,
    max: f32,
    pixels: Vec<u8>,
}

fuzz_target!(|seed: ExtractSeed| {
    let src_w = (seed.src_w % 48 + 1) as u32;
    let src_h = (seed.src_h % 48 + 1) as u32;
    let channels = if seed.rgba { 4u32 } else { 3 };

    let mut data = vec![0u8; (src_w * src_h * channels) as usize];
    for (i, byte) in data.iter_mut().enumerate() {
        *byte = seed
            .pixels
            .get(i % seed.pixels.len().max(1))
            .copied()
            .unwrap_or(i as u8);
    }
    let raster = if seed.rgba {
        Raster::from_rgba(&data, src_w, src_h)
    } else {
        Raster::from_rgb(&data, src_w, src_h)
    }
    .expect("synthesized raster is valid");

    let region = RegionDescriptor::new(
        seed.center_x,
        seed.center_y,
        seed.width,
        seed.height,
        seed.rotation,
    );
    let geometry = OutputGeometry::new(
        (seed.out_w % 64) as u32,
        (seed.out_h % 64) as u32,
        seed.keep_aspect,
    );
    let range = RangeSpec::new(seed.min, seed.max);

    // Must never panic; on success the tensor is fully populated and bounded.
    if let Ok(tensor) = extract(&raster, &region, &geometry, range) {
        assert_eq!(
            tensor.as_slice().len(),
            geometry.width as usize * geometry.height as usize * 3
        );
        for &v in tensor.as_slice() {
            assert!(v >= range.min && v <= range.max);
        }
    }
});
