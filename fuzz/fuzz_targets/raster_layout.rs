#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use roi_tensor::{extract, OutputGeometry, RangeSpec, Raster, RegionDescriptor};

#[derive(Arbitrary, Debug)]
struct LayoutSeed {
    width: u16,
    height: u16,
    stride: u16,
    channels: u8,
    data: Vec<u8>,
}

fuzz_target!(|seed: LayoutSeed| {
    // Raster construction must reject any inconsistent layout instead of
    // reading out of bounds later.
    let raster = match Raster::new(
        &seed.data,
        seed.width as u32,
        seed.height as u32,
        seed.stride as usize,
        seed.channels,
    ) {
        Ok(raster) => raster,
        Err(_) => return,
    };

    let _ = extract(
        &raster,
        &RegionDescriptor::new(0.5, 0.5, 1.2, 1.2, 0.7),
        &OutputGeometry::new(8, 8, true),
        RangeSpec::new(0.0, 1.0),
    );
});
