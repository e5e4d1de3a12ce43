// tests/integration_tests.rs
//
// End-to-end extraction scenarios, checked against an independently
// computed expectation instead of golden image files: the source is a linear
// intensity gradient, so the expected value at any (possibly clamped)
// source coordinate is known analytically and bilinear resampling must
// reproduce it within quantization error. Max abs diff of 5 on the 8-bit
// scale is the pass bar for every scenario.

use roi_tensor::{extract, OutputGeometry, RangeSpec, Raster, RegionDescriptor, Tensor};

const TOLERANCE_8BIT: f32 = 5.0;

/// Linear gradient: red follows x, green follows y, blue constant.
fn gradient_rgb(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(gradient_red(x as f32, width));
            data.push(gradient_green(y as f32, height));
            data.push(64);
        }
    }
    data
}

fn gradient_red(x: f32, width: u32) -> u8 {
    (x * 255.0 / (width - 1).max(1) as f32).round() as u8
}

fn gradient_green(y: f32, height: u32) -> u8 {
    (y * 255.0 / (height - 1).max(1) as f32).round() as u8
}

/// Destination -> source map recomputed from first principles, independent
/// of the crate's resolver.
#[allow(clippy::too_many_arguments)]
fn reference_source_coord(
    x: u32,
    y: u32,
    region: &RegionDescriptor,
    src_w: u32,
    src_h: u32,
    out_w: u32,
    out_h: u32,
    keep_aspect: bool,
) -> (f32, f32) {
    let cx = region.center_x * src_w as f32;
    let cy = region.center_y * src_h as f32;
    let mut win_w = region.width * src_w as f32;
    let mut win_h = region.height * src_h as f32;
    if keep_aspect {
        let out_aspect = out_w as f32 / out_h as f32;
        if win_w / win_h < out_aspect {
            win_w = win_h * out_aspect;
        } else {
            win_h = win_w / out_aspect;
        }
    }
    let u = (x as f32 + 0.5) / out_w as f32 - 0.5;
    let v = (y as f32 + 0.5) / out_h as f32 - 0.5;
    let (sin, cos) = region.rotation.sin_cos();
    let dx = u * win_w;
    let dy = v * win_h;
    (
        cx + cos * dx - sin * dy - 0.5,
        cy + sin * dx + cos * dy - 0.5,
    )
}

/// Run an extraction over the gradient source and compare every cell of the
/// [0, 1] tensor against the analytic expectation on the 8-bit scale.
fn assert_matches_gradient_reference(
    src_w: u32,
    src_h: u32,
    region: &RegionDescriptor,
    geometry: &OutputGeometry,
) {
    let data = gradient_rgb(src_w, src_h);
    let raster = Raster::from_rgb(&data, src_w, src_h).unwrap();
    let tensor = extract(&raster, region, geometry, RangeSpec::new(0.0, 1.0)).unwrap();

    let mut max_diff = 0.0f32;
    for y in 0..geometry.height {
        for x in 0..geometry.width {
            let (sx, sy) = reference_source_coord(
                x,
                y,
                region,
                src_w,
                src_h,
                geometry.width,
                geometry.height,
                geometry.keep_aspect_ratio,
            );
            let sx = sx.clamp(0.0, (src_w - 1) as f32);
            let sy = sy.clamp(0.0, (src_h - 1) as f32);
            let expected = [
                gradient_red(sx, src_w) as f32,
                gradient_green(sy, src_h) as f32,
                64.0,
            ];
            for (c, &want) in expected.iter().enumerate() {
                let got = tensor.get(x, y, c) * 255.0;
                assert!(
                    (0.0..=255.0).contains(&got),
                    "value out of range at ({x},{y},{c}): {got}"
                );
                max_diff = max_diff.max((got - want).abs());
            }
        }
    }
    assert!(
        max_diff <= TOLERANCE_8BIT,
        "max abs diff {max_diff} exceeds {TOLERANCE_8BIT}"
    );
}

#[test]
fn identity_region_reproduces_source() {
    let (w, h) = (64, 48);
    let data = gradient_rgb(w, h);
    let raster = Raster::from_rgb(&data, w, h).unwrap();
    let tensor = extract(
        &raster,
        &RegionDescriptor::full(),
        &OutputGeometry::new(w, h, false),
        RangeSpec::new(0.0, 255.0),
    )
    .unwrap();

    for y in 0..h {
        for x in 0..w {
            let px = &data[((y * w + x) * 3) as usize..][..3];
            for c in 0..3 {
                let diff = (tensor.get(x, y, c) - px[c] as f32).abs();
                assert!(diff <= 1.0, "({x},{y},{c}) differs by {diff}");
            }
        }
    }
}

#[test]
fn repeated_extraction_is_bit_identical() {
    let data = gradient_rgb(100, 80);
    let raster = Raster::from_rgb(&data, 100, 80).unwrap();
    let region = RegionDescriptor::new(0.6, 0.45, 0.7, 0.5, 0.37);
    let geometry = OutputGeometry::new(48, 32, true);
    let range = RangeSpec::new(-1.0, 1.0);

    let a = extract(&raster, &region, &geometry, range).unwrap();
    let b = extract(&raster, &region, &geometry, range).unwrap();
    assert_eq!(a.as_slice(), b.as_slice());
}

#[test]
fn full_turn_rotation_round_trips() {
    let data = gradient_rgb(90, 120);
    let raster = Raster::from_rgb(&data, 90, 120).unwrap();
    let geometry = OutputGeometry::new(40, 40, false);
    let range = RangeSpec::new(0.0, 1.0);

    for theta in [0.0f32, 0.9, -2.3] {
        let base = RegionDescriptor::new(0.5, 0.5, 0.6, 0.6, theta);
        let turned = RegionDescriptor {
            rotation: theta + std::f32::consts::TAU,
            ..base
        };
        let a = extract(&raster, &base, &geometry, range).unwrap();
        let b = extract(&raster, &turned, &geometry, range).unwrap();
        // theta + 2*pi is not exactly representable, so allow a whisker of
        // numeric drift; visually and numerically the outputs coincide.
        let max_diff = a
            .as_slice()
            .iter()
            .zip(b.as_slice())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0f32, f32::max);
        assert!(max_diff <= 1e-3, "theta {theta}: max diff {max_diff}");
    }
}

#[test]
fn alpha_channel_is_dropped() {
    let (w, h) = (40, 30);
    let rgb = gradient_rgb(w, h);
    let mut rgba = Vec::with_capacity((w * h * 4) as usize);
    for px in rgb.chunks(3) {
        rgba.extend_from_slice(px);
        rgba.push((px[0] ^ px[1]).wrapping_add(17));
    }

    let region = RegionDescriptor::new(0.5, 0.5, 0.8, 0.9, -0.6);
    let geometry = OutputGeometry::new(24, 16, true);
    let range = RangeSpec::new(0.0, 1.0);

    let from_rgb = extract(
        &Raster::from_rgb(&rgb, w, h).unwrap(),
        &region,
        &geometry,
        range,
    )
    .unwrap();
    let from_rgba = extract(
        &Raster::from_rgba(&rgba, w, h).unwrap(),
        &region,
        &geometry,
        range,
    )
    .unwrap();
    assert_eq!(from_rgb.as_slice(), from_rgba.as_slice());
}

#[test]
fn keep_aspect_equals_plain_when_ratios_agree() {
    // 0.5 x 0.25 of a 400x800 source is a square window; into a square
    // output the keep-aspect branch must change nothing.
    let data = gradient_rgb(400, 800);
    let raster = Raster::from_rgb(&data, 400, 800).unwrap();
    let region = RegionDescriptor::new(0.5, 0.5, 0.5, 0.25, 0.0);
    let range = RangeSpec::new(0.0, 1.0);

    let keep = extract(
        &raster,
        &region,
        &OutputGeometry::new(128, 128, true),
        range,
    )
    .unwrap();
    let plain = extract(
        &raster,
        &region,
        &OutputGeometry::new(128, 128, false),
        range,
    )
    .unwrap();
    assert_eq!(keep.as_slice(), plain.as_slice());
}

#[test]
fn medium_sub_rect_keep_aspect() {
    assert_matches_gradient_reference(
        720,
        1280,
        &RegionDescriptor::new(0.65, 0.4, 0.5, 0.5, 0.0),
        &OutputGeometry::new(256, 256, true),
    );
}

#[test]
fn medium_sub_rect_keep_aspect_with_rotation() {
    assert_matches_gradient_reference(
        720,
        1280,
        &RegionDescriptor::new(0.65, 0.4, 0.5, 0.5, std::f32::consts::FRAC_PI_2),
        &OutputGeometry::new(256, 256, true),
    );
}

#[test]
fn medium_sub_rect_with_rotation() {
    assert_matches_gradient_reference(
        720,
        1280,
        &RegionDescriptor::new(0.65, 0.4, 0.5, 0.5, -std::f32::consts::FRAC_PI_4),
        &OutputGeometry::new(256, 256, false),
    );
}

#[test]
fn large_sub_rect_extends_past_image() {
    assert_matches_gradient_reference(
        720,
        1280,
        &RegionDescriptor::new(0.5, 0.5, 1.5, 1.1, 0.0),
        &OutputGeometry::new(128, 128, false),
    );
}

#[test]
fn large_sub_rect_keep_aspect_with_rotation() {
    let theta = -15.0f32.to_radians();
    assert_matches_gradient_reference(
        720,
        1280,
        &RegionDescriptor::new(0.5, 0.5, 1.5, 1.1, theta),
        &OutputGeometry::new(128, 128, true),
    );
}

#[test]
fn noop_except_range_downscale() {
    assert_matches_gradient_reference(
        64,
        128,
        &RegionDescriptor::full(),
        &OutputGeometry::new(32, 64, true),
    );
}

#[test]
fn region_fully_outside_image_replicates_corner() {
    let data = gradient_rgb(32, 32);
    let raster = Raster::from_rgb(&data, 32, 32).unwrap();
    // Entirely below and to the right of the image.
    let region = RegionDescriptor::new(3.0, 3.0, 0.5, 0.5, 0.0);
    let tensor = extract(
        &raster,
        &region,
        &OutputGeometry::new(8, 8, false),
        RangeSpec::new(0.0, 255.0),
    )
    .unwrap();

    let corner = &data[((31 * 32 + 31) * 3) as usize..][..3];
    for y in 0..8 {
        for x in 0..8 {
            for c in 0..3 {
                assert_eq!(tensor.get(x, y, c), corner[c] as f32);
            }
        }
    }
}

#[test]
fn tensor_values_respect_symmetric_range() {
    let data = gradient_rgb(50, 50);
    let raster = Raster::from_rgb(&data, 50, 50).unwrap();
    let tensor: Tensor = extract(
        &raster,
        &RegionDescriptor::new(0.3, 0.7, 1.4, 0.9, 1.1),
        &OutputGeometry::new(33, 17, true),
        RangeSpec::new(-1.0, 1.0),
    )
    .unwrap();
    assert!(tensor.as_slice().iter().all(|v| (-1.0..=1.0).contains(v)));
}
