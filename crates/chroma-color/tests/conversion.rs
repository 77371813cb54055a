//! Conversion validation tests.
//!
//! Validates the transformer pipelines against reference vectors computed
//! with Lindbloom's calculator and cross-checked with python-colormath.

use chroma_color::{
    Lab, LabTransformer, LCh, Luv, LuvTransformer, Rgb, RgbTransformer, Scaler, Xyz, space,
};
use chroma_math::{BRADFORD, Vec3};
use chroma_primaries as primaries;

fn assert_vec3_near(a: Vec3, b: Vec3, tol: f64) {
    assert!(
        (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol && (a.z - b.z).abs() < tol,
        "{:?} !~ {:?} (tol {})",
        a,
        b,
        tol
    );
}

#[test]
fn srgb_8bit_to_xyz_d50() {
    let t = RgbTransformer::builder(&space::SRGB)
        .adaptation(BRADFORD)
        .scaler(Scaler::Bits8)
        .out_scale(100.0)
        .build()
        .unwrap();

    let orig = Rgb::new(123.0, 200.0, 50.0);
    let xyz = t.convert(orig);
    assert_vec3_near(xyz.0, Vec3::new(31.334, 46.006, 8.162), 1e-3);

    // Round trip back to the exact 8-bit codes
    let back = t.invert(xyz);
    assert_eq!(back, orig);
}

#[test]
fn srgb_default_target_is_d50() {
    let implicit = RgbTransformer::builder(&space::SRGB)
        .adaptation(BRADFORD)
        .scaler(Scaler::Bits8)
        .out_scale(100.0)
        .build()
        .unwrap();
    let explicit = RgbTransformer::builder(&space::SRGB)
        .adaptation(BRADFORD)
        .target_illuminant(&primaries::D50)
        .scaler(Scaler::Bits8)
        .out_scale(100.0)
        .build()
        .unwrap();

    let rgb = Rgb::new(123.0, 200.0, 50.0);
    assert_eq!(implicit.convert(rgb), explicit.convert(rgb));
}

#[test]
fn srgb_8bit_to_xyz_d65() {
    let t = RgbTransformer::builder(&space::SRGB)
        .adaptation(BRADFORD)
        .target_illuminant(&primaries::D65)
        .scaler(Scaler::Bits8)
        .out_scale(100.0)
        .build()
        .unwrap();

    let xyz = t.convert(Rgb::new(123.0, 200.0, 50.0));
    assert_vec3_near(xyz.0, Vec3::new(29.398, 45.748, 10.298), 1e-3);
}

#[test]
fn adobe_rgb_to_xyz() {
    let rgb = Rgb::new(123.0, 200.0, 50.0);

    let d65 = RgbTransformer::builder(&space::ADOBE_RGB)
        .adaptation(BRADFORD)
        .target_illuminant(&primaries::D65)
        .scaler(Scaler::Bits8)
        .build()
        .unwrap();
    assert_vec3_near(d65.convert(rgb).0, Vec3::new(0.230, 0.430, 0.074), 1e-3);

    let d50 = RgbTransformer::builder(&space::ADOBE_RGB)
        .adaptation(BRADFORD)
        .scaler(Scaler::Bits8)
        .build()
        .unwrap();
    assert_vec3_near(d50.convert(rgb).0, Vec3::new(0.247, 0.431, 0.060), 1e-3);
}

#[test]
fn all_spaces_roundtrip() {
    let spaces = [
        &space::SRGB,
        &space::ADOBE_RGB,
        &space::APPLE_RGB,
        &space::BEST_RGB,
        &space::BETA_RGB,
        &space::BRUCE_RGB,
        &space::CIE_RGB,
        &space::COLOR_MATCH_RGB,
        &space::ECI_RGB,
        &space::NTSC_RGB,
        &space::PAL_SECAM_RGB,
        &space::PRO_PHOTO_RGB,
        &space::SMPTE_C_RGB,
        &space::UHDTV_RGB,
        &space::WIDE_GAMUT_RGB,
    ];

    for ws in spaces {
        let t = RgbTransformer::builder(ws).build().unwrap();
        for &(r, g, b) in &[
            (0.0, 0.0, 0.0),
            (1.0, 1.0, 1.0),
            (0.25, 0.5, 0.75),
            (0.9, 0.1, 0.4),
        ] {
            let rgb = Rgb::new(r, g, b);
            let back = t.invert(t.convert(rgb));
            assert_vec3_near(back.0, rgb.0, 1e-3);
        }
    }
}

#[test]
fn fast_srgb_roundtrips_to_8bit_codes() {
    let t = RgbTransformer::builder(&space::SRGB)
        .compander(chroma_color::Compander::SrgbFast)
        .build()
        .unwrap();

    for code in [0.0, 1.0, 17.0, 123.0, 200.0, 254.0, 255.0] {
        let rgb = Rgb::new(code, code, code);
        let back = t.invert(t.convert(rgb));
        assert_eq!(back, rgb, "code {}", code);
    }
}

#[test]
fn fast_srgb_matches_exact_pipeline() {
    let fast = RgbTransformer::builder(&space::SRGB)
        .compander(chroma_color::Compander::SrgbFast)
        .build()
        .unwrap();
    let exact = RgbTransformer::builder(&space::SRGB)
        .scaler(Scaler::Bits8)
        .build()
        .unwrap();

    let a = fast.convert(Rgb::new(123.0, 200.0, 50.0));
    let b = exact.convert(Rgb::new(123.0, 200.0, 50.0));
    assert_vec3_near(a.0, b.0, 1e-12);
}

#[test]
fn xyz_to_lab() {
    let t = LabTransformer::new(&primaries::D50, 1.0);
    let lab = t.invert(Xyz::new(0.1, 0.2, 0.3));
    assert_vec3_near(lab.0, Vec3::new(51.837, -57.486, -25.780), 1e-3);
}

#[test]
fn lab_to_xyz() {
    let t = LabTransformer::new(&primaries::D50, 1.0);
    let xyz = t.convert(Lab::new(1.807, -3.749, -2.547));
    assert_vec3_near(xyz.0, Vec3::new(0.001, 0.002, 0.003), 1e-3);
}

#[test]
fn xyz_to_luv() {
    let t = LuvTransformer::new(&primaries::D50, 1.0);
    let luv = t.invert(Xyz::new(0.1, 0.2, 0.3));
    assert_vec3_near(luv.0, Vec3::new(51.837, -73.561, -25.657), 1e-3);
}

#[test]
fn luv_to_xyz() {
    let t = LuvTransformer::new(&primaries::D50, 1.0);
    let xyz = t.convert(Luv::new(1.807, -2.564, -0.894));
    assert_vec3_near(xyz.0, Vec3::new(0.001, 0.002, 0.003), 1e-3);
}

#[test]
fn lab_xyz_roundtrip_grid() {
    let t = LabTransformer::default();
    for xi in 0..=4 {
        for yi in 0..=4 {
            for zi in 0..=4 {
                let xyz = Xyz::new(xi as f64 * 0.5, yi as f64 * 0.5, zi as f64 * 0.5);
                let back = t.convert(t.invert(xyz));
                assert_vec3_near(back.0, xyz.0, 1e-3);
            }
        }
    }
}

#[test]
fn luv_xyz_roundtrip_grid() {
    // X = 0 and Y = 0 sit on the u'/v' singularities and are covered by the
    // degenerate-case tests instead
    let t = LuvTransformer::default();
    for xi in 1..=4 {
        for yi in 1..=4 {
            for zi in 0..=4 {
                let xyz = Xyz::new(xi as f64 * 0.5, yi as f64 * 0.5, zi as f64 * 0.5);
                let back = t.convert(t.invert(xyz));
                assert_vec3_near(back.0, xyz.0, 1e-3);
            }
        }
    }
}

#[test]
fn lab_to_lch() {
    let lch = Lab::new(1.807, -3.749, -2.547).lch();
    assert_vec3_near(lch.0, Vec3::new(1.807, 4.532, 214.191), 1e-3);
}

#[test]
fn luv_to_lchuv() {
    let lchuv = Luv::new(1.807, -2.564, -0.894).lchuv();
    assert_vec3_near(lchuv.0, Vec3::new(1.807, 2.715, 199.222), 1e-3);
}

#[test]
fn lchuv_to_luv() {
    let luv = chroma_color::LChuv::new(1.807, 2.715, 199.228).luv();
    assert_vec3_near(luv.0, Vec3::new(1.807, -2.564, -0.894), 1e-3);
}

#[test]
fn bradford_adaptation_c_to_d65() {
    let am = BRADFORD
        .transform(primaries::C.xyz, primaries::D65.xyz)
        .unwrap();
    let adapted = Xyz::new(0.5, 0.4, 0.1).transform(&am);
    assert_vec3_near(adapted.0, Vec3::new(0.4912, 0.3998, 0.0927), 1e-4);
}

#[test]
fn degenerate_black_lch_through_srgb() {
    let lab2xyz = LabTransformer::new(&primaries::D50, 0.0);
    let xyz2rgb = RgbTransformer::builder(&space::SRGB).build().unwrap();

    let rgb = xyz2rgb.invert(lab2xyz.convert(LCh::new(0.0, 0.0, 0.0).lab()));
    assert_eq!(rgb, Rgb::new(0.0, 0.0, 0.0));
}
