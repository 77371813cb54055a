//! CIE color-difference (delta-E) formulas.
//!
//! Three generations of perceptual distance over [`Lab`] points:
//!
//! - [`cie76`] - plain Euclidean distance; fast, uneven in blues and
//!   desaturated regions
//! - [`cie94`] - weighted (dL, dC, dH) distance with application presets
//! - [`cie2000`] - the CIEDE2000 formula with hue rotation and the
//!   grey-axis discontinuity handling
//!
//! All functions are symmetric in their deterministic behavior: calling
//! twice with the same arguments yields identical results. CIEDE2000 is not
//! symmetric in its arguments by definition (the standard designates a
//! reference and a sample).

use crate::types::Lab;
use std::f64::consts::PI;

/// 25^7, the chroma normalization constant of CIEDE2000.
const POW25_7: f64 = 6103515625.0;

#[inline]
fn sqr(v: f64) -> f64 {
    v * v
}

/// Weighting parameters for [`cie2000`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KLCh {
    /// Lightness divisor weight
    pub kl: f64,
    /// Chroma divisor weight
    pub kc: f64,
    /// Hue divisor weight
    pub kh: f64,
}

impl Default for KLCh {
    /// The unit weights used for almost all applications.
    fn default() -> Self {
        Self {
            kl: 1.0,
            kc: 1.0,
            kh: 1.0,
        }
    }
}

/// Weighting parameters for [`cie94`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KLCh94 {
    /// Lightness divisor weight
    pub kl: f64,
    /// Chroma divisor weight
    pub kc: f64,
    /// Hue divisor weight
    pub kh: f64,
    /// Chroma scaling factor
    pub k1: f64,
    /// Hue scaling factor
    pub k2: f64,
}

/// CIE94 weights for graphic arts (most uses except textiles).
pub const KLCH94_GRAPHIC_ARTS: KLCh94 = KLCh94 {
    kl: 1.0,
    kc: 1.0,
    kh: 1.0,
    k1: 0.045,
    k2: 0.015,
};

/// CIE94 weights for textiles.
pub const KLCH94_TEXTILES: KLCh94 = KLCh94 {
    kl: 2.0,
    kc: 1.0,
    kh: 1.0,
    k1: 0.048,
    k2: 0.014,
};

/// Computes the CIEDE2000 color difference of two L*a*b* colors.
///
/// `klch` configures the divisor weights; this is almost always
/// `KLCh::default()`.
///
/// The mean hue uses the standard's discontinuity correction: when the raw
/// angular difference between the two hue angles exceeds pi, the mean is
/// shifted by pi and the hue delta wrapped by 2*pi. This is the formula's
/// only non-smooth branch, and for near-grey colors (a and b both close to
/// zero) different platform `atan2` implementations can land on opposite
/// sides of it; compare against published vectors with a tolerance rather
/// than bit-for-bit.
///
/// # Example
///
/// ```rust
/// use chroma_color::Lab;
/// use chroma_color::deltae::{KLCh, cie2000};
///
/// let std = Lab::new(50.0, 2.6772, -79.7751);
/// let sample = Lab::new(50.0, 0.0, -82.7485);
/// let de = cie2000(std, sample, &KLCh::default());
/// assert!((de - 2.0425).abs() < 1e-4);
/// ```
pub fn cie2000(std: Lab, sample: Lab, klch: &KLCh) -> f64 {
    let l_bar_prime = (std.l() + sample.l()) * 0.5;
    let c1 = (std.a() * std.a() + std.b() * std.b()).sqrt();
    let c2 = (sample.a() * sample.a() + sample.b() * sample.b()).sqrt();
    let c_bar = (c1 + c2) * 0.5;

    let mut c_bar7 = c_bar * c_bar * c_bar;
    c_bar7 *= c_bar7 * c_bar;
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let a1_prime = (1.0 + g) * std.a();
    let a2_prime = (1.0 + g) * sample.a();

    let c1_prime = (a1_prime * a1_prime + std.b() * std.b()).sqrt();
    let c2_prime = (a2_prime * a2_prime + sample.b() * sample.b()).sqrt();

    let c_bar_prime = (c1_prime + c2_prime) * 0.5;

    let mut h1_prime = std.b().atan2(a1_prime);
    if h1_prime < 0.0 {
        h1_prime += 2.0 * PI;
    }
    let mut h2_prime = sample.b().atan2(a2_prime);
    if h2_prime < 0.0 {
        h2_prime += 2.0 * PI;
    }

    // Mean hue with the wraparound correction at the 0/360 boundary
    let mut h_bar_prime = (h1_prime + h2_prime) * 0.5;
    let mut dh_prime = h2_prime - h1_prime;
    if dh_prime.abs() > PI {
        h_bar_prime += PI;
        if h2_prime <= h1_prime {
            dh_prime += 2.0 * PI;
        } else {
            dh_prime -= 2.0 * PI;
        }
    }

    let t = 1.0 - 0.17 * (h_bar_prime - PI / 6.0).cos() + 0.24 * (2.0 * h_bar_prime).cos()
        + 0.32 * (3.0 * h_bar_prime + PI / 30.0).cos()
        - 0.20 * (4.0 * h_bar_prime - 63.0 * PI / 180.0).cos();

    let dl_prime = sample.l() - std.l();
    let dc_prime = c2_prime - c1_prime;
    let dh_prime = 2.0 * (c1_prime * c2_prime).sqrt() * (dh_prime / 2.0).sin();

    let l_bar_m50_sqr = sqr(l_bar_prime - 50.0);
    let sl = 1.0 + (0.015 * l_bar_m50_sqr) / (20.0 + l_bar_m50_sqr).sqrt();
    let sc = 1.0 + 0.045 * c_bar_prime;
    let sh = 1.0 + 0.015 * c_bar_prime * t;

    let h_bar_m = (180.0 / PI * h_bar_prime - 275.0) / 25.0;
    let d_theta = PI / 6.0 * (-h_bar_m * h_bar_m).exp();
    let mut c_bar_prime7 = c_bar_prime * c_bar_prime * c_bar_prime;
    c_bar_prime7 *= c_bar_prime7 * c_bar_prime;
    let rc = (c_bar_prime7 / (c_bar_prime7 + POW25_7)).sqrt();
    let rt = -2.0 * rc * (2.0 * d_theta).sin();

    (sqr(dl_prime / (klch.kl * sl))
        + sqr(dc_prime / (klch.kc * sc))
        + sqr(dh_prime / (klch.kh * sh))
        + (dc_prime / (klch.kc * sc)) * (dh_prime / (klch.kh * sh)) * rt)
        .sqrt()
}

/// Computes the CIE76 color difference: Euclidean distance in Lab space.
///
/// # Example
///
/// ```rust
/// use chroma_color::Lab;
/// use chroma_color::deltae::cie76;
///
/// let de = cie76(Lab::new(50.0, 0.0, 0.0), Lab::new(50.0, 3.0, 4.0));
/// assert!((de - 5.0).abs() < 1e-12);
/// ```
pub fn cie76(std: Lab, sample: Lab) -> f64 {
    (sqr(std.l() - sample.l()) + sqr(std.a() - sample.a()) + sqr(std.b() - sample.b())).sqrt()
}

/// Computes the CIE94 color difference of two L*a*b* colors.
///
/// A weighted distance on (dL, dC, dH); the chroma and hue scaling factors
/// are derived from the reference color's chroma, so the formula is not
/// symmetric in its arguments. Use [`KLCH94_GRAPHIC_ARTS`] or
/// [`KLCH94_TEXTILES`] for the published presets.
pub fn cie94(std: Lab, sample: Lab, klch: &KLCh94) -> f64 {
    let dl_sq = sqr(std.l() - sample.l());
    let c1 = (sqr(std.a()) + sqr(std.b())).sqrt();
    let c2 = (sqr(sample.a()) + sqr(sample.b())).sqrt();

    let dc_sq = sqr(c1 - c2);
    let dh_sq = sqr(std.a() - sample.a()) + sqr(std.b() - sample.b()) - dc_sq;

    let sc = 1.0 + klch.k1 * c1;
    let sh = 1.0 + klch.k2 * c1;

    (dl_sq / sqr(klch.kl) + dc_sq / sqr(klch.kc * sc) + dh_sq / sqr(klch.kh * sh)).sqrt()
}
