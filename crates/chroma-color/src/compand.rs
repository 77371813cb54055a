//! Compander and scaler strategies.
//!
//! Both strategies are two-phase: an unbound selector names the curve, and
//! [`Compander::bind`] / [`Scaler::bind`] attach it to a working space,
//! producing a distinct bound value that carries any precomputed state (the
//! gamma exponents, the shared 8-bit decode table). Only the bound types
//! expose the conversion methods, so using an unbound strategy does not
//! type-check.
//!
//! A [`BoundCompander`] converts between linear and gamma-encoded RGB. A
//! [`BoundScaler`] converts between an external integer range and the
//! normalized [0, 1] range; the inverse direction clamps to [0, 1] before
//! scaling back, so out-of-gamut values land on the range edge rather than
//! wrapping.

use crate::space::RgbSpace;
use chroma_math::Vec3;
use chroma_transfer::{bt2020, gamma, lstar, srgb, srgb8};

/// Selects a companding curve for a working space.
///
/// Bind to a space with [`Compander::bind`] before converting; the selector
/// itself has no conversion methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compander {
    /// Pure power law, exponent taken from the bound space's gamma.
    Gamma,
    /// The sRGB piecewise curve.
    Srgb,
    /// Table-driven 8-bit sRGB. Fuses scaling with the curve: input is
    /// 8-bit code values, so this must not be combined with a scaler.
    SrgbFast,
    /// The CIE L* response curve (ECI RGB).
    Lstar,
    /// The ITU-R BT.2020 curve.
    Bt2020,
}

impl Compander {
    /// Binds this compander to a working space.
    ///
    /// Reads whatever the curve needs from the space (currently the gamma
    /// value) and, for [`Compander::SrgbFast`], takes a reference to the
    /// process-wide decode table, computing it on first use.
    pub fn bind(self, space: &RgbSpace) -> BoundCompander {
        match self {
            Compander::Gamma => BoundCompander::Gamma {
                gamma: space.gamma,
                igamma: 1.0 / space.gamma,
            },
            Compander::Srgb => BoundCompander::Srgb,
            Compander::SrgbFast => BoundCompander::SrgbFast {
                table: srgb8::decode_table(),
            },
            Compander::Lstar => BoundCompander::Lstar,
            Compander::Bt2020 => BoundCompander::Bt2020,
        }
    }
}

/// A compander bound to a working space, ready to convert.
#[derive(Debug, Clone, Copy)]
pub enum BoundCompander {
    /// Power law with both exponents precomputed at bind time.
    Gamma {
        /// Decode exponent
        gamma: f64,
        /// Encode exponent (1/gamma)
        igamma: f64,
    },
    /// The sRGB piecewise curve.
    Srgb,
    /// Table-driven 8-bit sRGB decode; exact encode rounded to 8 bits.
    SrgbFast {
        /// The shared 256-entry decode table
        table: &'static [f64; 256],
    },
    /// The CIE L* response curve.
    Lstar,
    /// The ITU-R BT.2020 curve.
    Bt2020,
}

impl BoundCompander {
    /// Encodes a linear RGB point into working RGB.
    pub fn encode(&self, p: Vec3) -> Vec3 {
        match self {
            // |v|^(1/gamma) is the power law with the precomputed inverse exponent
            BoundCompander::Gamma { igamma: ig, .. } => p.map(|v| gamma::eotf(v, *ig)),
            BoundCompander::Srgb => p.map(srgb::oetf),
            BoundCompander::SrgbFast { .. } => p.map(srgb8::encode),
            BoundCompander::Lstar => p.map(lstar::oetf),
            BoundCompander::Bt2020 => p.map(bt2020::oetf),
        }
    }

    /// Decodes a working RGB point into linear RGB.
    pub fn decode(&self, p: Vec3) -> Vec3 {
        match self {
            BoundCompander::Gamma { gamma: g, .. } => p.map(|v| gamma::eotf(v, *g)),
            BoundCompander::Srgb => p.map(srgb::eotf),
            BoundCompander::SrgbFast { table } => {
                p.map(|v| table[(v as i64).clamp(0, 255) as usize])
            }
            BoundCompander::Lstar => p.map(lstar::eotf),
            BoundCompander::Bt2020 => p.map(bt2020::eotf),
        }
    }
}

/// Selects an integer-range scaling for working RGB points.
///
/// Applied before linearization on the forward path and after companding on
/// the inverse path. Bind with [`Scaler::bind`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaler {
    /// [0, 255] to [0, 1], clamping out-of-range values on the way back.
    Bits8,
    /// [0, 65535] to [0, 1], clamping out-of-range values on the way back.
    Bits16,
}

impl Scaler {
    /// Binds this scaler to a working space.
    pub fn bind(self, _space: &RgbSpace) -> BoundScaler {
        let max = match self {
            Scaler::Bits8 => 255.0,
            Scaler::Bits16 => 65535.0,
        };
        BoundScaler { max }
    }
}

/// A scaler bound to a working space, ready to convert.
#[derive(Debug, Clone, Copy)]
pub struct BoundScaler {
    max: f64,
}

impl BoundScaler {
    /// Scales an integer-range point into [0, 1].
    #[inline]
    pub fn scale(&self, p: Vec3) -> Vec3 {
        p / self.max
    }

    /// Scales a [0, 1] point back to the integer range, clamping first and
    /// rounding to the nearest integer code.
    #[inline]
    pub fn scale_inv(&self, p: Vec3) -> Vec3 {
        p.clamp01().map(|v| (v * self.max + 0.5).floor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::{ADOBE_RGB, SRGB, UHDTV_RGB};

    #[test]
    fn test_gamma_bind_reads_space_gamma() {
        let c = Compander::Gamma.bind(&ADOBE_RGB);
        let p = Vec3::splat(0.5);
        let linear = c.decode(p);
        assert!((linear.x - 0.5f64.powf(ADOBE_RGB.gamma)).abs() < 1e-15);
        let back = c.encode(linear);
        assert!((back.x - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_srgb_roundtrip() {
        let c = Compander::Srgb.bind(&SRGB);
        let p = Vec3::new(0.2, 0.4, 0.8);
        let back = c.encode(c.decode(p));
        assert!((back.x - 0.2).abs() < 1e-12);
        assert!((back.y - 0.4).abs() < 1e-12);
        assert!((back.z - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_srgb_fast_roundtrip_8bit() {
        let c = Compander::SrgbFast.bind(&SRGB);
        let p = Vec3::new(15.0, 200.0, 39.0);
        let back = c.encode(c.decode(p));
        assert_eq!(back, p);
    }

    #[test]
    fn test_srgb_fast_matches_exact_path() {
        let fast = Compander::SrgbFast.bind(&SRGB);
        let exact = Compander::Srgb.bind(&SRGB);
        let fast_linear = fast.decode(Vec3::splat(200.0));
        let exact_linear = exact.decode(Vec3::splat(200.0 / 255.0));
        assert!((fast_linear.x - exact_linear.x).abs() < 1e-15);
    }

    #[test]
    fn test_bt2020_bind() {
        let c = Compander::Bt2020.bind(&UHDTV_RGB);
        let p = Vec3::splat(0.5);
        let back = c.encode(c.decode(p));
        assert!((back.x - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_scaler_8bit() {
        let s = Scaler::Bits8.bind(&SRGB);
        let scaled = s.scale(Vec3::new(0.0, 127.5, 255.0));
        assert_eq!(scaled, Vec3::new(0.0, 0.5, 1.0));
        let back = s.scale_inv(scaled);
        assert_eq!(back, Vec3::new(0.0, 128.0, 255.0));
    }

    #[test]
    fn test_scaler_inv_clamps() {
        let s = Scaler::Bits8.bind(&SRGB);
        let back = s.scale_inv(Vec3::new(-0.5, 0.5, 1.5));
        assert_eq!(back, Vec3::new(0.0, 128.0, 255.0));
    }

    #[test]
    fn test_scaler_16bit() {
        let s = Scaler::Bits16.bind(&SRGB);
        let back = s.scale_inv(s.scale(Vec3::splat(65535.0)));
        assert_eq!(back, Vec3::splat(65535.0));
    }
}
