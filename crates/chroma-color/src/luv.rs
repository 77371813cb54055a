//! CIELUV transformer.
//!
//! [`LuvTransformer`] converts between XYZ and L*u*v* relative to a
//! reference illuminant. The white point chromaticity (u0, v0) is
//! precomputed at construction; the L channel uses the same CIE breakpoints
//! as Lab, applied to the Y ratio.
//!
//! # Degenerate black
//!
//! At L = 0 the forward direction's u'/v' recovery divides by zero, so
//! black is special-cased to the XYZ origin instead of propagating NaN.
//! The inverse direction guards the u'/v' denominator the same way, so
//! black round-trips exactly.

use crate::types::{Luv, Xyz};
use crate::{CIE_EPS, CIE_KAPPA};
use chroma_math::Vec3;
use chroma_primaries::{D50, IlluminantRef};

/// Transforms between CIELUV and XYZ for one reference illuminant.
///
/// Immutable after construction and safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct LuvTransformer {
    white: Vec3,
    u0: f64,
    v0: f64,
}

impl LuvTransformer {
    /// Creates a transformer relative to the given illuminant.
    ///
    /// `out_scale` matches the XYZ scaling of the producing side, as for
    /// [`LabTransformer::new`](crate::LabTransformer::new); 0 means
    /// unscaled XYZ. The white chromaticity (u0, v0) is scale-invariant.
    pub fn new(illuminant: &IlluminantRef, out_scale: f64) -> Self {
        let scale = if out_scale == 0.0 { 1.0 } else { out_scale };
        let wp = illuminant.xyz;
        let dn = wp.x + 15.0 * wp.y + 3.0 * wp.z;
        Self {
            white: wp * scale,
            u0: 4.0 * wp.x / dn,
            v0: 9.0 * wp.y / dn,
        }
    }

    /// Converts a Luv point to XYZ.
    ///
    /// L = 0 maps to the origin; see the module docs.
    pub fn convert(&self, luv: Luv) -> Xyz {
        let l = luv.l();
        if l == 0.0 {
            return Xyz(Vec3::ZERO);
        }

        let yr = if l > CIE_EPS * CIE_KAPPA {
            let fy = (l + 16.0) / 116.0;
            fy * fy * fy
        } else {
            l / CIE_KAPPA
        };
        let y = yr * self.white.y;

        // Recover u'/v' from (L, u, v), then solve the two-equation linear
        // system for X and Z given Y
        let a = ((52.0 * l) / (luv.u() + 13.0 * l * self.u0) - 1.0) / 3.0;
        let d = y * ((39.0 * l) / (luv.v() + 13.0 * l * self.v0) - 5.0);
        let b = -5.0 * y;
        let c = -1.0 / 3.0;

        let x = (d - b) / (a - c);
        Xyz(Vec3::new(x, y, x * a + b))
    }

    /// Converts an XYZ point to Luv.
    pub fn invert(&self, xyz: Xyz) -> Luv {
        let d = xyz.x() + 15.0 * xyz.y() + 3.0 * xyz.z();

        let (up, vp) = if d > 0.0 {
            (4.0 * xyz.x() / d, 9.0 * xyz.y() / d)
        } else {
            (0.0, 0.0)
        };

        let yr = xyz.y() / self.white.y;
        let l = if yr > CIE_EPS {
            116.0 * yr.cbrt() - 16.0
        } else {
            CIE_KAPPA * yr
        };

        Luv::new(l, 13.0 * l * (up - self.u0), 13.0 * l * (vp - self.v0))
    }
}

impl Default for LuvTransformer {
    /// D50 reference white, unscaled XYZ.
    fn default() -> Self {
        Self::new(&D50, 0.0)
    }
}
