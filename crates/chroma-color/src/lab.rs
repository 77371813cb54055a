//! CIELAB transformer.
//!
//! [`LabTransformer`] converts between XYZ and L*a*b* relative to a
//! reference illuminant. Both directions branch on the CIE breakpoints
//! ([`CIE_EPS`] on the ratio side, [`CIE_KAPPA`] * [`CIE_EPS`] on the L
//! side) so that very dark colors use a linear segment instead of riding
//! the cube root's steep slope near zero.
//!
//! # Example
//!
//! ```rust
//! use chroma_color::{LabTransformer, Xyz};
//!
//! let t = LabTransformer::default(); // D50, unscaled
//! let lab = t.invert(Xyz::new(0.1, 0.2, 0.3));
//! assert!((lab.l() - 51.837).abs() < 1e-3);
//! ```

use crate::types::{Lab, Xyz};
use crate::{CIE_EPS, CIE_KAPPA};
use chroma_math::Vec3;
use chroma_primaries::{D50, IlluminantRef};

/// Transforms between CIELAB and XYZ for one reference illuminant.
///
/// Immutable after construction and safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct LabTransformer {
    white: Vec3,
}

impl LabTransformer {
    /// Creates a transformer relative to the given illuminant.
    ///
    /// `out_scale` matches the XYZ scaling of the producing side: pass the
    /// same value given to an RGB transformer's out-scale (e.g. 100), or 0
    /// to work with unscaled XYZ in [0, 1].
    pub fn new(illuminant: &IlluminantRef, out_scale: f64) -> Self {
        let scale = if out_scale == 0.0 { 1.0 } else { out_scale };
        Self {
            white: illuminant.xyz * scale,
        }
    }

    /// Converts a Lab point to XYZ.
    pub fn convert(&self, lab: Lab) -> Xyz {
        let fy = (lab.l() + 16.0) / 116.0;
        let fx = 0.002 * lab.a() + fy;
        let fz = fy - 0.005 * lab.b();

        let fx3 = fx * fx * fx;
        let fz3 = fz * fz * fz;

        let xr = if fx3 > CIE_EPS {
            fx3
        } else {
            (116.0 * fx - 16.0) / CIE_KAPPA
        };
        let yr = if lab.l() > CIE_KAPPA * CIE_EPS {
            fy * fy * fy
        } else {
            lab.l() / CIE_KAPPA
        };
        let zr = if fz3 > CIE_EPS {
            fz3
        } else {
            (116.0 * fz - 16.0) / CIE_KAPPA
        };

        Xyz(Vec3::new(xr, yr, zr) * self.white)
    }

    /// Converts an XYZ point to Lab.
    pub fn invert(&self, xyz: Xyz) -> Lab {
        let r = xyz.0 / self.white;

        let f = |v: f64| {
            if v > CIE_EPS {
                v.cbrt()
            } else {
                (CIE_KAPPA * v + 16.0) / 116.0
            }
        };
        let (fx, fy, fz) = (f(r.x), f(r.y), f(r.z));

        Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }
}

impl Default for LabTransformer {
    /// D50 reference white, unscaled XYZ.
    fn default() -> Self {
        Self::new(&D50, 0.0)
    }
}
