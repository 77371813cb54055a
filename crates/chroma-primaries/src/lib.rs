//! # chroma-primaries
//!
//! Chromaticity primaries, standard illuminants, and RGB-XYZ matrix
//! generation.
//!
//! An RGB working space is pinned down by the CIE xy chromaticities of its
//! three primaries plus a reference white. This crate holds those inputs and
//! derives the 3x3 matrix mapping linear RGB in that space to CIE XYZ.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::Vec3;
//! use chroma_primaries::{D65, XyyPrimary, rgb_to_xyz_matrix};
//!
//! // sRGB / Rec.709 primaries
//! let srgb = XyyPrimary {
//!     xr: 0.64, yr: 0.33,
//!     xg: 0.30, yg: 0.60,
//!     xb: 0.15, yb: 0.06,
//! };
//!
//! let m = rgb_to_xyz_matrix(&srgb, D65.xyz).unwrap();
//!
//! // White (1,1,1) maps to the reference white
//! let white = m * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-9);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-math`] - matrix operations
//!
//! # Used By
//!
//! - `chroma-color` - working-space descriptors and RGB transforms

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod illuminant;

pub use illuminant::*;

use chroma_math::{Mat3, Vec3};

/// The xy chromaticities of an RGB space's three additive primaries.
///
/// Listed in R, G, B order. Together with a reference white these fully
/// determine the linear RGB to XYZ transform of the space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyyPrimary {
    /// Red primary x chromaticity
    pub xr: f64,
    /// Red primary y chromaticity
    pub yr: f64,
    /// Green primary x chromaticity
    pub xg: f64,
    /// Green primary y chromaticity
    pub yg: f64,
    /// Blue primary x chromaticity
    pub xb: f64,
    /// Blue primary y chromaticity
    pub yb: f64,
}

/// Converts an xy chromaticity to XYZ with Y normalized to 1.
///
/// A y of zero has no luminance to normalize against; returning zero makes
/// the primary matrix singular so the caller reports it instead of pushing
/// infinities through the solve.
#[inline]
fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-14 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the linear RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Lift each primary's xy chromaticity to XYZ with Y = 1, giving the
///    columns (x/y, 1, (1-x-y)/y).
/// 2. Solve `M * S = W` for the per-primary scale factors S, where W is the
///    reference white in XYZ.
/// 3. Scale each column of M by its factor.
///
/// The result maps linear RGB in this working space to XYZ under the
/// space's own reference white: (1,1,1) lands exactly on W.
///
/// Returns `None` when the primary matrix is singular (collinear or
/// degenerate chromaticities) - a configuration error surfaced at
/// construction time, never during conversion.
pub fn rgb_to_xyz_matrix(primaries: &XyyPrimary, white: Vec3) -> Option<Mat3> {
    let r_xyz = xy_to_xyz(primaries.xr, primaries.yr);
    let g_xyz = xy_to_xyz(primaries.xg, primaries.yg);
    let b_xyz = xy_to_xyz(primaries.xb, primaries.yb);

    // Primaries as columns
    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);

    // Solve for scaling factors: M * S = W  =>  S = M^-1 * W
    let s = m.inverse()? * white;

    Some(Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z))
}
