//! Chromatic adaptation transforms (CAT).
//!
//! A chromatic adaptation transform compensates for a change of reference
//! white between two XYZ representations: a white object looks white both
//! under tungsten light and under daylight, and the transform models that
//! shift mathematically.
//!
//! # Supported Methods
//!
//! - [`BRADFORD`] - best overall accuracy, the usual default
//! - [`VON_KRIES`] - classic cone response model
//! - [`XYZ_SCALING`] - plain diagonal scaling, fast but crude
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{BRADFORD, Vec3};
//!
//! let d65 = Vec3::new(0.95047, 1.0, 1.08883);
//! let d50 = Vec3::new(0.96422, 1.0, 0.82521);
//!
//! let d65_to_d50 = BRADFORD.transform(d65, d50).unwrap();
//! let white = d65_to_d50 * d65;
//! assert!((white.x - d50.x).abs() < 1e-3);
//! ```

use crate::{Mat3, Vec3};

/// A cone-response matrix used to build chromatic adaptation transforms.
///
/// The matrix maps XYZ into a cone response domain; [`Adaptation::transform`]
/// combines it with source/target white points into a von Kries-style
/// adaptation matrix. The matrix itself is never applied to colors directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adaptation(pub Mat3);

/// Bradford cone-response matrix.
///
/// The most commonly used chromatic adaptation transform; also the one
/// Photoshop uses.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Adaptation = Adaptation(Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]));

/// Von Kries cone-response matrix (Hunt-Pointer-Estevez).
///
/// Simpler than Bradford but less accurate for large white point changes.
pub const VON_KRIES: Adaptation = Adaptation(Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]));

/// XYZ scaling (identity cone response).
///
/// Degenerates the adaptation to a diagonal scale of XYZ. Fast but
/// inaccurate for large white point differences.
pub const XYZ_SCALING: Adaptation = Adaptation(Mat3::IDENTITY);

impl Adaptation {
    /// Builds the adaptation matrix from a source to a target white point.
    ///
    /// Computes `A⁻¹ · diag(A·target / A·source) · A`: white points are
    /// taken into the cone response domain, scaled component-wise, and
    /// brought back. The result transforms XYZ colors viewed under the
    /// source illuminant into their appearance under the target illuminant.
    ///
    /// Returns `None` if the cone-response matrix is singular. All three
    /// built-in matrices are invertible.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_math::{BRADFORD, Vec3};
    ///
    /// let c = Vec3::new(0.98074, 1.0, 1.18232);
    /// let d65 = Vec3::new(0.95047, 1.0, 1.08883);
    /// let m = BRADFORD.transform(c, d65).unwrap();
    ///
    /// let adapted = m * Vec3::new(0.5, 0.4, 0.1);
    /// assert!((adapted.x - 0.4912).abs() < 1e-4);
    /// ```
    pub fn transform(&self, source_white: Vec3, target_white: Vec3) -> Option<Mat3> {
        let ma = self.0;
        let mai = ma.inverse()?;

        // White points in cone response space
        let sc = ma * source_white;
        let dc = ma * target_white;

        let scale = Mat3::diagonal(dc.x / sc.x, dc.y / sc.y, dc.z / sc.z);

        Some(mai * scale * ma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);
    const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

    #[test]
    fn test_bradford_maps_white_to_white() {
        let m = BRADFORD.transform(D65, D50).unwrap();
        let w = m * D65;
        assert_abs_diff_eq!(w.x, D50.x, epsilon = 1e-6);
        assert_abs_diff_eq!(w.y, D50.y, epsilon = 1e-6);
        assert_abs_diff_eq!(w.z, D50.z, epsilon = 1e-6);
    }

    #[test]
    fn test_adapt_roundtrip() {
        let fwd = BRADFORD.transform(D65, D50).unwrap();
        let rev = BRADFORD.transform(D50, D65).unwrap();
        let roundtrip = rev * fwd;

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (roundtrip.m[i][j] - expected).abs() < 1e-9,
                    "roundtrip[{}][{}] = {}",
                    i,
                    j,
                    roundtrip.m[i][j]
                );
            }
        }
    }

    #[test]
    fn test_adapt_same_white_is_identity() {
        let m = BRADFORD.transform(D65, D65).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((m.m[i][j] - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_xyz_scaling_is_diagonal() {
        let m = XYZ_SCALING.transform(D65, D50).unwrap();
        assert!((m.m[0][0] - D50.x / D65.x).abs() < 1e-12);
        assert!((m.m[1][1] - 1.0).abs() < 1e-12);
        assert!((m.m[2][2] - D50.z / D65.z).abs() < 1e-12);
        assert_eq!(m.m[0][1], 0.0);
        assert_eq!(m.m[1][0], 0.0);
    }

    #[test]
    fn test_von_kries_invertible() {
        assert!(VON_KRIES.0.inverse().is_some());
    }
}
