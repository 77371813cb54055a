//! CIE L* transfer function.
//!
//! The L*-shaped response used by ECI RGB and other RGB workflows calibrated
//! to perceptual lightness. The curve is the CIE lightness relation itself:
//! a linear toe below the CIE breakpoint and a cube-root law above it, with
//! the decode branch using the expanded inverse cubic `((100v + 16)/116)^3`
//! in closed form.
//!
//! Negative inputs are mirrored: `f(-v) == -f(v)`.

/// CIE epsilon (216/24389), the linear/cubic breakpoint on the linear side.
const EPS: f64 = 216.0 / 24389.0;

/// L* EOTF: decodes L*-encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.08:
///     L = 2700 * V / 24389
/// else:
///     L = (1e6*V^3 + 480000*V^2 + 76800*V + 4096) / 1560896
/// ```
///
/// The polynomial is `((100V + 16)/116)^3` multiplied out.
///
/// # Example
///
/// ```rust
/// use chroma_transfer::lstar::eotf;
///
/// // The breakpoint maps back to CIE epsilon
/// let linear = eotf(0.08);
/// assert!((linear - 216.0 / 24389.0).abs() < 1e-12);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    let sign = if v < 0.0 { -1.0 } else { 1.0 };
    let c = v.abs();
    let l = if c <= 0.08 {
        2700.0 * c / 24389.0
    } else {
        (((1_000_000.0 * c + 480_000.0) * c + 76_800.0) * c + 4096.0) / 1_560_896.0
    };
    sign * l
}

/// L* OETF: encodes linear light with the CIE lightness relation.
///
/// # Formula
///
/// ```text
/// if L <= 216/24389:
///     V = L * 24389 / 2700
/// else:
///     V = 1.16 * cbrt(L) - 0.16
/// ```
///
/// # Example
///
/// ```rust
/// use chroma_transfer::lstar::oetf;
///
/// // 18% grey encodes near the middle of the range
/// let encoded = oetf(0.18);
/// assert!((encoded - 0.495).abs() < 0.01);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    let sign = if l < 0.0 { -1.0 } else { 1.0 };
    let c = l.abs();
    let v = if c <= EPS {
        c * 24389.0 / 2700.0
    } else {
        1.16 * c.cbrt() - 0.16
    };
    sign * v
}
