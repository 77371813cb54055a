//! Table-driven 8-bit sRGB decode.
//!
//! The fast path for bulk 8-bit sRGB input: a 256-entry lookup table maps
//! each encoded code value straight to linear light, fusing the [0,255] ->
//! [0,1] scaling step with the sRGB EOTF. The encode direction reuses the
//! exact [`crate::srgb`] curve and rounds back to an 8-bit code value.
//!
//! The table is computed exactly once per process behind a
//! [`std::sync::OnceLock`] and is read-only afterwards, so it is safe to
//! share across threads without further synchronization.
//!
//! Because scaling is fused in, this path round-trips to 8-bit integer
//! granularity only, and must not be combined with a separate scaler.

use crate::srgb;
use std::sync::OnceLock;

static DECODE_TABLE: OnceLock<[f64; 256]> = OnceLock::new();

/// Returns the shared 256-entry decode table.
///
/// Entry `i` is the linear-light value of the 8-bit sRGB code `i`.
/// The first call computes the table; later calls return the same reference.
pub fn decode_table() -> &'static [f64; 256] {
    DECODE_TABLE.get_or_init(|| {
        let mut table = [0.0; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = srgb::eotf(i as f64 / 255.0);
        }
        table
    })
}

/// Decodes an 8-bit sRGB code value to linear light.
///
/// The input is truncated to an integer index and clamped to [0, 255];
/// fractional or out-of-range inputs therefore land on the nearest table
/// edge rather than extrapolating.
///
/// # Example
///
/// ```rust
/// use chroma_transfer::{srgb, srgb8};
///
/// assert_eq!(srgb8::decode(0.0), 0.0);
/// assert_eq!(srgb8::decode(255.0), srgb::eotf(1.0));
/// ```
#[inline]
pub fn decode(v: f64) -> f64 {
    let i = (v as i64).clamp(0, 255) as usize;
    decode_table()[i]
}

/// Encodes linear light to an 8-bit sRGB code value.
///
/// Applies the exact sRGB OETF, clips to [0, 1], and rounds to the nearest
/// integer code in [0, 255].
///
/// # Example
///
/// ```rust
/// use chroma_transfer::srgb8;
///
/// assert_eq!(srgb8::encode(0.0), 0.0);
/// assert_eq!(srgb8::encode(1.0), 255.0);
/// ```
#[inline]
pub fn encode(l: f64) -> f64 {
    (srgb::oetf(l).clamp(0.0, 1.0) * 255.0 + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_exact_eotf() {
        let table = decode_table();
        for i in 0..256 {
            let exact = srgb::eotf(i as f64 / 255.0);
            assert_eq!(table[i], exact, "entry {}", i);
        }
    }

    #[test]
    fn test_table_endpoints() {
        let table = decode_table();
        assert_eq!(table[0], 0.0);
        assert!((table[255] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_roundtrip_all_codes() {
        for code in 0..=255 {
            let linear = decode(code as f64);
            let back = encode(linear);
            assert_eq!(back, code as f64, "code {}", code);
        }
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(decode(-5.0), decode(0.0));
        assert_eq!(decode(300.0), decode(255.0));
        assert_eq!(encode(2.0), 255.0);
        assert_eq!(encode(-1.0), 0.0);
    }
}
