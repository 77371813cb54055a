//! # chroma-transfer
//!
//! Companding (transfer) functions for RGB working spaces.
//!
//! A compander converts between linear-light RGB and the gamma-encoded
//! working RGB a space stores. Encoding compresses toward black to spend
//! precision where the eye has it; these functions are the scalar curves
//! behind that.
//!
//! # Terminology
//!
//! - **EOTF**: encoded -> linear (decode)
//! - **OETF**: linear -> encoded (encode)
//!
//! # Supported Curves
//!
//! | Module | Used By | Shape |
//! |--------|---------|-------|
//! | [`srgb`] | sRGB | piecewise linear + 2.4 power |
//! | [`gamma`] | Adobe RGB, Apple RGB, ... | pure power law |
//! | [`lstar`] | ECI RGB | CIE L* response |
//! | [`bt2020`] | UHDTV (ITU-R BT.2020) | piecewise linear + 0.45 power |
//! | [`srgb8`] | 8-bit sRGB fast path | 256-entry decode table |
//!
//! # Sign Handling
//!
//! The sRGB, gamma, and L* curves mirror negative inputs
//! (`f(-v) == -f(v)`). Wide-gamut chromatic adaptation can push channel
//! values provisionally negative, and mirroring keeps those excursions
//! round-trippable instead of collapsing them to NaN.
//!
//! # Usage
//!
//! ```rust
//! use chroma_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `chroma-color` - compander strategy binding and RGB transforms

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bt2020;
pub mod gamma;
pub mod lstar;
pub mod srgb;
pub mod srgb8;

// Re-export common functions
pub use bt2020::{eotf as bt2020_eotf, oetf as bt2020_oetf};
pub use gamma::{eotf as gamma_eotf, oetf as gamma_oetf};
pub use lstar::{eotf as lstar_eotf, oetf as lstar_oetf};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
pub use srgb8::{decode as srgb8_decode, encode as srgb8_encode};
