//! # chroma-color
//!
//! Color space transforms between device RGB working spaces and the CIE
//! coordinate systems, plus perceptual color difference.
//!
//! This crate combines the lower layers into the user-facing API:
//!
//! - **Typed coordinates** - [`Xyz`], [`Lab`], [`LCh`], [`Luv`], [`LChuv`],
//!   [`Rgb`]
//! - **Working spaces** - [`space::SRGB`], [`space::ADOBE_RGB`], and the
//!   rest of the published descriptor table
//! - **Transformers** - [`RgbTransformer`], [`LabTransformer`],
//!   [`LuvTransformer`]; each precomputes its matrices once and is
//!   immutable and thread-safe afterwards
//! - **Color difference** - [`deltae::cie76`], [`deltae::cie94`],
//!   [`deltae::cie2000`]
//!
//! # Architecture
//!
//! ```text
//!                  chroma-color
//!                       |
//!     +-----------------+----------------+
//!     |                                  |
//! chroma-transfer               chroma-primaries
//!     |                                  |
//!     +----------------+-----------------+
//!                      |
//!                 chroma-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_color::{LabTransformer, Rgb, RgbTransformer, Scaler, space};
//! use chroma_math::BRADFORD;
//!
//! // 8-bit sRGB -> XYZ (D50, scaled x100) -> Lab
//! let rgb2xyz = RgbTransformer::builder(&space::SRGB)
//!     .adaptation(BRADFORD)
//!     .scaler(Scaler::Bits8)
//!     .out_scale(100.0)
//!     .build()
//!     .unwrap();
//! let xyz2lab = LabTransformer::new(&chroma_primaries::D50, 100.0);
//!
//! let lab = xyz2lab.invert(rgb2xyz.convert(Rgb::new(123.0, 200.0, 50.0)));
//! assert!((lab.l() - 73.55).abs() < 0.01);
//! ```
//!
//! # Errors and numeric domain
//!
//! Construction is the only fallible step ([`TransformError`]); conversions
//! are infallible. Inputs outside the physically meaningful color domain
//! propagate as IEEE NaN/Inf rather than errors, with the one documented
//! exception of Luv's L = 0 special case.
//!
//! # Dependencies
//!
//! - [`chroma_math`] - Vec3, Mat3, chromatic adaptation
//! - [`chroma_transfer`] - companding curves
//! - [`chroma_primaries`] - primaries, illuminants, space matrices
//! - [`thiserror`] - construction error types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod compand;
mod error;
mod lab;
mod luv;
mod rgb;
mod types;

pub mod deltae;
pub mod space;

pub use compand::{BoundCompander, BoundScaler, Compander, Scaler};
pub use error::{TransformError, TransformResult};
pub use lab::LabTransformer;
pub use luv::LuvTransformer;
pub use rgb::{RgbTransformer, RgbTransformerBuilder};
pub use space::RgbSpace;
pub use types::{LCh, LChuv, Lab, Luv, Rgb, Xyz};

// Re-export sub-crates for convenience
pub use chroma_math as math;
pub use chroma_primaries as primaries;
pub use chroma_transfer as transfer;

/// The CIE kappa constant (24389/27) of the Lab and Luv transforms.
pub const CIE_KAPPA: f64 = 24389.0 / 27.0;

/// The CIE epsilon constant (216/24389) of the Lab and Luv transforms.
pub const CIE_EPS: f64 = 216.0 / 24389.0;
