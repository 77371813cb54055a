//! # chroma-math
//!
//! Math primitives for colorimetric transforms.
//!
//! This crate provides the fixed-size types everything else is built on:
//!
//! - [`Vec3`] - double-precision 3-vectors for color triples (RGB, XYZ, Lab)
//! - [`Mat3`] - 3x3 matrices for linear color space transforms
//! - [`Adaptation`] - chromatic adaptation transform construction
//!
//! # Design
//!
//! All computation is `f64`. Matrices are stored **row-major** and operate on
//! **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Matrix inversion is centralized here; no other crate in the workspace
//! inverts a matrix inline.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Mat3, Vec3};
//!
//! // sRGB to XYZ (D65)
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let xyz = rgb_to_xyz * rgb;
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with `glam::DMat3` / `glam::DVec3`
//!
//! # Used By
//!
//! - `chroma-primaries` - RGB/XYZ matrix generation
//! - `chroma-color` - color space conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;
