//! RGB working-space transformer.
//!
//! [`RgbTransformer`] composes the space matrix, an optional chromatic
//! adaptation, an optional output scale, and the compander/scaler strategies
//! into one forward/inverse RGB-XYZ operator. All matrix construction and
//! inversion happens once in [`RgbTransformerBuilder::build`]; the
//! conversion calls afterwards are three steps each and the transformer is
//! immutable, so it can be shared freely across threads.
//!
//! # Example
//!
//! ```rust
//! use chroma_color::{Rgb, RgbTransformer, Scaler, space};
//! use chroma_math::BRADFORD;
//!
//! // 8-bit sRGB to XYZ, Bradford-adapted to D50, scaled to [0, 100]
//! let t = RgbTransformer::builder(&space::SRGB)
//!     .adaptation(BRADFORD)
//!     .scaler(Scaler::Bits8)
//!     .out_scale(100.0)
//!     .build()
//!     .unwrap();
//!
//! let xyz = t.convert(Rgb::new(123.0, 200.0, 50.0));
//! assert!((xyz.x() - 31.334).abs() < 1e-3);
//!
//! let back = t.invert(xyz);
//! assert_eq!(back, Rgb::new(123.0, 200.0, 50.0));
//! ```

use crate::compand::{BoundCompander, BoundScaler, Compander, Scaler};
use crate::error::{TransformError, TransformResult};
use crate::space::RgbSpace;
use crate::types::{Rgb, Xyz};
use chroma_math::{Adaptation, Mat3};
use chroma_primaries::{D50, IlluminantRef, rgb_to_xyz_matrix};

/// A precomputed transform between a working RGB space and XYZ.
///
/// Construct with [`RgbTransformer::builder`]. Once built the transformer is
/// read-only and reentrant.
#[derive(Debug, Clone)]
pub struct RgbTransformer {
    compander: BoundCompander,
    scaler: Option<BoundScaler>,
    space_tm: Mat3,
    adapt_tm: Option<Mat3>,
    transform: Mat3,
    transform_inv: Mat3,
}

/// Configures and builds an [`RgbTransformer`].
///
/// Defaults: no adaptation; target illuminant D50 (the ICC profile
/// connection illuminant) when an adaptation is requested without an
/// explicit target; no scaler; out-scale 0 (XYZ stays in [0, 1]); the
/// working space's own compander.
#[derive(Debug, Clone)]
pub struct RgbTransformerBuilder<'a> {
    space: &'a RgbSpace,
    adaptation: Option<Adaptation>,
    target_illuminant: Option<&'a IlluminantRef>,
    scaler: Option<Scaler>,
    out_scale: f64,
    compander: Option<Compander>,
}

impl RgbTransformer {
    /// Starts building a transformer for the given working space.
    pub fn builder(space: &RgbSpace) -> RgbTransformerBuilder<'_> {
        RgbTransformerBuilder {
            space,
            adaptation: None,
            target_illuminant: None,
            scaler: None,
            out_scale: 0.0,
            compander: None,
        }
    }

    /// Converts a working RGB point to XYZ.
    ///
    /// Scales (if a scaler is configured), linearizes, and applies the
    /// forward matrix.
    pub fn convert(&self, rgb: Rgb) -> Xyz {
        let mut p = rgb.0;
        if let Some(scaler) = &self.scaler {
            p = scaler.scale(p);
        }
        p = self.compander.decode(p);
        Xyz(self.transform * p)
    }

    /// Converts an XYZ point back to working RGB.
    ///
    /// Applies the inverse matrix, compands, and inverse-scales (if a scaler
    /// is configured).
    pub fn invert(&self, xyz: Xyz) -> Rgb {
        let mut p = self.transform_inv * xyz.0;
        p = self.compander.encode(p);
        if let Some(scaler) = &self.scaler {
            p = scaler.scale_inv(p);
        }
        Rgb(p)
    }

    /// Applies only the scaling and linearization steps to an RGB point.
    pub fn linearize(&self, rgb: Rgb) -> Rgb {
        let mut p = rgb.0;
        if let Some(scaler) = &self.scaler {
            p = scaler.scale(p);
        }
        Rgb(self.compander.decode(p))
    }

    /// The linear RGB to XYZ matrix of the working space alone.
    pub fn space_matrix(&self) -> Mat3 {
        self.space_tm
    }

    /// The computed adaptation matrix, if adaptation was configured and the
    /// target illuminant differs from the space's own.
    pub fn adapt_matrix(&self) -> Option<Mat3> {
        self.adapt_tm
    }

    /// The complete forward matrix: adaptation, space transform, and output
    /// scaling combined.
    pub fn matrix(&self) -> Mat3 {
        self.transform
    }
}

impl<'a> RgbTransformerBuilder<'a> {
    /// Adapts converted colors to a target illuminant with the given
    /// cone-response matrix.
    pub fn adaptation(mut self, adaptation: Adaptation) -> Self {
        self.adaptation = Some(adaptation);
        self
    }

    /// Sets the target illuminant of the XYZ side.
    ///
    /// Ignored unless an adaptation is configured. Defaults to D50.
    pub fn target_illuminant(mut self, illuminant: &'a IlluminantRef) -> Self {
        self.target_illuminant = Some(illuminant);
        self
    }

    /// Scales integer-range RGB input into [0, 1] before companding.
    pub fn scaler(mut self, scaler: Scaler) -> Self {
        self.scaler = Some(scaler);
        self
    }

    /// Applies a uniform scale on the XYZ side; typical values are 1 and
    /// 100. Zero (the default) disables scaling.
    pub fn out_scale(mut self, out_scale: f64) -> Self {
        self.out_scale = out_scale;
        self
    }

    /// Overrides the working space's own compander.
    pub fn compander(mut self, compander: Compander) -> Self {
        self.compander = Some(compander);
        self
    }

    /// Builds the transformer, precomputing the combined forward matrix and
    /// its inverse.
    ///
    /// # Errors
    ///
    /// Fails if the working space's primaries are degenerate, or if any
    /// required matrix inversion hits a singular matrix. These are
    /// construction-time configuration errors; conversions never fail.
    pub fn build(self) -> TransformResult<RgbTransformer> {
        let space = self.space;

        let compander = self.compander.unwrap_or(space.compander).bind(space);
        let scaler = self.scaler.map(|s| s.bind(space));

        let space_tm = rgb_to_xyz_matrix(&space.primaries, space.illuminant.xyz)
            .ok_or(TransformError::DegeneratePrimaries(space.name))?;

        let mut transform = space_tm;
        let mut adapt_tm = None;

        if let Some(adaptation) = self.adaptation {
            let target = self.target_illuminant.unwrap_or(&D50);
            if target.xyz != space.illuminant.xyz {
                let am = adaptation
                    .transform(space.illuminant.xyz, target.xyz)
                    .ok_or(TransformError::SingularAdaptation)?;
                transform = am * transform;
                adapt_tm = Some(am);
            }
        }

        if self.out_scale != 0.0 {
            transform = transform * Mat3::scale(self.out_scale);
        }

        let transform_inv = transform
            .inverse()
            .ok_or(TransformError::SingularMatrix(space.name))?;

        Ok(RgbTransformer {
            compander,
            scaler,
            space_tm,
            adapt_tm,
            transform,
            transform_inv,
        })
    }
}
