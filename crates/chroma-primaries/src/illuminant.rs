//! Standard illuminant reference data.
//!
//! A reference white is the XYZ point a viewing-condition standard calls
//! "white". Each [`IlluminantRef`] ties the tristimulus values to a CIE
//! standard observer and a named standard illuminant; the same illuminant
//! modeled for a different observer is a different reference.
//!
//! All values are process-wide immutable reference data.

use chroma_math::Vec3;

/// CIE standard observer model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observer {
    /// CIE 1931 Standard 2 degree FOV observer
    Cie2,
    /// CIE 1964 Supplementary 10 degree FOV observer
    Cie10,
}

/// A named standard illuminant with its correlated color temperature.
///
/// Observer-independent metadata; the per-observer tristimulus values live
/// in [`IlluminantRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IlluminantStd {
    /// Short standard name ("A", "D65", ...)
    pub name: &'static str,
    /// Longer description of the viewing condition
    pub description: &'static str,
    /// Correlated color temperature in kelvin
    pub cct: u32,
}

/// A reference white point: illuminant tristimulus values for one observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IlluminantRef {
    /// CIE XYZ tristimulus values, Y normalized to 1
    pub xyz: Vec3,
    /// The observer the values are modeled for
    pub observer: Observer,
    /// The standard illuminant being modeled
    pub standard: &'static IlluminantStd,
}

/// Incandescent / tungsten-filament lighting.
pub const STD_A: IlluminantStd = IlluminantStd {
    name: "A",
    description: "Incandescent / Tungsten",
    cct: 2856,
};

/// Noon-sunlight simulation derived from illuminant A (obsolete).
pub const STD_B: IlluminantStd = IlluminantStd {
    name: "B",
    description: "Direct sunlight at noon (obsolete)",
    cct: 4874,
};

/// Averaged-daylight simulation derived from illuminant A (obsolete).
pub const STD_C: IlluminantStd = IlluminantStd {
    name: "C",
    description: "Average / North sky Daylight (obsolete)",
    cct: 6774,
};

/// Horizon light; the ICC profile connection space illuminant.
pub const STD_D50: IlluminantStd = IlluminantStd {
    name: "D50",
    description: "Horizon Light, ICC profile PCS",
    cct: 5003,
};

/// Mid-morning / mid-afternoon daylight.
pub const STD_D55: IlluminantStd = IlluminantStd {
    name: "D55",
    description: "Mid-morning / Mid-afternoon Daylight",
    cct: 5503,
};

/// Noon daylight; the sRGB and television reference.
pub const STD_D65: IlluminantStd = IlluminantStd {
    name: "D65",
    description: "Noon Daylight / Television / sRGB",
    cct: 6504,
};

/// North sky daylight.
pub const STD_D75: IlluminantStd = IlluminantStd {
    name: "D75",
    description: "North sky Daylight",
    cct: 7504,
};

/// Equal-energy radiator.
pub const STD_E: IlluminantStd = IlluminantStd {
    name: "E",
    description: "Equal energy",
    cct: 5454,
};

/// Cool white fluorescent.
pub const STD_F2: IlluminantStd = IlluminantStd {
    name: "F2",
    description: "Cool White Fluorescent",
    cct: 4230,
};

/// Broadband daylight-simulator fluorescent.
pub const STD_F7: IlluminantStd = IlluminantStd {
    name: "F7",
    description: "D65 simulator / Daylight Simulator",
    cct: 6500,
};

/// Narrow-band tri-phosphor fluorescent.
pub const STD_F11: IlluminantStd = IlluminantStd {
    name: "F11",
    description: "Philips TL84, Ultralum 40",
    cct: 4000,
};

// CIE 1931 Standard (2 degree) observer tristimulus values

/// Illuminant A, 2 degree observer.
pub const A: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(1.09850, 1.00000, 0.35585),
    observer: Observer::Cie2,
    standard: &STD_A,
};

/// Illuminant B, 2 degree observer.
pub const B: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(0.99072, 1.00000, 0.85223),
    observer: Observer::Cie2,
    standard: &STD_B,
};

/// Illuminant C, 2 degree observer.
pub const C: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(0.98074, 1.00000, 1.18232),
    observer: Observer::Cie2,
    standard: &STD_C,
};

/// Illuminant D50, 2 degree observer.
pub const D50: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(0.96422, 1.00000, 0.82521),
    observer: Observer::Cie2,
    standard: &STD_D50,
};

/// Illuminant D55, 2 degree observer.
pub const D55: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(0.95682, 1.00000, 0.92149),
    observer: Observer::Cie2,
    standard: &STD_D55,
};

/// Illuminant D65, 2 degree observer.
pub const D65: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(0.95047, 1.00000, 1.08883),
    observer: Observer::Cie2,
    standard: &STD_D65,
};

/// Illuminant D75, 2 degree observer.
pub const D75: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(0.94972, 1.00000, 1.22638),
    observer: Observer::Cie2,
    standard: &STD_D75,
};

/// Illuminant E, 2 degree observer.
pub const E: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(1.00000, 1.00000, 1.00000),
    observer: Observer::Cie2,
    standard: &STD_E,
};

/// Illuminant F2, 2 degree observer.
pub const F2: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(0.99186, 1.00000, 0.67393),
    observer: Observer::Cie2,
    standard: &STD_F2,
};

/// Illuminant F7, 2 degree observer.
pub const F7: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(0.95041, 1.00000, 1.08747),
    observer: Observer::Cie2,
    standard: &STD_F7,
};

/// Illuminant F11, 2 degree observer.
pub const F11: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(1.00962, 1.00000, 0.64350),
    observer: Observer::Cie2,
    standard: &STD_F11,
};

// Supplementary (10 degree) observer tristimulus values,
// source Berns 2000, cross-checked with python-colormath

/// Illuminant A, 10 degree observer.
pub const SUPP_A: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(1.1114, 1.0000, 0.3520),
    observer: Observer::Cie10,
    standard: &STD_A,
};

/// Illuminant C, 10 degree observer.
pub const SUPP_C: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(0.9728, 1.0000, 1.11614),
    observer: Observer::Cie10,
    standard: &STD_C,
};

/// Illuminant D50, 10 degree observer.
pub const SUPP_D50: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(0.9672, 1.0000, 0.8143),
    observer: Observer::Cie10,
    standard: &STD_D50,
};

/// Illuminant D55, 10 degree observer.
pub const SUPP_D55: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(0.9580, 1.0000, 0.9093),
    observer: Observer::Cie10,
    standard: &STD_D55,
};

/// Illuminant D65, 10 degree observer.
pub const SUPP_D65: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(0.9481, 1.0000, 1.0730),
    observer: Observer::Cie10,
    standard: &STD_D65,
};

/// Illuminant D75, 10 degree observer.
pub const SUPP_D75: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(0.94416, 1.0000, 1.2064),
    observer: Observer::Cie10,
    standard: &STD_D75,
};

/// Illuminant F2, 10 degree observer.
pub const SUPP_F2: IlluminantRef = IlluminantRef {
    xyz: Vec3::new(1.0328, 1.0000, 0.6902),
    observer: Observer::Cie10,
    standard: &STD_F2,
};
