//! RGB working-space descriptors.
//!
//! An [`RgbSpace`] bundles everything a transformer needs to interpret RGB
//! values: the xy chromaticities of the primaries, the space's own reference
//! illuminant, a default gamma, and the compander that linearizes the
//! encoding. The descriptors are immutable reference data; the commonly
//! published working spaces are provided as constants.

use crate::compand::Compander;
use chroma_primaries::{self as primaries, IlluminantRef, XyyPrimary};

/// The common working-space gamma of 2.2, in its exact binary form.
pub const GAMMA_22: f64 = 563.0 / 256.0;

/// An RGB working space definition.
///
/// Many instances exist as constants ([`SRGB`], [`ADOBE_RGB`], ...); custom
/// spaces can be built from any primaries/illuminant pairing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbSpace {
    /// Short common name for the working space
    pub name: &'static str,
    /// More specific reference to a standard name and version
    pub description: &'static str,
    /// Tristimulus primaries; the transformer derives its matrix from these
    pub primaries: XyyPrimary,
    /// The space's own reference illuminant
    pub illuminant: &'static IlluminantRef,
    /// Default gamma; its exact use depends on the compander
    pub gamma: f64,
    /// Default linearization from working RGB to linear RGB
    pub compander: Compander,
}

/// sRGB as defined in IEC 61966-2-1:1999.
pub const SRGB: RgbSpace = RgbSpace {
    name: "sRGB",
    description: "sRGB",
    primaries: XyyPrimary {
        xr: 0.6400,
        yr: 0.3300,
        xg: 0.3000,
        yg: 0.6000,
        xb: 0.1500,
        yb: 0.0600,
    },
    illuminant: &primaries::D65,
    gamma: GAMMA_22,
    compander: Compander::Srgb,
};

/// Adobe RGB (1998).
pub const ADOBE_RGB: RgbSpace = RgbSpace {
    name: "Adobe RGB",
    description: "Adobe RGB (1998)",
    primaries: XyyPrimary {
        xr: 0.6400,
        yr: 0.3300,
        xg: 0.2100,
        yg: 0.7100,
        xb: 0.1500,
        yb: 0.0600,
    },
    illuminant: &primaries::D65,
    gamma: GAMMA_22,
    compander: Compander::Gamma,
};

/// Apple RGB.
pub const APPLE_RGB: RgbSpace = RgbSpace {
    name: "Apple RGB",
    description: "Apple RGB",
    primaries: XyyPrimary {
        xr: 0.6250,
        yr: 0.3400,
        xg: 0.2800,
        yg: 0.5950,
        xb: 0.1550,
        yb: 0.0700,
    },
    illuminant: &primaries::D65,
    gamma: 1.8,
    compander: Compander::Gamma,
};

/// Best RGB.
pub const BEST_RGB: RgbSpace = RgbSpace {
    name: "Best RGB",
    description: "Best RGB",
    primaries: XyyPrimary {
        xr: 0.7347,
        yr: 0.2653,
        xg: 0.2150,
        yg: 0.7750,
        xb: 0.1300,
        yb: 0.0350,
    },
    illuminant: &primaries::D50,
    gamma: GAMMA_22,
    compander: Compander::Gamma,
};

/// Beta RGB.
pub const BETA_RGB: RgbSpace = RgbSpace {
    name: "Beta RGB",
    description: "Beta RGB",
    primaries: XyyPrimary {
        xr: 0.6888,
        yr: 0.3112,
        xg: 0.1986,
        yg: 0.7551,
        xb: 0.1265,
        yb: 0.0352,
    },
    illuminant: &primaries::D50,
    gamma: GAMMA_22,
    compander: Compander::Gamma,
};

/// Bruce RGB.
pub const BRUCE_RGB: RgbSpace = RgbSpace {
    name: "Bruce RGB",
    description: "Bruce RGB",
    primaries: XyyPrimary {
        xr: 0.6400,
        yr: 0.3300,
        xg: 0.2800,
        yg: 0.6500,
        xb: 0.1500,
        yb: 0.0600,
    },
    illuminant: &primaries::D65,
    gamma: GAMMA_22,
    compander: Compander::Gamma,
};

/// CIE RGB (equal-energy white).
pub const CIE_RGB: RgbSpace = RgbSpace {
    name: "CIE RGB",
    description: "CIE RGB",
    primaries: XyyPrimary {
        xr: 0.7350,
        yr: 0.2650,
        xg: 0.2740,
        yg: 0.7170,
        xb: 0.1670,
        yb: 0.0090,
    },
    illuminant: &primaries::E,
    gamma: GAMMA_22,
    compander: Compander::Gamma,
};

/// ColorMatch RGB.
pub const COLOR_MATCH_RGB: RgbSpace = RgbSpace {
    name: "ColorMatch RGB",
    description: "ColorMatch RGB",
    primaries: XyyPrimary {
        xr: 0.6300,
        yr: 0.3400,
        xg: 0.2950,
        yg: 0.6050,
        xb: 0.1500,
        yb: 0.0750,
    },
    illuminant: &primaries::D50,
    gamma: 1.8,
    compander: Compander::Gamma,
};

/// ECI RGB v2, with the L* response curve.
pub const ECI_RGB: RgbSpace = RgbSpace {
    name: "ECI RGB",
    description: "ECI RGB v2",
    primaries: XyyPrimary {
        xr: 0.6700,
        yr: 0.3300,
        xg: 0.2100,
        yg: 0.7100,
        xb: 0.1400,
        yb: 0.0800,
    },
    illuminant: &primaries::D50,
    gamma: 0.0,
    compander: Compander::Lstar,
};

/// NTSC (1953) RGB.
pub const NTSC_RGB: RgbSpace = RgbSpace {
    name: "NTSC RGB",
    description: "NTSC (1953) RGB",
    primaries: XyyPrimary {
        xr: 0.6700,
        yr: 0.3300,
        xg: 0.2100,
        yg: 0.7100,
        xb: 0.1400,
        yb: 0.0800,
    },
    illuminant: &primaries::C,
    gamma: 2.2,
    compander: Compander::Gamma,
};

/// PAL/SECAM RGB.
pub const PAL_SECAM_RGB: RgbSpace = RgbSpace {
    name: "PAL/SECAM RGB",
    description: "PAL/SECAM RGB",
    primaries: XyyPrimary {
        xr: 0.6400,
        yr: 0.3300,
        xg: 0.2900,
        yg: 0.6000,
        xb: 0.1500,
        yb: 0.0600,
    },
    illuminant: &primaries::D65,
    gamma: 2.2,
    compander: Compander::Gamma,
};

/// ProPhoto RGB.
pub const PRO_PHOTO_RGB: RgbSpace = RgbSpace {
    name: "ProPhoto RGB",
    description: "ProPhoto RGB",
    primaries: XyyPrimary {
        xr: 0.7347,
        yr: 0.2653,
        xg: 0.1596,
        yg: 0.8404,
        xb: 0.0366,
        yb: 0.0001,
    },
    illuminant: &primaries::D50,
    gamma: 1.8,
    compander: Compander::Gamma,
};

/// SMPTE-C (NTSC 1987) RGB.
pub const SMPTE_C_RGB: RgbSpace = RgbSpace {
    name: "SMPTE-C RGB",
    description: "SMPTE-C (NTSC 1987) RGB",
    primaries: XyyPrimary {
        xr: 0.6300,
        yr: 0.3400,
        xg: 0.3100,
        yg: 0.5950,
        xb: 0.1550,
        yb: 0.0700,
    },
    illuminant: &primaries::D65,
    gamma: 2.2,
    compander: Compander::Gamma,
};

/// UHDTV (ITU-R BT.2020) RGB.
pub const UHDTV_RGB: RgbSpace = RgbSpace {
    name: "UHDTV RGB",
    description: "UHDTV (ITU-R BT.2020) RGB",
    primaries: XyyPrimary {
        xr: 0.708,
        yr: 0.292,
        xg: 0.170,
        yg: 0.797,
        xb: 0.131,
        yb: 0.046,
    },
    illuminant: &primaries::D65,
    gamma: 2.4,
    compander: Compander::Bt2020,
};

/// Adobe Wide Gamut RGB.
pub const WIDE_GAMUT_RGB: RgbSpace = RgbSpace {
    name: "Wide Gamut RGB",
    description: "Adobe Wide Gamut RGB",
    primaries: XyyPrimary {
        xr: 0.7350,
        yr: 0.2650,
        xg: 0.1150,
        yg: 0.8260,
        xb: 0.1570,
        yb: 0.0180,
    },
    illuminant: &primaries::D50,
    gamma: 1.8,
    compander: Compander::Gamma,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_primaries::rgb_to_xyz_matrix;

    const ALL: &[&RgbSpace] = &[
        &SRGB,
        &ADOBE_RGB,
        &APPLE_RGB,
        &BEST_RGB,
        &BETA_RGB,
        &BRUCE_RGB,
        &CIE_RGB,
        &COLOR_MATCH_RGB,
        &ECI_RGB,
        &NTSC_RGB,
        &PAL_SECAM_RGB,
        &PRO_PHOTO_RGB,
        &SMPTE_C_RGB,
        &UHDTV_RGB,
        &WIDE_GAMUT_RGB,
    ];

    #[test]
    fn test_all_spaces_have_valid_primaries() {
        for space in ALL {
            assert!(
                rgb_to_xyz_matrix(&space.primaries, space.illuminant.xyz).is_some(),
                "{}",
                space.name
            );
        }
    }

    #[test]
    fn test_gamma22_exact_binary_form() {
        assert!((GAMMA_22 - 2.19921875).abs() < 1e-15);
    }
}
