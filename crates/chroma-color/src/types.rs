//! Typed color coordinates.
//!
//! Each type wraps a [`Vec3`] and fixes the positional meaning of its three
//! components: index 0/1/2 is X/Y/Z for [`Xyz`], L/a/b for [`Lab`], and so
//! on. A coordinate is immutable once constructed; conversions produce new
//! values.
//!
//! The cylindrical forms ([`LCh`], [`LChuv`]) remap indices 1 and 2 from
//! Cartesian (a, b) / (u, v) to polar (C, h). Hue is carried in degrees and
//! always normalized into [0, 360).

use chroma_math::{Mat3, Vec3};

/// A CIE XYZ tristimulus coordinate.
///
/// XYZ values carry no illuminant of their own; the reference white they
/// are relative to is tracked by the transformer that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz(pub Vec3);

impl Xyz {
    /// Creates an XYZ coordinate.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// X tristimulus component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Y tristimulus (luminance) component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Z tristimulus component.
    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Applies an arbitrary transform matrix to this point.
    ///
    /// Most useful with adaptation matrices from
    /// [`Adaptation::transform`](chroma_math::Adaptation::transform).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_color::Xyz;
    /// use chroma_math::BRADFORD;
    /// use chroma_primaries::{C, D65};
    ///
    /// let m = BRADFORD.transform(C.xyz, D65.xyz).unwrap();
    /// let adapted = Xyz::new(0.5, 0.4, 0.1).transform(&m);
    /// assert!((adapted.x() - 0.4912).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn transform(&self, tm: &Mat3) -> Xyz {
        Xyz(*tm * self.0)
    }
}

/// An RGB coordinate in some working space.
///
/// Whether the values are encoded or linear, and what range they span,
/// depends on the transformer configuration that interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb(pub Vec3);

impl Rgb {
    /// Creates an RGB coordinate.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self(Vec3::new(r, g, b))
    }

    /// Red component.
    #[inline]
    pub fn r(&self) -> f64 {
        self.0.x
    }

    /// Green component.
    #[inline]
    pub fn g(&self) -> f64 {
        self.0.y
    }

    /// Blue component.
    #[inline]
    pub fn b(&self) -> f64 {
        self.0.z
    }
}

/// A CIELAB coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab(pub Vec3);

impl Lab {
    /// Creates a Lab coordinate.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self(Vec3::new(l, a, b))
    }

    /// Lightness L*.
    #[inline]
    pub fn l(&self) -> f64 {
        self.0.x
    }

    /// Green-red opponent a*.
    #[inline]
    pub fn a(&self) -> f64 {
        self.0.y
    }

    /// Blue-yellow opponent b*.
    #[inline]
    pub fn b(&self) -> f64 {
        self.0.z
    }

    /// Converts to cylindrical LCh(ab) coordinates.
    ///
    /// `C = sqrt(a^2 + b^2)`, `h = atan2(b, a)` in degrees, normalized into
    /// [0, 360).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_color::Lab;
    ///
    /// let lch = Lab::new(50.0, 0.0, -10.0).lch();
    /// assert!((lch.c() - 10.0).abs() < 1e-12);
    /// assert!((lch.h() - 270.0).abs() < 1e-12);
    /// ```
    pub fn lch(self) -> LCh {
        let c = (self.a() * self.a() + self.b() * self.b()).sqrt();
        let mut h = self.b().atan2(self.a()).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        LCh::new(self.l(), c, h)
    }
}

/// A cylindrical CIELCh(ab) coordinate: CIELAB in polar form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LCh(pub Vec3);

impl LCh {
    /// Creates an LCh coordinate. Hue is in degrees.
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self(Vec3::new(l, c, h))
    }

    /// Lightness L*.
    #[inline]
    pub fn l(&self) -> f64 {
        self.0.x
    }

    /// Chroma C*.
    #[inline]
    pub fn c(&self) -> f64 {
        self.0.y
    }

    /// Hue angle h in degrees.
    #[inline]
    pub fn h(&self) -> f64 {
        self.0.z
    }

    /// Converts back to Cartesian Lab coordinates.
    pub fn lab(self) -> Lab {
        let h = self.h().to_radians();
        Lab::new(self.l(), self.c() * h.cos(), self.c() * h.sin())
    }
}

/// A CIELUV coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Luv(pub Vec3);

impl Luv {
    /// Creates a Luv coordinate.
    #[inline]
    pub const fn new(l: f64, u: f64, v: f64) -> Self {
        Self(Vec3::new(l, u, v))
    }

    /// Lightness L*.
    #[inline]
    pub fn l(&self) -> f64 {
        self.0.x
    }

    /// u* component.
    #[inline]
    pub fn u(&self) -> f64 {
        self.0.y
    }

    /// v* component.
    #[inline]
    pub fn v(&self) -> f64 {
        self.0.z
    }

    /// Converts to cylindrical LCh(uv) coordinates.
    pub fn lchuv(self) -> LChuv {
        let c = (self.u() * self.u() + self.v() * self.v()).sqrt();
        let mut h = self.v().atan2(self.u()).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        LChuv::new(self.l(), c, h)
    }
}

/// A cylindrical CIELCh(uv) coordinate: CIELUV in polar form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LChuv(pub Vec3);

impl LChuv {
    /// Creates an LCh(uv) coordinate. Hue is in degrees.
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self(Vec3::new(l, c, h))
    }

    /// Lightness L*.
    #[inline]
    pub fn l(&self) -> f64 {
        self.0.x
    }

    /// Chroma C*.
    #[inline]
    pub fn c(&self) -> f64 {
        self.0.y
    }

    /// Hue angle h in degrees.
    #[inline]
    pub fn h(&self) -> f64 {
        self.0.z
    }

    /// Converts back to Cartesian Luv coordinates.
    pub fn luv(self) -> Luv {
        let h = self.h().to_radians();
        Luv::new(self.l(), self.c() * h.cos(), self.c() * h.sin())
    }
}

macro_rules! vec3_interop {
    ($($t:ty),+) => {
        $(
            impl From<Vec3> for $t {
                #[inline]
                fn from(v: Vec3) -> Self {
                    Self(v)
                }
            }

            impl From<$t> for Vec3 {
                #[inline]
                fn from(p: $t) -> Vec3 {
                    p.0
                }
            }

            impl From<[f64; 3]> for $t {
                #[inline]
                fn from(a: [f64; 3]) -> Self {
                    Self(Vec3::from_array(a))
                }
            }
        )+
    };
}

vec3_interop!(Xyz, Rgb, Lab, LCh, Luv, LChuv);
