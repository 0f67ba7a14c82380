//! Morph and color modifiers used by Mutant Standard variants.
//!
//! Both axes are closed enumerations backed by static code tables so the
//! string forms used in the catalog stay in one place. Decoding goes through
//! separate tables from encoding: the morph tables intentionally disagree on
//! the Claw code (`claw` encodes, `clw` decodes), matching the published data.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Anatomical style selected by a morph modifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Morph {
    Human,
    Paw,
    Claw,
    Hoof,
}

// Indexed by `Morph as usize`; order must follow the enum declaration.
const MORPH_CODES: &[(Morph, &str)] = &[
    (Morph::Human, "hmn"),
    (Morph::Paw, "paw"),
    (Morph::Claw, "claw"),
    (Morph::Hoof, "hoof"),
];

const MORPH_DECODE: &[(&str, Morph)] = &[
    ("hmn", Morph::Human),
    ("paw", Morph::Paw),
    ("clw", Morph::Claw),
    ("hoof", Morph::Hoof),
];

impl Morph {
    /// Short code used in shortcodes and asset names.
    pub fn code(self) -> &'static str {
        MORPH_CODES[self as usize].1
    }

    /// Partial inverse of [`Morph::code`]. Note `"claw"` is not accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        MORPH_DECODE
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, morph)| *morph)
    }

    pub fn all() -> impl Iterator<Item = Morph> {
        MORPH_CODES.iter().map(|(morph, _)| *morph)
    }

    /// Palettes whose colors may be combined with this morph.
    pub fn palettes(self) -> &'static [Palette] {
        match self {
            Morph::Human => &[Palette::Human, Palette::Shared],
            Morph::Paw => &[Palette::Shared, Palette::Paw],
            Morph::Claw | Morph::Hoof => &[Palette::Shared],
        }
    }

    pub fn accepts(self, color: Color) -> bool {
        self.palettes().contains(&color.palette())
    }
}

/// Named color modifier value.
///
/// `H*` are human skin tones, `Fe*` the experimental furry tones reserved for
/// paws, and everything else belongs to the shared palette.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Color {
    H1,
    H2,
    H3,
    H4,
    H5,
    Fe1,
    Fe2,
    Fe3,
    R1,
    R2,
    R3,
    D1,
    D2,
    D3,
    O1,
    O2,
    O3,
    Y1,
    Y2,
    Y3,
    L1,
    L2,
    L3,
    G1,
    G2,
    G3,
    T1,
    T2,
    T3,
    C1,
    C2,
    C3,
    S1,
    S2,
    S3,
    B1,
    B2,
    B3,
    V1,
    V2,
    V3,
    M1,
    M2,
    M3,
    P1,
    P2,
    P3,
    E1,
    E2,
    E3,
    F1,
    F2,
    F3,
    K1,
    K2,
    K3,
    K4,
}

// Indexed by `Color as usize`; order must follow the enum declaration.
const COLOR_CODES: &[(Color, &str)] = &[
    (Color::H1, "h1"),
    (Color::H2, "h2"),
    (Color::H3, "h3"),
    (Color::H4, "h4"),
    (Color::H5, "h5"),
    (Color::Fe1, "fe1"),
    (Color::Fe2, "fe2"),
    (Color::Fe3, "fe3"),
    (Color::R1, "r1"),
    (Color::R2, "r2"),
    (Color::R3, "r3"),
    (Color::D1, "d1"),
    (Color::D2, "d2"),
    (Color::D3, "d3"),
    (Color::O1, "o1"),
    (Color::O2, "o2"),
    (Color::O3, "o3"),
    (Color::Y1, "y1"),
    (Color::Y2, "y2"),
    (Color::Y3, "y3"),
    (Color::L1, "l1"),
    (Color::L2, "l2"),
    (Color::L3, "l3"),
    (Color::G1, "g1"),
    (Color::G2, "g2"),
    (Color::G3, "g3"),
    (Color::T1, "t1"),
    (Color::T2, "t2"),
    (Color::T3, "t3"),
    (Color::C1, "c1"),
    (Color::C2, "c2"),
    (Color::C3, "c3"),
    (Color::S1, "s1"),
    (Color::S2, "s2"),
    (Color::S3, "s3"),
    (Color::B1, "b1"),
    (Color::B2, "b2"),
    (Color::B3, "b3"),
    (Color::V1, "v1"),
    (Color::V2, "v2"),
    (Color::V3, "v3"),
    (Color::M1, "m1"),
    (Color::M2, "m2"),
    (Color::M3, "m3"),
    (Color::P1, "p1"),
    (Color::P2, "p2"),
    (Color::P3, "p3"),
    (Color::E1, "e1"),
    (Color::E2, "e2"),
    (Color::E3, "e3"),
    (Color::F1, "f1"),
    (Color::F2, "f2"),
    (Color::F3, "f3"),
    (Color::K1, "k1"),
    (Color::K2, "k2"),
    (Color::K3, "k3"),
    (Color::K4, "k4"),
];

pub const HUMAN_PALETTE: &[Color] = &[Color::H1, Color::H2, Color::H3, Color::H4, Color::H5];

pub const PAW_PALETTE: &[Color] = &[Color::Fe1, Color::Fe2, Color::Fe3];

pub const SHARED_PALETTE: &[Color] = &[
    Color::R1,
    Color::R2,
    Color::R3,
    Color::D1,
    Color::D2,
    Color::D3,
    Color::O1,
    Color::O2,
    Color::O3,
    Color::Y1,
    Color::Y2,
    Color::Y3,
    Color::L1,
    Color::L2,
    Color::L3,
    Color::G1,
    Color::G2,
    Color::G3,
    Color::T1,
    Color::T2,
    Color::T3,
    Color::C1,
    Color::C2,
    Color::C3,
    Color::S1,
    Color::S2,
    Color::S3,
    Color::B1,
    Color::B2,
    Color::B3,
    Color::V1,
    Color::V2,
    Color::V3,
    Color::M1,
    Color::M2,
    Color::M3,
    Color::P1,
    Color::P2,
    Color::P3,
    Color::E1,
    Color::E2,
    Color::E3,
    Color::F1,
    Color::F2,
    Color::F3,
    Color::K1,
    Color::K2,
    Color::K3,
    Color::K4,
];

/// The three fixed color palettes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Palette {
    Human,
    Paw,
    Shared,
}

impl Palette {
    pub fn colors(self) -> &'static [Color] {
        match self {
            Palette::Human => HUMAN_PALETTE,
            Palette::Paw => PAW_PALETTE,
            Palette::Shared => SHARED_PALETTE,
        }
    }
}

impl Color {
    pub fn code(self) -> &'static str {
        COLOR_CODES[self as usize].1
    }

    pub fn from_code(code: &str) -> Option<Self> {
        COLOR_CODES
            .iter()
            .find(|(_, candidate)| *candidate == code)
            .map(|(color, _)| *color)
    }

    pub fn all() -> impl Iterator<Item = Color> {
        COLOR_CODES.iter().map(|(color, _)| *color)
    }

    /// The palette this color is drawn from.
    pub fn palette(self) -> Palette {
        if HUMAN_PALETTE.contains(&self) {
            Palette::Human
        } else if PAW_PALETTE.contains(&self) {
            Palette::Paw
        } else {
            Palette::Shared
        }
    }
}

/// Color modifier carried by an entry that has one.
///
/// `Default` is the explicit "default color" marker and is deliberately not a
/// member of [`Color`]; an entry without any color field holds `None` instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ColorModifier {
    Default,
    Color(Color),
}

const DEFAULT_COLOR_CODE: &str = "default";

impl ColorModifier {
    pub fn code(self) -> &'static str {
        match self {
            ColorModifier::Default => DEFAULT_COLOR_CODE,
            ColorModifier::Color(color) => color.code(),
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        if code == DEFAULT_COLOR_CODE {
            return Some(ColorModifier::Default);
        }
        Color::from_code(code).map(ColorModifier::Color)
    }
}

/// Whether a morph/color combination may appear on a single entry.
///
/// A morph always needs some color (possibly the explicit default); an
/// unmorphed entry accepts any color; a morphed entry only accepts colors from
/// the palettes that morph allows.
pub fn is_valid_pairing(morph: Option<Morph>, color: Option<ColorModifier>) -> bool {
    match (morph, color) {
        (None, None) => true,
        (Some(_), None) => false,
        (_, Some(ColorModifier::Default)) => true,
        (None, Some(ColorModifier::Color(_))) => true,
        (Some(morph), Some(ColorModifier::Color(color))) => morph.accepts(color),
    }
}

impl Serialize for Morph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Morph {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Morph::from_code(&value)
            .ok_or_else(|| de::Error::custom(format!("unsupported morph modifier '{value}'")))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Color::from_code(&value)
            .ok_or_else(|| de::Error::custom(format!("unsupported color modifier '{value}'")))
    }
}

impl Serialize for ColorModifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for ColorModifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ColorModifier::from_code(&value)
            .ok_or_else(|| de::Error::custom(format!("unsupported color modifier '{value}'")))
    }
}
