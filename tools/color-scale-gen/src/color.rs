//! Color normalization
//!
//! Every palette entry is reduced to a canonical `#rrggbbaa` string. Three
//! input shapes are accepted, checked in this order:
//!
//! 1. `#RRGGBBAA`: lowercased as-is
//! 2. `#RRGGBB`: full opacity (`ff`) appended
//! 3. `rgba(r, g, b, a)`: channels hex-encoded, alpha scaled to 0-255
//!
//! Anything else is rejected.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// `name(args)` with the argument list captured verbatim.
static FUNCTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)\(\s*([^()]*?)\s*\)$").expect("functional color regex is valid")
});

/// Errors produced while normalizing a single color entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The entry matches none of the accepted shapes
    #[error("unexpected color format: '{0}'")]
    UnexpectedColorFormat(String),

    /// Functional notation parsed, but not into plain RGB
    #[error("unsupported color space in '{0}' (expected rgb)")]
    UnsupportedColorSpace(String),
}

/// Structural classification of a raw color entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// `#RRGGBBAA`
    EightHex,
    /// `#RRGGBB`
    SixHex,
    /// `rgba(...)`
    FunctionalRgba,
    Invalid,
}

impl ColorFormat {
    /// Classify an entry. The order of checks is significant: an eight digit
    /// hex string wins over everything else.
    pub fn classify(value: &str) -> Self {
        if is_hex_color(value, 8) {
            ColorFormat::EightHex
        } else if is_hex_color(value, 6) {
            ColorFormat::SixHex
        } else if value.starts_with("rgba(") {
            ColorFormat::FunctionalRgba
        } else {
            ColorFormat::Invalid
        }
    }
}

fn is_hex_color(value: &str, digits: usize) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == digits && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// A normalized RGBA color.
///
/// Displays (and serializes) as `#rrggbbaa`: always nine characters, always
/// lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalColor([u8; 4]);

impl CanonicalColor {
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Decode `#` followed by 6 or 8 hex digits. Six digits get full opacity.
    fn from_hex(value: &str) -> Option<Self> {
        let bytes = hex::decode(value.strip_prefix('#')?).ok()?;
        match bytes.as_slice() {
            [r, g, b] => Some(Self([*r, *g, *b, 0xff])),
            [r, g, b, a] => Some(Self([*r, *g, *b, *a])),
            _ => None,
        }
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.0))
    }
}

impl Serialize for CanonicalColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for CanonicalColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

/// Normalize one palette entry into its canonical form.
pub fn normalize(value: &str) -> Result<CanonicalColor, ColorError> {
    let unexpected = || ColorError::UnexpectedColorFormat(value.to_string());

    match ColorFormat::classify(value) {
        ColorFormat::EightHex | ColorFormat::SixHex => {
            CanonicalColor::from_hex(value).ok_or_else(unexpected)
        }
        ColorFormat::FunctionalRgba => FunctionalColor::parse(value)?.to_canonical(),
        ColorFormat::Invalid => Err(unexpected()),
    }
}

/// Color space named by a functional notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Rgb,
    Hsl,
    Hwb,
    Lab,
    Lch,
    Oklab,
    Oklch,
}

impl ColorSpace {
    fn from_function_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rgb" | "rgba" => Some(ColorSpace::Rgb),
            "hsl" | "hsla" => Some(ColorSpace::Hsl),
            "hwb" => Some(ColorSpace::Hwb),
            "lab" => Some(ColorSpace::Lab),
            "lch" => Some(ColorSpace::Lch),
            "oklab" => Some(ColorSpace::Oklab),
            "oklch" => Some(ColorSpace::Oklch),
            _ => None,
        }
    }
}

/// A color written in functional notation, e.g. `rgba(0, 0, 0, 0.5)` or
/// `rgb(0 0 0 / 50%)`.
///
/// Channel values are kept raw; only RGB is ever converted further.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionalColor {
    raw: String,
    pub space: ColorSpace,
    pub channels: [f64; 3],
    pub alpha: f64,
}

impl FunctionalColor {
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let unexpected = || ColorError::UnexpectedColorFormat(value.to_string());

        let caps = FUNCTIONAL_RE.captures(value.trim()).ok_or_else(unexpected)?;
        let space = ColorSpace::from_function_name(&caps[1]).ok_or_else(unexpected)?;

        // Commas and whitespace both separate; `/` introduces the alpha.
        let args = caps[2].replace('/', " / ");
        let tokens: Vec<&str> = args
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        let (channel_tokens, alpha_token) = match tokens.as_slice() {
            [c1, c2, c3] => ([*c1, *c2, *c3], None),
            [c1, c2, c3, "/", a] | [c1, c2, c3, a] if *a != "/" => ([*c1, *c2, *c3], Some(*a)),
            _ => return Err(unexpected()),
        };

        let mut channels = [0.0; 3];
        for (slot, token) in channels.iter_mut().zip(channel_tokens) {
            *slot = parse_channel(token, space).ok_or_else(unexpected)?;
        }

        let alpha = match alpha_token {
            Some(token) => parse_alpha(token).ok_or_else(unexpected)?,
            None => 1.0,
        };

        Ok(Self {
            raw: value.to_string(),
            space,
            channels,
            alpha,
        })
    }

    /// Convert to the canonical form. Only RGB colors can be converted.
    pub fn to_canonical(&self) -> Result<CanonicalColor, ColorError> {
        if self.space != ColorSpace::Rgb {
            return Err(ColorError::UnsupportedColorSpace(self.raw.clone()));
        }

        let [r, g, b] = self.channels.map(channel_to_byte);
        Ok(CanonicalColor::from_rgba(r, g, b, alpha_to_byte(self.alpha)))
    }
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// RGB percentages are relative to 255. Other spaces keep their raw number.
fn parse_channel(token: &str, space: ColorSpace) -> Option<f64> {
    match token.strip_suffix('%') {
        Some(pct) if space == ColorSpace::Rgb => parse_number(pct).map(|v| v * 255.0 / 100.0),
        Some(pct) => parse_number(pct),
        None => parse_number(token),
    }
}

fn parse_alpha(token: &str) -> Option<f64> {
    match token.strip_suffix('%') {
        Some(pct) => parse_number(pct).map(|v| v / 100.0),
        None => parse_number(token),
    }
}

fn channel_to_byte(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// `round(a * 255)`, ties away from zero.
fn alpha_to_byte(alpha: f64) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}
