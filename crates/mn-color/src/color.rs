// SPDX-License-Identifier: MIT
//
// mn-color sRGB values.
//
// Single-character channel names (r, g, b) are the standard convention in
// color code and match the hex digit pairs they come from.
#![allow(clippy::many_single_char_names)]
//
// Colors are stored exactly as authored: three 8-bit channels. No float
// representation is kept around, so a color parsed from `#9333EA` always
// formats back to `#9333EA` and two colors compare equal only when their
// channels do.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::alpha::Rgba;
use crate::error::ColorError;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// # Examples
///
/// ```
/// use mn_color::Rgb;
///
/// let purple = Rgb::from_hex("#9333EA").unwrap();
/// assert_eq!(purple, Rgb::new(0x93, 0x33, 0xEA));
/// assert_eq!(purple.to_hex(), "#9333EA");
///
/// // Shorthand and a missing `#` are both accepted.
/// assert_eq!(Rgb::from_hex("fff").unwrap(), Rgb::WHITE);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` literal.
    ///
    /// This is how the authored palette tables are written, so they stay
    /// `const` and cannot contain a malformed hex string.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    /// Parse `#RGB` or `#RRGGBB` (the `#` is optional, digits are
    /// case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for any other length or for
    /// a non-hex digit.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s)
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Format as uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// The packed `0xRRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Channels normalized to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Channels converted to linear light, ready for luminance weighting.
    #[must_use]
    pub fn to_linear(self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_srgb();
        (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
    }

    // ─── Adjustments ─────────────────────────────────────────────────────

    /// Scale every channel by `1 + percent / 100`, rounding and clamping to
    /// 0–255.
    ///
    /// Positive percentages lighten, negative ones darken. Because the
    /// scaling is multiplicative, black stays black however far it is
    /// lightened, and `-100` always yields black.
    #[must_use]
    pub fn adjust_brightness(self, percent: f64) -> Self {
        Self {
            r: scale_channel(self.r, percent),
            g: scale_channel(self.g, percent),
            b: scale_channel(self.b, percent),
        }
    }

    /// Attach an opacity, producing a translucent color.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidOpacity`] unless `0.0 <= alpha <= 1.0`.
    pub fn with_opacity(self, alpha: f64) -> Result<Rgba, ColorError> {
        Rgba::new(self, alpha)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({})", self.to_hex())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s.trim())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ─── sRGB Transfer Function ──────────────────────────────────────────────────
//
// WCAG 2.1 defines relative luminance with the 0.03928 breakpoint from the
// original sRGB draft rather than IEC 61966-2-1's 0.04045. No 8-bit channel
// value falls between the two.

/// Convert a normalized sRGB component (0.0–1.0) to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops
)]
fn scale_channel(value: u8, percent: f64) -> u8 {
    let v = f64::from(value);
    // Not fused: half-way cases must round exactly like `v + v * p / 100`.
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v + v * percent / 100.0).round().clamp(0.0, 255.0) as u8
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(input: &str) -> Result<Rgb, ColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    let bytes = digits.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(input, bytes[0])?;
            let g = parse_hex_digit(input, bytes[1])?;
            let b = parse_hex_digit(input, bytes[2])?;
            Ok(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(input, &bytes[0..2])?;
            let g = parse_hex_byte(input, &bytes[2..4])?;
            let b = parse_hex_byte(input, &bytes[4..6])?;
            Ok(Rgb::new(r, g, b))
        }
        len => Err(ColorError::format(
            input,
            format!("expected 3 or 6 hex digits, found {len}"),
        )),
    }
}

fn parse_hex_digit(input: &str, c: u8) -> Result<u8, ColorError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ColorError::format(input, "contains a non-hex digit")),
    }
}

fn parse_hex_byte(input: &str, bytes: &[u8]) -> Result<u8, ColorError> {
    let hi = parse_hex_digit(input, bytes[0])?;
    let lo = parse_hex_digit(input, bytes[1])?;
    Ok(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
