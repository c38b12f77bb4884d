// SPDX-License-Identifier: MIT
//
// Translucent colors.
//
// The design system uses translucency in exactly two places: modal
// overlays and elevation shadows. Both are authored as a palette color plus
// an opacity and rendered as CSS `rgba(r, g, b, a)` strings, so that is the
// only text form supported here besides plain hex.
//
// Compositing happens in gamma-encoded sRGB, which is what browsers and
// React Native do. A translucent foreground has to be flattened onto its
// background before its contrast can be measured.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::Rgb;
use crate::error::ColorError;

static CSS_RGB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
    )
    .expect("CSS rgb() pattern is valid")
});

/// An sRGB color with an opacity in `0.0..=1.0`.
#[derive(Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidOpacity`] unless `0.0 <= alpha <= 1.0`.
    pub fn new(rgb: Rgb, alpha: f64) -> Result<Self, ColorError> {
        if (0.0..=1.0).contains(&alpha) {
            Ok(Self { rgb, alpha })
        } else {
            Err(ColorError::InvalidOpacity(alpha))
        }
    }

    /// A fully opaque color.
    #[inline]
    #[must_use]
    pub const fn opaque(rgb: Rgb) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    /// Parse hex (`#RGB`, `#RRGGBB`), `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for anything else,
    /// including channels above 255, and [`ColorError::InvalidOpacity`] for
    /// an alpha above 1.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        if !s.to_ascii_lowercase().starts_with("rgb") {
            return Rgb::from_hex(s).map(Self::opaque);
        }

        let caps = CSS_RGB
            .captures(s)
            .ok_or_else(|| ColorError::format(s, "expected rgb(r, g, b) or rgba(r, g, b, a)"))?;

        let channel = |idx: usize| -> Result<u8, ColorError> {
            caps[idx]
                .parse::<u8>()
                .map_err(|_| ColorError::format(s, "channel values must be 0-255"))
        };
        let rgb = Rgb::new(channel(1)?, channel(2)?, channel(3)?);

        let alpha = match caps.get(4) {
            Some(m) => m
                .as_str()
                .parse::<f64>()
                .map_err(|_| ColorError::format(s, "unreadable alpha"))?,
            None => 1.0,
        };
        Self::new(rgb, alpha)
    }

    /// Replace the opacity, keeping the color.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidOpacity`] unless `0.0 <= alpha <= 1.0`.
    pub fn with_opacity(self, alpha: f64) -> Result<Self, ColorError> {
        Self::new(self.rgb, alpha)
    }

    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Flatten onto an opaque background (source-over).
    #[must_use]
    pub fn composite_over(self, background: Rgb) -> Rgb {
        if self.is_opaque() {
            return self.rgb;
        }
        let mix = |fg: u8, bg: u8| blend_channel(fg, bg, self.alpha);
        Rgb::new(
            mix(self.rgb.r, background.r),
            mix(self.rgb.g, background.g),
            mix(self.rgb.b, background.b),
        )
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Self::opaque(rgb)
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgba({}, {:.2})", self.rgb, self.alpha)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.rgb;
        write!(f, "rgba({r}, {g}, {b}, {})", self.alpha)
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend_channel(fg: u8, bg: u8, alpha: f64) -> u8 {
    let fg = f64::from(fg);
    let bg = f64::from(bg);
    // Safe: a convex combination of two 0–255 values stays in range.
    (fg - bg).mul_add(alpha, bg).round().clamp(0.0, 255.0) as u8
}
