// SPDX-License-Identifier: MIT
//
// mn-color — the color value layer for the MoodNote palette.
//
// Every color in the MoodNote design system is authored as an 8-bit sRGB
// hex string. This crate owns that representation: strict hex parsing,
// uppercase `#RRGGBB` formatting, per-channel brightness scaling, and the
// translucent `rgba()` values used for overlays and shadows.
//
// Contrast math lives one layer up in mn-theme; the only color science
// here is the sRGB transfer function, because both layers need it.

pub mod alpha;
pub mod color;
pub mod error;

pub use alpha::Rgba;
pub use color::Rgb;
pub use error::ColorError;
