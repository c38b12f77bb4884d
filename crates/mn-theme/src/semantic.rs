//! Semantic tokens — meaning-based color roles for one mode.
//!
//! A [`Theme`] is the only color surface presentation code sees. Every
//! opaque role is a single lookup into [`ColorPrimitives`]; translucent
//! roles (overlay, shadows) are a primitive plus an opacity. There are no
//! literals in this file, so swapping the palette can never leave a role
//! pointing at a color nobody authored.
//!
//! Both shades of every role are looked up regardless of the requested
//! mode, so a palette that is missing a shade fails for both modes alike.

use std::fmt;

use mn_color::{Rgb, Rgba};
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::primitives::{ColorPrimitives, Emotion};

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Choose between a light-mode and a dark-mode value.
    #[inline]
    #[must_use]
    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Role groups
// ---------------------------------------------------------------------------

/// Backgrounds with increasing elevation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceColors {
    /// Main screen background.
    pub base: Rgb,
    /// Slightly raised panels.
    pub raised: Rgb,
    /// Cards, modals, dropdowns, tonal buttons.
    pub elevated: Rgb,
    /// Modal backdrop.
    pub overlay: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColors {
    pub primary: Rgb,
    pub secondary: Rgb,
    /// Captions and other subtle text.
    pub tertiary: Rgb,
    pub disabled: Rgb,
    /// Text on a primary-colored fill of the opposite lightness.
    pub inverse: Rgb,
    /// Text on `primary.default` fills.
    pub on_primary: Rgb,
    /// Text on `surface.elevated` (tonal buttons).
    pub on_elevated: Rgb,
}

/// Brand color with its interaction states.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColors {
    pub default: Rgb,
    pub hover: Rgb,
    /// Tinted background, not meant to carry text.
    pub subtle: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderColors {
    pub subtle: Rgb,
    pub default: Rgb,
    /// Emphasized borders and focus rings.
    pub strong: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusColors {
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
    pub info: Rgb,
}

/// Mood-tracking colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionColors {
    pub happy: Rgb,
    pub excited: Rgb,
    pub calm: Rgb,
    pub sad: Rgb,
    pub anxious: Rgb,
    pub angry: Rgb,
    pub tired: Rgb,
    pub grateful: Rgb,
}

impl EmotionColors {
    #[must_use]
    pub const fn get(&self, emotion: Emotion) -> Rgb {
        match emotion {
            Emotion::Happy => self.happy,
            Emotion::Excited => self.excited,
            Emotion::Calm => self.calm,
            Emotion::Sad => self.sad,
            Emotion::Anxious => self.anxious,
            Emotion::Angry => self.angry,
            Emotion::Tired => self.tired,
            Emotion::Grateful => self.grateful,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, Rgb)> + '_ {
        Emotion::ALL.into_iter().map(|e| (e, self.get(e)))
    }
}

/// Stats card accents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsColors {
    pub purple: Rgb,
    pub orange: Rgb,
    pub blue: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadowColors {
    pub color: Rgba,
    #[serde(rename = "colorMedium")]
    pub medium: Rgba,
    #[serde(rename = "colorStrong")]
    pub strong: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientColors {
    /// Full-screen background, top to bottom. Always at least two stops.
    pub background: Vec<Rgb>,
}

/// Data visualization colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartColors {
    pub positive: Rgb,
    pub negative: Rgb,
    pub neutral: Rgb,
    pub gradient1: Rgb,
    pub gradient2: Rgb,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// The complete set of semantic colors for one mode.
///
/// Built only by [`Theme::generate`]; there are no setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub mode: Mode,
    pub surface: SurfaceColors,
    pub text: TextColors,
    pub primary: BrandColors,
    pub secondary: BrandColors,
    pub border: BorderColors,
    pub status: StatusColors,
    pub emotions: EmotionColors,
    pub stats: StatsColors,
    pub shadow: ShadowColors,
    pub gradient: GradientColors,
    pub chart: ChartColors,
}

impl Theme {
    /// Map primitives onto semantic roles for `mode`.
    ///
    /// # Errors
    ///
    /// [`ThemeError::MissingShade`] if `primitives` lacks a shade that any
    /// role uses in either mode.
    pub fn generate(primitives: &ColorPrimitives, mode: Mode) -> Result<Self, ThemeError> {
        let p = primitives;
        let m = mode;

        let surface = SurfaceColors {
            base: m.pick(p.neutral.shade(0)?, p.purple.shade(975)?),
            raised: m.pick(p.purple.shade(50)?, p.purple.shade(950)?),
            elevated: m.pick(p.purple.shade(100)?, p.purple.shade(800)?),
            overlay: m.pick(
                p.neutral.shade(1000)?.with_opacity(0.5)?,
                p.purple.shade(975)?.with_opacity(0.9)?,
            ),
        };

        let text = TextColors {
            primary: m.pick(p.neutral.shade(900)?, p.neutral.shade(50)?),
            secondary: m.pick(p.neutral.shade(700)?, p.neutral.shade(200)?),
            tertiary: m.pick(p.neutral.shade(600)?, p.neutral.shade(300)?),
            disabled: m.pick(p.neutral.shade(500)?, p.neutral.shade(400)?),
            inverse: m.pick(p.neutral.shade(0)?, p.neutral.shade(1000)?),
            on_primary: m.pick(p.neutral.shade(0)?, p.purple.shade(975)?),
            on_elevated: m.pick(p.purple.shade(600)?, p.neutral.shade(0)?),
        };

        let primary = BrandColors {
            default: m.pick(p.purple.shade(600)?, p.purple.shade(400)?),
            hover: m.pick(p.purple.shade(700)?, p.purple.shade(300)?),
            subtle: m.pick(p.purple.shade(100)?, p.purple.shade(900)?),
        };

        let secondary = BrandColors {
            default: m.pick(p.pink.shade(500)?, p.pink.shade(400)?),
            hover: m.pick(p.pink.shade(600)?, p.pink.shade(300)?),
            subtle: m.pick(p.pink.shade(100)?, p.pink.shade(800)?),
        };

        // Light borders step darker, dark borders step lighter.
        let border = BorderColors {
            subtle: m.pick(p.purple.shade(500)?, p.purple.shade(600)?),
            default: m.pick(p.purple.shade(600)?, p.purple.shade(500)?),
            strong: m.pick(p.purple.shade(700)?, p.purple.shade(400)?),
        };

        let status = StatusColors {
            success: m.pick(p.green.shade(600)?, p.green.shade(400)?),
            warning: m.pick(p.amber.shade(600)?, p.amber.shade(400)?),
            error: m.pick(p.red.shade(600)?, p.red.shade(400)?),
            info: m.pick(p.blue.shade(600)?, p.blue.shade(400)?),
        };

        let e = &p.emotions;
        let emotions = EmotionColors {
            happy: e.happy.pick(m),
            excited: e.excited.pick(m),
            calm: e.calm.pick(m),
            sad: e.sad.pick(m),
            anxious: e.anxious.pick(m),
            angry: e.angry.pick(m),
            tired: e.tired.pick(m),
            grateful: e.grateful.pick(m),
        };

        let stats = StatsColors {
            purple: p.stats.purple.pick(m),
            orange: p.stats.orange.pick(m),
            blue: p.stats.blue.pick(m),
        };

        let black = p.neutral.shade(1000)?;
        let white = p.neutral.shade(0)?;
        let shadow = ShadowColors {
            color: m.pick(black.with_opacity(0.08)?, white.with_opacity(0.05)?),
            medium: m.pick(black.with_opacity(0.12)?, white.with_opacity(0.08)?),
            strong: m.pick(black.with_opacity(0.16)?, white.with_opacity(0.12)?),
        };

        let light_gradient = vec![
            p.purple.shade(100)?,
            p.purple.shade(200)?,
            p.purple.shade(300)?,
            p.purple.shade(200)?,
        ];
        let dark_gradient = vec![
            p.purple.shade(950)?,
            p.purple.shade(975)?,
            p.purple.shade(975)?,
        ];
        let gradient = GradientColors {
            background: m.pick(light_gradient, dark_gradient),
        };

        let chart = ChartColors {
            positive: status.success,
            negative: status.error,
            neutral: m.pick(p.neutral.shade(600)?, p.neutral.shade(400)?),
            gradient1: primary.default,
            gradient2: secondary.default,
        };

        tracing::debug!(%mode, base = %surface.base, "generated semantic tokens");

        Ok(Self {
            mode,
            surface,
            text,
            primary,
            secondary,
            border,
            status,
            emotions,
            stats,
            shadow,
            gradient,
            chart,
        })
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{MOODNOTE_PRIMITIVES, Scale};
    use pretty_assertions::assert_eq;

    fn light() -> Theme {
        Theme::generate(&MOODNOTE_PRIMITIVES, Mode::Light).unwrap()
    }

    fn dark() -> Theme {
        Theme::generate(&MOODNOTE_PRIMITIVES, Mode::Dark).unwrap()
    }

    /// Every opaque color a theme exposes, with its role path.
    fn opaque_leaves(t: &Theme) -> Vec<(&'static str, Rgb)> {
        let mut leaves = vec![
            ("surface.base", t.surface.base),
            ("surface.raised", t.surface.raised),
            ("surface.elevated", t.surface.elevated),
            ("text.primary", t.text.primary),
            ("text.secondary", t.text.secondary),
            ("text.tertiary", t.text.tertiary),
            ("text.disabled", t.text.disabled),
            ("text.inverse", t.text.inverse),
            ("text.onPrimary", t.text.on_primary),
            ("text.onElevated", t.text.on_elevated),
            ("primary.default", t.primary.default),
            ("primary.hover", t.primary.hover),
            ("primary.subtle", t.primary.subtle),
            ("secondary.default", t.secondary.default),
            ("secondary.hover", t.secondary.hover),
            ("secondary.subtle", t.secondary.subtle),
            ("border.subtle", t.border.subtle),
            ("border.default", t.border.default),
            ("border.strong", t.border.strong),
            ("status.success", t.status.success),
            ("status.warning", t.status.warning),
            ("status.error", t.status.error),
            ("status.info", t.status.info),
            ("stats.purple", t.stats.purple),
            ("stats.orange", t.stats.orange),
            ("stats.blue", t.stats.blue),
            ("chart.positive", t.chart.positive),
            ("chart.negative", t.chart.negative),
            ("chart.neutral", t.chart.neutral),
            ("chart.gradient1", t.chart.gradient1),
            ("chart.gradient2", t.chart.gradient2),
            ("surface.overlay", t.surface.overlay.rgb),
            ("shadow.color", t.shadow.color.rgb),
            ("shadow.colorMedium", t.shadow.medium.rgb),
            ("shadow.colorStrong", t.shadow.strong.rgb),
        ];
        leaves.extend(t.emotions.iter().map(|(e, c)| (e.name(), c)));
        leaves.extend(t.gradient.background.iter().map(|&c| ("gradient.background", c)));
        leaves
    }

    #[test]
    fn light_base_is_white() {
        assert_eq!(light().surface.base, Rgb::WHITE);
        assert_eq!(light().text.primary, Rgb::from_u32(0x171717));
    }

    #[test]
    fn dark_base_is_deep_purple() {
        assert_eq!(dark().surface.base, Rgb::from_u32(0x1A0233));
        assert_eq!(dark().text.primary, Rgb::from_u32(0xFAFAFA));
    }

    #[test]
    fn modes_are_recorded() {
        assert!(!light().is_dark());
        assert!(dark().is_dark());
    }

    #[test]
    fn every_leaf_is_a_primitive() {
        for theme in [light(), dark()] {
            for (role, color) in opaque_leaves(&theme) {
                assert!(
                    MOODNOTE_PRIMITIVES.contains(color),
                    "{} {role} = {color} is not in the palette",
                    theme.mode
                );
            }
        }
    }

    #[test]
    fn emotions_follow_mode_tables() {
        let l = light();
        let d = dark();
        for emotion in Emotion::ALL {
            let pair = MOODNOTE_PRIMITIVES.emotions.get(emotion);
            assert_eq!(l.emotions.get(emotion), pair.light);
            assert_eq!(d.emotions.get(emotion), pair.dark);
        }
    }

    #[test]
    fn gradients_have_at_least_two_stops() {
        assert_eq!(light().gradient.background.len(), 4);
        assert_eq!(dark().gradient.background.len(), 3);
    }

    #[test]
    fn overlay_and_shadows_are_translucent() {
        let l = light();
        assert_eq!(l.surface.overlay.to_string(), "rgba(0, 0, 0, 0.5)");
        assert_eq!(l.shadow.color.to_string(), "rgba(0, 0, 0, 0.08)");
        let d = dark();
        assert_eq!(d.surface.overlay.to_string(), "rgba(26, 2, 51, 0.9)");
        assert_eq!(d.shadow.strong.to_string(), "rgba(255, 255, 255, 0.12)");
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(light(), light());
        assert_eq!(dark(), dark());
    }

    #[test]
    fn missing_shade_fails_both_modes() {
        const THIN_PURPLE: &[(u16, Rgb)] = &[(50, Rgb::WHITE), (975, Rgb::BLACK)];
        let palette = ColorPrimitives {
            purple: Scale::new("purple", THIN_PURPLE),
            ..MOODNOTE_PRIMITIVES
        };
        for mode in Mode::ALL {
            let err = Theme::generate(&palette, mode).unwrap_err();
            assert!(
                matches!(err, ThemeError::MissingShade { scale: "purple", .. }),
                "{mode}: {err}"
            );
        }
    }

    #[test]
    fn serializes_with_presentation_names() {
        let json = serde_json::to_value(light()).unwrap();
        assert_eq!(json["mode"], "light");
        assert_eq!(json["surface"]["base"], "#FFFFFF");
        assert_eq!(json["text"]["onPrimary"], "#FFFFFF");
        assert_eq!(json["shadow"]["colorMedium"], "rgba(0, 0, 0, 0.12)");
        assert_eq!(json["gradient"]["background"][0], "#F3E8FF");
    }
}
