//! Color primitives — the raw, authored palette.
//!
//! Numbered shade scales plus the per-mode tables for emotions and stats
//! cards. Nothing here is computed. UI code never reads these directly;
//! it reads semantic roles from a [`Theme`](crate::Theme), which are
//! always lookups into this table.
//!
//! Shade numbering follows the usual 50–950 convention: higher numbers are
//! darker, except on the neutral scale where `0` is pure white and `1000`
//! is pure black.

use mn_color::Rgb;

use crate::error::ThemeError;
use crate::semantic::Mode;

// ---------------------------------------------------------------------------
// Scale
// ---------------------------------------------------------------------------

/// A named shade scale, e.g. `purple` with shades 50 through 975.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    pub name: &'static str,
    shades: &'static [(u16, Rgb)],
}

impl Scale {
    #[must_use]
    pub const fn new(name: &'static str, shades: &'static [(u16, Rgb)]) -> Self {
        Self { name, shades }
    }

    /// Look up a shade, if the scale defines it.
    #[must_use]
    pub fn get(&self, shade: u16) -> Option<Rgb> {
        self.shades
            .iter()
            .find_map(|&(key, color)| (key == shade).then_some(color))
    }

    /// Look up a shade that a semantic role depends on.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingShade`] when the scale lacks `shade`.
    pub fn shade(&self, shade: u16) -> Result<Rgb, ThemeError> {
        self.get(shade).ok_or(ThemeError::MissingShade {
            scale: self.name,
            shade,
        })
    }

    /// Shades in authored order (lightest first).
    pub fn iter(&self) -> impl Iterator<Item = (u16, Rgb)> + '_ {
        self.shades.iter().copied()
    }

    #[must_use]
    pub fn contains(&self, color: Rgb) -> bool {
        self.shades.iter().any(|&(_, c)| c == color)
    }
}

// ---------------------------------------------------------------------------
// Per-mode leaves
// ---------------------------------------------------------------------------

/// One color tuned for each mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePair {
    pub light: Rgb,
    pub dark: Rgb,
}

impl ModePair {
    #[must_use]
    pub const fn new(light: u32, dark: u32) -> Self {
        Self {
            light: Rgb::from_u32(light),
            dark: Rgb::from_u32(dark),
        }
    }

    #[must_use]
    pub const fn pick(self, mode: Mode) -> Rgb {
        match mode {
            Mode::Light => self.light,
            Mode::Dark => self.dark,
        }
    }

    const fn contains(self, color: Rgb) -> bool {
        self.light.to_u32() == color.to_u32() || self.dark.to_u32() == color.to_u32()
    }
}

/// The moods a journal entry can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Happy,
    Excited,
    Calm,
    Sad,
    Anxious,
    Angry,
    Tired,
    Grateful,
}

impl Emotion {
    pub const ALL: [Self; 8] = [
        Self::Happy,
        Self::Excited,
        Self::Calm,
        Self::Sad,
        Self::Anxious,
        Self::Angry,
        Self::Tired,
        Self::Grateful,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Excited => "excited",
            Self::Calm => "calm",
            Self::Sad => "sad",
            Self::Anxious => "anxious",
            Self::Angry => "angry",
            Self::Tired => "tired",
            Self::Grateful => "grateful",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EmotionPrimitives {
    pub happy: ModePair,
    pub excited: ModePair,
    pub calm: ModePair,
    pub sad: ModePair,
    pub anxious: ModePair,
    pub angry: ModePair,
    pub tired: ModePair,
    pub grateful: ModePair,
}

impl EmotionPrimitives {
    #[must_use]
    pub const fn get(&self, emotion: Emotion) -> ModePair {
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
}

/// Accent colors for the stats cards.
#[derive(Debug, Clone, Copy)]
pub struct StatsPrimitives {
    pub purple: ModePair,
    pub orange: ModePair,
    pub blue: ModePair,
}

// ---------------------------------------------------------------------------
// ColorPrimitives
// ---------------------------------------------------------------------------

/// The complete authored palette.
#[derive(Debug, Clone, Copy)]
pub struct ColorPrimitives {
    /// Primary brand color.
    pub purple: Scale,
    /// Secondary brand color (magenta-pink).
    pub pink: Scale,
    pub neutral: Scale,
    pub green: Scale,
    pub amber: Scale,
    pub red: Scale,
    pub blue: Scale,
    pub emotions: EmotionPrimitives,
    pub stats: StatsPrimitives,
}

impl ColorPrimitives {
    #[must_use]
    pub const fn scales(&self) -> [&Scale; 7] {
        [
            &self.purple,
            &self.pink,
            &self.neutral,
            &self.green,
            &self.amber,
            &self.red,
            &self.blue,
        ]
    }

    /// Whether `color` is authored anywhere in the table.
    #[must_use]
    pub fn contains(&self, color: Rgb) -> bool {
        let in_pairs = Emotion::ALL
            .iter()
            .map(|&e| self.emotions.get(e))
            .chain([self.stats.purple, self.stats.orange, self.stats.blue])
            .any(|pair| pair.contains(color));
        in_pairs || self.scales().iter().any(|scale| scale.contains(color))
    }
}

const fn c(hex: u32) -> Rgb {
    Rgb::from_u32(hex)
}

const PURPLE: &[(u16, Rgb)] = &[
    (50, c(0xFAF5FF)),  // raised light surface
    (100, c(0xF3E8FF)), // elevated light surface
    (200, c(0xE9D5FF)),
    (300, c(0xD8B4FE)),
    (400, c(0xC084FC)), // dark-mode primary
    (500, c(0xA855F7)),
    (600, c(0x9333EA)), // light-mode primary
    (700, c(0x7E22CE)),
    (800, c(0x6B21A8)), // elevated dark surface
    (900, c(0x581C87)),
    (950, c(0x3B0764)), // raised dark surface
    (975, c(0x1A0233)), // dark base
];

const PINK: &[(u16, Rgb)] = &[
    (50, c(0xFDF4FF)),
    (100, c(0xFAE8FF)),
    (200, c(0xF5D0FE)),
    (300, c(0xF0ABFC)),
    (400, c(0xE879F9)),
    (500, c(0xD946EF)),
    (600, c(0xC026D3)),
    (700, c(0xA21CAF)),
    (800, c(0x86198F)),
    (900, c(0x701A75)),
];

const NEUTRAL: &[(u16, Rgb)] = &[
    (0, c(0xFFFFFF)),
    (50, c(0xFAFAFA)),
    (100, c(0xF5F5F5)),
    (200, c(0xE5E5E5)),
    (300, c(0xD4D4D4)),
    (400, c(0xA3A3A3)),
    (500, c(0x737373)),
    (600, c(0x525252)),
    (700, c(0x404040)),
    (800, c(0x262626)),
    (900, c(0x171717)),
    (950, c(0x0A0A0A)),
    (1000, c(0x000000)),
];

const GREEN: &[(u16, Rgb)] = &[
    (100, c(0xD1FAE5)),
    (400, c(0x34D399)),
    (500, c(0x10B981)),
    (600, c(0x059669)),
    (700, c(0x047857)),
    (900, c(0x064E3B)),
];

const AMBER: &[(u16, Rgb)] = &[
    (100, c(0xFEF3C7)),
    (400, c(0xFBBF24)),
    (500, c(0xF59E0B)),
    (600, c(0xD97706)),
    (700, c(0xB45309)),
    (900, c(0x78350F)),
];

const RED: &[(u16, Rgb)] = &[
    (100, c(0xFEE2E2)),
    (400, c(0xF87171)),
    (500, c(0xEF4444)),
    (600, c(0xDC2626)),
    (700, c(0xB91C1C)),
    (900, c(0x7F1D1D)),
];

const BLUE: &[(u16, Rgb)] = &[
    (100, c(0xDBEAFE)),
    (400, c(0x60A5FA)),
    (500, c(0x3B82F6)),
    (600, c(0x2563EB)),
    (700, c(0x1D4ED8)),
    (900, c(0x1E3A8A)),
];

/// The MoodNote palette.
pub const MOODNOTE_PRIMITIVES: ColorPrimitives = ColorPrimitives {
    purple: Scale::new("purple", PURPLE),
    pink: Scale::new("pink", PINK),
    neutral: Scale::new("neutral", NEUTRAL),
    green: Scale::new("green", GREEN),
    amber: Scale::new("amber", AMBER),
    red: Scale::new("red", RED),
    blue: Scale::new("blue", BLUE),
    // Light values sit at ≥3:1 on white, dark values at ≥4.5:1 on
    // purple 975.
    emotions: EmotionPrimitives {
        happy: ModePair::new(0xD97706, 0xFCD34D),
        excited: ModePair::new(0xE11D48, 0xF9A8D4),
        calm: ModePair::new(0x059669, 0x6EE7B7),
        sad: ModePair::new(0x2563EB, 0x93C5FD),
        anxious: ModePair::new(0x7C3AED, 0xC4B5FD),
        angry: ModePair::new(0xDC2626, 0xFCA5A5),
        tired: ModePair::new(0x64748B, 0xCBD5E1),
        grateful: ModePair::new(0xEA580C, 0xFDBA74),
    },
    stats: StatsPrimitives {
        purple: ModePair::new(0x9333EA, 0xC084FC),
        orange: ModePair::new(0xEA580C, 0xFB923C),
        blue: ModePair::new(0x2563EB, 0x60A5FA),
    },
};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_shade() {
        assert_eq!(MOODNOTE_PRIMITIVES.purple.get(600), Some(Rgb::from_u32(0x9333EA)));
        assert_eq!(MOODNOTE_PRIMITIVES.neutral.get(0), Some(Rgb::WHITE));
        assert_eq!(MOODNOTE_PRIMITIVES.neutral.get(1000), Some(Rgb::BLACK));
    }

    #[test]
    fn missing_shade_is_an_error() {
        assert_eq!(MOODNOTE_PRIMITIVES.green.get(300), None);
        assert_eq!(
            MOODNOTE_PRIMITIVES.green.shade(300),
            Err(ThemeError::MissingShade {
                scale: "green",
                shade: 300
            })
        );
    }

    #[test]
    fn scales_get_darker() {
        // Within every scale, luminance must fall as the shade number rises.
        for scale in MOODNOTE_PRIMITIVES.scales() {
            let lum: Vec<f64> = scale
                .iter()
                .map(|(_, c)| crate::contrast::relative_luminance(c))
                .collect();
            for pair in lum.windows(2) {
                assert!(pair[0] > pair[1], "{} is not monotonic: {lum:?}", scale.name);
            }
        }
    }

    #[test]
    fn shade_keys_are_sorted_and_unique() {
        for scale in MOODNOTE_PRIMITIVES.scales() {
            let keys: Vec<u16> = scale.iter().map(|(k, _)| k).collect();
            assert!(keys.windows(2).all(|w| w[0] < w[1]), "{}: {keys:?}", scale.name);
        }
    }

    #[test]
    fn mode_pair_picks_by_mode() {
        let pair = MOODNOTE_PRIMITIVES.emotions.get(Emotion::Calm);
        assert_eq!(pair.pick(Mode::Light), Rgb::from_u32(0x059669));
        assert_eq!(pair.pick(Mode::Dark), Rgb::from_u32(0x6EE7B7));
    }

    #[test]
    fn contains_sees_scales_and_pairs() {
        assert!(MOODNOTE_PRIMITIVES.contains(Rgb::from_u32(0x1A0233)));
        assert!(MOODNOTE_PRIMITIVES.contains(Rgb::from_u32(0xFB923C)));
        assert!(!MOODNOTE_PRIMITIVES.contains(Rgb::from_u32(0x0F0A1A)));
    }

    #[test]
    fn emotion_names_are_unique() {
        let mut names: Vec<&str> = Emotion::ALL.iter().map(|e| e.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Emotion::ALL.len());
    }
}
