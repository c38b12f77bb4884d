//! Both modes of a palette, built once.
//!
//! Construct a [`ThemeSet`] at startup and hand out references; nothing in
//! this crate caches themes behind the caller's back.

use crate::error::ThemeError;
use crate::primitives::{ColorPrimitives, MOODNOTE_PRIMITIVES};
use crate::semantic::{Mode, Theme};

/// The light and dark themes generated from one primitive table.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSet {
    light: Theme,
    dark: Theme,
}

impl ThemeSet {
    /// Generate both modes from `primitives`.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ThemeError`] from either mode.
    pub fn new(primitives: &ColorPrimitives) -> Result<Self, ThemeError> {
        Ok(Self {
            light: Theme::generate(primitives, Mode::Light)?,
            dark: Theme::generate(primitives, Mode::Dark)?,
        })
    }

    /// The MoodNote palette.
    ///
    /// # Errors
    ///
    /// Only if the built-in table is incomplete, which the tests rule out.
    pub fn moodnote() -> Result<Self, ThemeError> {
        Self::new(&MOODNOTE_PRIMITIVES)
    }

    #[must_use]
    pub const fn get(&self, mode: Mode) -> &Theme {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// Themes in [`Mode::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        Mode::ALL.into_iter().map(|mode| self.get(mode))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use mn_color::Rgb;

    #[test]
    fn moodnote_resolves() {
        assert!(ThemeSet::moodnote().is_ok());
    }

    #[test]
    fn get_returns_requested_mode() {
        let set = ThemeSet::moodnote().unwrap();
        assert_eq!(set.get(Mode::Light).mode, Mode::Light);
        assert_eq!(set.get(Mode::Dark).mode, Mode::Dark);
    }

    #[test]
    fn iter_is_light_then_dark() {
        let set = ThemeSet::moodnote().unwrap();
        let modes: Vec<Mode> = set.iter().map(|t| t.mode).collect();
        assert_eq!(modes, vec![Mode::Light, Mode::Dark]);
    }

    #[test]
    fn modes_are_distinct() {
        let set = ThemeSet::moodnote().unwrap();
        let light = set.get(Mode::Light);
        let dark = set.get(Mode::Dark);
        assert_ne!(light.surface.base, dark.surface.base);
        assert_ne!(light.text.primary, dark.text.primary);
    }

    #[test]
    fn same_primitives_same_set() {
        assert_eq!(ThemeSet::moodnote().unwrap(), ThemeSet::new(&MOODNOTE_PRIMITIVES).unwrap());
    }

    #[test]
    fn shared_across_threads() {
        let set = ThemeSet::moodnote().unwrap();
        std::thread::scope(|s| {
            let handle = s.spawn(|| set.get(Mode::Dark).surface.base);
            assert_eq!(handle.join().unwrap(), Rgb::from_u32(0x1A0233));
        });
    }
}
