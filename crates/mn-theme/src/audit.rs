//! Which background and threshold each semantic role is held to.
//!
//! Text roles need the text threshold against whatever they are drawn on;
//! everything else that carries meaning (brand, borders, status, emotions,
//! stats, chart series) needs the non-text UI threshold against the base
//! surface. Fills that are meant as backgrounds (`surface.*`,
//! `*.subtle`) and translucent tokens are not audited.

use mn_color::Rgb;

use crate::compliance::{ColorPair, Usage};
use crate::semantic::{Mode, Theme};

/// One role checked against one background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleCheck {
    pub role: &'static str,
    pub foreground: Rgb,
    pub background_role: &'static str,
    pub background: Rgb,
    pub usage: Usage,
}

impl RoleCheck {
    /// A labeled pair such as `Light: text.primary on surface.base`.
    #[must_use]
    pub fn to_pair(&self, theme: &Theme) -> ColorPair {
        let mode = match theme.mode {
            Mode::Light => "Light",
            Mode::Dark => "Dark",
        };
        ColorPair::new(self.foreground, self.background)
            .labeled(format!("{mode}: {} on {}", self.role, self.background_role))
            .with_usage(self.usage)
    }
}

/// Every audited role of `theme`, text roles first.
#[must_use]
pub fn theme_checks(theme: &Theme) -> Vec<RoleCheck> {
    let base = ("surface.base", theme.surface.base);
    let on_primary = ("primary.default", theme.primary.default);
    let elevated = ("surface.elevated", theme.surface.elevated);

    let check = |role: &'static str,
                 foreground: Rgb,
                 (background_role, background): (&'static str, Rgb),
                 usage: Usage| RoleCheck {
        role,
        foreground,
        background_role,
        background,
        usage,
    };
    let text = |role: &'static str, fg: Rgb, bg: (&'static str, Rgb)| {
        check(role, fg, bg, Usage::Text)
    };
    let ui = |role: &'static str, fg: Rgb| check(role, fg, base, Usage::Ui);

    let t = &theme.text;
    let mut checks = vec![
        text("text.primary", t.primary, base),
        text("text.secondary", t.secondary, base),
        text("text.tertiary", t.tertiary, base),
        text("text.disabled", t.disabled, base),
        text("text.inverse", t.inverse, on_primary),
        text("text.onPrimary", t.on_primary, on_primary),
        text("text.onElevated", t.on_elevated, elevated),
        ui("primary.default", theme.primary.default),
        ui("primary.hover", theme.primary.hover),
        ui("secondary.default", theme.secondary.default),
        ui("secondary.hover", theme.secondary.hover),
        ui("border.subtle", theme.border.subtle),
        ui("border.default", theme.border.default),
        ui("border.strong", theme.border.strong),
        ui("status.success", theme.status.success),
        ui("status.warning", theme.status.warning),
        ui("status.error", theme.status.error),
        ui("status.info", theme.status.info),
    ];

    let e = &theme.emotions;
    checks.extend([
        ui("emotions.happy", e.happy),
        ui("emotions.excited", e.excited),
        ui("emotions.calm", e.calm),
        ui("emotions.sad", e.sad),
        ui("emotions.anxious", e.anxious),
        ui("emotions.angry", e.angry),
        ui("emotions.tired", e.tired),
        ui("emotions.grateful", e.grateful),
        ui("stats.purple", theme.stats.purple),
        ui("stats.orange", theme.stats.orange),
        ui("stats.blue", theme.stats.blue),
        ui("chart.positive", theme.chart.positive),
        ui("chart.negative", theme.chart.negative),
        ui("chart.neutral", theme.chart.neutral),
        ui("chart.gradient1", theme.chart.gradient1),
        ui("chart.gradient2", theme.chart.gradient2),
    ]);
    checks
}

/// [`theme_checks`] as labeled pairs ready for [`crate::compliance::batch_check`].
#[must_use]
pub fn theme_pairs(theme: &Theme) -> Vec<ColorPair> {
    theme_checks(theme)
        .iter()
        .map(|check| check.to_pair(theme))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::ThemeSet;
    use crate::compliance::{Level, Rating, batch_check, meets_wcag};
    use crate::contrast::contrast_ratio;
    use pretty_assertions::assert_eq;

    fn set() -> ThemeSet {
        ThemeSet::moodnote().unwrap()
    }

    #[test]
    fn every_role_meets_its_usage_at_aa() {
        let set = set();
        for theme in set.iter() {
            for c in theme_checks(theme) {
                let ratio = contrast_ratio(c.foreground, c.background);
                assert!(
                    meets_wcag(ratio, Level::Aa, c.usage),
                    "{} {} on {}: {ratio:.2} < {}",
                    theme.mode,
                    c.role,
                    c.background_role,
                    c.usage
                );
            }
        }
    }

    #[test]
    fn primary_text_reaches_aaa() {
        let set = set();
        for theme in set.iter() {
            let ratio = contrast_ratio(theme.text.primary, theme.surface.base);
            assert!(ratio >= 7.0, "{}: text.primary {ratio:.2}", theme.mode);
        }
    }

    #[test]
    fn no_audited_pair_is_poor() {
        let set = set();
        for theme in set.iter() {
            for result in batch_check(&theme_pairs(theme)) {
                assert_ne!(result.rating(), Rating::Poor, "{result}");
                assert!(result.meets_target(Level::Aa), "{result}");
            }
        }
    }

    #[test]
    fn role_names_are_unique_per_mode() {
        let set = set();
        let mut roles: Vec<&str> = theme_checks(set.get(Mode::Light))
            .iter()
            .map(|c| c.role)
            .collect();
        let total = roles.len();
        roles.sort_unstable();
        roles.dedup();
        assert_eq!(roles.len(), total);
        assert_eq!(total, 34);
    }

    #[test]
    fn text_on_fills_uses_the_fill() {
        let set = set();
        let dark = set.get(Mode::Dark);
        let checks = theme_checks(dark);
        let on_primary = checks.iter().find(|c| c.role == "text.onPrimary").unwrap();
        assert_eq!(on_primary.background, dark.primary.default);
        let on_elevated = checks.iter().find(|c| c.role == "text.onElevated").unwrap();
        assert_eq!(on_elevated.background, dark.surface.elevated);
    }

    #[test]
    fn pairs_are_labeled_by_mode() {
        let set = set();
        let pairs = theme_pairs(set.get(Mode::Light));
        assert_eq!(
            pairs[0].label.as_deref(),
            Some("Light: text.primary on surface.base")
        );
        assert_eq!(pairs[0].usage, Some(Usage::Text));
        let dark = theme_pairs(set.get(Mode::Dark));
        assert_eq!(
            dark.last().and_then(|p| p.label.as_deref()),
            Some("Dark: chart.gradient2 on surface.base")
        );
    }
}
