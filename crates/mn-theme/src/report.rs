//! Batch compliance report.
//!
//! A report is a list of titled sections of [`ComplianceResult`]s plus a
//! summary over all of them. Low contrast never makes a report fail to
//! build; it only shows up in the counts.

use std::fmt;

use serde::Serialize;

use crate::audit::theme_pairs;
use crate::builtin::ThemeSet;
use crate::compliance::{ComplianceResult, Level, Rating, batch_check};
use crate::semantic::Mode;

const TITLE: &str = "🎨 MoodNote Color Validation";
const RULE_WIDTH: usize = 60;

/// A titled group of results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub results: Vec<ComplianceResult>,
}

impl Section {
    #[must_use]
    pub fn new(title: impl Into<String>, results: Vec<ComplianceResult>) -> Self {
        Self {
            title: title.into(),
            results,
        }
    }

    /// The audit pairs of one built-in theme.
    #[must_use]
    pub fn for_mode(themes: &ThemeSet, mode: Mode) -> Self {
        let title = match mode {
            Mode::Light => "📱 LIGHT MODE",
            Mode::Dark => "🌙 DARK MODE",
        };
        Self::new(title, batch_check(&theme_pairs(themes.get(mode))))
    }
}

/// Counts over every result in a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
    pub aa_text: usize,
    pub aa_ui: usize,
    pub aaa_text: usize,
    /// Pairs that miss the AA threshold of their declared usage.
    pub target_failures: usize,
}

impl Summary {
    #[must_use]
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a ComplianceResult>) -> Self {
        let mut s = Self::default();
        for r in results {
            s.total += 1;
            match r.rating() {
                Rating::Excellent => s.excellent += 1,
                Rating::Good => s.good += 1,
                Rating::Fair => s.fair += 1,
                Rating::Poor => s.poor += 1,
            }
            s.aa_text += usize::from(r.status.aa.text);
            s.aa_ui += usize::from(r.status.aa.ui);
            s.aaa_text += usize::from(r.status.aaa.text);
            s.target_failures += usize::from(!r.meets_target(Level::Aa));
        }
        s
    }

    /// No pair is rated `Poor`.
    #[must_use]
    pub const fn all_meet_minimum(&self) -> bool {
        self.poor == 0
    }
}

/// Sections plus their summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub sections: Vec<Section>,
    pub summary: Summary,
}

impl ValidationReport {
    #[must_use]
    pub fn from_sections(sections: Vec<Section>) -> Self {
        let summary = Summary::from_results(sections.iter().flat_map(|s| &s.results));
        tracing::debug!(
            sections = sections.len(),
            total = summary.total,
            poor = summary.poor,
            target_failures = summary.target_failures,
            "built validation report"
        );
        Self { sections, summary }
    }

    /// One section per requested mode of the built-in themes.
    #[must_use]
    pub fn for_themes(themes: &ThemeSet, modes: &[Mode]) -> Self {
        Self::from_sections(
            modes
                .iter()
                .map(|&mode| Section::for_mode(themes, mode))
                .collect(),
        )
    }

    /// Whether any pair is `Poor` or misses its declared usage.
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.summary.poor > 0 || self.summary.target_failures > 0
    }

    pub fn results(&self) -> impl Iterator<Item = &ComplianceResult> {
        self.sections.iter().flat_map(|s| &s.results)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{TITLE}")?;
        writeln!(f)?;
        writeln!(f, "{heavy}")?;

        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.title)?;
            writeln!(f, "{light}")?;
            for result in &section.results {
                writeln!(f, "{result}")?;
            }
        }

        let s = &self.summary;
        writeln!(f)?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "📊 SUMMARY")?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "Total Pairs Tested: {}", s.total)?;
        writeln!(f, "Excellent (≥7:1): {} ⭐", s.excellent)?;
        writeln!(f, "Good (≥4.5:1): {} ✓", s.good)?;
        writeln!(f, "Fair (≥3:1): {} ⚠️", s.fair)?;
        writeln!(f, "Poor (<3:1): {} ❌", s.poor)?;
        writeln!(f)?;
        writeln!(f, "WCAG AA (Text): {}/{} pass", s.aa_text, s.total)?;
        writeln!(f, "WCAG AA (UI): {}/{} pass", s.aa_ui, s.total)?;
        writeln!(f, "WCAG AAA (Text): {}/{} pass", s.aaa_text, s.total)?;
        if s.target_failures > 0 {
            writeln!(f, "Usage targets missed: {}", s.target_failures)?;
        }
        writeln!(f)?;
        if s.all_meet_minimum() {
            writeln!(f, "✅ All color pairs meet minimum WCAG standards!")?;
        } else {
            writeln!(f, "⚠️ Warning: {} color pairs below WCAG standards", s.poor)?;
        }
        writeln!(f)?;
        writeln!(f, "{heavy}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
