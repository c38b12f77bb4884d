//! WCAG conformance levels, usage thresholds and per-pair results.
//!
//! | usage      | AA  | AAA |
//! |------------|-----|-----|
//! | text       | 4.5 | 7.0 |
//! | large text | 3.0 | 4.5 |
//! | ui         | 3.0 | 3.0 |

use std::fmt;
use std::str::FromStr;

use mn_color::Rgb;
use serde::{Deserialize, Serialize};

use crate::contrast::contrast_ratio;

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Aa,
    Aaa,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        })
    }
}

/// What a foreground color is used for, which decides its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Usage {
    /// Body text.
    Text,
    /// 18pt+ text, or 14pt+ bold.
    #[serde(alias = "large-text")]
    LargeText,
    /// Borders, icons, focus rings and other non-text graphics.
    Ui,
}

impl Usage {
    pub const ALL: [Self; 3] = [Self::Text, Self::LargeText, Self::Ui];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::LargeText => "largeText",
            Self::Ui => "ui",
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Usage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "largetext" | "large-text" | "large_text" => Ok(Self::LargeText),
            "ui" => Ok(Self::Ui),
            other => Err(format!(
                "unknown usage '{other}' (expected text, large-text or ui)"
            )),
        }
    }
}

/// Minimum contrast ratio for `usage` at `level`.
#[must_use]
pub const fn threshold(level: Level, usage: Usage) -> f64 {
    match (level, usage) {
        (Level::Aa, Usage::Text) | (Level::Aaa, Usage::LargeText) => 4.5,
        (Level::Aa, Usage::LargeText | Usage::Ui) | (Level::Aaa, Usage::Ui) => 3.0,
        (Level::Aaa, Usage::Text) => 7.0,
    }
}

/// Whether `ratio` reaches the threshold for `usage` at `level`.
#[must_use]
pub fn meets_wcag(ratio: f64, level: Level, usage: Usage) -> bool {
    ratio >= threshold(level, usage)
}

// ─── Classification ──────────────────────────────────────────────────────

/// Pass/fail per usage category at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checks {
    pub text: bool,
    pub large_text: bool,
    pub ui: bool,
}

impl Checks {
    #[must_use]
    pub fn at(ratio: f64, level: Level) -> Self {
        Self {
            text: meets_wcag(ratio, level, Usage::Text),
            large_text: meets_wcag(ratio, level, Usage::LargeText),
            ui: meets_wcag(ratio, level, Usage::Ui),
        }
    }

    #[must_use]
    pub const fn get(self, usage: Usage) -> bool {
        match usage {
            Usage::Text => self.text,
            Usage::LargeText => self.large_text,
            Usage::Ui => self.ui,
        }
    }
}

/// Coarse quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rating {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Rating {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Excellent
        } else if ratio >= 4.5 {
            Self::Good
        } else if ratio >= 3.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        })
    }
}

/// Full classification of one contrast ratio.
///
/// `ratio` is rounded to two decimals for display; the checks and the
/// rating are computed from the unrounded value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplianceStatus {
    pub ratio: f64,
    #[serde(rename = "AA")]
    pub aa: Checks,
    #[serde(rename = "AAA")]
    pub aaa: Checks,
    pub rating: Rating,
}

impl ComplianceStatus {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio: (ratio * 100.0).round() / 100.0,
            aa: Checks::at(ratio, Level::Aa),
            aaa: Checks::at(ratio, Level::Aaa),
            rating: Rating::from_ratio(ratio),
        }
    }

    #[must_use]
    pub const fn checks(&self, level: Level) -> Checks {
        match level {
            Level::Aa => self.aa,
            Level::Aaa => self.aaa,
        }
    }
}

// ─── Pairs ───────────────────────────────────────────────────────────────

/// A foreground/background pair to check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub color1: Rgb,
    pub color2: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The usage the pair is meant to satisfy, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl ColorPair {
    #[must_use]
    pub const fn new(color1: Rgb, color2: Rgb) -> Self {
        Self {
            color1,
            color2,
            label: None,
            usage: None,
        }
    }

    #[must_use]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = Some(usage);
        self
    }

    #[must_use]
    pub fn check(&self) -> ComplianceResult {
        let ratio = contrast_ratio(self.color1, self.color2);
        ComplianceResult {
            pair: self.clone(),
            status: ComplianceStatus::from_ratio(ratio),
        }
    }
}

/// A pair together with its classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceResult {
    #[serde(flatten)]
    pub pair: ColorPair,
    #[serde(flatten)]
    pub status: ComplianceStatus,
}

impl ComplianceResult {
    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.status.rating
    }

    /// Whether the pair meets its declared usage at `level`.
    ///
    /// Pairs without a declared usage are held to the text threshold.
    #[must_use]
    pub fn meets_target(&self, level: Level) -> bool {
        let usage = self.pair.usage.unwrap_or(Usage::Text);
        self.status.checks(level).get(usage)
    }
}

impl fmt::Display for ComplianceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |ok: bool| if ok { "✓" } else { "✗" };
        match &self.pair.label {
            Some(label) if !label.is_empty() => f.write_str(label)?,
            _ => write!(f, "{} on {}", self.pair.color1, self.pair.color2)?,
        }
        write!(
            f,
            ": {}:1 ({}) - AA: {} | AAA: {}",
            self.status.ratio,
            self.status.rating,
            mark(self.status.aa.text),
            mark(self.status.aaa.text),
        )
    }
}

/// Check every pair, preserving order.
#[must_use]
pub fn batch_check(pairs: &[ColorPair]) -> Vec<ComplianceResult> {
    pairs.iter().map(ColorPair::check).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
