//! # mn-theme — MoodNote semantic colors and WCAG compliance
//!
//! Turns the authored MoodNote palette into per-mode semantic themes and
//! checks every role of those themes against WCAG 2.1 contrast thresholds.
//!
//! # Architecture
//!
//! ```text
//! primitives.rs: authored hex scales + per-mode emotion/stats tables
//!     │
//!     ▼
//! semantic.rs:   Theme::generate(primitives, mode), one lookup per role
//!     │
//!     ▼
//! builtin.rs:    ThemeSet, both modes built once and passed by reference
//!     │
//!     ▼
//! audit.rs:      role → (background, usage) pairs for a theme
//!     │
//!     ▼
//! contrast.rs + compliance.rs: luminance, ratio, AA/AAA classification
//!     │
//!     ▼
//! report.rs:     batch results, rating tiers, console summary
//! ```
//!
//! The generator never measures contrast itself. Compliance comes from how
//! the primitive table is authored and is verified after the fact by the
//! audit, both in this crate's tests and by the `moodnote-palette` CLI.

pub mod audit;
pub mod builtin;
pub mod compliance;
pub mod contrast;
pub mod error;
pub mod primitives;
pub mod report;
pub mod semantic;

pub use builtin::ThemeSet;
pub use compliance::{ColorPair, ComplianceResult, ComplianceStatus, Level, Rating, Usage};
pub use error::ThemeError;
pub use primitives::{ColorPrimitives, MOODNOTE_PRIMITIVES};
pub use report::{Section, Summary, ValidationReport};
pub use semantic::{Mode, Theme};
