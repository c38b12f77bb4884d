//! WCAG 2.1 contrast math.
//!
//! - Relative luminance in linearized sRGB, weighted 0.2126/0.7152/0.0722
//! - Contrast ratio `(L_lighter + 0.05) / (L_darker + 0.05)`, in `[1, 21]`
//! - A greedy brightness search that nudges a color until it reaches a
//!   target ratio against a background
//!
//! Everything here is infallible except the hex convenience wrapper, which
//! has to parse its inputs first.

use mn_color::{ColorError, Rgb};

/// Compute the relative luminance of a color per WCAG 2.1.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_linear();
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// [`contrast_ratio`] over two hex strings.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if either input is not a
/// 3- or 6-digit hex color.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio(Rgb::from_hex(a)?, Rgb::from_hex(b)?))
}

/// Step through brightness adjustments until `color` reaches `target`
/// contrast against `background`.
///
/// Tries ±10%, ±15%, … ±100%, lightening before darkening at each step, and
/// returns the first candidate that passes. If none does, returns whichever
/// of black or white contrasts more with the background (black on a tie).
/// A color that already passes is returned unchanged.
#[must_use]
pub fn suggest_color(color: Rgb, background: Rgb, target: f64) -> Rgb {
    let current = contrast_ratio(color, background);
    if current >= target {
        return color;
    }
    tracing::debug!(%color, %background, current, target, "searching for a passing color");

    for step in (10..=100).step_by(5) {
        let percent = f64::from(step);
        for candidate in [
            color.adjust_brightness(percent),
            color.adjust_brightness(-percent),
        ] {
            let ratio = contrast_ratio(candidate, background);
            tracing::trace!(percent, %candidate, ratio, "candidate");
            if ratio >= target {
                tracing::debug!(%candidate, ratio, "found passing color");
                return candidate;
            }
        }
    }

    let black = contrast_ratio(Rgb::BLACK, background);
    let white = contrast_ratio(Rgb::WHITE, background);
    let fallback = if black >= white { Rgb::BLACK } else { Rgb::WHITE };
    tracing::debug!(%fallback, "brightness search exhausted");
    fallback
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex(s: &str) -> Rgb {
        Rgb::from_hex(s).unwrap()
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Rgb::BLACK);
        assert!(approx_eq(lum, 0.0, 1e-12), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Rgb::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_red() {
        let lum = relative_luminance(hex("#FF0000"));
        assert!(approx_eq(lum, 0.2126, 1e-9), "Red luminance: {lum}");
    }

    #[test]
    fn luminance_pure_green() {
        let lum = relative_luminance(hex("#00FF00"));
        assert!(approx_eq(lum, 0.7152, 1e-9), "Green luminance: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        // sRGB 128 linearizes to ~0.2159
        let lum = relative_luminance(hex("#808080"));
        assert!(approx_eq(lum, 0.2159, 0.001), "Mid-gray luminance: {lum}");
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = hex("#9333EA");
        assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-12));
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = hex("#DB2777");
        let b = hex("#1A0233");
        assert!(approx_eq(contrast_ratio(a, b), contrast_ratio(b, a), 1e-12));
    }

    #[test]
    fn contrast_gray_900_on_white() {
        let ratio = contrast_ratio(hex("#1F2937"), Rgb::WHITE);
        assert!(approx_eq(ratio, 14.68, 0.01), "Gray-900 on white: {ratio}");
    }

    #[test]
    fn contrast_deep_purple_on_near_black_is_poor() {
        let ratio = contrast_ratio(hex("#581C87"), hex("#0F0A1A"));
        assert!(approx_eq(ratio, 1.79, 0.01), "Deep purple on near black: {ratio}");
    }

    #[test]
    fn contrast_hex_parses_both_forms() {
        let ratio = contrast_ratio_hex("#FFF", "000000").unwrap();
        assert!(approx_eq(ratio, 21.0, 1e-9));
    }

    #[test]
    fn contrast_hex_rejects_garbage() {
        assert!(matches!(
            contrast_ratio_hex("#GGGGGG", "#000"),
            Err(ColorError::InvalidColorFormat { .. })
        ));
        assert!(contrast_ratio_hex("#FFF", "#12").is_err());
    }

    // ── suggest_color ───────────────────────────────────────────────

    #[test]
    fn suggest_keeps_passing_color() {
        let c = hex("#171717");
        assert_eq!(suggest_color(c, Rgb::WHITE, 7.0), c);
    }

    #[test]
    fn suggest_darkens_on_white() {
        // +10% of #777777 loses contrast; -10% gives #6B6B6B at 5.33:1.
        let got = suggest_color(hex("#777777"), Rgb::WHITE, 4.5);
        assert_eq!(got, hex("#6B6B6B"));
        assert!(contrast_ratio(got, Rgb::WHITE) >= 4.5);
    }

    #[test]
    fn suggest_lightens_on_black() {
        let got = suggest_color(hex("#777777"), Rgb::BLACK, 7.0);
        assert_eq!(got, hex("#959595"));
    }

    #[test]
    fn suggest_brand_purple_for_aaa() {
        assert_eq!(suggest_color(hex("#9333EA"), Rgb::WHITE, 7.0), hex("#7629BB"));
    }

    #[test]
    fn suggest_lightens_on_deep_purple() {
        assert_eq!(suggest_color(hex("#C084FC"), hex("#1A0233"), 12.0), hex("#FFB9FF"));
    }

    #[test]
    fn suggest_falls_back_to_black() {
        // Nothing reaches 21:1 on mid gray; black (5.32) beats white (3.95).
        assert_eq!(suggest_color(hex("#808080"), hex("#808080"), 21.0), Rgb::BLACK);
    }

    #[test]
    fn suggest_black_on_black_falls_back_to_white() {
        // Scaling zero channels is a no-op, so only the fallback can help.
        assert_eq!(suggest_color(Rgb::BLACK, Rgb::BLACK, 4.5), Rgb::WHITE);
    }

    #[test]
    fn suggest_white_on_white_darkens() {
        assert_eq!(suggest_color(Rgb::WHITE, Rgb::WHITE, 4.5), hex("#737373"));
    }
}
