//! Readout formatting for release predictions.

/// Rendered in place of a distance or ETA that is not available.
pub const INFINITY_GLYPH: &str = "∞";

/// ETAs at or above this many seconds switch from `"S s"` to `"M min S s"`.
pub const ETA_MINUTES_THRESHOLD_S: u64 = 60;

/// Format a time-to-release in seconds.
///
/// `"42 s"` below one minute, `"3 min 7 s"` from 60 s on, and `"∞"` for a
/// non-finite value. Fractional seconds are rounded first.
pub fn format_eta(seconds: f64) -> String {
    if !seconds.is_finite() {
        return INFINITY_GLYPH.to_owned();
    }
    let total = seconds.max(0.0).round() as u64;
    if total < ETA_MINUTES_THRESHOLD_S {
        format!("{total} s")
    } else {
        format!("{} min {} s", total / 60, total % 60)
    }
}

/// Format a distance in meters as a whole number with thousands separated
/// by spaces (`"12 345"`), or `"∞"` when non-finite.
pub fn format_distance(meters: f64) -> String {
    if !meters.is_finite() {
        return INFINITY_GLYPH.to_owned();
    }
    let rounded = meters.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (k, ch) in digits.chars().enumerate() {
        if k > 0 && (digits.len() - k) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
