//! Text measurement and number formatting for scene layouts.
//!
//! Scenes never shape text; widths are estimated from character counts so layouts stay
//! deterministic. The rendering host draws the actual glyphs.

use chrono::{DateTime, Utc};

/// Average advance of one character, as a fraction of the font size.
const CHAR_ADVANCE_EM: f64 = 0.6;

/// Estimated width of `text` at `size` pixels.
pub fn text_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * CHAR_ADVANCE_EM * size
}

/// Left edges of items with the given widths laid out in a row centered on `center_x`.
pub fn centered_row(widths: &[f64], gap: f64, center_x: f64) -> Vec<f64> {
    let total: f64 = widths.iter().sum::<f64>() + gap * widths.len().saturating_sub(1) as f64;
    let mut x = center_x - total / 2.0;
    widths
        .iter()
        .map(|w| {
            let left = x;
            x += w + gap;
            left
        })
        .collect()
}

/// `12456` -> `"12,456"`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `M/D/YYYY - M/D/YYYY`.
pub fn date_range(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!(
        "{} - {}",
        start.format("%-m/%-d/%Y"),
        end.format("%-m/%-d/%Y")
    )
}

/// `HH:MM` (UTC).
pub fn clock(t: DateTime<Utc>) -> String {
    t.format("%H:%M").to_string()
}

/// `Mar 29, 10:15 AM` (UTC).
pub fn short_timestamp(t: DateTime<Utc>) -> String {
    t.format("%b %-d, %-I:%M %p").to_string()
}

/// Upper-case the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;
