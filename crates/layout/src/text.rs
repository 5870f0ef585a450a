//! Greedy word wrapping for free-text blocks (the testimonials section).
//!
//! Splits on whitespace and fills lines up to `max_width`. A single word
//! wider than the line is placed on its own line and overflows, matching
//! the chip flow policy of never splitting content.

use crate::measure::TextMeasurer;

pub fn wrap_text(
    text: &str,
    max_width: f32,
    font_size: f32,
    measurer: &dyn TextMeasurer,
) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if measurer.measure(&candidate, font_size) > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            } else {
                current = candidate;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}
