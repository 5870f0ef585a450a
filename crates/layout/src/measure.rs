//! Text measurement adapter.
//!
//! The layout engine never talks to a font directly; it measures text
//! through the `TextMeasurer` trait. The production implementation shapes
//! the string with rustybuzz and sums glyph advances. Tests use
//! `FixedAdvanceMeasurer` so coordinates can be asserted without any font
//! on the machine.

use crate::fonts::FontError;
use rustybuzz::{Feature, UnicodeBuffer};
use std::cell::RefCell;
use std::sync::Arc;
use ttf_parser::Tag;

// Reuse buffer to avoid allocations in the tight loop
thread_local! {
    static SCRATCH_BUFFER: RefCell<Option<UnicodeBuffer>> = RefCell::new(Some(UnicodeBuffer::new()));
}

/// Measures the rendered width of a string at a given font size.
///
/// Contract: deterministic for a fixed font and size. The chip flow engine
/// calls this once to size a chip and the section composer calls it again
/// to center the caption, so both calls must agree.
pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str, font_size: f32) -> f32;
}

/// Shapes text with rustybuzz over an in-memory font and sums the
/// horizontal advances.
pub struct ShapedMeasurer {
    data: Arc<Vec<u8>>,
}

impl ShapedMeasurer {
    /// Wraps raw font data. Fails if the data does not parse as a font face.
    pub fn new(data: Arc<Vec<u8>>) -> Result<Self, FontError> {
        if ttf_parser::Face::parse(&data, 0).is_err() {
            return Err(FontError::InvalidData(
                "font data is not a parsable face".to_string(),
            ));
        }
        Ok(Self { data })
    }

    /// Creates a lightweight Face view over the font data.
    /// This is cheap (parsing header) and avoids self-referential struct issues.
    fn as_face(&self) -> Option<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.data, 0)
    }
}

impl TextMeasurer for ShapedMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        let Some(face) = self.as_face() else {
            // Validated at construction; only reachable on corrupt data.
            log::warn!("font face no longer parsable, measuring as zero width");
            return 0.0;
        };

        static FEATURES: std::sync::OnceLock<Vec<Feature>> = std::sync::OnceLock::new();
        let features = FEATURES.get_or_init(|| {
            vec![
                Feature::new(Tag::from_bytes(b"liga"), 1, ..),
                Feature::new(Tag::from_bytes(b"kern"), 1, ..),
            ]
        });

        let mut buffer =
            SCRATCH_BUFFER.with(|b| b.borrow_mut().take().unwrap_or_else(UnicodeBuffer::new));
        buffer.push_str(text);
        buffer.guess_segment_properties();

        let glyph_buffer = rustybuzz::shape(&face, features, buffer);

        let scale = font_size / face.units_per_em() as f32;
        let width: f32 = glyph_buffer
            .glyph_positions()
            .iter()
            .map(|pos| pos.x_advance as f32 * scale)
            .sum();

        let recycled_buffer = glyph_buffer.clear();
        SCRATCH_BUFFER.with(|b| *b.borrow_mut() = Some(recycled_buffer));

        width
    }
}

/// Deterministic measurer that charges a fixed advance per character,
/// ignoring the font size. Intended for tests and coordinate snapshots.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasurer {
    pub advance: f32,
}

impl FixedAdvanceMeasurer {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, _font_size: f32) -> f32 {
        text.chars().count() as f32 * self.advance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_advance_scales_with_length() {
        let m = FixedAdvanceMeasurer::new(10.0);
        assert_eq!(m.measure("", 12.0), 0.0);
        assert_eq!(m.measure("abcd", 12.0), 40.0);
        assert_eq!(m.measure("abcd", 99.0), 40.0);
    }
}
