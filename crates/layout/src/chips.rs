//! Chip flow layout.
//!
//! Packs short labels ("chips") left to right, wrapping to a new row when
//! the next chip would cross the right edge. Pure coordinate computation:
//! no drawing happens here, which keeps row packing testable without a PDF
//! renderer in the loop.

use crate::measure::TextMeasurer;
use caresheet_types::{Point, Rect};

/// A duty label rendered as a chip. `required` marks duties that are
/// mandatory for the subject's role; it selects the fill color downstream
/// and never affects placement.
#[derive(Clone, Debug, PartialEq)]
pub struct ChipLabel {
    pub text: String,
    pub required: bool,
}

impl ChipLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            required: false,
        }
    }

    pub fn required(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            required: true,
        }
    }
}

/// Style metrics supplied by the caller. Immutable during a flow pass.
#[derive(Clone, Debug)]
pub struct ChipMetrics {
    /// Horizontal padding inside a chip, applied on both sides of the text.
    pub padding_x: f32,
    /// Gap between adjacent chips, horizontally and between rows.
    pub gap: f32,
    pub row_height: f32,
    pub font_size: f32,
    /// Extra vertical space charged below the last row in the end cursor.
    pub section_gap: f32,
}

impl Default for ChipMetrics {
    fn default() -> Self {
        Self {
            padding_x: 7.0,
            gap: 5.0,
            row_height: 16.0,
            font_size: 8.5,
            section_gap: 8.0,
        }
    }
}

/// A chip with its final placement.
#[derive(Clone, Debug)]
pub struct PlacedChip {
    pub rect: Rect,
    pub label: ChipLabel,
}

/// Result of a flow pass: placed chips plus the next insertion point for
/// content below the flowed block.
#[derive(Clone, Debug)]
pub struct ChipFlow {
    pub chips: Vec<PlacedChip>,
    pub end: Point,
}

/// Flows `labels` into rows starting at `origin`, never exceeding
/// `origin.x + max_width` except for a single label that is wider than the
/// row itself. Such a label is placed at the row start unsplit and simply
/// overflows; callers accept the overflow or pre-filter.
///
/// An empty label slice leaves the cursor at the origin (zero height).
pub fn flow_chips(
    labels: &[ChipLabel],
    origin: Point,
    max_width: f32,
    metrics: &ChipMetrics,
    measurer: &dyn TextMeasurer,
) -> ChipFlow {
    if labels.is_empty() {
        return ChipFlow {
            chips: Vec::new(),
            end: origin,
        };
    }

    let mut cursor = origin;
    let mut chips = Vec::with_capacity(labels.len());

    for label in labels {
        let chip_width = measurer.measure(&label.text, metrics.font_size) + 2.0 * metrics.padding_x;

        // Wrap unless the chip is the first on its row; a first chip wider
        // than the row stays put and overflows.
        if cursor.x + chip_width > origin.x + max_width && cursor.x > origin.x {
            cursor.x = origin.x;
            cursor.y += metrics.row_height + metrics.gap;
        }

        chips.push(PlacedChip {
            rect: Rect::new(cursor.x, cursor.y, chip_width, metrics.row_height),
            label: label.clone(),
        });

        cursor.x += chip_width + metrics.gap;
    }

    ChipFlow {
        chips,
        end: Point::new(origin.x, cursor.y + metrics.row_height + metrics.section_gap),
    }
}
