//! Layout engine for the profile sheet: chip flow, section composition and
//! text measurement. All placement is computed in top-down page
//! coordinates and expressed as `PositionedElement`s; rendering them is the
//! renderer crate's concern.

pub mod chips;
pub mod elements;
pub mod fonts;
pub mod measure;
pub mod sections;
pub mod text;

pub use self::chips::{flow_chips, ChipFlow, ChipLabel, ChipMetrics, PlacedChip};
pub use self::elements::{
    BoxElement, FontRole, LayoutElement, PositionedElement, RuleElement, TextElement, TextStyle,
};
pub use self::fonts::{FontError, FontLibrary};
pub use self::measure::{FixedAdvanceMeasurer, ShapedMeasurer, TextMeasurer};
pub use self::sections::{compose_sections, DutyGroup, SectionLayout, SectionStyle};
pub use self::text::wrap_text;

// Re-export geometry types used in the public API to prevent type mismatches
pub use caresheet_types::{Color, Point, Rect};
