//! Section composer.
//!
//! Stacks titled chip groups vertically: title line, flowed chips, divider
//! rule, then the next group below. Groups are laid out in the order
//! supplied. A group with no labels is skipped entirely so the sheet never
//! shows a bare title or a divider under nothing.

use crate::chips::{flow_chips, ChipLabel, ChipMetrics};
use crate::elements::{
    BoxElement, LayoutElement, PositionedElement, RuleElement, TextElement, TextStyle,
};
use crate::measure::TextMeasurer;
use caresheet_types::{Color, Point, Rect};

/// One duty category with the labels selected for the subject.
#[derive(Clone, Debug)]
pub struct DutyGroup {
    pub title: String,
    pub labels: Vec<ChipLabel>,
}

/// Visual styling for composed sections. Placement only depends on
/// `title_size`, `title_gap` and `divider_gap`; the colors flow through to
/// the renderer untouched.
#[derive(Clone, Debug)]
pub struct SectionStyle {
    pub title_size: f32,
    pub title_color: Color,
    /// Space between the title baseline box and the first chip row.
    pub title_gap: f32,
    pub divider_color: Color,
    pub divider_thickness: f32,
    /// Space between a divider and the next group's title.
    pub divider_gap: f32,
    pub chip_fill: Color,
    pub chip_required_fill: Color,
    pub chip_text_color: Color,
    pub chip_corner_radius: f32,
}

impl Default for SectionStyle {
    fn default() -> Self {
        Self {
            title_size: 10.0,
            title_color: Color::gray(40),
            title_gap: 6.0,
            divider_color: Color::gray(200),
            divider_thickness: 0.5,
            divider_gap: 10.0,
            chip_fill: Color::rgb(229, 231, 235),
            chip_required_fill: Color::rgb(191, 219, 254),
            chip_text_color: Color::gray(30),
            chip_corner_radius: 4.0,
        }
    }
}

/// Drawable output of `compose_sections` plus the next insertion point.
#[derive(Clone, Debug)]
pub struct SectionLayout {
    pub elements: Vec<PositionedElement>,
    pub end: Point,
}

pub fn compose_sections(
    groups: &[DutyGroup],
    origin: Point,
    max_width: f32,
    metrics: &ChipMetrics,
    style: &SectionStyle,
    measurer: &dyn TextMeasurer,
) -> SectionLayout {
    let mut elements = Vec::new();
    let mut y = origin.y;

    for group in groups {
        if group.labels.is_empty() {
            continue;
        }

        elements.push(PositionedElement::new(
            Rect::new(origin.x, y, max_width, style.title_size),
            LayoutElement::Text(TextElement {
                content: group.title.clone(),
                style: TextStyle::bold(style.title_size, style.title_color),
            }),
        ));
        y += style.title_size + style.title_gap;

        let flow = flow_chips(
            &group.labels,
            Point::new(origin.x, y),
            max_width,
            metrics,
            measurer,
        );

        for chip in &flow.chips {
            let fill = if chip.label.required {
                style.chip_required_fill
            } else {
                style.chip_fill
            };
            elements.push(PositionedElement::new(
                chip.rect,
                LayoutElement::Box(BoxElement {
                    fill,
                    corner_radius: style.chip_corner_radius,
                }),
            ));

            // Re-measure to center the caption inside the chip.
            let text_width = measurer.measure(&chip.label.text, metrics.font_size);
            let caption = Rect::new(
                chip.rect.x + (chip.rect.width - text_width) / 2.0,
                chip.rect.y + (metrics.row_height - metrics.font_size) / 2.0,
                text_width,
                metrics.font_size,
            );
            elements.push(PositionedElement::new(
                caption,
                LayoutElement::Text(TextElement {
                    content: chip.label.text.clone(),
                    style: TextStyle::regular(metrics.font_size, style.chip_text_color),
                }),
            ));
        }

        elements.push(PositionedElement::new(
            Rect::new(origin.x, flow.end.y, max_width, style.divider_thickness),
            LayoutElement::Rule(RuleElement {
                color: style.divider_color,
                thickness: style.divider_thickness,
            }),
        ));
        y = flow.end.y + style.divider_gap;
    }

    SectionLayout {
        elements,
        end: Point::new(origin.x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FixedAdvanceMeasurer;

    fn group(title: &str, texts: &[&str]) -> DutyGroup {
        DutyGroup {
            title: title.to_string(),
            labels: texts.iter().map(|t| ChipLabel::new(*t)).collect(),
        }
    }

    fn compose(groups: &[DutyGroup]) -> SectionLayout {
        compose_sections(
            groups,
            Point::new(0.0, 0.0),
            200.0,
            &ChipMetrics::default(),
            &SectionStyle::default(),
            &FixedAdvanceMeasurer::new(10.0),
        )
    }

    #[test]
    fn empty_group_contributes_nothing() {
        let with_empty = compose(&[
            group("Personal Care", &["wash"]),
            group("Household", &[]),
            group("Medical", &["meds"]),
        ]);
        let without = compose(&[
            group("Personal Care", &["wash"]),
            group("Medical", &["meds"]),
        ]);

        assert_eq!(with_empty.elements.len(), without.elements.len());
        assert_eq!(with_empty.end, without.end);
        assert!(!with_empty
            .elements
            .iter()
            .any(|e| matches!(&e.element, LayoutElement::Text(t) if t.content == "Household")));
    }

    #[test]
    fn all_groups_empty_ends_at_origin() {
        let layout = compose(&[group("A", &[]), group("B", &[])]);
        assert!(layout.elements.is_empty());
        assert_eq!(layout.end, Point::new(0.0, 0.0));
    }

    #[test]
    fn groups_keep_supplied_order() {
        let layout = compose(&[
            group("Zeta", &["wash"]),
            group("Alpha", &["feed"]),
        ]);
        let titles: Vec<(&str, f32)> = layout
            .elements
            .iter()
            .filter_map(|e| match &e.element {
                LayoutElement::Text(t) if t.style.font == crate::FontRole::Bold => {
                    Some((t.content.as_str(), e.y))
                }
                _ => None,
            })
            .collect();
        assert_eq!(titles[0].0, "Zeta");
        assert_eq!(titles[1].0, "Alpha");
        assert!(titles[0].1 < titles[1].1);
    }

    #[test]
    fn each_section_emits_divider_below_chips() {
        let layout = compose(&[group("Personal Care", &["wash", "feed"])]);
        let chip_bottom = layout
            .elements
            .iter()
            .filter(|e| matches!(e.element, LayoutElement::Box(_)))
            .map(|e| e.y + e.height)
            .fold(f32::NEG_INFINITY, f32::max);
        let rule = layout
            .elements
            .iter()
            .find(|e| matches!(e.element, LayoutElement::Rule(_)))
            .expect("divider emitted");
        assert!(rule.y >= chip_bottom);
    }

    #[test]
    fn chip_captions_are_centered() {
        let layout = compose(&[group("Personal Care", &["wash"])]);
        let chip = layout
            .elements
            .iter()
            .find(|e| matches!(e.element, LayoutElement::Box(_)))
            .unwrap();
        let caption = layout
            .elements
            .iter()
            .find(|e| matches!(&e.element, LayoutElement::Text(t) if t.content == "wash"))
            .unwrap();
        let left = caption.x - chip.x;
        let right = (chip.x + chip.width) - (caption.x + caption.width);
        assert!((left - right).abs() < 0.01);
    }
}
