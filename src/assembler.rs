//! Document assembler: the fixed two-column A4 profile sheet template.
//!
//! Left column: photo placeholder, identity lines, verification status.
//! Right column: duty sections for the subject's role. A testimonials
//! block goes below the taller column, but only when it starts above the
//! configured page-bottom cutoff; the sheet is always exactly one page and
//! overflow content is dropped, never flowed to a second page.

use crate::error::SheetError;
use crate::profile::StaffProfile;
use crate::taxonomy::DutyTaxonomy;
use caresheet_layout::{
    compose_sections, wrap_text, BoxElement, ChipMetrics, Color, LayoutElement, Point,
    PositionedElement, Rect, RuleElement, SectionStyle, TextElement, TextMeasurer, TextStyle,
};

/// A4 in points.
pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;

#[derive(Clone, Debug)]
pub struct SheetOptions {
    pub margin: f32,
    pub column_gap: f32,
    pub left_column_width: f32,
    /// Top-down y past which the testimonials block is dropped. Effectively
    /// the page-bottom margin; kept configurable rather than a literal.
    pub page_bottom_cutoff: f32,
    pub chip_metrics: ChipMetrics,
    pub section_style: SectionStyle,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            margin: 40.0,
            column_gap: 24.0,
            left_column_width: 190.0,
            page_bottom_cutoff: 750.0,
            chip_metrics: ChipMetrics::default(),
            section_style: SectionStyle::default(),
        }
    }
}

const INK: Color = Color::gray(30);
const MUTED: Color = Color::gray(110);
const PLACEHOLDER_FILL: Color = Color::gray(230);

/// Lays out the full sheet and returns its drawable elements in paint
/// order. Fails fast on an empty subject name or a role the taxonomy does
/// not know; no partial layout is ever returned.
pub fn assemble_sheet(
    profile: &StaffProfile,
    taxonomy: &DutyTaxonomy,
    options: &SheetOptions,
    measurer: &dyn TextMeasurer,
) -> Result<Vec<PositionedElement>, SheetError> {
    if profile.name.trim().is_empty() {
        return Err(SheetError::MissingField("subject.name"));
    }
    let role_duties = taxonomy
        .for_role(&profile.role)
        .ok_or_else(|| SheetError::UnknownRole(profile.role.clone()))?;

    let mut elements = Vec::new();

    let left_x = options.margin;
    let left_width = options.left_column_width;
    let left_end = layout_left_column(&mut elements, profile, left_x, left_width, options, measurer);

    let right_x = left_x + left_width + options.column_gap;
    let right_width = PAGE_WIDTH - options.margin - right_x;
    let sections = compose_sections(
        &role_duties.groups_for(&profile.selected_duties),
        Point::new(right_x, options.margin),
        right_width,
        &options.chip_metrics,
        &options.section_style,
        measurer,
    );
    elements.extend(sections.elements);

    layout_testimonials(
        &mut elements,
        profile,
        left_end.max(sections.end.y),
        options,
        measurer,
    );

    Ok(elements)
}

fn push_text(
    elements: &mut Vec<PositionedElement>,
    x: f32,
    y: f32,
    width: f32,
    content: impl Into<String>,
    style: TextStyle,
) {
    let size = style.size;
    elements.push(PositionedElement::new(
        Rect::new(x, y, width, size),
        LayoutElement::Text(TextElement {
            content: content.into(),
            style,
        }),
    ));
}

/// Returns the y just below the column's last line.
fn layout_left_column(
    elements: &mut Vec<PositionedElement>,
    profile: &StaffProfile,
    x: f32,
    width: f32,
    options: &SheetOptions,
    measurer: &dyn TextMeasurer,
) -> f32 {
    let mut y = options.margin;

    // Photo placeholder; actual photos live in external object storage.
    elements.push(PositionedElement::new(
        Rect::new(x, y, 90.0, 110.0),
        LayoutElement::Box(BoxElement {
            fill: PLACEHOLDER_FILL,
            corner_radius: 6.0,
        }),
    ));
    y += 110.0 + 16.0;

    push_text(elements, x, y, width, profile.name.trim(), TextStyle::bold(15.0, INK));
    y += 19.0;
    push_text(elements, x, y, width, &profile.role, TextStyle::regular(10.0, MUTED));
    y += 16.0;

    elements.push(PositionedElement::new(
        Rect::new(x, y, width, 0.5),
        LayoutElement::Rule(RuleElement {
            color: Color::gray(200),
            thickness: 0.5,
        }),
    ));
    y += 10.0;

    let detail_style = || TextStyle::regular(8.5, INK);
    let mut detail = |elements: &mut Vec<PositionedElement>, y: &mut f32, label: &str, value: &str| {
        for line in wrap_text(&format!("{}: {}", label, value), width, 8.5, measurer) {
            push_text(elements, x, *y, width, line, detail_style());
            *y += 13.0;
        }
    };

    if let Some(phone) = &profile.phone {
        detail(elements, &mut y, "Phone", phone);
    }
    if let Some(email) = &profile.email {
        detail(elements, &mut y, "Email", email);
    }
    if let Some(address) = &profile.address {
        detail(elements, &mut y, "Address", address);
    }
    if let Some(years) = profile.experience_years {
        detail(elements, &mut y, "Experience", &format!("{} years", years));
    }

    y += 8.0;
    push_text(elements, x, y, width, "Verification", TextStyle::bold(9.0, INK));
    y += 14.0;
    let checks = [
        ("Identity verified", profile.verification.identity_verified),
        ("Police check", profile.verification.police_check),
        ("References checked", profile.verification.references_checked),
    ];
    for (label, ok) in checks {
        let value = if ok { "Yes" } else { "No" };
        push_text(
            elements,
            x,
            y,
            width,
            format!("{}: {}", label, value),
            TextStyle::regular(8.5, if ok { INK } else { MUTED }),
        );
        y += 13.0;
    }

    y
}

fn layout_testimonials(
    elements: &mut Vec<PositionedElement>,
    profile: &StaffProfile,
    columns_end: f32,
    options: &SheetOptions,
    measurer: &dyn TextMeasurer,
) {
    if profile.testimonials.is_empty() {
        return;
    }

    let mut y = columns_end + 14.0;
    if y >= options.page_bottom_cutoff {
        // One page only; the block is dropped rather than paginated.
        log::debug!(
            "testimonials omitted: block would start at y={:.1}, cutoff is {:.1}",
            y,
            options.page_bottom_cutoff
        );
        return;
    }

    let x = options.margin;
    let width = PAGE_WIDTH - 2.0 * options.margin;
    push_text(elements, x, y, width, "Testimonials", TextStyle::bold(10.0, INK));
    y += 15.0;

    for testimonial in &profile.testimonials {
        for line in wrap_text(&format!("\"{}\"", testimonial), width, 8.5, measurer) {
            push_text(elements, x, y, width, line, TextStyle::regular(8.5, MUTED));
            y += 12.0;
        }
        y += 4.0;
    }
}
