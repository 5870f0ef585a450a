use crate::assembler::{assemble_sheet, SheetOptions, PAGE_HEIGHT, PAGE_WIDTH};
use crate::error::SheetError;
use crate::profile::StaffProfile;
use crate::taxonomy::DutyTaxonomy;
use caresheet_layout::TextMeasurer;
use caresheet_render_lopdf::render_page;

/// Validates, assembles and renders the profile sheet.
///
/// The PDF is only produced after the full layout pass succeeds, so a
/// failure never yields a partial document. Generation is idempotent and
/// cheap; callers simply re-invoke on failure instead of retrying here.
pub fn generate_profile_sheet(
    profile: &StaffProfile,
    taxonomy: &DutyTaxonomy,
    options: &SheetOptions,
    measurer: &dyn TextMeasurer,
) -> Result<Vec<u8>, SheetError> {
    let elements = assemble_sheet(profile, taxonomy, options, measurer)?;
    log::debug!(
        "assembled sheet for '{}': {} elements",
        profile.name,
        elements.len()
    );
    Ok(render_page(&elements, PAGE_WIDTH, PAGE_HEIGHT)?)
}

/// Download filename derived from the subject's name.
pub fn suggested_filename(profile: &StaffProfile) -> String {
    format!("{}-profile.pdf", slug::slugify(&profile.name))
}
