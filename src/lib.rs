//! caresheet: one-page staff profile sheet generation.
//!
//! Takes a subject record and a duty taxonomy and renders a deterministic
//! single-page A4 PDF. The layout engine (`caresheet-layout`) computes
//! coordinates as pure data, the renderer (`caresheet-render-lopdf`) turns
//! them into bytes, and this crate wires the two behind the profile data
//! model.

pub mod assembler;
pub mod error;
pub mod generator;
pub mod profile;
pub mod taxonomy;

pub use assembler::{assemble_sheet, SheetOptions, PAGE_HEIGHT, PAGE_WIDTH};
pub use error::SheetError;
pub use generator::{generate_profile_sheet, suggested_filename};
pub use profile::{StaffProfile, Verification};
pub use taxonomy::{DutyCategory, DutyTaxonomy, RoleDuties};

// Re-export the measurement seam so callers can construct a measurer
// without depending on the layout crate directly.
pub use caresheet_layout::{FixedAdvanceMeasurer, FontLibrary, ShapedMeasurer, TextMeasurer};
