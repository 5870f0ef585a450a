//! Font discovery for the measurement adapter.
//!
//! `FontLibrary` wraps fontdb and hands out the raw font data backing a
//! `ShapedMeasurer`. The sheet is rendered with the non-embedded base-14
//! Helvetica family, so the library only needs a sans-serif face whose
//! metrics drive layout; glyph rendering is the PDF viewer's job.

use crate::measure::ShapedMeasurer;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("No sans-serif font available for measurement")]
    NotFound,
    #[error("Failed to load font from {path}: {message}")]
    LoadFailed { path: String, message: String },
    #[error("Invalid font data: {0}")]
    InvalidData(String),
}

/// Holds the fontdb database used to locate a measurement face.
pub struct FontLibrary {
    #[cfg(feature = "system-fonts")]
    db: fontdb::Database,
    /// Fonts registered directly, preferred over discovered ones.
    direct: Vec<Arc<Vec<u8>>>,
}

impl FontLibrary {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "system-fonts")]
            db: fontdb::Database::new(),
            direct: Vec::new(),
        }
    }

    /// Enables system font discovery (native platforms only).
    #[cfg(feature = "system-fonts")]
    pub fn with_system_fonts(mut self) -> Self {
        self.db.load_system_fonts();
        log::debug!("loaded {} system font faces", self.db.faces().count());
        self
    }

    /// Registers raw font data directly. Registered fonts take precedence
    /// over system fonts.
    pub fn add_font_data(&mut self, data: Vec<u8>) -> Result<(), FontError> {
        if ttf_parser::Face::parse(&data, 0).is_err() {
            return Err(FontError::InvalidData(
                "font data is not a parsable face".to_string(),
            ));
        }
        let data = Arc::new(data);
        #[cfg(feature = "system-fonts")]
        self.db.load_font_data(data.as_ref().clone());
        self.direct.push(data);
        Ok(())
    }

    /// Resolves the raw data of a regular-weight sans-serif face.
    ///
    /// Resolution order: directly registered fonts, then fontdb's
    /// sans-serif query.
    pub fn sans_serif_data(&self) -> Result<Arc<Vec<u8>>, FontError> {
        if let Some(data) = self.direct.first() {
            log::debug!("using directly registered font for measurement");
            return Ok(data.clone());
        }

        #[cfg(feature = "system-fonts")]
        {
            return self.resolve_from_fontdb();
        }

        #[cfg(not(feature = "system-fonts"))]
        Err(FontError::NotFound)
    }

    /// Builds a measurer over the resolved sans-serif face.
    pub fn measurer(&self) -> Result<ShapedMeasurer, FontError> {
        ShapedMeasurer::new(self.sans_serif_data()?)
    }

    #[cfg(feature = "system-fonts")]
    fn resolve_from_fontdb(&self) -> Result<Arc<Vec<u8>>, FontError> {
        let query = fontdb::Query {
            families: &[
                fontdb::Family::Name("Helvetica"),
                fontdb::Family::Name("Arial"),
                fontdb::Family::SansSerif,
            ],
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };

        let id = self.db.query(&query).ok_or(FontError::NotFound)?;
        let face_info = self.db.face(id).ok_or(FontError::NotFound)?;
        log::debug!(
            "measurement face: {:?} ({})",
            face_info.families,
            face_info.post_script_name
        );

        match &face_info.source {
            fontdb::Source::Binary(data) => Ok(Arc::new(data.as_ref().as_ref().to_vec())),
            fontdb::Source::File(path) => {
                let bytes = std::fs::read(path).map_err(|e| FontError::LoadFailed {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                Ok(Arc::new(bytes))
            }
            _ => Err(FontError::InvalidData(
                "unsupported font source type".to_string(),
            )),
        }
    }
}

impl Default for FontLibrary {
    fn default() -> Self {
        #[cfg(feature = "system-fonts")]
        {
            Self::new().with_system_fonts()
        }
        #[cfg(not(feature = "system-fonts"))]
        Self::new()
    }
}
