//! PDF rendering for profile sheets using the `lopdf` library.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Render error: {0}")]
    Other(String),
}

mod page;
mod renderer;

pub use renderer::render_page;
