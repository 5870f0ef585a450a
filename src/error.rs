use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Role '{0}' is not present in the duty taxonomy")]
    UnknownRole(String),
    #[error(transparent)]
    Font(#[from] caresheet_layout::FontError),
    #[error(transparent)]
    Render(#[from] caresheet_render_lopdf::RenderError),
}
