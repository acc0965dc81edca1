use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    #[error("markdown parsing error: {message}")]
    #[diagnostic(
        code(md2adf::parse),
        help("The input could not be parsed as markdown.")
    )]
    Parse { message: String },

    #[error("JSON serialization error: {0}")]
    #[diagnostic(code(md2adf::json))]
    Json(#[from] serde_json::Error),
}
