use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid trial balance input: {details}")]
    Validation { details: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unknown tax engine key '{0}': no registered country/year variant")]
    UnknownTaxEngine(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
