use thiserror::Error;

pub mod core_config;


#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    #[error("Missing value for `{0}`")]
    EmptyValue(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parsing error: `{0}`")]
    Parsing(#[from] ConfigParsingError),

    #[error("Config validation error: `{0}`")]
    Validation(#[from] ConfigValidationError),
}
