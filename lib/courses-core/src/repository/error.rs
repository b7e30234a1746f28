use thiserror::Error;

use crate::service::error::ErrorCode;

#[derive(Debug, Error)]
pub enum DataLayerError {
    #[error("Already exists")]
    AlreadyExists,

    #[error("Wrong parameters")]
    IncorrectParameters,

    #[error("Response could not be mapped")]
    MappingError,

    #[error("Transaction error: {0}")]
    TransactionError(String),

    #[error("Database error: {0}")]
    Db(#[from] anyhow::Error),
}

impl DataLayerError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Db(_) | Self::TransactionError(_) => ErrorCode::BR_0004,
            Self::AlreadyExists | Self::IncorrectParameters | Self::MappingError => {
                ErrorCode::BR_0000
            }
        }
    }
}
