use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid sheet id: {0:?}")]
    InvalidSheetId(String),
    #[error("invalid rule id: {0:?}")]
    InvalidRuleId(String),
    #[error("unknown rule status: {0:?}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
