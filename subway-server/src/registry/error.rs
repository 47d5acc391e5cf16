//! Registry error types.

use crate::domain::{ErrorKind, InvalidName, LineId, StationId};

/// Errors that can occur when looking up or creating stations and lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Station id is unknown
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// Line id is unknown
    #[error("line {0} not found")]
    LineNotFound(LineId),

    /// Name or color failed validation
    #[error(transparent)]
    InvalidName(#[from] InvalidName),
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::StationNotFound(_) => ErrorKind::StationNotFound,
            RegistryError::LineNotFound(_) => ErrorKind::LineNotFound,
            RegistryError::InvalidName(_) => ErrorKind::InvalidRequest,
        }
    }
}
