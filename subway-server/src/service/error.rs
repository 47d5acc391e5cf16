//! Service error type.

use crate::domain::{ErrorKind, TopologyError};
use crate::path::PathError;
use crate::registry::RegistryError;

/// Any failure surfaced by [`SubwayService`](super::SubwayService).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Path(#[from] PathError),
}

impl ServiceError {
    /// The error kind callers should branch on.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Registry(e) => e.kind(),
            ServiceError::Topology(e) => e.kind(),
            ServiceError::Path(e) => e.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, StationId};

    #[test]
    fn kind_follows_source() {
        let err = ServiceError::from(RegistryError::StationNotFound(StationId(99)));
        assert_eq!(err.kind(), ErrorKind::StationNotFound);
        assert_eq!(err.to_string(), "station 99 not found");

        let err = ServiceError::from(RegistryError::LineNotFound(LineId(4)));
        assert_eq!(err.kind(), ErrorKind::LineNotFound);

        let err = ServiceError::from(TopologyError::MinimumCount);
        assert_eq!(err.kind(), ErrorKind::SectionMinimumCountViolation);

        let err = ServiceError::from(PathError::EmptyNetwork);
        assert_eq!(err.kind(), ErrorKind::PathNotFound);
    }
}
