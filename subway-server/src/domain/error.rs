//! Domain error types.
//!
//! `TopologyError` covers every way a line's segment chain can reject a
//! mutation. `ErrorKind` is the small, stable taxonomy shared by every layer;
//! transport code maps kinds to status codes and never inspects messages.

use std::fmt;

use super::{MAX_DISTANCE, MIN_DISTANCE, StationId};

/// Named error kinds surfaced to callers of the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    StationNotFound,
    LineNotFound,
    SectionNotFound,
    SectionAlreadyExists,
    SectionDistanceTooShort,
    SectionRemovalNotLastStation,
    SectionMinimumCountViolation,
    PathDuplicateStation,
    PathNotFound,
    /// Malformed input rejected before reaching the core (e.g. empty names).
    InvalidRequest,
}

impl ErrorKind {
    /// Stable machine-readable code for this kind.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::StationNotFound => "STATION_NOT_FOUND",
            ErrorKind::LineNotFound => "LINE_NOT_FOUND",
            ErrorKind::SectionNotFound => "SECTION_NOT_FOUND",
            ErrorKind::SectionAlreadyExists => "SECTION_ALREADY_EXISTS",
            ErrorKind::SectionDistanceTooShort => "SECTION_DISTANCE_TOO_SHORT",
            ErrorKind::SectionRemovalNotLastStation => "SECTION_REMOVAL_NOT_LAST_STATION",
            ErrorKind::SectionMinimumCountViolation => "SECTION_MINIMUM_COUNT_VIOLATION",
            ErrorKind::PathDuplicateStation => "PATH_DUPLICATE_STATION",
            ErrorKind::PathNotFound => "PATH_NOT_FOUND",
            ErrorKind::InvalidRequest => "INVALID_REQUEST",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Errors raised by a line topology.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// Segment distance below the minimum
    #[error("section distance {distance} is too short (minimum {min})", min = MIN_DISTANCE)]
    DistanceTooShort { distance: i64 },

    /// Segment distance above the maximum
    #[error("section distance {distance} is too long (maximum {max})", max = MAX_DISTANCE)]
    DistanceTooLong { distance: i64 },

    /// Segment starts and ends at the same station
    #[error("section cannot start and end at station {0}")]
    SameStation(StationId),

    /// Splitting segment is not strictly shorter than the segment it splits
    #[error("section distance {distance} must be shorter than the existing section ({existing})")]
    SplitTooLong { distance: u64, existing: u64 },

    /// Both endpoints already belong to the line
    #[error("stations {up} and {down} are both already on the line")]
    AlreadyExists { up: StationId, down: StationId },

    /// Neither endpoint belongs to the line
    #[error("section {up} -> {down} does not connect to the line")]
    NotConnected { up: StationId, down: StationId },

    /// Removal requested for a station other than the last one
    #[error("only the last station ({last}) can be removed, not {station}")]
    NotLastStation { station: StationId, last: StationId },

    /// Removal would leave the line without sections
    #[error("a line must keep at least one section")]
    MinimumCount,

    /// No unique first section
    #[error("first section not found")]
    FirstNotFound,

    /// No unique last section
    #[error("last section not found")]
    LastNotFound,
}

impl TopologyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TopologyError::DistanceTooShort { .. } | TopologyError::SplitTooLong { .. } => {
                ErrorKind::SectionDistanceTooShort
            }
            TopologyError::DistanceTooLong { .. } => ErrorKind::InvalidRequest,
            TopologyError::AlreadyExists { .. } | TopologyError::SameStation(_) => {
                ErrorKind::SectionAlreadyExists
            }
            TopologyError::NotConnected { .. }
            | TopologyError::FirstNotFound
            | TopologyError::LastNotFound => ErrorKind::SectionNotFound,
            TopologyError::NotLastStation { .. } => ErrorKind::SectionRemovalNotLastStation,
            TopologyError::MinimumCount => ErrorKind::SectionMinimumCountViolation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TopologyError::DistanceTooShort { distance: 0 };
        assert_eq!(err.to_string(), "section distance 0 is too short (minimum 1)");

        let err = TopologyError::SplitTooLong {
            distance: 7,
            existing: 7,
        };
        assert_eq!(
            err.to_string(),
            "section distance 7 must be shorter than the existing section (7)"
        );

        let err = TopologyError::NotLastStation {
            station: StationId(2),
            last: StationId(3),
        };
        assert_eq!(
            err.to_string(),
            "only the last station (3) can be removed, not 2"
        );

        let err = TopologyError::MinimumCount;
        assert_eq!(err.to_string(), "a line must keep at least one section");

        let err = TopologyError::DistanceTooLong {
            distance: 1 << 40,
        };
        assert_eq!(
            err.to_string(),
            "section distance 1099511627776 is too long (maximum 4294967295)"
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(
            TopologyError::DistanceTooShort { distance: -3 }.kind(),
            ErrorKind::SectionDistanceTooShort
        );
        assert_eq!(
            TopologyError::SplitTooLong {
                distance: 4,
                existing: 2
            }
            .kind(),
            ErrorKind::SectionDistanceTooShort
        );
        assert_eq!(
            TopologyError::NotConnected {
                up: StationId(1),
                down: StationId(2)
            }
            .kind(),
            ErrorKind::SectionNotFound
        );
        assert_eq!(TopologyError::LastNotFound.kind(), ErrorKind::SectionNotFound);
        assert_eq!(
            TopologyError::SameStation(StationId(1)).kind(),
            ErrorKind::SectionAlreadyExists
        );
        assert_eq!(
            TopologyError::DistanceTooLong { distance: i64::MAX }.kind(),
            ErrorKind::InvalidRequest
        );
        assert_eq!(
            TopologyError::MinimumCount.kind(),
            ErrorKind::SectionMinimumCountViolation
        );
    }

    #[test]
    fn kind_codes() {
        assert_eq!(ErrorKind::PathNotFound.code(), "PATH_NOT_FOUND");
        assert_eq!(
            ErrorKind::SectionRemovalNotLastStation.to_string(),
            "SECTION_REMOVAL_NOT_LAST_STATION"
        );
    }
}
