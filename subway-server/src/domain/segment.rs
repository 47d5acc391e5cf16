//! Directed station-to-station segments.

use super::{Station, StationId, TopologyError};

/// Smallest distance a segment may carry.
pub const MIN_DISTANCE: u64 = 1;

/// Largest distance a segment may carry.
///
/// Keeps line totals and path sums well inside `u64`.
pub const MAX_DISTANCE: u64 = u32::MAX as u64;

/// One directed link from `up` to `down` with a positive distance.
///
/// Validated at construction: any `Segment` in hand joins two different
/// stations and has `MIN_DISTANCE <= distance <= MAX_DISTANCE`.
///
/// ```
/// use subway_server::domain::{Segment, Station, StationId};
///
/// let a = Station::new(StationId(1), "A").unwrap();
/// let b = Station::new(StationId(2), "B").unwrap();
///
/// let seg = Segment::new(a.clone(), b.clone(), 10).unwrap();
/// assert_eq!(seg.distance(), 10);
///
/// assert!(Segment::new(a, b, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    up: Station,
    down: Station,
    distance: u64,
}

impl Segment {
    /// Create a segment, rejecting distances outside
    /// [`MIN_DISTANCE`]..=[`MAX_DISTANCE`] and segments that start and end
    /// at the same station.
    ///
    /// Takes a signed distance so that negative input coming from callers
    /// is reported as a distance error rather than a parse error.
    pub fn new(up: Station, down: Station, distance: i64) -> Result<Self, TopologyError> {
        let checked = u64::try_from(distance)
            .ok()
            .filter(|d| *d >= MIN_DISTANCE)
            .ok_or(TopologyError::DistanceTooShort { distance })?;
        if checked > MAX_DISTANCE {
            return Err(TopologyError::DistanceTooLong { distance });
        }
        if up.id() == down.id() {
            return Err(TopologyError::SameStation(up.id()));
        }

        Ok(Self {
            up,
            down,
            distance: checked,
        })
    }

    pub fn up(&self) -> &Station {
        &self.up
    }

    pub fn down(&self) -> &Station {
        &self.down
    }

    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Whether `station` is either endpoint.
    pub fn touches(&self, station: StationId) -> bool {
        self.up.id() == station || self.down.id() == station
    }

    /// Cut the leading `inserted` part off this segment: it now starts at
    /// `inserted`'s down station and is shorter by its distance.
    ///
    /// Caller guarantees `inserted.distance < self.distance`.
    pub(super) fn trim_front(&mut self, inserted: &Segment) {
        self.up = inserted.down.clone();
        self.distance -= inserted.distance;
    }

    /// Cut the trailing `inserted` part off this segment: it now ends at
    /// `inserted`'s up station and is shorter by its distance.
    ///
    /// Caller guarantees `inserted.distance < self.distance`.
    pub(super) fn trim_back(&mut self, inserted: &Segment) {
        self.down = inserted.up.clone();
        self.distance -= inserted.distance;
    }
}
