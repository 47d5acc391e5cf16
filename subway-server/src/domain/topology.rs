//! Line topology: the ordered chain of segments that makes up one line.
//!
//! Segments live in an arena owned by the topology. Each entry records the
//! slot of its predecessor and successor, so the chain order is explicit and
//! independent of storage order. Slots are dense: removing a segment moves
//! the last entry into the freed slot and patches its neighbours.
//!
//! Once non-empty, the chain is always a single simple path: one head, one
//! tail, and every station appears at most once as an up station and at most
//! once as a down station.

use super::{Segment, Station, StationId, TopologyError};

type Slot = usize;

#[derive(Debug, Clone)]
struct Link {
    segment: Segment,
    prev: Option<Slot>,
    next: Option<Slot>,
}

/// Ordered chain of segments for a single line.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{LineTopology, Segment, Station, StationId};
///
/// let s = |id: u64| Station::new(StationId(id), &format!("S{id}")).unwrap();
///
/// let mut topology = LineTopology::new();
/// topology.insert(Segment::new(s(1), s(2), 10).unwrap()).unwrap();
/// topology.insert(Segment::new(s(2), s(3), 5).unwrap()).unwrap();
///
/// // Split 1 -> 2 by inserting 1 -> 4
/// topology.insert(Segment::new(s(1), s(4), 3).unwrap()).unwrap();
///
/// let ids: Vec<u64> = topology.stations().iter().map(|st| st.id().0).collect();
/// assert_eq!(ids, vec![1, 4, 2, 3]);
/// assert_eq!(topology.total_distance(), 15);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineTopology {
    links: Vec<Link>,
}

impl LineTopology {
    /// Create an empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a topology holding a single segment.
    pub fn with_segment(segment: Segment) -> Self {
        Self {
            links: vec![Link {
                segment,
                prev: None,
                next: None,
            }],
        }
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Insert a segment at the head, at the tail, or by splitting an
    /// existing segment.
    ///
    /// A segment attaches through exactly one endpoint that is already on
    /// the line:
    ///
    /// - its down station is the first station: it becomes the new head;
    /// - its up station is the last station: it becomes the new tail;
    /// - its up station starts an existing segment: that segment is split,
    ///   keeping the new segment in front of the shortened remainder;
    /// - its down station ends an existing segment: that segment is split,
    ///   keeping the shortened remainder in front of the new segment.
    ///
    /// A split requires the new segment to be strictly shorter than the one
    /// it splits. On error the topology is left untouched.
    pub fn insert(&mut self, segment: Segment) -> Result<(), TopologyError> {
        if self.links.is_empty() {
            self.links.push(Link {
                segment,
                prev: None,
                next: None,
            });
            return Ok(());
        }

        let up = segment.up().id();
        let down = segment.down().id();

        match (self.contains_station(up), self.contains_station(down)) {
            (true, true) => Err(TopologyError::AlreadyExists { up, down }),
            (false, false) => Err(TopologyError::NotConnected { up, down }),
            (true, false) => self.attach_by_up_station(segment),
            (false, true) => self.attach_by_down_station(segment),
        }
    }

    /// Remove the last segment, identified by its down station.
    ///
    /// Only the last station of the line can be removed, and a line always
    /// keeps at least one segment.
    pub fn remove(&mut self, station: StationId) -> Result<Segment, TopologyError> {
        if self.links.len() <= 1 {
            return Err(TopologyError::MinimumCount);
        }

        let tail = self.tail_slot()?;
        let last = self.links[tail].segment.down().id();
        if station != last {
            return Err(TopologyError::NotLastStation { station, last });
        }

        Ok(self.unlink(tail))
    }

    /// The segment with no predecessor.
    pub fn first_segment(&self) -> Result<&Segment, TopologyError> {
        self.head_slot().map(|slot| &self.links[slot].segment)
    }

    /// The segment with no successor.
    pub fn last_segment(&self) -> Result<&Segment, TopologyError> {
        self.tail_slot().map(|slot| &self.links[slot].segment)
    }

    /// The line's first station.
    pub fn first_station(&self) -> Result<&Station, TopologyError> {
        self.first_segment().map(Segment::up)
    }

    /// The line's last station.
    pub fn last_station(&self) -> Result<&Station, TopologyError> {
        self.last_segment().map(Segment::down)
    }

    /// Segments in chain order, head to tail.
    pub fn segments(&self) -> Vec<&Segment> {
        let mut ordered = Vec::with_capacity(self.links.len());
        let mut cursor = self.head_slot().ok();

        while let Some(slot) = cursor {
            // A well-formed chain visits every slot exactly once
            if ordered.len() == self.links.len() {
                break;
            }
            let link = &self.links[slot];
            ordered.push(&link.segment);
            cursor = link.next;
        }

        ordered
    }

    /// Stations in travel order, first to last.
    pub fn stations(&self) -> Vec<&Station> {
        let segments = self.segments();
        let mut stations = Vec::with_capacity(segments.len() + 1);

        if let Some(first) = segments.first() {
            stations.push(first.up());
        }
        stations.extend(segments.iter().map(|s| s.down()));

        stations
    }

    /// Whether `station` is on this line.
    pub fn contains_station(&self, station: StationId) -> bool {
        self.links.iter().any(|l| l.segment.touches(station))
    }

    /// Look up the station data for `station` among this line's segments.
    pub fn find_station(&self, station: StationId) -> Option<&Station> {
        self.links.iter().find_map(|l| {
            if l.segment.up().id() == station {
                Some(l.segment.up())
            } else if l.segment.down().id() == station {
                Some(l.segment.down())
            } else {
                None
            }
        })
    }

    /// The segment departing from `station`, if any.
    pub fn segment_by_up_station(&self, station: StationId) -> Option<&Segment> {
        self.slot_where(|s| s.up().id() == station)
            .map(|slot| &self.links[slot].segment)
    }

    /// Sum of all segment distances.
    pub fn total_distance(&self) -> u64 {
        self.links.iter().map(|l| l.segment.distance()).sum()
    }

    fn head_slot(&self) -> Result<Slot, TopologyError> {
        unique_slot(self.links.iter().map(|l| l.prev.is_none())).ok_or(TopologyError::FirstNotFound)
    }

    fn tail_slot(&self) -> Result<Slot, TopologyError> {
        unique_slot(self.links.iter().map(|l| l.next.is_none())).ok_or(TopologyError::LastNotFound)
    }

    fn slot_where(&self, pred: impl Fn(&Segment) -> bool) -> Option<Slot> {
        self.links.iter().position(|l| pred(&l.segment))
    }

    /// Attach a segment whose up station is already on the line.
    fn attach_by_up_station(&mut self, segment: Segment) -> Result<(), TopologyError> {
        let tail = self.tail_slot()?;
        if self.links[tail].segment.down().id() == segment.up().id() {
            self.link_after(tail, segment);
            return Ok(());
        }

        let up = segment.up().id();
        let slot = self
            .slot_where(|s| s.up().id() == up)
            .ok_or(TopologyError::NotConnected {
                up,
                down: segment.down().id(),
            })?;

        check_split(&self.links[slot].segment, &segment)?;
        self.links[slot].segment.trim_front(&segment);
        self.link_before(slot, segment);
        Ok(())
    }

    /// Attach a segment whose down station is already on the line.
    fn attach_by_down_station(&mut self, segment: Segment) -> Result<(), TopologyError> {
        let head = self.head_slot()?;
        if self.links[head].segment.up().id() == segment.down().id() {
            self.link_before(head, segment);
            return Ok(());
        }

        let down = segment.down().id();
        let slot = self
            .slot_where(|s| s.down().id() == down)
            .ok_or(TopologyError::NotConnected {
                up: segment.up().id(),
                down,
            })?;

        check_split(&self.links[slot].segment, &segment)?;
        self.links[slot].segment.trim_back(&segment);
        self.link_after(slot, segment);
        Ok(())
    }

    fn link_before(&mut self, slot: Slot, segment: Segment) {
        let new = self.links.len();
        let prev = self.links[slot].prev;

        self.links.push(Link {
            segment,
            prev,
            next: Some(slot),
        });
        if let Some(p) = prev {
            self.links[p].next = Some(new);
        }
        self.links[slot].prev = Some(new);
    }

    fn link_after(&mut self, slot: Slot, segment: Segment) {
        let new = self.links.len();
        let next = self.links[slot].next;

        self.links.push(Link {
            segment,
            prev: Some(slot),
            next,
        });
        if let Some(n) = next {
            self.links[n].prev = Some(new);
        }
        self.links[slot].next = Some(new);
    }

    /// Detach the segment at `slot`, joining its neighbours, and return it.
    fn unlink(&mut self, slot: Slot) -> Segment {
        let prev = self.links[slot].prev;
        let next = self.links[slot].next;
        if let Some(p) = prev {
            self.links[p].next = next;
        }
        if let Some(n) = next {
            self.links[n].prev = prev;
        }

        let removed = self.links.swap_remove(slot);

        // The former last entry now lives at `slot`
        if slot < self.links.len() {
            if let Some(p) = self.links[slot].prev {
                self.links[p].next = Some(slot);
            }
            if let Some(n) = self.links[slot].next {
                self.links[n].prev = Some(slot);
            }
        }

        removed.segment
    }
}

/// The index of the only `true` flag, if exactly one is set.
fn unique_slot(flags: impl Iterator<Item = bool>) -> Option<Slot> {
    let mut found = flags.enumerate().filter(|(_, f)| *f).map(|(i, _)| i);
    match (found.next(), found.next()) {
        (Some(slot), None) => Some(slot),
        _ => None,
    }
}

fn check_split(existing: &Segment, inserted: &Segment) -> Result<(), TopologyError> {
    if inserted.distance() >= existing.distance() {
        return Err(TopologyError::SplitTooLong {
            distance: inserted.distance(),
            existing: existing.distance(),
        });
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u64, u64, i64),
        Remove(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0u64..10, 0u64..10, -2i64..30)
                .prop_map(|(u, d, dist)| Op::Insert(u, d, dist)),
            1 => (0u64..10).prop_map(Op::Remove),
        ]
    }

    fn station(id: u64) -> Station {
        Station::new(StationId(id), &format!("S{id}")).unwrap()
    }

    fn snapshot(topology: &LineTopology) -> Vec<(u64, u64, u64)> {
        topology
            .segments()
            .iter()
            .map(|s| (s.up().id().0, s.down().id().0, s.distance()))
            .collect()
    }

    fn assert_simple_chain(topology: &LineTopology) {
        let segments = topology.segments();
        assert_eq!(segments.len(), topology.len(), "chain skips segments");

        for pair in segments.windows(2) {
            assert_eq!(pair[0].down().id(), pair[1].up().id());
        }

        let stations = topology.stations();
        let unique: HashSet<_> = stations.iter().map(|s| s.id()).collect();
        assert_eq!(unique.len(), stations.len(), "station repeated");

        if !topology.is_empty() {
            assert!(topology.first_segment().is_ok());
            assert!(topology.last_segment().is_ok());
        }
    }

    proptest! {
        /// Any sequence of operations keeps a simple chain, and failed
        /// operations change nothing
        #[test]
        fn chain_stays_simple(first in (0u64..10, 10u64..20, 1i64..30), ops in prop::collection::vec(op(), 0..40)) {
            let (up, down, dist) = first;
            let mut topology =
                LineTopology::with_segment(Segment::new(station(up), station(down), dist).unwrap());

            for op in ops {
                let before = snapshot(&topology);
                let ok = match op {
                    Op::Insert(u, d, dist) => Segment::new(station(u), station(d), dist)
                        .and_then(|s| topology.insert(s))
                        .is_ok(),
                    Op::Remove(s) => topology.remove(StationId(s)).is_ok(),
                };
                if !ok {
                    prop_assert_eq!(snapshot(&topology), before);
                }
                assert_simple_chain(&topology);
                prop_assert!(!topology.is_empty());
            }
        }

        /// Distances below one are rejected whatever the topology holds
        #[test]
        fn short_distance_always_rejected(dist in -100i64..1, up in 0u64..10, down in 0u64..10) {
            prop_assert_eq!(
                Segment::new(station(up), station(down), dist),
                Err(TopologyError::DistanceTooShort { distance: dist })
            );
        }

        /// Splitting (A,B,D) with (A,C,d) succeeds iff d < D and leaves (C,B,D-d)
        #[test]
        fn split_shortens_remainder(total in 1i64..50, part in 1i64..60) {
            let mut topology =
                LineTopology::with_segment(Segment::new(station(1), station(2), total).unwrap());
            let result = topology.insert(Segment::new(station(1), station(3), part).unwrap());

            if part < total {
                prop_assert!(result.is_ok());
                let expected = vec![(1, 3, part as u64), (3, 2, (total - part) as u64)];
                prop_assert_eq!(snapshot(&topology), expected);
            } else {
                prop_assert_eq!(result.map_err(|e| e.kind()), Err(crate::domain::ErrorKind::SectionDistanceTooShort));
                prop_assert_eq!(snapshot(&topology), vec![(1, 2, total as u64)]);
            }
        }

        /// Removal only succeeds for the last station
        #[test]
        fn removal_only_at_tail(len in 2u64..8, target in 0u64..10) {
            let mut topology =
                LineTopology::with_segment(Segment::new(station(0), station(1), 5).unwrap());
            for i in 1..len {
                topology.insert(Segment::new(station(i), station(i + 1), 5).unwrap()).unwrap();
            }
            let before = snapshot(&topology);

            match topology.remove(StationId(target)) {
                Ok(removed) => {
                    prop_assert_eq!(target, len);
                    prop_assert_eq!(removed.down().id(), StationId(len));
                    prop_assert_eq!(topology.len() as u64, len - 1);
                }
                Err(err) => {
                    prop_assert_ne!(target, len);
                    prop_assert_eq!(err.kind(), crate::domain::ErrorKind::SectionRemovalNotLastStation);
                    prop_assert_eq!(snapshot(&topology), before);
                }
            }
        }
    }
}
