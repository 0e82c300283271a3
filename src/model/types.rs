//! Core entity types of the transit network

use geo::Point;
use itertools::Either;
use serde::Serialize;

/// Stable index into the catalogue's append-only stop arena
pub type StopId = usize;
/// Stable index into the catalogue's append-only bus arena
pub type BusId = usize;

/// Named point of the network with a geographic coordinate.
/// Immutable once inserted into the catalogue.
#[derive(Debug, Clone)]
pub struct Stop {
    pub name: String,
    /// Longitude in `x`, latitude in `y`
    pub geometry: Point<f64>,
}

/// Named route over an ordered sequence of stops.
///
/// A *ring* route is a closed loop traversed once in its stored order;
/// a *linear* route is traversed forward and then back.
#[derive(Debug, Clone)]
pub struct Bus {
    pub name: String,
    /// Stops in declared order, as arena ids
    pub stops: Vec<StopId>,
    pub is_ring: bool,
    /// Number of distinct stops, cached at registration
    pub unique_stop_count: usize,
}

impl Bus {
    /// Full traversal order of the route. Ring routes yield the stored
    /// sequence; linear routes yield it forward and then backward without
    /// repeating the turnaround stop: `[A,B,C]` traverses as `A,B,C,B,A`.
    pub fn traversal(&self) -> impl Iterator<Item = StopId> + '_ {
        if self.is_ring {
            Either::Left(self.stops.iter().copied())
        } else {
            Either::Right(
                self.stops
                    .iter()
                    .copied()
                    .chain(self.stops.iter().rev().skip(1).copied()),
            )
        }
    }

    /// Total stops traversed, counting repeats on the backward leg of a
    /// linear route.
    #[must_use]
    pub fn stops_on_route(&self) -> usize {
        if self.is_ring {
            self.stops.len()
        } else {
            (2 * self.stops.len()).saturating_sub(1)
        }
    }
}

/// Aggregate statistics for one bus route
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BusInfo {
    /// Stops traversed, counting repeats for a linear route
    pub stops_on_route: usize,
    pub unique_stops: usize,
    /// Declared road length in meters
    pub route_length: u32,
    /// Straight-line geographic length in meters
    pub geo_length: f64,
    /// Declared length divided by geographic length
    pub curvature: f64,
}

/// How a lookup of an undeclared inter-stop distance behaves.
///
/// `Lenient` treats a missing declaration as a zero-length hop, silently
/// understating route lengths and ride times; `Strict` reports the missing
/// pair instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistancePolicy {
    #[default]
    Lenient,
    Strict,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus(stops: Vec<StopId>, is_ring: bool) -> Bus {
        Bus {
            name: "test".to_string(),
            unique_stop_count: stops.len(),
            stops,
            is_ring,
        }
    }

    #[test]
    fn linear_traversal_goes_there_and_back() {
        let bus = bus(vec![0, 1, 2], false);
        assert_eq!(bus.traversal().collect::<Vec<_>>(), vec![0, 1, 2, 1, 0]);
        assert_eq!(bus.stops_on_route(), 5);
    }

    #[test]
    fn ring_traversal_is_the_stored_sequence() {
        let bus = bus(vec![0, 1, 2, 0], true);
        assert_eq!(bus.traversal().collect::<Vec<_>>(), vec![0, 1, 2, 0]);
        assert_eq!(bus.stops_on_route(), 4);
    }

    #[test]
    fn empty_route_traverses_nothing() {
        let bus = bus(vec![], false);
        assert_eq!(bus.traversal().count(), 0);
        assert_eq!(bus.stops_on_route(), 0);
    }
}
