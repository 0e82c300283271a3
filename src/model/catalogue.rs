//! Transit catalogue: owns all stops and buses and answers statistics queries
//!
//! Entities are append-only and live in insertion-order arenas; every other
//! structure is a derived index over arena ids. Once the catalogue is moved
//! into a [`TransitRouter`](crate::routing::TransitRouter) it is frozen and
//! only `&self` queries remain reachable.

use std::collections::BTreeSet;

use geo::Point;
use hashbrown::HashMap;
use itertools::Itertools;
use log::warn;

use super::types::{Bus, BusId, BusInfo, DistancePolicy, Stop, StopId};
use crate::Error;
use crate::geo::great_circle_distance;

#[derive(Debug, Default)]
pub struct TransitCatalogue {
    /// Stop arena; entries never move, so a `StopId` stays valid for the
    /// catalogue's lifetime
    stops: Vec<Stop>,
    /// Bus arena, same stability guarantee
    buses: Vec<Bus>,
    stop_index: HashMap<String, StopId>,
    bus_index: HashMap<String, BusId>,
    /// Directed declared road distances in meters; first declaration wins
    declared_distances: HashMap<(StopId, StopId), u32>,
    /// Symmetric great-circle distances, keyed by the normalized pair and
    /// memoized once per adjacent pair seen during bus registration
    geo_distances: HashMap<(StopId, StopId), f64>,
    /// Serving bus names per stop, parallel to the stop arena
    buses_by_stop: Vec<BTreeSet<String>>,
    policy: DistancePolicy,
}

impl TransitCatalogue {
    #[must_use]
    pub fn new(policy: DistancePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Registers a stop. Inserting a name that already exists is a no-op.
    pub fn add_stop(&mut self, name: &str, geometry: Point<f64>) {
        if self.stop_index.contains_key(name) {
            return;
        }
        let id = self.stops.len();
        self.stops.push(Stop {
            name: name.to_string(),
            geometry,
        });
        self.buses_by_stop.push(BTreeSet::new());
        self.stop_index.insert(name.to_string(), id);
    }

    /// Registers a bus over already-known stops.
    ///
    /// A duplicate bus name is a no-op. If any stop name does not resolve,
    /// the whole registration is discarded with no side effects. On success
    /// the serving index is updated for every distinct stop touched and the
    /// geographic distance of every adjacent pair is cached.
    pub fn add_bus(&mut self, name: &str, stop_names: &[&str], is_ring: bool) {
        if self.bus_index.contains_key(name) {
            return;
        }

        let Some(stop_ids) = stop_names
            .iter()
            .map(|stop| self.stop_index.get(*stop).copied())
            .collect::<Option<Vec<StopId>>>()
        else {
            warn!("bus '{name}' references an unknown stop, registration rejected");
            return;
        };

        let unique: BTreeSet<StopId> = stop_ids.iter().copied().collect();
        for &stop_id in &unique {
            self.buses_by_stop[stop_id].insert(name.to_string());
        }
        let stops = &self.stops;
        for (a, b) in stop_ids.iter().copied().tuple_windows() {
            self.geo_distances
                .entry(Self::normalized(a, b))
                .or_insert_with(|| great_circle_distance(stops[a].geometry, stops[b].geometry));
        }

        let id = self.buses.len();
        self.buses.push(Bus {
            name: name.to_string(),
            unique_stop_count: unique.len(),
            stops: stop_ids,
            is_ring,
        });
        self.bus_index.insert(name.to_string(), id);
    }

    /// Declares the road distance for the directed pair `from -> to`.
    /// The first declaration for an ordered pair wins; later ones are
    /// ignored. Unknown stop names are a logged no-op.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: u32) {
        let (Some(&from_id), Some(&to_id)) = (self.stop_index.get(from), self.stop_index.get(to))
        else {
            warn!("distance declaration '{from}' -> '{to}' names an unknown stop, ignored");
            return;
        };
        self.declared_distances
            .entry((from_id, to_id))
            .or_insert(meters);
    }

    /// Declared road distance between two stops: the forward declaration if
    /// present, else the reverse one, else the policy fallback (0 under
    /// [`DistancePolicy::Lenient`], an error under
    /// [`DistancePolicy::Strict`]).
    pub fn distance_between(&self, from: StopId, to: StopId) -> Result<u32, Error> {
        if let Some(&meters) = self
            .declared_distances
            .get(&(from, to))
            .or_else(|| self.declared_distances.get(&(to, from)))
        {
            return Ok(meters);
        }
        match self.policy {
            DistancePolicy::Lenient => Ok(0),
            DistancePolicy::Strict => Err(Error::MissingDistance {
                from: self.stops[from].name.clone(),
                to: self.stops[to].name.clone(),
            }),
        }
    }

    /// Aggregate statistics for a bus, or `Ok(None)` if the name is unknown.
    ///
    /// # Errors
    ///
    /// Under [`DistancePolicy::Strict`], if any traversed hop has no
    /// declared distance in either direction.
    pub fn bus_info(&self, name: &str) -> Result<Option<BusInfo>, Error> {
        let Some(bus) = self.find_bus(name) else {
            return Ok(None);
        };

        let mut route_length: u32 = 0;
        let mut geo_length: f64 = 0.0;
        for (a, b) in bus.traversal().tuple_windows() {
            route_length += self.distance_between(a, b)?;
            geo_length += self
                .geo_distances
                .get(&Self::normalized(a, b))
                .copied()
                .unwrap_or(0.0);
        }
        let curvature = if geo_length > 0.0 {
            f64::from(route_length) / geo_length
        } else {
            0.0
        };

        Ok(Some(BusInfo {
            stops_on_route: bus.stops_on_route(),
            unique_stops: bus.unique_stop_count,
            route_length,
            geo_length,
            curvature,
        }))
    }

    /// Sorted set of bus names serving a stop. `None` if the stop name is
    /// unknown; an empty set if the stop exists but no bus serves it.
    #[must_use]
    pub fn stop_info(&self, name: &str) -> Option<&BTreeSet<String>> {
        let &id = self.stop_index.get(name)?;
        Some(&self.buses_by_stop[id])
    }

    #[must_use]
    pub fn stop_exists(&self, name: &str) -> bool {
        self.stop_index.contains_key(name)
    }

    #[must_use]
    pub fn bus_exists(&self, name: &str) -> bool {
        self.bus_index.contains_key(name)
    }

    #[must_use]
    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    #[must_use]
    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_index.get(name).map(|&id| &self.stops[id])
    }

    #[must_use]
    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_index.get(name).map(|&id| &self.buses[id])
    }

    #[must_use]
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id]
    }

    #[must_use]
    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id]
    }

    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    #[must_use]
    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    pub fn buses(&self) -> impl Iterator<Item = (BusId, &Bus)> {
        self.buses.iter().enumerate()
    }

    /// Stops served by at least one bus, in insertion order. This fixed
    /// order also drives vertex allocation in the routing graph.
    pub fn served_stops(&self) -> impl Iterator<Item = (StopId, &Stop)> {
        self.stops
            .iter()
            .enumerate()
            .filter(|&(id, _)| !self.buses_by_stop[id].is_empty())
    }

    #[must_use]
    pub fn policy(&self) -> DistancePolicy {
        self.policy
    }

    fn normalized(a: StopId, b: StopId) -> (StopId, StopId) {
        if a <= b { (a, b) } else { (b, a) }
    }
}
