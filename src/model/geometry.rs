//! Read-only geometric snapshot for a map-rendering consumer
//!
//! The renderer itself is a separate layer; the catalogue only hands it the
//! coordinates it needs, computed on demand and never cached.

use std::collections::BTreeMap;

use geo::Point;
use log::debug;

use super::catalogue::TransitCatalogue;

/// Stop coordinates of one bus route, in stored order
#[derive(Debug, Clone)]
pub struct RouteGeometry {
    pub coords: Vec<Point<f64>>,
    pub is_ring: bool,
}

/// Geometry of a subset of the network: the requested routes plus every
/// distinct stop they touch
#[derive(Debug, Clone, Default)]
pub struct NetworkGeometry {
    pub routes: BTreeMap<String, RouteGeometry>,
    pub stops: BTreeMap<String, Point<f64>>,
}

impl TransitCatalogue {
    /// Geometric snapshot of the given buses. Unknown bus names are skipped.
    #[must_use]
    pub fn geometry<'a>(&self, bus_names: impl IntoIterator<Item = &'a str>) -> NetworkGeometry {
        let mut snapshot = NetworkGeometry::default();
        for name in bus_names {
            let Some(bus) = self.find_bus(name) else {
                debug!("requested bus '{name}' is not in the catalogue, skipped");
                continue;
            };
            let mut coords = Vec::with_capacity(bus.stops.len());
            for &stop_id in &bus.stops {
                let stop = self.stop(stop_id);
                coords.push(stop.geometry);
                snapshot
                    .stops
                    .entry(stop.name.clone())
                    .or_insert(stop.geometry);
            }
            snapshot.routes.insert(
                bus.name.clone(),
                RouteGeometry {
                    coords,
                    is_ring: bus.is_ring,
                },
            );
        }
        snapshot
    }
}
