//! Routing graph construction
//!
//! Every served stop gets two vertices: a *wait-entry* vertex where a
//! passenger arrives at the stop and a *wait-exit* vertex reached after the
//! fixed boarding wait. Ride edges connect a wait-exit vertex to the
//! wait-entry vertex of every stop reachable further along the same route,
//! so the edge count is quadratic in route length. That is deliberate: a
//! single shortest-path search then picks the optimal alighting stop on its
//! own, with every transfer paying the boarding wait exactly once.

use hashbrown::HashMap;
use log::info;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::Error;
use crate::model::{BusId, StopId, TransitCatalogue};

const METERS_PER_KM: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Fixed parameters of the time model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingSettings {
    /// Boarding wait in minutes, paid once per boarding
    pub bus_wait_time: f64,
    /// Average bus velocity in km/h
    pub bus_velocity: f64,
}

/// What a graph edge models; the payload needed to reconstruct an itinerary
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteEdge {
    /// Boarding wait at a stop
    Wait { stop: StopId, minutes: f64 },
    /// Ride on one bus over `span` consecutive hops without alighting
    Ride {
        bus: BusId,
        minutes: f64,
        span: usize,
    },
}

impl RouteEdge {
    #[must_use]
    pub fn minutes(&self) -> f64 {
        match *self {
            RouteEdge::Wait { minutes, .. } | RouteEdge::Ride { minutes, .. } => minutes,
        }
    }
}

/// Entry/exit vertex pair of one served stop
#[derive(Debug, Clone, Copy)]
pub(crate) struct StopVertices {
    pub entry: NodeIndex,
    pub exit: NodeIndex,
}

/// Frozen search graph over the catalogue's served stops
#[derive(Debug)]
pub(crate) struct RouteGraph {
    pub graph: DiGraph<(), RouteEdge>,
    pub vertices: HashMap<StopId, StopVertices>,
}

/// Builds the search graph once.
///
/// # Errors
///
/// Under [`DistancePolicy::Strict`](crate::model::DistancePolicy), if any
/// hop traversed by a bus has no declared distance in either direction.
pub(crate) fn build_route_graph(
    catalogue: &TransitCatalogue,
    settings: &RoutingSettings,
) -> Result<RouteGraph, Error> {
    let mut graph = DiGraph::new();
    let mut vertices = HashMap::new();

    for (stop_id, _) in catalogue.served_stops() {
        let entry = graph.add_node(());
        let exit = graph.add_node(());
        graph.add_edge(
            entry,
            exit,
            RouteEdge::Wait {
                stop: stop_id,
                minutes: settings.bus_wait_time,
            },
        );
        vertices.insert(stop_id, StopVertices { entry, exit });
    }

    for (bus_id, bus) in catalogue.buses() {
        add_ride_edges(&mut graph, &vertices, catalogue, settings, bus_id, &bus.stops)?;
        if !bus.is_ring {
            let backward: Vec<StopId> = bus.stops.iter().rev().copied().collect();
            add_ride_edges(&mut graph, &vertices, catalogue, settings, bus_id, &backward)?;
        }
    }

    info!(
        "route graph built: {} vertices, {} edges over {} buses",
        graph.node_count(),
        graph.edge_count(),
        catalogue.bus_count()
    );
    Ok(RouteGraph { graph, vertices })
}

/// One directed ride edge per ordered stop-pair of the sequence, weighted
/// with the cumulative travel time between the pair.
fn add_ride_edges(
    graph: &mut DiGraph<(), RouteEdge>,
    vertices: &HashMap<StopId, StopVertices>,
    catalogue: &TransitCatalogue,
    settings: &RoutingSettings,
    bus_id: BusId,
    sequence: &[StopId],
) -> Result<(), Error> {
    for i in 0..sequence.len().saturating_sub(1) {
        // Every stop of a registered bus is served, so the vertex lookups
        // cannot miss.
        let from = vertices[&sequence[i]].exit;
        let mut minutes = 0.0;
        for j in (i + 1)..sequence.len() {
            let meters = catalogue.distance_between(sequence[j - 1], sequence[j])?;
            minutes += f64::from(meters) / METERS_PER_KM / settings.bus_velocity * MINUTES_PER_HOUR;
            graph.add_edge(
                from,
                vertices[&sequence[j]].entry,
                RouteEdge::Ride {
                    bus: bus_id,
                    minutes,
                    span: j - i,
                },
            );
        }
    }
    Ok(())
}
