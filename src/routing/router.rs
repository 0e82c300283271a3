//! Itinerary search over a frozen catalogue
//!
//! The router takes the catalogue by value: after construction it is the
//! sole owner and nothing can mutate the network anymore. Statistics
//! queries keep working through [`TransitRouter::catalogue`].

use log::info;
use serde::Serialize;

use super::dijkstra::shortest_path;
use super::graph::{RouteEdge, RouteGraph, RoutingSettings, build_route_graph};
use crate::Error;
use crate::model::TransitCatalogue;

/// One leg of an itinerary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItineraryStep {
    /// Waiting to board at a stop
    Wait { stop: String, minutes: f64 },
    /// Riding one bus over `span` hops without alighting
    Ride {
        bus: String,
        minutes: f64,
        span: usize,
    },
}

/// Minimum-time itinerary between two stops. An itinerary with no steps
/// means departure and destination coincide.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Itinerary {
    pub steps: Vec<ItineraryStep>,
    pub total_minutes: f64,
}

/// Shortest-itinerary query engine over a finished catalogue
#[derive(Debug)]
pub struct TransitRouter {
    settings: RoutingSettings,
    catalogue: TransitCatalogue,
    graph: RouteGraph,
}

impl TransitRouter {
    /// Consumes a finished catalogue and builds the search graph once.
    ///
    /// # Errors
    ///
    /// Under [`DistancePolicy::Strict`](crate::model::DistancePolicy), if a
    /// hop traversed by any bus has no declared distance in either
    /// direction.
    pub fn new(settings: RoutingSettings, catalogue: TransitCatalogue) -> Result<Self, Error> {
        info!(
            "building route graph: wait {} min, velocity {} km/h",
            settings.bus_wait_time, settings.bus_velocity
        );
        let graph = build_route_graph(&catalogue, &settings)?;
        Ok(Self {
            settings,
            catalogue,
            graph,
        })
    }

    /// Read access to the frozen catalogue for statistics queries
    #[must_use]
    pub fn catalogue(&self) -> &TransitCatalogue {
        &self.catalogue
    }

    #[must_use]
    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// Vertices in the search graph (two per served stop)
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.graph.node_count()
    }

    /// Wait and ride edges in the search graph
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.graph.edge_count()
    }

    /// Minimum-time itinerary from one stop to another.
    ///
    /// Equal stop names yield the empty itinerary without searching. `None`
    /// means either stop is not part of the search graph or no connection
    /// exists.
    #[must_use]
    pub fn build_route(&self, stop_from: &str, stop_to: &str) -> Option<Itinerary> {
        if stop_from == stop_to {
            return Some(Itinerary::default());
        }

        let from = self.graph.vertices.get(&self.catalogue.stop_id(stop_from)?)?;
        let to = self.graph.vertices.get(&self.catalogue.stop_id(stop_to)?)?;

        let (total_minutes, edges) = shortest_path(&self.graph.graph, from.entry, to.entry)?;

        let steps = edges
            .into_iter()
            .map(|edge| match self.graph.graph[edge] {
                RouteEdge::Wait { stop, minutes } => ItineraryStep::Wait {
                    stop: self.catalogue.stop(stop).name.clone(),
                    minutes,
                },
                RouteEdge::Ride { bus, minutes, span } => ItineraryStep::Ride {
                    bus: self.catalogue.bus(bus).name.clone(),
                    minutes,
                    span,
                },
            })
            .collect();

        Some(Itinerary {
            steps,
            total_minutes,
        })
    }
}
