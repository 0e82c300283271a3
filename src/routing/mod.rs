//! Minimum-time itinerary search over the catalogue

pub mod graph;
pub mod router;

mod dijkstra;

pub use graph::{RouteEdge, RoutingSettings};
pub use router::{Itinerary, ItineraryStep, TransitRouter};
