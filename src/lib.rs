//! Bus-transit network catalogue and minimum-time itinerary search
//!
//! The crate models a bus network in two layers. The
//! [`TransitCatalogue`](model::TransitCatalogue) owns every stop and bus,
//! enforces referential integrity at registration time and answers
//! aggregate queries: stop counts, declared road length, straight-line
//! geographic length and curvature per bus, serving buses per stop. The
//! [`TransitRouter`](routing::TransitRouter) then consumes a finished
//! catalogue, builds a weighted search graph with a fixed boarding wait per
//! stop and one ride edge per reachable stop pair per route direction, and
//! answers shortest-itinerary queries with Dijkstra.
//!
//! Ingestion, result formatting and map rendering are separate layers that
//! consume these read-only query results.

pub mod error;
pub mod geo;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{BusInfo, DistancePolicy, TransitCatalogue};
pub use routing::{Itinerary, ItineraryStep, RoutingSettings, TransitRouter};
