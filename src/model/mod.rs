//! Data model of the bus-transit network
//!
//! Contains the entity types and the catalogue that owns them.

pub mod catalogue;
pub mod geometry;
pub mod types;

pub use catalogue::TransitCatalogue;
pub use geometry::{NetworkGeometry, RouteGeometry};
pub use types::{Bus, BusId, BusInfo, DistancePolicy, Stop, StopId};
