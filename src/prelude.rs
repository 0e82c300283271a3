// Re-export key components
pub use crate::error::Error;
pub use crate::geo::{EARTH_RADIUS_M, great_circle_distance};
pub use crate::model::{
    Bus, BusId, BusInfo, DistancePolicy, NetworkGeometry, RouteGeometry, Stop, StopId,
    TransitCatalogue,
};
pub use crate::routing::{Itinerary, ItineraryStep, RoutingSettings, TransitRouter};
