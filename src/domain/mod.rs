pub mod point;
pub mod region;
pub mod waypoints;

pub use point::GeoPoint;
pub use region::{EnclosedRegion, RegionError};
pub use waypoints::Waypoints;
