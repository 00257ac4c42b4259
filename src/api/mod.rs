pub mod planner;

pub use planner::{PlannerResponse, fetch_enclosed_region};
