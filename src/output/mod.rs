pub mod geojson;
pub mod report;

pub use geojson::{plan_to_geojson, write_geojson};
pub use report::{LegRecord, PlanReport, write_report};
