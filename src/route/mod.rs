pub mod leg;

pub use leg::{Leg, legs, midpoint, total_meters};
