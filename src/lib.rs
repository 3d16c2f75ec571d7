//! Pulse-indexed graphs of a rhythm game chart: BPM, scroll speed, camera,
//! tilt and laser positions, each a sparse set of control points with
//! optional easing curves between them.

pub mod chart;
pub mod error;
pub mod graph;
pub mod timing;
pub mod utils;

pub mod prelude {
    pub use crate::{chart::*, error::GraphError, graph::*, timing::*};
}
