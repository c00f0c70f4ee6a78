//! Utility modules

pub mod visualization;

pub use visualization::{Visualizer, PathStyle, PointStyle, colors};
