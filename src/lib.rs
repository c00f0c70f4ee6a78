//! Dubins path planning
//!
//! Shortest forward-only paths between oriented poses for vehicles with a
//! minimum turning radius, plus arc-length sampling of the result for
//! trajectory generation.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{Point2D, Pose2D, Path2D};
pub use common::{PosePathPlanner, Visualizable};
pub use common::{RoboticsError, RoboticsResult};
pub use path_planning::dubins::{
    normalize_angle, shortest_path, total_length, DubinsConfig, DubinsPath, DubinsPlanner,
    PathType, SegmentKind,
};
