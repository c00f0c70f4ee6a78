//! Common traits defining interfaces for planners and plotting

use crate::common::types::*;
use crate::common::error::RoboticsError;

/// Trait for planners that connect two oriented poses
pub trait PosePathPlanner {
    /// Plan a path from the start pose to the goal pose
    fn plan(&self, start: Pose2D, goal: Pose2D) -> Result<Path2D, RoboticsError>;
}

/// Trait for visualizable results
pub trait Visualizable {
    /// Draw current state to visualizer
    fn visualize(&self, vis: &mut crate::utils::Visualizer);
}
