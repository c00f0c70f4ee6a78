//! Error types for the Dubins path planner

use std::fmt;

use crate::path_planning::dubins::PathType;

/// Main error type for path planning
#[derive(Debug)]
pub enum RoboticsError {
    /// Non-positive turning radius, non-finite pose, or invalid configuration
    InvalidInput(String),
    /// The geometry of a single path family does not admit a connecting path
    Infeasible(PathType),
    /// Every considered path family was infeasible
    NoPathFound(String),
    /// I/O error
    IoError(std::io::Error),
    /// Visualization error
    VisualizationError(String),
}

impl fmt::Display for RoboticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoboticsError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            RoboticsError::Infeasible(path_type) => write!(f, "Infeasible path family: {}", path_type),
            RoboticsError::NoPathFound(msg) => write!(f, "No path found: {}", msg),
            RoboticsError::IoError(e) => write!(f, "I/O error: {}", e),
            RoboticsError::VisualizationError(msg) => write!(f, "Visualization error: {}", msg),
        }
    }
}

impl std::error::Error for RoboticsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RoboticsError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RoboticsError {
    fn from(e: std::io::Error) -> Self {
        RoboticsError::IoError(e)
    }
}

/// Result type alias for planning operations
pub type RoboticsResult<T> = Result<T, RoboticsError>;
