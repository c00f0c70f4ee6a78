//! Shortest Dubins path selection and the configured planner

use log::{debug, error};

use crate::common::{Path2D, Pose2D, PosePathPlanner, RoboticsError, RoboticsResult};

use super::family::{RelativeGeometry, EPSILON};
use super::path::{DubinsPath, PathType};

/// Reject inputs the closed forms cannot handle
pub(crate) fn validate_input(start: &Pose2D, end: &Pose2D, radius: f64) -> RoboticsResult<()> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(RoboticsError::InvalidInput(format!(
            "turning radius must be positive and finite, got {}",
            radius
        )));
    }
    if !start.is_finite() {
        return Err(RoboticsError::InvalidInput(format!("non-finite start pose {:?}", start)));
    }
    if !end.is_finite() {
        return Err(RoboticsError::InvalidInput(format!("non-finite end pose {:?}", end)));
    }
    Ok(())
}

/// Shortest forward path from `start` to `end` over all six families.
///
/// Equal lengths (within rounding) resolve to the family listed first in
/// `PathType::ALL`, so repeated calls always pick the same path.
///
/// # Errors
/// `InvalidInput` for a non-positive radius or non-finite pose;
/// `NoPathFound` if every family is infeasible, which indicates a bug.
pub fn shortest_path(start: Pose2D, end: Pose2D, radius: f64) -> RoboticsResult<DubinsPath> {
    shortest_path_in(start, end, radius, &PathType::ALL)
}

/// Shortest path restricted to the families in `types`, tried in order
pub fn shortest_path_in(
    start: Pose2D,
    end: Pose2D,
    radius: f64,
    types: &[PathType],
) -> RoboticsResult<DubinsPath> {
    validate_input(&start, &end, radius)?;
    let geometry = RelativeGeometry::new(&start, &end, radius);

    let mut best: Option<(f64, PathType, [f64; 3])> = None;
    for &path_type in types {
        let lengths = match geometry.evaluate(path_type) {
            Ok(lengths) => lengths,
            Err(RoboticsError::Infeasible(_)) => {
                debug!("{} infeasible (d = {:.6})", path_type, geometry.distance);
                continue;
            }
            Err(e) => return Err(e),
        };

        let cost: f64 = lengths.iter().sum();
        debug!("{} lengths {:?} cost {:.9}", path_type, lengths, cost);
        match best {
            Some((best_cost, _, _)) if cost >= best_cost - EPSILON => {}
            _ => best = Some((cost, path_type, lengths)),
        }
    }

    match best {
        Some((_, path_type, lengths)) => {
            let path = DubinsPath::from_normalized(start, end, path_type, lengths, radius);
            debug!("selected {} with total length {:.6}", path_type, path.total_length());
            Ok(path)
        }
        None => {
            error!(
                "no feasible family among {:?} for {:?} -> {:?} (radius {})",
                types, start, end, radius
            );
            Err(RoboticsError::NoPathFound(format!(
                "none of {} families connects {:?} to {:?}",
                types.len(),
                start,
                end
            )))
        }
    }
}

/// Every feasible family, in `PathType::ALL` order
pub fn all_paths(start: Pose2D, end: Pose2D, radius: f64) -> RoboticsResult<Vec<DubinsPath>> {
    validate_input(&start, &end, radius)?;
    let geometry = RelativeGeometry::new(&start, &end, radius);

    Ok(PathType::ALL
        .iter()
        .filter_map(|&path_type| {
            geometry
                .evaluate(path_type)
                .ok()
                .map(|lengths| DubinsPath::from_normalized(start, end, path_type, lengths, radius))
        })
        .collect())
}

pub fn compute_lsl(start: Pose2D, end: Pose2D, radius: f64) -> RoboticsResult<DubinsPath> {
    DubinsPath::compute(PathType::Lsl, start, end, radius)
}

pub fn compute_lsr(start: Pose2D, end: Pose2D, radius: f64) -> RoboticsResult<DubinsPath> {
    DubinsPath::compute(PathType::Lsr, start, end, radius)
}

pub fn compute_rsl(start: Pose2D, end: Pose2D, radius: f64) -> RoboticsResult<DubinsPath> {
    DubinsPath::compute(PathType::Rsl, start, end, radius)
}

pub fn compute_rsr(start: Pose2D, end: Pose2D, radius: f64) -> RoboticsResult<DubinsPath> {
    DubinsPath::compute(PathType::Rsr, start, end, radius)
}

pub fn compute_rlr(start: Pose2D, end: Pose2D, radius: f64) -> RoboticsResult<DubinsPath> {
    DubinsPath::compute(PathType::Rlr, start, end, radius)
}

pub fn compute_lrl(start: Pose2D, end: Pose2D, radius: f64) -> RoboticsResult<DubinsPath> {
    DubinsPath::compute(PathType::Lrl, start, end, radius)
}

/// Configuration for the Dubins planner
#[derive(Debug, Clone)]
pub struct DubinsConfig {
    /// Minimum turning radius [m]
    pub turning_radius: f64,
    /// Arc-length spacing of the discretized trajectory [m]
    pub step_size: f64,
}

impl Default for DubinsConfig {
    fn default() -> Self {
        Self {
            turning_radius: 1.0,
            step_size: 0.1,
        }
    }
}

impl DubinsConfig {
    pub fn with_turning_radius(mut self, turning_radius: f64) -> Self {
        self.turning_radius = turning_radius;
        self
    }

    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn validate(&self) -> RoboticsResult<()> {
        if !(self.turning_radius.is_finite() && self.turning_radius > 0.0) {
            return Err(RoboticsError::InvalidInput(format!(
                "turning_radius must be positive and finite, got {}",
                self.turning_radius
            )));
        }
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(RoboticsError::InvalidInput(format!(
                "step_size must be positive and finite, got {}",
                self.step_size
            )));
        }
        Ok(())
    }
}

/// Dubins path planner
pub struct DubinsPlanner {
    config: DubinsConfig,
}

impl DubinsPlanner {
    pub fn new(config: DubinsConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(DubinsConfig::default())
    }

    pub fn config(&self) -> &DubinsConfig {
        &self.config
    }

    /// Shortest path using the configured turning radius
    pub fn plan_path(&self, start: Pose2D, goal: Pose2D) -> RoboticsResult<DubinsPath> {
        self.config.validate()?;
        shortest_path(start, goal, self.config.turning_radius)
    }
}

impl PosePathPlanner for DubinsPlanner {
    fn plan(&self, start: Pose2D, goal: Pose2D) -> RoboticsResult<Path2D> {
        let path = self.plan_path(start, goal)?;
        Ok(path.to_path2d(self.config.step_size))
    }
}
