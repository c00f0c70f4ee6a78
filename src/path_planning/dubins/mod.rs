//! Dubins path planner
//!
//! Shortest forward-only path between two oriented poses for a vehicle with
//! a minimum turning radius. A path is at most three segments, each a left
//! arc, a right arc or a straight line, drawn from six families (LSL, LSR,
//! RSL, RSR, RLR, LRL). The selected path can be sampled at any arc length
//! to drive a trajectory.
//!
//! Ref: L. E. Dubins, "On Curves of Minimal Length with a Constraint on
//! Average Curvature", American Journal of Mathematics 79 (1957)

pub mod angle;
pub mod family;
pub mod path;
pub mod planner;

pub use angle::{angle_difference, normalize_angle};
pub use family::{FamilySpec, RelativeGeometry, Tangent};
pub use path::{total_length, DubinsPath, PathType, SegmentKind};
pub use planner::{
    all_paths, compute_lrl, compute_lsl, compute_lsr, compute_rlr, compute_rsl, compute_rsr,
    shortest_path, shortest_path_in, DubinsConfig, DubinsPlanner,
};
