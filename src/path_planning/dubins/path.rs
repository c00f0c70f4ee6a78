//! Dubins path value and arc-length sampling

use std::fmt;

use log::trace;

use crate::common::{Path2D, Pose2D, RoboticsResult, Visualizable};
use crate::utils::{colors, PathStyle, Visualizer};

use super::family::RelativeGeometry;
use super::planner::validate_input;

/// Number of poses drawn per path when plotting
const PLOT_SAMPLES: usize = 200;

/// Curvature of a single path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Left,
    Straight,
    Right,
}

impl SegmentKind {
    /// Sign of the curvature while traversing the segment; left is counter-clockwise
    pub fn curvature_sign(self) -> f64 {
        match self {
            SegmentKind::Left => 1.0,
            SegmentKind::Straight => 0.0,
            SegmentKind::Right => -1.0,
        }
    }

    /// The same segment seen in a mirror
    pub fn mirrored(self) -> Self {
        match self {
            SegmentKind::Left => SegmentKind::Right,
            SegmentKind::Straight => SegmentKind::Straight,
            SegmentKind::Right => SegmentKind::Left,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            SegmentKind::Left => 'L',
            SegmentKind::Straight => 'S',
            SegmentKind::Right => 'R',
        }
    }
}

/// The six Dubins path families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    Lsl,
    Lsr,
    Rsl,
    Rsr,
    Rlr,
    Lrl,
}

impl PathType {
    /// Every family, in the order used to break ties between equal lengths
    pub const ALL: [PathType; 6] = [
        PathType::Lsl,
        PathType::Lsr,
        PathType::Rsl,
        PathType::Rsr,
        PathType::Rlr,
        PathType::Lrl,
    ];

    /// Curve-straight-curve families
    pub const CSC: [PathType; 4] = [PathType::Lsl, PathType::Lsr, PathType::Rsl, PathType::Rsr];

    /// Curve-curve-curve families
    pub const CCC: [PathType; 2] = [PathType::Rlr, PathType::Lrl];

    pub fn segments(self) -> [SegmentKind; 3] {
        use SegmentKind::*;
        match self {
            PathType::Lsl => [Left, Straight, Left],
            PathType::Lsr => [Left, Straight, Right],
            PathType::Rsl => [Right, Straight, Left],
            PathType::Rsr => [Right, Straight, Right],
            PathType::Rlr => [Right, Left, Right],
            PathType::Lrl => [Left, Right, Left],
        }
    }

    /// Family obtained by swapping every left turn for a right turn
    pub fn mirrored(self) -> Self {
        match self {
            PathType::Lsl => PathType::Rsr,
            PathType::Lsr => PathType::Rsl,
            PathType::Rsl => PathType::Lsr,
            PathType::Rsr => PathType::Lsl,
            PathType::Rlr => PathType::Lrl,
            PathType::Lrl => PathType::Rlr,
        }
    }

    pub fn is_ccc(self) -> bool {
        matches!(self, PathType::Rlr | PathType::Lrl)
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: String = self.segments().iter().map(|s| s.as_char()).collect();
        write!(f, "{}", name)
    }
}

/// A three-segment Dubins path between two poses.
///
/// Lengths are arc lengths in the same unit as the poses. The value is only
/// produced by the family evaluators and the shortest-path selector, so the
/// segments always chain from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DubinsPath {
    start: Pose2D,
    end: Pose2D,
    path_type: PathType,
    lengths: [f64; 3],
    radius: f64,
}

impl DubinsPath {
    /// Build a path from lengths expressed in turning-radius units
    pub(crate) fn from_normalized(
        start: Pose2D,
        end: Pose2D,
        path_type: PathType,
        normalized: [f64; 3],
        radius: f64,
    ) -> Self {
        Self {
            start,
            end,
            path_type,
            lengths: [normalized[0] * radius, normalized[1] * radius, normalized[2] * radius],
            radius,
        }
    }

    /// Compute one specific family.
    ///
    /// # Errors
    /// `InvalidInput` for a non-positive radius or non-finite pose,
    /// `Infeasible` when the family cannot connect the poses.
    pub fn compute(path_type: PathType, start: Pose2D, end: Pose2D, radius: f64) -> RoboticsResult<Self> {
        validate_input(&start, &end, radius)?;
        let lengths = RelativeGeometry::new(&start, &end, radius).evaluate(path_type)?;
        Ok(Self::from_normalized(start, end, path_type, lengths, radius))
    }

    pub fn start(&self) -> Pose2D {
        self.start
    }

    pub fn end(&self) -> Pose2D {
        self.end
    }

    pub fn path_type(&self) -> PathType {
        self.path_type
    }

    pub fn segments(&self) -> [SegmentKind; 3] {
        self.path_type.segments()
    }

    pub fn lengths(&self) -> [f64; 3] {
        self.lengths
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn total_length(&self) -> f64 {
        self.lengths.iter().sum()
    }

    /// Pose after travelling `t` along the path.
    ///
    /// `t` is clamped to `[0, total_length]` and NaN is treated as `0`, so
    /// callers that overshoot by floating error get the end pose instead of a
    /// failure. Headings are integrated without wrapping.
    pub fn sample(&self, t: f64) -> Pose2D {
        let total = self.total_length();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, total) };

        let mut pose = self.start;
        let mut offset = 0.0;
        for (&kind, &length) in self.segments().iter().zip(self.lengths.iter()) {
            let local = t - offset;
            if local <= length {
                let sampled = advance(&pose, kind, local, self.radius);
                trace!("sample t={:.6} on {:?} segment -> {:?}", t, kind, sampled);
                return sampled;
            }
            pose = advance(&pose, kind, length, self.radius);
            offset += length;
        }
        pose
    }

    /// Poses every `step` along the path, always ending with the end pose.
    ///
    /// A non-positive or non-finite `step` yields only the two endpoints.
    pub fn sample_many(&self, step: f64) -> Vec<Pose2D> {
        let total = self.total_length();
        if !(step.is_finite() && step > 0.0) {
            return vec![self.sample(0.0), self.sample(total)];
        }

        let mut poses: Vec<Pose2D> = (0_u64..)
            .map(|i| i as f64 * step)
            .take_while(|&t| t < total)
            .map(|t| self.sample(t))
            .collect();
        poses.push(self.sample(total));
        poses
    }

    /// Pose reached at the end of each of the three segments
    pub fn segment_end_poses(&self) -> [Pose2D; 3] {
        let mut pose = self.start;
        let mut ends = [pose; 3];
        for (i, (&kind, &length)) in self.segments().iter().zip(self.lengths.iter()).enumerate() {
            pose = advance(&pose, kind, length, self.radius);
            ends[i] = pose;
        }
        ends
    }

    /// Discretize into the crate's polyline type
    pub fn to_path2d(&self, step: f64) -> Path2D {
        Path2D::from(&self.sample_many(step)[..])
    }
}

/// Total arc length of `path`
pub fn total_length(path: &DubinsPath) -> f64 {
    path.total_length()
}

/// Integrate constant curvature over `distance` starting at `pose`
fn advance(pose: &Pose2D, kind: SegmentKind, distance: f64, radius: f64) -> Pose2D {
    match kind {
        SegmentKind::Straight => Pose2D::new(
            pose.x + distance * pose.yaw.cos(),
            pose.y + distance * pose.yaw.sin(),
            pose.yaw,
        ),
        SegmentKind::Left | SegmentKind::Right => {
            let k = kind.curvature_sign() / radius;
            let yaw = pose.yaw + k * distance;
            Pose2D::new(
                pose.x + (yaw.sin() - pose.yaw.sin()) / k,
                pose.y - (yaw.cos() - pose.yaw.cos()) / k,
                yaw,
            )
        }
    }
}

impl Visualizable for DubinsPath {
    fn visualize(&self, vis: &mut Visualizer) {
        let step = self.total_length() / PLOT_SAMPLES as f64;
        let poses = self.sample_many(step);
        let caption = format!("{} path", self.path_type);
        vis.plot_poses(&poses, &PathStyle::new(colors::PATH, &caption));
        vis.plot_heading(&self.start, colors::START, "Start");
        vis.plot_heading(&self.end, colors::GOAL, "Goal");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_planning::dubins::angle::angle_difference;
    use std::f64::consts::PI;

    fn assert_pose_close(a: &Pose2D, b: &Pose2D, tol: f64) {
        assert!((a.x - b.x).abs() < tol, "x: {} vs {}", a.x, b.x);
        assert!((a.y - b.y).abs() < tol, "y: {} vs {}", a.y, b.y);
        assert!(angle_difference(a.yaw, b.yaw).abs() < tol, "yaw: {} vs {}", a.yaw, b.yaw);
    }

    fn quarter_turn_then_straight() -> DubinsPath {
        // left quarter turn on the unit circle, then 2 units north, then nothing
        DubinsPath::from_normalized(
            Pose2D::origin(),
            Pose2D::new(1.0, 3.0, PI / 2.0),
            PathType::Lsl,
            [PI / 2.0, 2.0, 0.0],
            1.0,
        )
    }

    #[test]
    fn test_path_type_segments_and_names() {
        assert_eq!(PathType::Rlr.segments(), [SegmentKind::Right, SegmentKind::Left, SegmentKind::Right]);
        assert_eq!(PathType::Lsr.to_string(), "LSR");
        for &path_type in &PathType::ALL {
            assert_eq!(path_type.mirrored().mirrored(), path_type);
            let mirrored: Vec<SegmentKind> = path_type.segments().iter().map(|s| s.mirrored()).collect();
            assert_eq!(mirrored, path_type.mirrored().segments().to_vec());
        }
        assert!(PathType::CCC.iter().all(|p| p.is_ccc()));
        assert!(PathType::CSC.iter().all(|p| !p.is_ccc()));
    }

    #[test]
    fn test_lengths_scale_with_radius() {
        let path = DubinsPath::from_normalized(Pose2D::origin(), Pose2D::origin(), PathType::Lsl, [1.0, 2.0, 3.0], 2.5);
        assert_eq!(path.lengths(), [2.5, 5.0, 7.5]);
        assert!((total_length(&path) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_endpoints() {
        let path = quarter_turn_then_straight();
        assert_eq!(path.sample(0.0), path.start());
        assert_pose_close(&path.sample(path.total_length()), &path.end(), 1e-9);
    }

    #[test]
    fn test_sample_on_arc() {
        let path = quarter_turn_then_straight();
        let pose = path.sample(PI / 4.0);
        let h = (PI / 4.0).sin();
        assert_pose_close(&pose, &Pose2D::new(h, 1.0 - h, PI / 4.0), 1e-12);
    }

    #[test]
    fn test_sample_on_straight() {
        let path = quarter_turn_then_straight();
        let pose = path.sample(PI / 2.0 + 1.0);
        assert_pose_close(&pose, &Pose2D::new(1.0, 2.0, PI / 2.0), 1e-12);
    }

    #[test]
    fn test_right_turn_curves_clockwise() {
        let path = DubinsPath::from_normalized(
            Pose2D::origin(),
            Pose2D::new(2.0, -2.0, -PI / 2.0),
            PathType::Rsr,
            [PI / 2.0, 0.0, 0.0],
            2.0,
        );
        assert_pose_close(&path.sample(path.total_length()), &Pose2D::new(2.0, -2.0, -PI / 2.0), 1e-12);
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        let path = quarter_turn_then_straight();
        assert_eq!(path.sample(-3.0), path.sample(0.0));
        assert_eq!(path.sample(f64::NAN), path.sample(0.0));
        assert_eq!(path.sample(path.total_length() + 1e-3), path.sample(path.total_length()));
        assert_eq!(path.sample(f64::INFINITY), path.sample(path.total_length()));
    }

    #[test]
    fn test_sample_is_continuous_across_boundaries() {
        let path = quarter_turn_then_straight();
        let boundary = PI / 2.0;
        let before = path.sample(boundary - 1e-9);
        let after = path.sample(boundary + 1e-9);
        assert_pose_close(&before, &after, 1e-8);
    }

    #[test]
    fn test_sample_many_spacing() {
        let path = quarter_turn_then_straight();
        let poses = path.sample_many(0.5);
        let expected = (path.total_length() / 0.5).ceil() as usize + 1;
        assert_eq!(poses.len(), expected);
        assert_eq!(poses[0], path.start());
        assert_pose_close(poses.last().unwrap(), &path.end(), 1e-9);
    }

    #[test]
    fn test_sample_many_invalid_step() {
        let path = quarter_turn_then_straight();
        assert_eq!(path.sample_many(0.0).len(), 2);
        assert_eq!(path.sample_many(f64::NAN).len(), 2);
    }

    #[test]
    fn test_segment_end_poses() {
        let path = quarter_turn_then_straight();
        let ends = path.segment_end_poses();
        assert_pose_close(&ends[0], &Pose2D::new(1.0, 1.0, PI / 2.0), 1e-12);
        assert_pose_close(&ends[1], &Pose2D::new(1.0, 3.0, PI / 2.0), 1e-12);
        assert_pose_close(&ends[2], &path.end(), 1e-12);
    }

    #[test]
    fn test_to_path2d() {
        let path = quarter_turn_then_straight();
        let polyline = path.to_path2d(0.01);
        assert!((polyline.total_length() - path.total_length()).abs() < 1e-3);
    }
}
