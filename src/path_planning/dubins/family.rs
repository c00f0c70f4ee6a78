//! Closed-form segment lengths for the six Dubins families.
//!
//! Everything here works in turning-radius units: the start/goal pair is
//! reduced to a normalized distance `d` and the two headings `alpha`, `beta`
//! measured against the line joining the poses. Only the left-handed words
//! (LSL, LSR, LRL) are solved directly; right-handed words are their mirror
//! images, obtained by negating both headings.
//!
//! Ref: A. M. Shkel, V. Lumelsky, "Classification of the Dubins set",
//! Robotics and Autonomous Systems 34 (2001)

use std::f64::consts::PI;

use crate::common::{Pose2D, RoboticsError, RoboticsResult};

use super::angle::normalize_angle;
use super::path::{PathType, SegmentKind};

/// Rounding band in radius units: lengths this close to zero or to a full
/// turn, and discriminants this close to their bound, are treated as exact.
pub const EPSILON: f64 = 1e-9;

/// Squared tangent lengths below this are exact tangency; the square root
/// would otherwise turn rounding noise into a visible straight segment
const TANGENCY_EPSILON: f64 = 1e-12;

/// Largest normalized start-goal distance at which a CCC path may exist
pub const CCC_MAX_DISTANCE: f64 = 4.0;

/// How the first and last turning circles are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tangent {
    /// Straight segment along an external tangent (same turn direction)
    Outer,
    /// Straight segment along an internal tangent (opposite turn directions)
    Inner,
    /// A third circle touching both turning circles
    Bridge,
}

/// Per-family parameters of the shared evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilySpec {
    pub first_turn: SegmentKind,
    pub tangent: Tangent,
}

impl FamilySpec {
    pub fn of(path_type: PathType) -> Self {
        let (first_turn, tangent) = match path_type {
            PathType::Lsl => (SegmentKind::Left, Tangent::Outer),
            PathType::Rsr => (SegmentKind::Right, Tangent::Outer),
            PathType::Lsr => (SegmentKind::Left, Tangent::Inner),
            PathType::Rsl => (SegmentKind::Right, Tangent::Inner),
            PathType::Lrl => (SegmentKind::Left, Tangent::Bridge),
            PathType::Rlr => (SegmentKind::Right, Tangent::Bridge),
        };
        Self { first_turn, tangent }
    }

    fn is_arc(&self, index: usize) -> bool {
        index != 1 || self.tangent == Tangent::Bridge
    }
}

/// Start/goal geometry shared by every family
#[derive(Debug, Clone, Copy)]
pub struct RelativeGeometry {
    /// Start-goal distance divided by the turning radius
    pub distance: f64,
    /// Start heading relative to the start-goal line, in `[0, 2π)`
    pub alpha: f64,
    /// Goal heading relative to the start-goal line, in `[0, 2π)`
    pub beta: f64,
}

impl RelativeGeometry {
    /// `radius` must be positive and both poses finite.
    pub fn new(start: &Pose2D, end: &Pose2D, radius: f64) -> Self {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let theta = dy.atan2(dx);

        Self {
            distance: dx.hypot(dy) / radius,
            alpha: normalize_angle(start.yaw - theta),
            beta: normalize_angle(end.yaw - theta),
        }
    }

    /// Segment lengths of `path_type` in radius units, or
    /// `RoboticsError::Infeasible` when the family cannot connect the poses.
    pub fn evaluate(&self, path_type: PathType) -> RoboticsResult<[f64; 3]> {
        let spec = FamilySpec::of(path_type);
        let (alpha, beta) = match spec.first_turn {
            SegmentKind::Right => (normalize_angle(-self.alpha), normalize_angle(-self.beta)),
            _ => (self.alpha, self.beta),
        };
        let words = LeftWords::new(self.distance, alpha, beta);

        let raw = match spec.tangent {
            Tangent::Outer => Some(words.outer()),
            Tangent::Inner => words.inner(),
            Tangent::Bridge => words.bridge(),
        };
        raw.map(|lengths| finish(lengths, &spec))
            .ok_or(RoboticsError::Infeasible(path_type))
    }
}

/// Trigonometric terms for the left-handed words
struct LeftWords {
    d: f64,
    alpha: f64,
    beta: f64,
    sa: f64,
    ca: f64,
    sb: f64,
    cb: f64,
    c_ab: f64,
}

impl LeftWords {
    fn new(d: f64, alpha: f64, beta: f64) -> Self {
        let (sa, ca) = alpha.sin_cos();
        let (sb, cb) = beta.sin_cos();
        Self { d, alpha, beta, sa, ca, sb, cb, c_ab: (alpha - beta).cos() }
    }

    /// LSL. The straight length is the distance between the two left circle
    /// centres, so this word always exists.
    fn outer(&self) -> [f64; 3] {
        let x = self.d + self.sa - self.sb;
        let y = self.cb - self.ca;
        let p = x.hypot(y);
        // coincident circles: no tangent direction, a single arc does it
        let phi = if p < EPSILON { self.alpha } else { y.atan2(x) };

        [normalize_angle(phi - self.alpha), p, normalize_angle(self.beta - phi)]
    }

    /// LSR. Needs the circle centres at least two radii apart.
    fn inner(&self) -> Option<[f64; 3]> {
        let x = self.d + self.sa + self.sb;
        let y = -self.ca - self.cb;
        let p_sq = x * x + y * y - 4.0;
        if p_sq < -EPSILON {
            return None;
        }

        let p = if p_sq < TANGENCY_EPSILON { 0.0 } else { p_sq.sqrt() };
        let phi = y.atan2(x) - (-2.0_f64).atan2(p);

        Some([normalize_angle(phi - self.alpha), p, normalize_angle(phi - self.beta)])
    }

    /// LRL. Needs the circle centres at most four radii apart.
    fn bridge(&self) -> Option<[f64; 3]> {
        if self.d > CCC_MAX_DISTANCE {
            return None;
        }

        let c = (6.0 - self.d * self.d + 2.0 * self.c_ab + 2.0 * self.d * (self.sb - self.sa)) / 8.0;
        if c.abs() > 1.0 + EPSILON {
            return None;
        }

        let p = normalize_angle(2.0 * PI - c.clamp(-1.0, 1.0).acos());
        let phi = (self.ca - self.cb).atan2(self.d + self.sa - self.sb);
        let t = normalize_angle(-self.alpha - phi + p / 2.0);
        let q = normalize_angle(self.beta - self.alpha - t + p);

        Some([t, p, q])
    }
}

/// Snap rounding noise: tiny negatives and near-full turns become zero
fn finish(lengths: [f64; 3], spec: &FamilySpec) -> [f64; 3] {
    let mut out = lengths;
    for (i, length) in out.iter_mut().enumerate() {
        if *length < 0.0 && *length > -EPSILON {
            *length = 0.0;
        }
        if spec.is_arc(i) && 2.0 * PI - *length < EPSILON {
            *length = 0.0;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(start: (f64, f64, f64), end: (f64, f64, f64)) -> RelativeGeometry {
        RelativeGeometry::new(&start.into(), &end.into(), 1.0)
    }

    fn assert_lengths(actual: [f64; 3], expected: [f64; 3], tol: f64) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < tol, "{:?} vs {:?}", actual, expected);
        }
    }

    #[test]
    fn test_relative_geometry() {
        let g = RelativeGeometry::new(&Pose2D::new(1.0, 1.0, PI / 2.0), &Pose2D::new(1.0, 5.0, 0.0), 2.0);
        assert!((g.distance - 2.0).abs() < 1e-12);
        assert!(g.alpha.abs() < 1e-12);
        assert!((g.beta - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_straight_ahead_is_pure_straight_for_csc() {
        let g = geometry((0.0, 0.0, 0.0), (5.0, 0.0, 0.0));
        for &path_type in &PathType::CSC {
            let lengths = g.evaluate(path_type).unwrap();
            assert_lengths(lengths, [0.0, 5.0, 0.0], 1e-9);
        }
    }

    #[test]
    fn test_lsl_on_shared_circle_is_single_arc() {
        // (1, 1, π/2) lies on the start's left turning circle
        let lengths = geometry((0.0, 0.0, 0.0), (1.0, 1.0, PI / 2.0)).evaluate(PathType::Lsl).unwrap();
        assert_lengths(lengths, [0.0, 0.0, PI / 2.0], 1e-9);
    }

    #[test]
    fn test_lsr_quarter_turn() {
        let lengths = geometry((0.0, 0.0, 0.0), (1.0, 1.0, PI / 2.0)).evaluate(PathType::Lsr).unwrap();
        assert_lengths(lengths, [PI / 2.0, 0.0, 0.0], 1e-6);
    }

    #[test]
    fn test_rsr_mirrors_lsl() {
        let lsl = geometry((0.0, 0.0, 0.3), (4.0, 2.0, 2.0)).evaluate(PathType::Lsl).unwrap();
        let rsr = geometry((0.0, 0.0, -0.3), (4.0, -2.0, -2.0)).evaluate(PathType::Rsr).unwrap();
        assert_lengths(lsl, rsr, 1e-9);
    }

    #[test]
    fn test_u_turn_in_place() {
        let g = geometry((0.0, 0.0, 0.0), (0.0, 0.0, PI));
        assert_lengths(g.evaluate(PathType::Lsl).unwrap(), [1.5 * PI, 2.0, 1.5 * PI], 1e-9);
        assert!(matches!(g.evaluate(PathType::Lsr), Err(RoboticsError::Infeasible(PathType::Lsr))));
        assert!(matches!(g.evaluate(PathType::Rsl), Err(RoboticsError::Infeasible(PathType::Rsl))));
        assert_lengths(g.evaluate(PathType::Rlr).unwrap(), [PI / 3.0, 5.0 * PI / 3.0, PI / 3.0], 1e-9);
        assert_lengths(g.evaluate(PathType::Lrl).unwrap(), [PI / 3.0, 5.0 * PI / 3.0, PI / 3.0], 1e-9);
    }

    #[test]
    fn test_ccc_infeasible_beyond_four_radii() {
        let g = geometry((0.0, 0.0, 0.0), (4.5, 0.0, PI));
        assert!(g.distance > CCC_MAX_DISTANCE);
        for &path_type in &PathType::CCC {
            assert!(matches!(g.evaluate(path_type), Err(RoboticsError::Infeasible(_))));
        }
        assert!(g.evaluate(PathType::Lsl).is_ok());
    }

    #[test]
    fn test_coincident_poses_give_zero_csc() {
        let g = geometry((2.0, 3.0, 1.3), (2.0, 3.0, 1.3));
        for &path_type in &PathType::CSC {
            assert_lengths(g.evaluate(path_type).unwrap(), [0.0, 0.0, 0.0], 1e-6);
        }
    }

    #[test]
    fn test_finish_snaps_noise() {
        let spec = FamilySpec::of(PathType::Lsl);
        let out = finish([2.0 * PI - 1e-12, 2.0 * PI - 1e-12, -1e-12], &spec);
        // the straight segment keeps its length
        assert_eq!(out[0], 0.0);
        assert!((out[1] - 2.0 * PI).abs() < 1e-9);
        assert_eq!(out[2], 0.0);

        let bridge = finish([0.1, 2.0 * PI - 1e-12, 0.2], &FamilySpec::of(PathType::Rlr));
        assert_eq!(bridge[1], 0.0);
    }

    #[test]
    fn test_family_spec() {
        assert_eq!(FamilySpec::of(PathType::Rsl), FamilySpec { first_turn: SegmentKind::Right, tangent: Tangent::Inner });
        assert_eq!(FamilySpec::of(PathType::Lrl).tangent, Tangent::Bridge);
    }
}
