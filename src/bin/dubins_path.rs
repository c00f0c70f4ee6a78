//
// Dubins path planning demo.
//
// Plans the shortest forward path between two poses, lists every feasible
// family, samples the selected path and plots it.
//
// Run with `RUST_LOG=debug` to see per-family evaluation.

use std::f64::consts::PI;

use ordered_float::OrderedFloat;

use dubins_path_planner::path_planning::dubins::all_paths;
use dubins_path_planner::utils::{colors, PathStyle, Visualizer};
use dubins_path_planner::{
    DubinsConfig, DubinsPlanner, Pose2D, PosePathPlanner, RoboticsResult, Visualizable,
};

fn main() -> RoboticsResult<()> {
    env_logger::init();
    println!("Dubins path planner start!!");

    let start = Pose2D::new(-1.0, -4.0, (-20.0_f64).to_radians());
    let goal = Pose2D::new(5.0, 5.0, (25.0_f64).to_radians());

    let config = DubinsConfig::default()
        .with_turning_radius(2.0)
        .with_step_size(0.1);
    let planner = DubinsPlanner::new(config.clone());

    let mut candidates = all_paths(start, goal, config.turning_radius)?;
    candidates.sort_by_key(|p| OrderedFloat(p.total_length()));
    for candidate in &candidates {
        println!(
            "  {}: lengths {:?} total {:.3}",
            candidate.path_type(),
            candidate.lengths(),
            candidate.total_length()
        );
    }

    let path = planner.plan_path(start, goal)?;
    println!("Selected {} path, total length {:.3}", path.path_type(), path.total_length());

    let trajectory = planner.plan(start, goal)?;
    println!("Trajectory has {} points", trajectory.len());

    for i in 0..=4 {
        let t = path.total_length() * i as f64 / 4.0;
        let pose = path.sample(t);
        println!("  t={:6.3}: x={:7.3} y={:7.3} yaw={:6.1} deg", t, pose.x, pose.y, pose.yaw * 180.0 / PI);
    }

    let mut vis = Visualizer::new();
    vis.set_title("Dubins Path Planning");
    for candidate in candidates.iter().filter(|c| c.path_type() != path.path_type()) {
        let poses = candidate.sample_many(config.step_size);
        let style = PathStyle::new(colors::CANDIDATE, &candidate.path_type().to_string()).with_line_width(1.0);
        vis.plot_poses(&poses, &style);
    }
    path.visualize(&mut vis);

    std::fs::create_dir_all("img/path_planning")?;
    let output_path = "img/path_planning/dubins_path_result.png";
    vis.save_png(output_path, 800, 600)?;
    println!("Plot saved to: {}", output_path);

    println!("Dubins path planner finish!!");
    Ok(())
}
