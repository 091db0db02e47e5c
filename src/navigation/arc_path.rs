use bevy::math::Vec3;

/// Camera trajectory lifted onto a spherical shell around the globe.
///
/// Waypoints are chord interpolations between start and end pushed out to a
/// shared radius, so the path bulges over the globe instead of cutting through it.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcPath {
    waypoints: Vec<Vec3>,
    radius:    f32,
}

impl ArcPath {
    /// Builds `segments + 1` waypoints from `start` to `end`, each at
    /// `max(|start|, |end|, floor_radius)` from the origin.
    ///
    /// `segments == 0` yields a single waypoint at `start`.
    pub fn build(start: Vec3, end: Vec3, segments: usize, floor_radius: f32) -> Self {
        let radius = start.length().max(end.length()).max(floor_radius);

        if segments == 0 {
            let direction = start.try_normalize().unwrap_or(Vec3::Z);
            return Self {
                waypoints: vec![direction * radius],
                radius,
            };
        }

        let mut waypoints = Vec::with_capacity(segments + 1);
        // a chord through the origin has no direction at its midpoint; reuse the last one
        let mut last_direction = start
            .try_normalize()
            .or_else(|| end.try_normalize())
            .unwrap_or(Vec3::Z);

        for i in 0..=segments {
            #[allow(clippy::cast_precision_loss, reason = "segment counts are tiny")]
            let t = i as f32 / segments as f32;
            let direction = start.lerp(end, t).try_normalize().unwrap_or(last_direction);
            last_direction = direction;
            waypoints.push(direction * radius);
        }

        Self { waypoints, radius }
    }

    /// Position at `progress` along the path; progress is clamped to `[0, 1]`.
    ///
    /// Linear between neighbouring waypoints, so the path is continuous but faceted.
    pub fn sample(&self, progress: f32) -> Vec3 {
        let Some(&last) = self.waypoints.last() else {
            return Vec3::ZERO;
        };
        let last_index = self.waypoints.len() - 1;
        if last_index == 0 {
            return last;
        }

        #[allow(clippy::cast_precision_loss, reason = "waypoint counts are tiny")]
        let index = last_index as f32 * progress.clamp(0.0, 1.0);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "index is non-negative and bounded by the waypoint count"
        )]
        let lower = index.floor() as usize;
        let upper = lower + 1;

        if upper > last_index {
            return last;
        }

        self.waypoints[lower].lerp(self.waypoints[upper], index.fract())
    }

    pub fn waypoints(&self) -> &[Vec3] { &self.waypoints }

    pub const fn radius(&self) -> f32 { self.radius }

    pub fn start(&self) -> Vec3 { self.waypoints.first().copied().unwrap_or(Vec3::ZERO) }

    pub fn end(&self) -> Vec3 { self.waypoints.last().copied().unwrap_or(Vec3::ZERO) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::projector::camera_direction;

    const TOLERANCE: f32 = 1e-4;

    #[test]
    fn camera_to_marker_arc_has_eleven_waypoints_above_three() {
        let start = Vec3::new(0.0, 0.0, 4.0);
        let end = camera_direction(36.89389, 104.08444) * 3.0;
        let path = ArcPath::build(start, end, 10, 2.5);

        assert_eq!(path.waypoints().len(), 11);
        assert!(path.start().abs_diff_eq(start, TOLERANCE));
        // the end is lifted to the shared radius, same direction as the target
        assert!(path.end().normalize().abs_diff_eq(end.normalize(), TOLERANCE));
        assert!((path.end().length() - 4.0).abs() < TOLERANCE);
        for waypoint in path.waypoints() {
            assert!(waypoint.length() >= 3.0 - TOLERANCE);
        }
    }

    #[test]
    fn waypoints_respect_floor_radius() {
        let start = Vec3::new(1.0, 0.2, 0.0);
        let end = Vec3::new(-0.3, 0.1, 1.1);
        let path = ArcPath::build(start, end, 16, 2.5);

        assert!((path.radius() - 2.5).abs() < f32::EPSILON);
        for waypoint in path.waypoints() {
            assert!(waypoint.length() >= 2.5 - TOLERANCE);
        }
    }

    #[test]
    fn antipodal_chord_keeps_radius() {
        let path = ArcPath::build(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, -3.0), 10, 2.5);
        for waypoint in path.waypoints() {
            assert!(waypoint.is_finite());
            assert!((waypoint.length() - 3.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn zero_segments_is_a_single_point() {
        let path = ArcPath::build(Vec3::new(0.0, 0.0, 4.0), Vec3::X * 3.0, 0, 2.5);
        assert_eq!(path.waypoints().len(), 1);
        assert!(path.sample(0.0).abs_diff_eq(Vec3::new(0.0, 0.0, 4.0), TOLERANCE));
        assert!(path.sample(1.0).abs_diff_eq(Vec3::new(0.0, 0.0, 4.0), TOLERANCE));
    }

    #[test]
    fn sample_boundaries_are_exact() {
        let path = ArcPath::build(Vec3::new(0.0, 0.0, 4.0), Vec3::new(3.0, 1.0, 0.0), 10, 2.5);
        assert_eq!(path.sample(0.0), path.waypoints()[0]);
        assert_eq!(path.sample(1.0), path.waypoints()[10]);
        assert_eq!(path.sample(1.000_01), path.waypoints()[10]);
        assert_eq!(path.sample(-0.5), path.waypoints()[0]);
    }

    #[test]
    fn sample_never_backtracks() {
        let path = ArcPath::build(Vec3::new(0.0, 0.0, 4.0), Vec3::new(3.0, 0.5, -1.0), 10, 2.5);
        let total = path.start().distance(path.end());

        let mut previous = 0.0;
        for step in 0..=200 {
            let progress = step as f32 / 200.0;
            let travelled = path.start().distance(path.sample(progress));
            assert!(
                travelled + TOLERANCE >= previous,
                "progress {progress} moved back from {previous} to {travelled}"
            );
            previous = travelled;
        }
        assert!((previous - total).abs() < TOLERANCE);
    }

    #[test]
    fn stationary_arc_stays_put() {
        let point = Vec3::new(0.0, 3.0, 0.0);
        let path = ArcPath::build(point, point, 10, 2.5);
        for step in 0..=10 {
            assert!(path.sample(step as f32 / 10.0).abs_diff_eq(point, TOLERANCE));
        }
    }
}
