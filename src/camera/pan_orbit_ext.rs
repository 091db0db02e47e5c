use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use super::NavigationConfig;
use crate::navigation::CameraPose;

/// Extension trait for `PanOrbitCamera` providing convenience methods.
pub trait PanOrbitCameraExt {
    /// Allows for precise control during animations.
    fn disable_interpolation(&mut self);

    /// Enables interpolation for smooth transitions.
    fn enable_interpolation(&mut self, config: &NavigationConfig);

    /// Points the orbit targets so the camera lands on `pose` this frame.
    fn aim_at_pose(&mut self, pose: CameraPose);

    /// Overwrites current and target orbit values so orbiting resumes around
    /// `focus` from `position` without any catch-up motion.
    fn settle_at(&mut self, position: Vec3, focus: Vec3);
}

impl PanOrbitCameraExt for PanOrbitCamera {
    fn disable_interpolation(&mut self) {
        self.zoom_smoothness = 0.0;
        self.pan_smoothness = 0.0;
        self.orbit_smoothness = 0.0;
    }

    fn enable_interpolation(&mut self, config: &NavigationConfig) {
        self.zoom_smoothness = config.zoom_smoothness;
        self.pan_smoothness = config.pan_smoothness;
        self.orbit_smoothness = config.orbit_smoothness;
    }

    fn aim_at_pose(&mut self, pose: CameraPose) {
        let Some(angles) = OrbitAngles::from_offset(pose.position - pose.look_at) else {
            return;
        };
        self.target_focus = pose.look_at;
        self.target_yaw = angles.yaw;
        self.target_pitch = angles.pitch;
        self.target_radius = angles.radius;
        self.force_update = true;
    }

    fn settle_at(&mut self, position: Vec3, focus: Vec3) {
        let Some(angles) = OrbitAngles::from_offset(position - focus) else {
            return;
        };
        self.focus = focus;
        self.target_focus = focus;
        self.yaw = Some(angles.yaw);
        self.target_yaw = angles.yaw;
        self.pitch = Some(angles.pitch);
        self.target_pitch = angles.pitch;
        self.radius = Some(angles.radius);
        self.target_radius = angles.radius;
        self.force_update = true;
    }
}

/// Orbit parameters in the pan-orbit convention: the camera sits at
/// `focus + rot_y(yaw) * rot_x(-pitch) * (0, 0, radius)`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct OrbitAngles {
    yaw:    f32,
    pitch:  f32,
    radius: f32,
}

impl OrbitAngles {
    fn from_offset(offset: Vec3) -> Option<Self> {
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return None;
        }
        Some(Self {
            yaw: offset.x.atan2(offset.z),
            pitch: offset.y.atan2(offset.x.hypot(offset.z)),
            radius,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset_from(angles: OrbitAngles) -> Vec3 {
        Quat::from_rotation_y(angles.yaw) * Quat::from_rotation_x(-angles.pitch) * Vec3::Z * angles.radius
    }

    #[test]
    fn angles_rebuild_the_offset() {
        for offset in [
            Vec3::new(0.0, 0.0, 4.0),
            Vec3::new(1.2, 2.1, -0.7),
            Vec3::new(-3.0, -0.5, 0.2),
            Vec3::new(0.3, -2.9, -0.1),
        ] {
            let Some(angles) = OrbitAngles::from_offset(offset) else {
                panic!("non-zero offset {offset}");
            };
            assert!(offset_from(angles).abs_diff_eq(offset, 1e-4), "{offset}");
        }
    }

    #[test]
    fn zero_offset_has_no_angles() {
        assert!(OrbitAngles::from_offset(Vec3::ZERO).is_none());
    }
}
