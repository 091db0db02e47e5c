use bevy::math::Vec3;

/// Longitude offset used when placing light pillars on the globe.
pub const MARKER_LONGITUDE_OFFSET_DEG: f32 = 180.0;

/// Longitude offset used when computing where the camera flies to.
/// Differs from `MARKER_LONGITUDE_OFFSET_DEG` on purpose until the framing
/// mismatch is settled, so the camera lands 20° east of the pillar it frames.
pub const CAMERA_LONGITUDE_OFFSET_DEG: f32 = 200.0;

/// Waypoints between the camera and its target, excluding the start.
pub const ARC_SEGMENTS: usize = 10;

/// No arc waypoint comes closer to the globe centre than this.
pub const ARC_FLOOR_RADIUS: f32 = 2.5;

/// Distance from the globe centre at which a fly-to parks the camera.
pub const FLY_TO_CAMERA_DISTANCE: f32 = 3.0;

/// Seconds for a complete fly-to.
pub const FLY_TO_DURATION_SECS: f32 = 1.5;

/// Seconds without camera change before motion counts as settled.
pub const MOTION_SETTLE_SECS: f32 = 0.5;

/// Per-frame multiplicative decay of drag velocity.
pub const DRAG_DAMPING: f32 = 0.98;

/// Pointer pixels to radians per frame.
pub const DRAG_SCALE: f32 = 0.001;

/// Velocities below this snap to zero.
pub const VELOCITY_EPSILON: f32 = 1e-4;

/// Tilt below this snaps to zero while returning to horizontal.
pub const TILT_EPSILON: f32 = 1e-3;

/// Where the camera starts and where a home flight returns it.
pub const CAMERA_HOME_POSITION: Vec3 = Vec3::new(0.0, 0.0, 4.0);

/// Pointer travel, in pixels, that turns a press into a drag.
pub const DRAG_TRAVEL_THRESHOLD_PX: f32 = 3.0;
