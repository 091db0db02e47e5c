/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 35.0;

pub const CAMERA_NEAR: f32 = 0.1;

/// Far enough to keep the whole simple starfield in view.
pub const CAMERA_FAR: f32 = 3000.0;

/// Default zoom sensitivity for pan-orbit camera controls
pub const CAMERA_ZOOM_SENSITIVITY: f32 = 0.2;

/// Orbit zoom stays outside the cloud shell.
pub const CAMERA_ZOOM_LOWER_LIMIT: f32 = 1.5;

pub const CAMERA_ZOOM_UPPER_LIMIT: f32 = 12.0;
