use bevy::math::Vec3;

use super::constants::CAMERA_LONGITUDE_OFFSET_DEG;
use super::constants::MARKER_LONGITUDE_OFFSET_DEG;

/// Converts latitude/longitude in degrees into a point on the unit sphere.
///
/// Colatitude drives `y`, the offset longitude sweeps the `x`/`-z` plane.
/// Any input is accepted; out of range values wrap through the trig functions.
pub fn project(latitude: f32, longitude: f32, longitude_offset_deg: f32) -> Vec3 {
    let phi = (90.0 - latitude).to_radians();
    let theta = (longitude + longitude_offset_deg).to_radians();

    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();

    Vec3::new(sin_phi * cos_theta, cos_phi, -sin_phi * sin_theta)
}

/// Where a light pillar for this coordinate sits on the unit globe.
pub fn marker_position(latitude: f32, longitude: f32) -> Vec3 {
    project(latitude, longitude, MARKER_LONGITUDE_OFFSET_DEG)
}

/// Direction the camera flies towards to frame this coordinate.
pub fn camera_direction(latitude: f32, longitude: f32) -> Vec3 {
    project(latitude, longitude, CAMERA_LONGITUDE_OFFSET_DEG)
}
