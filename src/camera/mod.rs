mod cameras;
mod config;
mod constants;
mod fly_to;
mod pan_orbit_ext;
mod stars;

use bevy::prelude::*;

use cameras::CamerasPlugin;
pub use cameras::GlobeCamera;
use config::CameraConfigPlugin;
pub use config::NavigationConfig;
pub use fly_to::FlyHome;
pub use fly_to::FlyToSurface;
use fly_to::FlyToPlugin;
pub use pan_orbit_ext::PanOrbitCameraExt;
pub use stars::StarfieldRoot;
use stars::StarsPlugin;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(CameraConfigPlugin)
            .add_plugins(CamerasPlugin)
            .add_plugins(FlyToPlugin)
            .add_plugins(StarsPlugin);
    }
}
