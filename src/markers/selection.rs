use bevy::picking::events::Click;
use bevy::picking::events::DragStart;
use bevy::picking::events::Pointer;
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::ActiveMarkers;
use super::FocusMember;
use super::GeoPoint;
use super::SelectOrganization;
use super::pillars::Marker;
use crate::camera::FlyToSurface;
use crate::globe::Globe;
use crate::globe_input::NextMember;
use crate::globe_input::OrganizationAction;
use crate::globe_input::ShowApec;
use crate::globe_input::ShowBrics;
use crate::globe_input::ShowCis;
use crate::globe_input::ShowEaeu;
use crate::globe_input::ShowSco;
use crate::navigation::CameraNavigationState;
use crate::navigation::camera_direction;

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(show_organization::<ShowBrics>)
            .add_observer(show_organization::<ShowSco>)
            .add_observer(show_organization::<ShowCis>)
            .add_observer(show_organization::<ShowEaeu>)
            .add_observer(show_organization::<ShowApec>)
            .add_observer(cycle_member)
            .add_observer(on_focus_member)
            .add_observer(on_marker_click)
            .add_observer(on_marker_drag_start)
            .add_systems(Startup, spawn_selection_label)
            .add_systems(Update, update_selection_label);
    }
}

fn show_organization<A: OrganizationAction>(_pressed: On<Start<A>>, mut commands: Commands) {
    commands.trigger(SelectOrganization {
        organization: A::ORGANIZATION,
    });
}

fn cycle_member(_pressed: On<Start<NextMember>>, mut commands: Commands, active: Res<ActiveMarkers>) {
    let Some(organization) = active.organization else {
        debug!("no organisation chosen, nothing to cycle");
        return;
    };
    commands.trigger(FocusMember {
        index: organization.next_member(active.focused),
    });
}

fn on_marker_click(click: On<Pointer<Click>>, mut commands: Commands, markers: Query<&Marker>) {
    if click.button != PointerButton::Primary {
        return;
    }
    if let Ok(marker) = markers.get(click.entity) {
        commands.trigger(FocusMember {
            index: marker.index,
        });
    }
}

/// A press that lands on a pillar is a click on that marker first. If it turns
/// into a drag, its release must not override the marker's flight.
fn on_marker_drag_start(
    drag: On<Pointer<DragStart>>,
    mut state: ResMut<CameraNavigationState>,
    markers: Query<(), With<Marker>>,
) {
    if drag.button == PointerButton::Primary && markers.contains(drag.entity) {
        state.grab_marker();
    }
}

/// Resolves a focus request to the member and the world direction to fly
/// along. The globe may have turned, so the direction follows its rotation.
fn focus_target(
    active: &ActiveMarkers,
    index: usize,
    globe_rotation: Quat,
) -> Option<(&'static GeoPoint, Vec3)> {
    let Some(organization) = active.organization else {
        warn!("focus on member {index} with no organisation chosen");
        return None;
    };
    let Some(member) = organization.member(index) else {
        warn!("{} has no member at index {index}", organization.label());
        return None;
    };
    Some((
        member,
        globe_rotation * camera_direction(member.latitude, member.longitude),
    ))
}

/// Lights the member's pillar and flies out over it.
fn on_focus_member(
    focus: On<FocusMember>,
    mut commands: Commands,
    mut active: ResMut<ActiveMarkers>,
    globe: Single<&Transform, With<Globe>>,
) {
    let Some((member, direction)) = focus_target(&active, focus.index, globe.rotation) else {
        return;
    };

    active.focused = Some(focus.index);
    info!("focusing {}", member.name);
    commands.trigger(FlyToSurface { direction });
}

#[derive(Component)]
struct SelectionLabel;

fn spawn_selection_label(mut commands: Commands) {
    commands.spawn((
        SelectionLabel,
        Text::new(label_text(&ActiveMarkers::default())),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            bottom: Val::Px(12.0),
            ..default()
        },
    ));
}

fn label_text(active: &ActiveMarkers) -> String {
    let keys = "1-5 organisation | Tab next member | H home";
    match (active.organization, active.focused_member()) {
        (None, _) => keys.to_string(),
        (Some(organization), None) => format!("{}\n{keys}", organization.label()),
        (Some(organization), Some(member)) => {
            format!("{}: {} ({})\n{keys}", organization.label(), member.name, member.icon)
        },
    }
}

fn update_selection_label(active: Res<ActiveMarkers>, mut label: Single<&mut Text, With<SelectionLabel>>) {
    if active.is_changed() {
        label.0 = label_text(&active);
    }
}
