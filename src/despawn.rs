use bevy::prelude::*;

/// Uses `try_despawn` because a marker set can be rebuilt twice in one frame
/// (an organisation key and a pillar click landing together), queueing the same entity twice.
pub fn despawn(commands: &mut Commands, entity: Entity) { commands.entity(entity).try_despawn(); }

/// Despawns every entity carrying `T`, children included.
pub fn despawn_all<T: Component>(commands: &mut Commands, query: &Query<Entity, With<T>>) {
    for entity in query.iter() {
        despawn(commands, entity);
    }
}
