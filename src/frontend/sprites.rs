use bevy::prelude::*;
use tileworld::render::{DrawCall, DrawList};

/// The draw calls of the last simulated frame
#[derive(Resource, Default)]
pub struct FrameBuffer(pub DrawList<Handle<Image>>);

/// Reusable sprite entities, one per draw call slot
#[derive(Resource, Default)]
pub struct SpritePool {
    entities: Vec<Entity>,
    synced_frame: u64,
}

/// Mirror the presented draw list onto pooled sprites.
///
/// Screen space has its origin top-left with y down; the 2D camera sits at
/// the world origin with y up, so every quad is shifted by half a viewport.
pub fn sync_sprites(
    mut commands: Commands,
    frame: Res<FrameBuffer>,
    sim: Res<super::WorldSim>,
    mut pool: ResMut<SpritePool>,
    mut sprites: Query<(&mut Sprite, &mut Transform, &mut Visibility)>,
) {
    if frame.0.frames() == pool.synced_frame {
        return;
    }
    pool.synced_frame = frame.0.frames();

    let viewport = sim.0.session().camera().viewport().as_vec2();
    let calls = frame.0.presented();

    for (slot, &entity) in pool.entities.iter().enumerate() {
        let Ok((mut sprite, mut transform, mut visibility)) = sprites.get_mut(entity) else {
            continue;
        };
        match calls.get(slot) {
            Some(call) => {
                place_sprite(call, viewport, &mut sprite, &mut transform);
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
    }

    // New slots are spawned already placed so they show this frame
    for call in calls.iter().skip(pool.entities.len()) {
        let mut sprite = Sprite::default();
        let mut transform = Transform::default();
        place_sprite(call, viewport, &mut sprite, &mut transform);
        let entity = commands.spawn((sprite, transform, Visibility::Visible)).id();
        pool.entities.push(entity);
    }
}

fn place_sprite(call: &DrawCall<Handle<Image>>, viewport: Vec2, sprite: &mut Sprite, transform: &mut Transform) {
    let size = call.dest.size().as_vec2();
    let min = call.dest.min.as_vec2();
    sprite.image = call.texture.clone();
    sprite.custom_size = Some(size);
    sprite.flip_x = call.flip_x;
    transform.translation = Vec3::new(
        min.x + size.x / 2.0 - viewport.x / 2.0,
        viewport.y / 2.0 - (min.y + size.y / 2.0),
        call.layer.z(),
    );
}
