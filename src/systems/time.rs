//! Time update systems.
//!
//! [`update_world_time`] advances the shared [`WorldTime`] resource once per
//! frame. [`sync_animation_clock`] then copies the scaled elapsed time into an
//! [`AnimationManager`] driven by a [`ManualClock`], so animations follow
//! slow-motion and pauses the same way the rest of the simulation does.
use bevy_ecs::prelude::*;

use crate::resources::animationmanager::AnimationManager;
use crate::resources::clock::ManualClock;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The system
/// applies the current `time_scale` and writes both `elapsed` and `delta`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Point the animation clock at the current world time.
pub fn sync_animation_clock(
    time: Res<WorldTime>,
    mut manager: ResMut<AnimationManager<ManualClock>>,
) {
    manager.clock_mut().set(time.elapsed);
}
