//! Named animation registry.
//!
//! [`AnimationManager`] owns a set of [`Animation`]s keyed by string names and
//! a single [`Clock`]. Every time-dependent call reads that clock, so all
//! registered animations advance on the same time base.
//!
//! The manager is an ordinary value (and a bevy_ecs [`Resource`]); create one
//! per world or per test and hand it to whatever needs it.
//!
//! # Unknown names
//!
//! Commands (`start`, `start_reversed`, `stop`, `remove`) tolerate unknown
//! names: they log a warning and report that nothing happened. Queries
//! (`current_frame`, `is_finished`, `has_started`) fail with
//! [`AnimationError::AnimationNotFound`].

use bevy_ecs::prelude::Resource;
use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::components::animation::{Animation, FrameHandle};
use crate::error::AnimationError;
use crate::resources::clock::{Clock, MonotonicClock};

#[derive(Resource)]
pub struct AnimationManager<C: Clock = MonotonicClock> {
    animations: FxHashMap<String, Animation>,
    clock: C,
}

impl Default for AnimationManager<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationManager<MonotonicClock> {
    /// Create an empty manager whose clock starts now.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl<C: Clock> AnimationManager<C> {
    pub fn with_clock(clock: C) -> Self {
        AnimationManager {
            animations: FxHashMap::default(),
            clock,
        }
    }

    /// Current reading of the shared clock, in seconds.
    pub fn now(&self) -> f32 {
        self.clock.elapsed_seconds()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Register `animation` under `name`, returning the one it replaced.
    pub fn add(&mut self, name: impl Into<String>, animation: Animation) -> Option<Animation> {
        let name = name.into();
        debug!(
            "Registering animation '{}' ({} frames, {}s)",
            name,
            animation.frame_count(),
            animation.max_duration()
        );
        self.animations.insert(name, animation)
    }

    pub fn remove(&mut self, name: &str) -> Option<Animation> {
        let removed = self.animations.remove(name);
        if removed.is_none() {
            warn!("Cannot remove unknown animation '{}'", name);
        }
        removed
    }

    pub fn get(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Animation> {
        self.animations.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }

    /// Play `name` forward from the current clock reading.
    ///
    /// Returns `false` if no such animation is registered.
    pub fn start(&mut self, name: &str) -> bool {
        self.start_with_direction(name, false)
    }

    /// Play `name` back-to-front from the current clock reading.
    ///
    /// Returns `false` if no such animation is registered.
    pub fn start_reversed(&mut self, name: &str) -> bool {
        self.start_with_direction(name, true)
    }

    fn start_with_direction(&mut self, name: &str, reversed: bool) -> bool {
        let now = self.clock.elapsed_seconds();
        match self.animations.get_mut(name) {
            Some(animation) => {
                animation.set_reversed(reversed);
                animation.start(now);
                debug!("Started animation '{}' at t={} (reversed={})", name, now, reversed);
                true
            }
            None => {
                warn!("Cannot start unknown animation '{}'", name);
                false
            }
        }
    }

    /// Returns `false` if no such animation is registered.
    pub fn stop(&mut self, name: &str) -> bool {
        match self.animations.get_mut(name) {
            Some(animation) => {
                animation.stop();
                true
            }
            None => {
                warn!("Cannot stop unknown animation '{}'", name);
                false
            }
        }
    }

    /// Frame of `name` to display at the current clock reading.
    pub fn current_frame(&mut self, name: &str) -> Result<&FrameHandle, AnimationError> {
        let now = self.clock.elapsed_seconds();
        self.animations
            .get_mut(name)
            .ok_or_else(|| not_found(name))?
            .current_frame(now)
    }

    pub fn is_finished(&self, name: &str) -> Result<bool, AnimationError> {
        self.animations
            .get(name)
            .map(Animation::is_finished)
            .ok_or_else(|| not_found(name))
    }

    pub fn has_started(&self, name: &str) -> Result<bool, AnimationError> {
        self.animations
            .get(name)
            .map(Animation::has_started)
            .ok_or_else(|| not_found(name))
    }
}

fn not_found(name: &str) -> AnimationError {
    AnimationError::AnimationNotFound {
        name: name.to_string(),
    }
}
