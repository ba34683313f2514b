//! Frame-based sprite animation.
//!
//! An [`Animation`] holds an ordered list of [`FrameHandle`]s and maps the
//! time elapsed since [`Animation::start`] onto one of them. Every frame is
//! shown for `max_duration / frame_count` seconds.
//!
//! # State Machine
//!
//! ```text
//! NotStarted --start--> Running --end of pass--> Finished
//!                          ^   \--end of pass (looped)--/ restarts
//!                          \------------start---------- Finished
//! ```
//!
//! [`Animation::stop`] forces `Finished` from any state.
//!
//! # Related
//!
//! - [`crate::resources::animationmanager::AnimationManager`] – named registry
//!   that drives animations from a shared clock

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::AnimationError;

/// Non-owning reference to a frame texture, identified by its texture key.
///
/// Cloning a handle only bumps a reference count. The texture itself lives in
/// whatever store produced the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameHandle(Arc<str>);

impl FrameHandle {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        FrameHandle(key.into())
    }

    /// Texture key this handle points at.
    pub fn key(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FrameHandle {
    fn from(key: &str) -> Self {
        FrameHandle::new(key)
    }
}

impl From<String> for FrameHandle {
    fn from(key: String) -> Self {
        FrameHandle::new(key)
    }
}

impl fmt::Display for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Playback state derived from `start_time` and `finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationState {
    NotStarted,
    Running,
    Finished,
}

/// An ordered list of frames played uniformly over `max_duration` seconds.
///
/// Frames are handles into an external texture store; the animation only
/// clones keys. Playback is driven by timestamps passed to
/// [`start`](Animation::start) and [`current_frame`](Animation::current_frame),
/// usually read from the [`AnimationManager`](crate::resources::animationmanager::AnimationManager)
/// clock.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<FrameHandle>,
    /// Seconds for one full pass over all frames.
    max_duration: f32,
    looped: bool,
    reversed: bool,
    start_time: Option<f32>,
    finished: bool,
}

impl Animation {
    /// Create an empty animation. Frames are appended afterwards.
    ///
    /// `max_duration` must be positive. Other values are logged; a zero
    /// duration ends the pass as soon as any time has elapsed.
    pub fn new(max_duration: f32, looped: bool) -> Self {
        if max_duration <= 0.0 || max_duration.is_nan() {
            warn!("Animation duration must be positive, got {max_duration}");
        }
        Self {
            frames: Vec::new(),
            max_duration,
            looped,
            reversed: false,
            start_time: None,
            finished: false,
        }
    }

    pub fn with_frame(mut self, frame: impl Into<FrameHandle>) -> Self {
        self.add_frame(frame);
        self
    }

    pub fn with_frames<I>(mut self, frames: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FrameHandle>,
    {
        self.frames.extend(frames.into_iter().map(Into::into));
        self
    }

    pub fn add_frame(&mut self, frame: impl Into<FrameHandle>) {
        self.frames.push(frame.into());
    }

    pub fn frames(&self) -> &[FrameHandle] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn max_duration(&self) -> f32 {
        self.max_duration
    }

    pub fn start_time(&self) -> Option<f32> {
        self.start_time
    }

    pub fn has_started(&self) -> bool {
        self.start_time.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_looping(&self) -> bool {
        self.looped
    }

    pub fn set_looping(&mut self, looped: bool) {
        self.looped = looped;
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    pub fn state(&self) -> AnimationState {
        match (self.start_time, self.finished) {
            (Some(_), _) => AnimationState::Running,
            (None, true) => AnimationState::Finished,
            (None, false) => AnimationState::NotStarted,
        }
    }

    /// Begin a pass at `now`, clearing any previous finished state.
    pub fn start(&mut self, now: f32) {
        self.start_time = Some(now);
        self.finished = false;
    }

    /// Mark the animation finished and forget its start time.
    pub fn stop(&mut self) {
        self.start_time = None;
        self.finished = true;
    }

    /// Uniform frame index for `now`, counted from the start of the pass.
    ///
    /// Returns `None` when the animation has not been started. The index may
    /// be past the last frame. `now` before the start time clamps to 0, so the
    /// pass keeps showing its first frame instead of being treated as over.
    pub fn frame_index_at(&self, now: f32) -> Option<usize> {
        let start = self.start_time?;
        let elapsed = now - start;
        // float-to-int `as` truncates toward zero and saturates negatives to 0
        Some((self.frames.len() as f32 * elapsed / self.max_duration) as usize)
    }

    /// Select the frame to display at `now`.
    ///
    /// - Not started: the first frame, whatever the direction.
    /// - Within the pass: the frame at the elapsed index, mirrored when reversed.
    /// - Past the end: looped animations restart at `now` and return the first
    ///   frame of the traversal; others stop and return the last frame.
    pub fn current_frame(&mut self, now: f32) -> Result<&FrameHandle, AnimationError> {
        let count = self.frames.len();
        if count == 0 {
            return Err(AnimationError::EmptyAnimation);
        }
        let last = count - 1;

        let Some(index) = self.frame_index_at(now) else {
            return Ok(&self.frames[0]);
        };

        let selected = if index < count {
            if self.reversed { last - index } else { index }
        } else if self.looped {
            debug!("animation pass complete, looping at t={now}");
            self.start_time = Some(now);
            if self.reversed { last } else { 0 }
        } else {
            debug!("animation pass complete, finished at t={now}");
            self.stop();
            last
        };

        Ok(&self.frames[selected])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_frames(looped: bool) -> Animation {
        Animation::new(2.0, looped).with_frames(["f0", "f1", "f2", "f3"])
    }

    fn key_at(anim: &mut Animation, now: f32) -> String {
        anim.current_frame(now).unwrap().key().to_string()
    }

    #[test]
    fn test_not_started_returns_first_frame() {
        let mut anim = four_frames(false);
        for now in [0.0, 1.5, 10.0, 1000.0] {
            assert_eq!(key_at(&mut anim, now), "f0");
        }
        assert_eq!(anim.state(), AnimationState::NotStarted);
    }

    #[test]
    fn test_not_started_reversed_still_returns_first_frame() {
        let mut anim = four_frames(false);
        anim.set_reversed(true);
        assert_eq!(key_at(&mut anim, 3.0), "f0");
    }

    #[test]
    fn test_start_at_zero_counts_as_started() {
        let mut anim = four_frames(false);
        anim.start(0.0);
        assert!(anim.has_started());
        assert_eq!(key_at(&mut anim, 0.6), "f1");
    }

    #[test]
    fn test_first_frame_right_after_start() {
        let mut anim = four_frames(false);
        anim.start(3.0);
        assert_eq!(key_at(&mut anim, 3.0), "f0");
    }

    #[test]
    fn test_reversed_mirrors_forward_order() {
        let mut anim = four_frames(false);
        anim.set_reversed(true);
        anim.start(1.0);
        assert_eq!(key_at(&mut anim, 1.0), "f3");
        assert_eq!(key_at(&mut anim, 1.6), "f2");
        assert_eq!(key_at(&mut anim, 2.1), "f1");
        assert_eq!(key_at(&mut anim, 2.6), "f0");
    }

    #[test]
    fn test_forward_walks_every_frame() {
        let mut anim = four_frames(false);
        anim.start(1.0);
        assert_eq!(key_at(&mut anim, 1.25), "f0");
        assert_eq!(key_at(&mut anim, 1.75), "f1");
        assert_eq!(key_at(&mut anim, 2.25), "f2");
        assert_eq!(key_at(&mut anim, 2.75), "f3");
        assert!(!anim.is_finished());
    }

    #[test]
    fn test_non_looping_finishes_on_last_frame() {
        let mut anim = four_frames(false);
        anim.start(5.0);
        assert_eq!(key_at(&mut anim, 7.0), "f3");
        assert!(anim.is_finished());
        assert!(!anim.has_started());
        assert_eq!(anim.state(), AnimationState::Finished);
    }

    #[test]
    fn test_non_looping_well_past_end_finishes() {
        let mut anim = four_frames(false);
        anim.start(5.0);
        assert_eq!(key_at(&mut anim, 50.0), "f3");
        assert!(anim.is_finished());
    }

    #[test]
    fn test_reversed_non_looping_finishes_on_last_frame() {
        let mut anim = four_frames(false);
        anim.set_reversed(true);
        anim.start(5.0);
        assert_eq!(key_at(&mut anim, 7.0), "f3");
        assert!(anim.is_finished());
        assert!(!anim.has_started());
    }

    #[test]
    fn test_time_before_start_does_not_finish() {
        let mut anim = four_frames(false);
        anim.start(5.0);
        assert_eq!(key_at(&mut anim, 3.0), "f0");
        assert!(!anim.is_finished());
        assert!(anim.has_started());
    }

    #[test]
    fn test_zero_duration_finishes_on_first_query() {
        let mut anim = Animation::new(0.0, false).with_frames(["f0", "f1"]);
        anim.start(1.0);
        assert_eq!(key_at(&mut anim, 1.5), "f1");
        assert!(anim.is_finished());
    }

    #[test]
    fn test_finished_then_queried_returns_first_frame() {
        let mut anim = four_frames(false);
        anim.start(0.5);
        anim.current_frame(10.0).unwrap();
        assert_eq!(key_at(&mut anim, 11.0), "f0");
        assert!(anim.is_finished());
    }

    #[test]
    fn test_looping_scenario() {
        let mut anim = four_frames(true);
        anim.start(10.0);
        assert_eq!(key_at(&mut anim, 10.0), "f0");
        assert_eq!(key_at(&mut anim, 10.6), "f1");
        assert_eq!(key_at(&mut anim, 12.0), "f0");
        assert_eq!(anim.start_time(), Some(12.0));
        assert!(!anim.is_finished());
    }

    #[test]
    fn test_looping_reversed_wraps_to_last_frame() {
        let mut anim = four_frames(true);
        anim.set_reversed(true);
        anim.start(1.0);
        assert_eq!(key_at(&mut anim, 3.5), "f3");
        assert_eq!(anim.start_time(), Some(3.5));
    }

    #[test]
    fn test_looping_never_finishes() {
        let mut anim = four_frames(true);
        anim.start(1.0);
        let mut now = 1.0;
        for _ in 0..200 {
            now += 0.37;
            let frame = anim.current_frame(now).unwrap().clone();
            assert!(anim.frames().contains(&frame));
            assert!(!anim.is_finished());
            assert!(anim.has_started());
        }
    }

    #[test]
    fn test_empty_animation_errors_in_every_state() {
        let mut anim = Animation::new(1.0, false);
        assert_eq!(anim.current_frame(0.0), Err(AnimationError::EmptyAnimation));
        anim.start(1.0);
        assert_eq!(anim.current_frame(1.5), Err(AnimationError::EmptyAnimation));
        anim.stop();
        assert_eq!(anim.current_frame(2.0), Err(AnimationError::EmptyAnimation));
    }

    #[test]
    fn test_time_before_start_clamps_to_first_index() {
        let mut anim = four_frames(false);
        anim.start(4.0);
        assert_eq!(anim.frame_index_at(3.0), Some(0));
        assert_eq!(key_at(&mut anim, 3.0), "f0");
    }

    #[test]
    fn test_frame_index_at_is_pure() {
        let mut anim = four_frames(false);
        assert_eq!(anim.frame_index_at(1.0), None);
        anim.start(0.0);
        assert_eq!(anim.frame_index_at(3.0), Some(6));
        assert!(anim.has_started());
        assert!(!anim.is_finished());
    }

    #[test]
    fn test_start_clears_finished() {
        let mut anim = four_frames(false);
        anim.stop();
        assert!(anim.is_finished());
        anim.start(2.0);
        assert!(!anim.is_finished());
        assert_eq!(anim.state(), AnimationState::Running);
    }

    #[test]
    fn test_frame_handle_shares_key() {
        let a = FrameHandle::from("hero_walk_0");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.key(), "hero_walk_0");
        assert_eq!(b.to_string(), "hero_walk_0");
    }
}
