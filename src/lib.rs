//! frameanim library.
//!
//! Frame-based sprite animation for a 2D game loop: an [`Animation`] maps time
//! onto an ordered list of frame handles, and an [`AnimationManager`] drives
//! named animations from one shared clock.
//!
//! [`Animation`]: components::animation::Animation
//! [`AnimationManager`]: resources::animationmanager::AnimationManager

pub mod components;
pub mod error;
pub mod resources;
pub mod systems;
