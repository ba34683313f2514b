//! Animation data types.
//!
//! - [`animation`] – frame handles, playback state, and frame selection

pub mod animation;
