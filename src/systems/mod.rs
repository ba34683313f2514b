//! ECS systems.
//!
//! - [`time`] – world time bookkeeping and animation clock syncing

pub mod time;
