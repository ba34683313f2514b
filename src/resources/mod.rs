//! Long-lived data shared with the game loop.
//!
//! Overview
//! - `animationmanager` – named animations driven from one clock
//! - `animconfig` – INI settings for the demo binary
//! - `clock` – time sources read by the animation manager
//! - `worldtime` – simulation time and delta
pub mod animationmanager;
pub mod animconfig;
pub mod clock;
pub mod worldtime;
