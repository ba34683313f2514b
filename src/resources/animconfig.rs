//! Animation demo configuration.
//!
//! Settings loaded from an INI file. Defaults are used for anything missing,
//! so a partial (or absent) file is fine.
//!
//! # Configuration File Format
//!
//! ```ini
//! [animation]
//! frames = 4
//! duration = 2.0
//! looped = true
//! reversed = false
//!
//! [demo]
//! ticks = 40
//! dt = 0.1
//! time_scale = 1.0
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_FRAMES: usize = 4;
const DEFAULT_DURATION: f32 = 2.0;
const DEFAULT_LOOPED: bool = true;
const DEFAULT_REVERSED: bool = false;
const DEFAULT_TICKS: u32 = 40;
const DEFAULT_DT: f32 = 0.1;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./frameanim.ini";

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Number of synthetic frames in the demo animation.
    pub frames: usize,
    /// Seconds per full pass.
    pub duration: f32,
    pub looped: bool,
    pub reversed: bool,
    /// Number of simulated game-loop ticks.
    pub ticks: u32,
    /// Unscaled seconds per tick.
    pub dt: f32,
    pub time_scale: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationConfig {
    pub fn new() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            duration: DEFAULT_DURATION,
            looped: DEFAULT_LOOPED,
            reversed: DEFAULT_REVERSED,
            ticks: DEFAULT_TICKS,
            dt: DEFAULT_DT,
            time_scale: DEFAULT_TIME_SCALE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values keep their current values. Non-positive durations and
    /// zero frame counts are ignored.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: {} frames over {}s, looped={}, reversed={}, {} ticks of {}s (x{})",
            self.frames,
            self.duration,
            self.looped,
            self.reversed,
            self.ticks,
            self.dt,
            self.time_scale
        );

        Ok(())
    }

    /// Parse configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, contents: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(contents.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [animation] section
        if let Some(frames) = config.getuint("animation", "frames").ok().flatten() {
            if frames > 0 {
                self.frames = frames as usize;
            }
        }
        if let Some(duration) = config.getfloat("animation", "duration").ok().flatten() {
            if duration > 0.0 {
                self.duration = duration as f32;
            }
        }
        if let Some(looped) = config.getbool("animation", "looped").ok().flatten() {
            self.looped = looped;
        }
        if let Some(reversed) = config.getbool("animation", "reversed").ok().flatten() {
            self.reversed = reversed;
        }

        // [demo] section
        if let Some(ticks) = config.getuint("demo", "ticks").ok().flatten() {
            self.ticks = ticks as u32;
        }
        if let Some(dt) = config.getfloat("demo", "dt").ok().flatten() {
            self.dt = dt as f32;
        }
        if let Some(scale) = config.getfloat("demo", "time_scale").ok().flatten() {
            self.time_scale = scale as f32;
        }
    }

    /// Save configuration to the INI file.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [animation] section
        config.set("animation", "frames", Some(self.frames.to_string()));
        config.set("animation", "duration", Some(self.duration.to_string()));
        config.set("animation", "looped", Some(self.looped.to_string()));
        config.set("animation", "reversed", Some(self.reversed.to_string()));

        // [demo] section
        config.set("demo", "ticks", Some(self.ticks.to_string()));
        config.set("demo", "dt", Some(self.dt.to_string()));
        config.set("demo", "time_scale", Some(self.time_scale.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
