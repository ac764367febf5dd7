//! Game configuration resource.
//!
//! Manages demo settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1000
//! height = 740
//! target_fps = 60
//! vsync = true
//!
//! [demo]
//! variant = knight
//! tps = 60
//! speed = 3
//! frame_hold = 3
//! assets = ./assets
//! seed = 42
//! ```
//!
//! Window width/height default to the selected variant's screen size.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::spritemotion::{DEFAULT_FRAME_HOLD, DEFAULT_SPEED};
use crate::resources::tickclock::DEFAULT_TPS;
use crate::resources::variant::{DEFAULT_VARIANT, DemoVariant};

/// Default safe values for startup
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_ASSETS_DIR: &str = "./assets";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, the selected demo variant and its tunables.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels. `None` uses the variant's screen width.
    pub window_width: Option<u32>,
    /// Window height in pixels. `None` uses the variant's screen height.
    pub window_height: Option<u32>,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Name of the demo variant preset.
    pub variant: String,
    /// Simulation ticks per second.
    pub tps: u32,
    /// Sprite speed in pixels per tick.
    pub speed: i32,
    /// Ticks each animation frame stays on screen.
    pub frame_hold: u32,
    /// Directory holding the demo images.
    pub assets_dir: PathBuf,
    /// Fixed seed for the starting position. Random when `None`.
    pub seed: Option<u64>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: None,
            window_height: None,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            variant: DEFAULT_VARIANT.to_string(),
            tps: DEFAULT_TPS,
            speed: DEFAULT_SPEED,
            frame_hold: DEFAULT_FRAME_HOLD,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            seed: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config from {:?}: variant={}, tps={}, speed={}, fps={}, vsync={}",
            self.config_path, self.variant, self.tps, self.speed, self.target_fps, self.vsync
        );

        Ok(())
    }

    /// Load configuration from INI text. Used for tests and embedded defaults.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = get_u32(config, "window", "width") {
            self.window_width = Some(width);
        }
        if let Some(height) = get_u32(config, "window", "height") {
            self.window_height = Some(height);
        }
        if let Some(fps) = get_u32(config, "window", "target_fps") {
            self.target_fps = fps;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [demo] section
        if let Some(variant) = config.get("demo", "variant") {
            self.variant = variant;
        }
        if let Some(tps) = get_u32(config, "demo", "tps") {
            self.tps = tps;
        }
        if let Some(speed) = get_i32(config, "demo", "speed") {
            self.speed = speed;
        }
        if let Some(hold) = get_u32(config, "demo", "frame_hold") {
            self.frame_hold = hold;
        }
        if let Some(assets) = config.get("demo", "assets") {
            self.assets_dir = PathBuf::from(assets);
        }
        if let Some(seed) = config.getuint("demo", "seed").ok().flatten() {
            self.seed = Some(seed);
        }
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        // [window] section
        if let Some(width) = self.window_width {
            config.set("window", "width", Some(width.to_string()));
        }
        if let Some(height) = self.window_height {
            config.set("window", "height", Some(height.to_string()));
        }
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [demo] section
        config.set("demo", "variant", Some(self.variant.clone()));
        config.set("demo", "tps", Some(self.tps.to_string()));
        config.set("demo", "speed", Some(self.speed.to_string()));
        config.set("demo", "frame_hold", Some(self.frame_hold.to_string()));
        config.set(
            "demo",
            "assets",
            Some(self.assets_dir.to_string_lossy().into_owned()),
        );
        if let Some(seed) = self.seed {
            config.set("demo", "seed", Some(seed.to_string()));
        }
        config
    }

    /// Render the configuration as INI text.
    pub fn to_ini_string(&self) -> String {
        self.to_ini().writes()
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Resolve the configured variant preset with the tunables applied.
    pub fn variant(&self) -> Result<DemoVariant, String> {
        let mut variant = DemoVariant::preset(&self.variant)?;
        if self.speed <= 0 {
            return Err(format!("Speed must be positive, got {}", self.speed));
        }
        variant.speed = self.speed;
        variant.frame_hold = self.frame_hold.max(1);
        Ok(variant)
    }

    /// Window size, falling back to the variant's logical screen size.
    pub fn window_size(&self, variant: &DemoVariant) -> (u32, u32) {
        (
            self.window_width.unwrap_or(variant.screen.w as u32),
            self.window_height.unwrap_or(variant.screen.h as u32),
        )
    }
}

/// Read an unsigned key that must fit in `u32`; out of range values are ignored.
fn get_u32(config: &Ini, section: &str, key: &str) -> Option<u32> {
    let value = config.getuint(section, key).ok().flatten()?;
    match u32::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring [{}] {} = {}: out of range", section, key, value);
            None
        }
    }
}

/// Read a signed key that must fit in `i32`; out of range values are ignored.
fn get_i32(config: &Ini, section: &str, key: &str) -> Option<i32> {
    let value = config.getint(section, key).ok().flatten()?;
    match i32::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring [{}] {} = {}: out of range", section, key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::spritemotion::VerticalBand;

    #[test]
    fn defaults_select_knight() {
        let config = GameConfig::new();
        let variant = config.variant().unwrap();
        assert_eq!(variant.name, "knight");
        assert_eq!(config.window_size(&variant), (1000, 740));
        assert_eq!(config.tps, 60);
        assert!(config.seed.is_none());
    }

    #[test]
    fn ini_values_override_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[window]\nwidth = 1280\ntarget_fps = 30\nvsync = false\n\
                 [demo]\nvariant = walker\ntps = 120\nspeed = 5\nframe_hold = 4\n\
                 assets = /tmp/art\nseed = 7\n",
            )
            .unwrap();
        assert_eq!(config.window_width, Some(1280));
        assert_eq!(config.window_height, None);
        assert_eq!(config.target_fps, 30);
        assert!(!config.vsync);
        assert_eq!(config.tps, 120);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.assets_dir, PathBuf::from("/tmp/art"));

        let variant = config.variant().unwrap();
        assert_eq!(variant.band, VerticalBand::FullScreen);
        assert_eq!(variant.speed, 5);
        assert_eq!(variant.frame_hold, 4);
        assert_eq!(config.window_size(&variant), (1280, 740));
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let mut config = GameConfig::new();
        config.load_from_str("[demo]\nvariant = bouncer\n").unwrap();
        assert_eq!(config.speed, DEFAULT_SPEED);
        assert_eq!(config.frame_hold, DEFAULT_FRAME_HOLD);
        assert_eq!(config.target_fps, DEFAULT_TARGET_FPS);
    }

    #[test]
    fn out_of_range_numbers_keep_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[window]\nwidth = 4294967296\n\
                 [demo]\nspeed = 2147483648\nframe_hold = 4294967300\ntps = 90\n",
            )
            .unwrap();
        assert_eq!(config.window_width, None);
        assert_eq!(config.speed, DEFAULT_SPEED);
        assert_eq!(config.frame_hold, DEFAULT_FRAME_HOLD);
        assert_eq!(config.tps, 90);
    }

    #[test]
    fn unknown_variant_is_an_error() {
        let mut config = GameConfig::new();
        config.load_from_str("[demo]\nvariant = dragon\n").unwrap();
        assert!(config.variant().is_err());
    }

    #[test]
    fn non_positive_speed_is_an_error() {
        let mut config = GameConfig::new();
        config.speed = 0;
        assert!(config.variant().is_err());
    }

    #[test]
    fn ini_text_round_trips() {
        let mut config = GameConfig::new();
        config.variant = "bouncer".to_string();
        config.window_height = Some(600);
        config.seed = Some(99);

        let mut reloaded = GameConfig::new();
        reloaded.load_from_str(&config.to_ini_string()).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn missing_file_is_reported() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        let err = config.load_from_file().unwrap_err();
        assert!(err.starts_with("Failed to load config file"));
        assert_eq!(config.variant, DEFAULT_VARIANT);
    }
}
