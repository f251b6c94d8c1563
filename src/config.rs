//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PATAS_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use patas_core::{Vec2, DEFAULT_ARRIVAL_RANGE, DEFAULT_SEEKER, DEFAULT_SPEED, DEFAULT_WAYPOINTS};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Patrol configuration
    #[serde(default)]
    pub movement: MovementConfig,
    /// Texture locations
    #[serde(default)]
    pub assets: AssetsConfig,
    /// Frame timing
    #[serde(default)]
    pub timing: TimingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PATAS_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // PATAS_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("PATAS_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Run without an OS window
    pub headless: bool,
    /// Stop after this many frames
    pub max_frames: Option<u64>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Patas Engine".to_string(),
            width: 1920,
            height: 1080,
            headless: false,
            max_frames: None,
        }
    }
}

/// Waypoint patrol configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Name of the actor that patrols
    pub seeker: String,
    /// Units per second
    pub speed: f32,
    /// Distance at which a waypoint counts as reached
    pub arrival_range: f32,
    /// Closed loop of targets
    pub waypoints: Vec<Vec2>,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            seeker: DEFAULT_SEEKER.to_string(),
            speed: DEFAULT_SPEED,
            arrival_range: DEFAULT_ARRIVAL_RANGE,
            waypoints: DEFAULT_WAYPOINTS.to_vec(),
        }
    }
}

/// Asset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory textures are loaded from
    pub root: PathBuf,
    /// Texture file extension
    pub extension: String,
    /// Texture used when another is missing
    pub default_texture: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            extension: "png".to_string(),
            default_texture: "Default".to_string(),
        }
    }
}

/// Frame timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Fixed seconds per frame; real time is used when absent
    pub fixed_timestep: Option<f32>,
    /// Cap on real-time frame deltas in seconds
    pub max_delta: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fixed_timestep: None,
            max_delta: 0.25,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// File the notification log is appended to at shutdown
    pub log_file: PathBuf,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: PathBuf::from("LogData.txt"),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.window.height, 1080);
        assert_eq!(config.movement.seeker, "Player");
        assert_eq!(config.movement.waypoints.len(), 9);
        assert_eq!(config.movement.waypoints[0], Vec2::new(720.0, 350.0));
        assert_eq!(config.assets.extension, "png");
        assert_eq!(config.debug.log_file, PathBuf::from("LogData.txt"));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("arrival_range"));
        assert!(toml.contains("waypoints"));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = Figment::new()
            .merge(Toml::string("[movement]\nspeed = 50.0\n"))
            .extract()
            .unwrap();
        assert_eq!(config.movement.speed, 50.0);
        assert_eq!(config.movement.arrival_range, 10.0);
        assert_eq!(config.window.title, "Patas Engine");
    }

    #[test]
    fn test_waypoints_from_toml() {
        let config: AppConfig = Figment::new()
            .merge(Toml::string(
                "[movement]\nwaypoints = [{ x = 1.0, y = 2.0 }, { x = 3.0, y = 4.0 }]\n",
            ))
            .extract()
            .unwrap();
        assert_eq!(
            config.movement.waypoints,
            vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]
        );
    }
}
