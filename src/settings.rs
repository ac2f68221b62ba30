//! Game settings and preferences
//!
//! Injected into the scheduler and renderer; the simulation never reads them.
//! Persisted as JSON next to the high score.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Tick rate presets offered in the settings menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TickRate {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl TickRate {
    pub fn as_str(&self) -> &'static str {
        match self {
            TickRate::Slow => "Slow",
            TickRate::Normal => "Normal",
            TickRate::Fast => "Fast",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slow" | "30" => Some(TickRate::Slow),
            "normal" | "60" => Some(TickRate::Normal),
            "fast" | "120" => Some(TickRate::Fast),
            _ => None,
        }
    }

    /// Ticks per second
    pub fn fps(&self) -> u32 {
        match self {
            TickRate::Slow => 30,
            TickRate::Normal => 60,
            TickRate::Fast => 120,
        }
    }

    /// Scheduler interval in whole milliseconds
    pub fn interval_ms(&self) -> u64 {
        (1000 / self.fps()) as u64
    }
}

/// Snake body colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SnakeColor {
    #[default]
    Green,
    Blue,
    Yellow,
    Purple,
}

impl SnakeColor {
    pub const ALL: [SnakeColor; 4] = [
        SnakeColor::Green,
        SnakeColor::Blue,
        SnakeColor::Yellow,
        SnakeColor::Purple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SnakeColor::Green => "Green",
            SnakeColor::Blue => "Blue",
            SnakeColor::Yellow => "Yellow",
            SnakeColor::Purple => "Purple",
        }
    }

    /// Body color, RGBA in 0.0 - 1.0
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            SnakeColor::Green => [46.0 / 255.0, 192.0 / 255.0, 64.0 / 255.0, 1.0],
            SnakeColor::Blue => [68.0 / 255.0, 142.0 / 255.0, 239.0 / 255.0, 1.0],
            SnakeColor::Yellow => [243.0 / 255.0, 237.0 / 255.0, 76.0 / 255.0, 1.0],
            SnakeColor::Purple => [181.0 / 255.0, 73.0 / 255.0, 241.0 / 255.0, 1.0],
        }
    }

    /// Head color: the body color darkened by 0.2 per channel
    pub fn head_rgba(&self) -> [f32; 4] {
        let [r, g, b, a] = self.rgba();
        [(r - 0.2).max(0.0), (g - 0.2).max(0.0), (b - 0.2).max(0.0), a]
    }
}

/// Player preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub tick_rate: TickRate,
    pub snake_color: SnakeColor,
}

impl Settings {
    /// Scheduler interval for the chosen tick rate
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_rate.interval_ms()
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_rate_presets() {
        assert_eq!(TickRate::Slow.fps(), 30);
        assert_eq!(TickRate::default().fps(), 60);
        assert_eq!(TickRate::Fast.interval_ms(), 8);
        assert_eq!(TickRate::from_str("FAST"), Some(TickRate::Fast));
        assert_eq!(TickRate::from_str("30"), Some(TickRate::Slow));
        assert_eq!(TickRate::from_str("ludicrous"), None);
    }

    #[test]
    fn test_head_is_darker() {
        for color in SnakeColor::ALL {
            let body = color.rgba();
            let head = color.head_rgba();
            for i in 0..3 {
                assert!(head[i] <= body[i]);
                assert!(head[i] >= 0.0);
            }
        }
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("retro_snake_settings_{}.json", std::process::id()));
        let settings = Settings {
            tick_rate: TickRate::Fast,
            snake_color: SnakeColor::Purple,
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_defaults() {
        let path = std::env::temp_dir().join(format!("retro_snake_bad_settings_{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
        let _ = fs::remove_file(&path);
    }
}
