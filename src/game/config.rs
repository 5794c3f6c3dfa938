use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a game, fixed at construction time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Time between discrete snake moves
    pub step_interval: Duration,
    /// Points awarded per apple
    pub apple_reward: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 15,
            step_interval: Duration::from_millis(200),
            apple_reward: 20,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(6, 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 15);
        assert_eq!(config.step_interval, Duration::from_millis(200));
        assert_eq!(config.apple_reward, 20);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(32, 24);
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
        // Everything else keeps its default
        assert_eq!(config.apple_reward, 20);
    }
}
