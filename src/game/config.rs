use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted grid width or height
pub const MAX_GRID_SIDE: usize = 1024;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Ignore requests to turn straight back into the neck
    pub block_reversal: bool,
    /// Seed for food placement; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 10,
            grid_height: 10,
            initial_snake_length: 1,
            block_reversal: false,
            seed: None,
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

    /// Same configuration with a fixed RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Check that a game can be started with this configuration.
    ///
    /// The snake starts at the centre cell facing right with its body trailing
    /// to the left, so it has to fit left of the centre column, and at least one
    /// cell must stay free for food.
    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            bail!(
                "Grid must be at least 1x1, got {}x{}",
                self.grid_width,
                self.grid_height
            );
        }
        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            bail!(
                "Grid sides are capped at {}, got {}x{}",
                MAX_GRID_SIDE,
                self.grid_width,
                self.grid_height
            );
        }
        let Some(cells) = self.grid_width.checked_mul(self.grid_height) else {
            bail!(
                "Grid {}x{} has too many cells",
                self.grid_width,
                self.grid_height
            );
        };
        if self.initial_snake_length == 0 {
            bail!("Initial snake length must be at least 1");
        }
        let room = self.grid_width / 2 + 1;
        if self.initial_snake_length > room {
            bail!(
                "Initial snake length {} does not fit a grid {} cells wide (max {})",
                self.initial_snake_length,
                self.grid_width,
                room
            );
        }
        if self.initial_snake_length >= cells {
            bail!("Initial snake leaves no free cell for food");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 10);
        assert_eq!(config.grid_height, 10);
        assert_eq!(config.initial_snake_length, 1);
        assert!(!config.block_reversal);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12).with_seed(7);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"grid_width": 20, "block_reversal": true}"#).unwrap();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 10);
        assert!(config.block_reversal);
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        assert!(GameConfig::new(0, 10).validate().is_err());
        assert!(GameConfig::new(10, 0).validate().is_err());

        let mut config = GameConfig::default();
        config.initial_snake_length = 0;
        assert!(config.validate().is_err());

        // Centre column of a 10-wide grid is 5, so at most 6 segments fit.
        config.initial_snake_length = 6;
        assert!(config.validate().is_ok());
        config.initial_snake_length = 7;
        assert!(config.validate().is_err());

        // A 1x1 grid has no room for food.
        assert!(GameConfig::new(1, 1).validate().is_err());
        assert!(GameConfig::new(2, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_grids() {
        let err = GameConfig::new(usize::MAX, 2).validate().unwrap_err();
        assert!(err.to_string().contains("capped"));

        assert!(GameConfig::new(2, usize::MAX).validate().is_err());
        assert!(GameConfig::new(MAX_GRID_SIDE + 1, 10).validate().is_err());
        assert!(GameConfig::new(MAX_GRID_SIDE, MAX_GRID_SIDE).validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = GameConfig::load(Path::new("/nonexistent/console_snake.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
