use std::path::Path;

use crate::ai::heuristic::MazeWeights;
use crate::error::ConfigError;
use crate::game::maze::MazeConfig;

/// Upper bound on configured search depth. Recursion depth equals search
/// depth, so this also bounds stack usage.
pub const MAX_SEARCH_DEPTH: u32 = 7;

/// Difficulty tiers exposed to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Which move-selection algorithm drives the computer side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Minimax,
    Greedy,
    Random,
}

/// Search depth per difficulty tier, as one explicit table instead of
/// scattered literals.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchDepths {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl Default for SearchDepths {
    fn default() -> Self {
        SearchDepths {
            easy: 2,
            medium: 3,
            hard: 5,
        }
    }
}

/// Configuration for [`crate::ai::compute_ai_move`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub algorithm: Algorithm,
    pub depths: SearchDepths,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            difficulty: Difficulty::Medium,
            algorithm: Algorithm::Minimax,
            depths: SearchDepths::default(),
        }
    }
}

impl AiConfig {
    /// The search depth the configured difficulty maps to.
    pub fn search_depth(&self) -> u32 {
        match self.difficulty {
            Difficulty::Easy => self.depths.easy,
            Difficulty::Medium => self.depths.medium,
            Difficulty::Hard => self.depths.hard,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub maze: MazeConfig,
    pub weights: MazeWeights,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ai: AiConfig::default(),
            maze: MazeConfig::default(),
            weights: MazeWeights::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values. Bad values fail here, at load time,
    /// never mid-search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, depth) in [
            ("ai.depths.easy", self.ai.depths.easy),
            ("ai.depths.medium", self.ai.depths.medium),
            ("ai.depths.hard", self.ai.depths.hard),
        ] {
            if depth == 0 || depth > MAX_SEARCH_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "{name} must be in 1..={MAX_SEARCH_DEPTH}"
                )));
            }
        }

        if self.maze.width < 5 || self.maze.height < 5 {
            return Err(ConfigError::Validation(
                "maze.width and maze.height must be >= 5".into(),
            ));
        }
        if self.maze.braid_divisor == 0 {
            return Err(ConfigError::Validation(
                "maze.braid_divisor must be >= 1".into(),
            ));
        }

        for (name, weight) in [
            ("weights.low", self.weights.low),
            ("weights.med", self.weights.med),
            ("weights.high", self.weights.high),
            ("weights.exit", self.weights.exit),
            ("weights.distance_scale", self.weights.distance_scale),
        ] {
            if weight <= 0.0 {
                return Err(ConfigError::Validation(format!("{name} must be > 0")));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_default_depth_mapping() {
        let mut ai = AiConfig::default();
        ai.difficulty = Difficulty::Easy;
        assert_eq!(ai.search_depth(), 2);
        ai.difficulty = Difficulty::Medium;
        assert_eq!(ai.search_depth(), 3);
        ai.difficulty = Difficulty::Hard;
        assert_eq!(ai.search_depth(), 5);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[ai]
difficulty = "hard"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ai.difficulty, Difficulty::Hard);
        // Other fields should be defaults
        assert_eq!(config.ai.depths.hard, 5);
        assert_eq!(config.maze.width, 25);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ai.algorithm, Algorithm::Minimax);
        assert_eq!(config.maze.low_resources, 12);
    }

    #[test]
    fn test_unknown_difficulty_tag_fails_fast() {
        let toml_str = r#"
[ai]
difficulty = "nightmare"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_unknown_algorithm_tag_fails_fast() {
        let toml_str = r#"
[ai]
algorithm = "mcts"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.ai.depths.easy = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_excessive_depth() {
        let mut config = AppConfig::default();
        config.ai.depths.hard = MAX_SEARCH_DEPTH + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_tiny_maze() {
        let mut config = AppConfig::default();
        config.maze.height = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_braid_divisor() {
        let mut config = AppConfig::default();
        config.maze.braid_divisor = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_nonpositive_weight() {
        let mut config = AppConfig::default();
        config.weights.exit = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.maze.width, 25);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[maze]
width = 15
height = 11
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.maze.width, 15);
        assert_eq!(config.maze.height, 11);
        // Others are defaults
        assert_eq!(config.ai.depths.medium, 3);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ai.depths]
hard = 99
"#
        )
        .unwrap();

        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
