//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to the defaults of [`GameConfig`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.outs_per_half == 0 || config.regulation_innings == 0 {
            anyhow::bail!("regulation_innings and outs_per_half must be positive");
        }
        if config.selector_sides < 2 || config.selector_sides % 2 != 0 {
            anyhow::bail!(
                "selector_sides must be an even number of at least 2, got {}",
                config.selector_sides
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config = ConfigLoader::parse("regulation_innings = 7\n").unwrap();
        assert_eq!(config.regulation_innings, 7);
        assert_eq!(config.outs_per_half, 3);
        assert_eq!(config.selector_sides, 20);
    }

    #[test]
    fn nonsensical_values_are_rejected() {
        assert!(ConfigLoader::parse("outs_per_half = 0\n").is_err());
        assert!(ConfigLoader::parse("selector_sides = 1\n").is_err());
        assert!(ConfigLoader::parse("selector_sides = 21\n").is_err());
        assert!(ConfigLoader::parse("regulation_innings = \"nine\"\n").is_err());
    }

    #[test]
    fn selector_splits_evenly_between_cards() {
        let config = ConfigLoader::parse("selector_sides = 12\n").unwrap();
        let batter = (1..=config.selector_sides)
            .filter(|&face| face <= config.batter_card_threshold())
            .count() as u32;
        assert_eq!(batter * 2, config.selector_sides);
    }
}
