//! Config oracle implementation for runtime.

use game_core::{ConfigOracle, GameConfig};

/// Runtime implementation of ConfigOracle that wraps GameConfig
pub struct ConfigOracleImpl {
    config: GameConfig,
}

impl ConfigOracleImpl {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl ConfigOracle for ConfigOracleImpl {
    fn game_config(&self) -> GameConfig {
        self.config
    }
}
