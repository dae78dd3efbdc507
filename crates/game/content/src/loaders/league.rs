//! League (teams and rosters) loader.

use std::path::Path;

use crate::league::League;
use crate::loaders::{LoadResult, read_file};

/// Loader for team rosters from RON files.
pub struct LeagueLoader;

impl LeagueLoader {
    /// Load and validate a league from a RON file.
    ///
    /// RON format: `(teams: [TeamSpec, ...])`
    pub fn load(path: &Path) -> LoadResult<League> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<League> {
        let league: League = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse league RON: {}", e))?;
        league
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid league: {}", e))?;
        Ok(league)
    }
}
