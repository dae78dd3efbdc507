//! Roster oracle implementing [`game_core::RosterOracle`].

use std::collections::HashMap;

use game_content::{League, LeagueError};
use game_core::{GameConfig, Lineup, PlayerId, RosterOracle, TeamId};

/// Roster data of one team.
#[derive(Clone, Debug)]
pub struct TeamEntry {
    pub name: String,
    pub abbreviation: String,
    pub pitcher: PlayerId,
    pub lineup: Lineup,
}

/// Oracle providing lineups, starting pitchers and display names.
#[derive(Default)]
pub struct RosterOracleImpl {
    teams: HashMap<TeamId, TeamEntry>,
    names: HashMap<PlayerId, String>,
}

impl RosterOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the rosters of every team in `league`.
    ///
    /// # Errors
    ///
    /// The league must pass [`League::validate`].
    pub fn from_league(league: &League) -> Result<Self, LeagueError> {
        league.validate()?;

        let mut oracle = Self::new();
        for team in &league.teams {
            let lineup = team
                .lineup
                .iter()
                .take(GameConfig::MAX_LINEUP)
                .map(|batter| batter.id.clone())
                .collect();
            oracle.add_team(
                team.id.clone(),
                TeamEntry {
                    name: team.name.clone(),
                    abbreviation: team.abbreviation.clone(),
                    pitcher: team.pitcher.id.clone(),
                    lineup,
                },
            );

            oracle.add_player(team.pitcher.id.clone(), team.pitcher.name.clone());
            for batter in &team.lineup {
                oracle.add_player(batter.id.clone(), batter.name.clone());
            }
        }
        Ok(oracle)
    }

    pub fn add_team(&mut self, id: TeamId, entry: TeamEntry) {
        self.teams.insert(id, entry);
    }

    pub fn add_player(&mut self, id: PlayerId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    pub fn team(&self, id: &TeamId) -> Option<&TeamEntry> {
        self.teams.get(id)
    }

    /// All team ids, sorted.
    pub fn team_ids(&self) -> Vec<TeamId> {
        let mut ids: Vec<_> = self.teams.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl RosterOracle for RosterOracleImpl {
    fn lineup(&self, team: &TeamId) -> Lineup {
        self.teams
            .get(team)
            .map(|entry| entry.lineup.clone())
            .unwrap_or_default()
    }

    fn starting_pitcher(&self, team: &TeamId) -> Option<PlayerId> {
        self.teams.get(team).map(|entry| entry.pitcher.clone())
    }

    fn player_name(&self, player: &PlayerId) -> String {
        self.names
            .get(player)
            .cloned()
            .unwrap_or_else(|| player.to_string())
    }

    fn team_abbreviation(&self, team: &TeamId) -> String {
        self.teams
            .get(team)
            .map(|entry| entry.abbreviation.clone())
            .unwrap_or_else(|| team.as_str().to_uppercase())
    }

    fn batter_at(&self, team: &TeamId, cursor: usize) -> Option<PlayerId> {
        self.teams.get(team)?.lineup.get(cursor).cloned()
    }
}
