//! Roster oracle: lineups, starting pitchers and display names.
use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::{PlayerId, TeamId};

/// Ordered batting lineup of one team.
pub type Lineup = ArrayVec<PlayerId, { GameConfig::MAX_LINEUP }>;

/// Read-only roster data consulted when a game starts and before each at-bat.
pub trait RosterOracle: Send + Sync {
    /// Batting order of `team`. Unknown teams yield an empty lineup.
    fn lineup(&self, team: &TeamId) -> Lineup;

    fn starting_pitcher(&self, team: &TeamId) -> Option<PlayerId>;

    /// Display name used in narration. Falls back to the identifier.
    fn player_name(&self, player: &PlayerId) -> String {
        player.to_string()
    }

    /// Short team label used in the play-by-play log.
    fn team_abbreviation(&self, team: &TeamId) -> String {
        team.as_str().to_uppercase()
    }

    /// Batter standing at `cursor` in `team`'s lineup.
    fn batter_at(&self, team: &TeamId, cursor: usize) -> Option<PlayerId> {
        self.lineup(team).get(cursor).cloned()
    }
}
