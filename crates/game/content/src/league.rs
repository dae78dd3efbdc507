//! Team and player definitions as authored in roster files.

use std::collections::HashSet;

use game_core::{Card, CardKind, PlayerId, TeamId};

use crate::profiles::{BatterProfile, CardProfile, PitcherProfile};

/// One rostered player and the profile the player's card is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSpec<P> {
    pub id: PlayerId,
    pub name: String,
    pub profile: P,
}

impl<P: CardProfile + Copy> PlayerSpec<P> {
    pub fn card(&self) -> (PlayerId, CardKind, Card) {
        (self.id.clone(), P::KIND, self.profile.build())
    }
}

pub type BatterSpec = PlayerSpec<BatterProfile>;
pub type PitcherSpec = PlayerSpec<PitcherProfile>;

/// A team: identity, starting pitcher and batting order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamSpec {
    pub id: TeamId,
    pub name: String,
    pub abbreviation: String,
    pub pitcher: PitcherSpec,
    pub lineup: Vec<BatterSpec>,
}

/// Every team available for matchups.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct League {
    pub teams: Vec<TeamSpec>,
}

/// Authoring mistakes found by [`League::validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LeagueError {
    #[error("team '{0}' is defined more than once")]
    DuplicateTeam(TeamId),

    #[error("player '{0}' appears more than once")]
    DuplicatePlayer(PlayerId),

    #[error("team '{team}' bats {len} players, expected 1 to {max}")]
    LineupSize { team: TeamId, len: usize, max: usize },
}

impl League {
    pub fn team(&self, id: &TeamId) -> Option<&TeamSpec> {
        self.teams.iter().find(|team| &team.id == id)
    }

    /// Checks identifiers are unique and every lineup fits the batting order.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), LeagueError> {
        let mut teams = HashSet::new();
        let mut players = HashSet::new();

        for team in &self.teams {
            if !teams.insert(&team.id) {
                return Err(LeagueError::DuplicateTeam(team.id.clone()));
            }

            let len = team.lineup.len();
            if len == 0 || len > game_core::GameConfig::MAX_LINEUP {
                return Err(LeagueError::LineupSize {
                    team: team.id.clone(),
                    len,
                    max: game_core::GameConfig::MAX_LINEUP,
                });
            }

            let ids = std::iter::once(&team.pitcher.id).chain(team.lineup.iter().map(|b| &b.id));
            for id in ids {
                if !players.insert(id) {
                    return Err(LeagueError::DuplicatePlayer(id.clone()));
                }
            }
        }
        Ok(())
    }

    /// Cards of every rostered player.
    pub fn cards(&self) -> impl Iterator<Item = (PlayerId, CardKind, Card)> + '_ {
        self.teams.iter().flat_map(|team| {
            std::iter::once(team.pitcher.card()).chain(team.lineup.iter().map(BatterSpec::card))
        })
    }
}
