use super::{Controller, PlayerId, Side, TeamId};

/// The two teams of a game, their starting pitchers, and which side a human controls.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matchup {
    pub home: TeamId,
    pub away: TeamId,
    pub home_pitcher: PlayerId,
    pub away_pitcher: PlayerId,
    /// Side rolled by a human. `None` lets the automated opponent drive both sides.
    pub human_side: Option<Side>,
}

impl Matchup {
    pub fn team(&self, side: Side) -> &TeamId {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Pitcher belonging to `side` (pitches while the other side bats).
    pub fn pitcher(&self, side: Side) -> &PlayerId {
        match side {
            Side::Home => &self.home_pitcher,
            Side::Away => &self.away_pitcher,
        }
    }

    pub fn controller(&self, side: Side) -> Controller {
        if self.human_side == Some(side) {
            Controller::Human
        } else {
            Controller::Cpu
        }
    }
}

/// Batting-order cursor for each team.
///
/// Cursors cycle modulo the lineup length and wrap back to the leadoff hitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattingOrder {
    pub home: usize,
    pub away: usize,
}

impl BattingOrder {
    pub const fn cursor(&self, side: Side) -> usize {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    /// Moves `side` to the next batter. A zero-length lineup leaves the cursor untouched.
    pub fn advance(&mut self, side: Side, lineup_len: usize) {
        if lineup_len == 0 {
            return;
        }
        let cursor = match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        };
        *cursor = (*cursor + 1) % lineup_len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_to_leadoff() {
        let mut order = BattingOrder::default();
        for _ in 0..9 {
            order.advance(Side::Away, 9);
        }
        assert_eq!(order.cursor(Side::Away), 0);
        assert_eq!(order.cursor(Side::Home), 0);

        order.advance(Side::Home, 9);
        assert_eq!(order.cursor(Side::Home), 1);
    }

    #[test]
    fn controller_follows_human_side() {
        let matchup = Matchup {
            home: TeamId::from("home"),
            away: TeamId::from("away"),
            home_pitcher: PlayerId::from("hp"),
            away_pitcher: PlayerId::from("ap"),
            human_side: Some(Side::Away),
        };
        assert_eq!(matchup.controller(Side::Away), Controller::Human);
        assert_eq!(matchup.controller(Side::Home), Controller::Cpu);
        assert_eq!(matchup.pitcher(Side::Home).as_str(), "hp");
    }
}
