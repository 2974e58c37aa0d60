//! A team's entry in a tournament ladder.

use chrono::{DateTime, Utc};

use crate::server::model::reference::Identified;

/// Ladder standing of one team in one tournament.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamTournament {
    pub id: String,
    pub team_id: String,
    pub tournament_id: String,
    /// 1 is the top tier
    pub tier: i32,
    pub prestige: i32,
    pub wins: i32,
    pub losses: i32,
    pub win_streak: i32,
    /// Team cannot be challenged before this instant
    pub protected_until: Option<DateTime<Utc>>,
    pub joined_at: DateTime<Utc>,
}

impl TeamTournament {
    pub fn from_entity(entity: entity::team_tournament::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            tournament_id: entity.tournament_id,
            tier: entity.tier,
            prestige: entity.prestige,
            wins: entity.wins,
            losses: entity.losses,
            win_streak: entity.win_streak,
            protected_until: entity.protected_until,
            joined_at: entity.joined_at,
        }
    }

    /// Whether the entry is shielded from new challenges at `now`.
    pub fn is_protected(&self, now: DateTime<Utc>) -> bool {
        self.protected_until.is_some_and(|until| until > now)
    }
}

impl Identified for TeamTournament {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One row of a tournament's standings table.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub team_name: String,
    pub entry: TeamTournament,
}
