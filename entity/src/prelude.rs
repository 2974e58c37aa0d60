pub use super::challenge::{ChallengeStatus, Entity as Challenge};
pub use super::challenge_game::Entity as ChallengeGame;
pub use super::challenge_proposed_date::Entity as ChallengeProposedDate;
pub use super::team::Entity as Team;
pub use super::team_member::Entity as TeamMember;
pub use super::team_tournament::Entity as TeamTournament;
pub use super::tournament::{Entity as Tournament, MatchFormat, TournamentStatus};
