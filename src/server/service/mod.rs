//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the repositories. They enforce the ladder
//! rules, own transaction boundaries and return domain models.
//!
//! - `ladder` - Pure tier, prestige and score rules
//! - `challenge` - Challenge state machine
//! - `team`, `tournament` - Registry operations
//! - `notification` - Outbound notification boundary

pub mod challenge;
pub mod ladder;
pub mod notification;
pub mod team;
pub mod tournament;
