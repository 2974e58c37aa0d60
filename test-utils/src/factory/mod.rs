//! Factory methods for creating test data.
//!
//! Factories insert ladder entities with sensible defaults so tests only spell out the fields
//! they care about. Each entity has a `*Factory` builder for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let team = factory::create_team(&db).await?;
//!     let tournament = factory::create_tournament(&db).await?;
//!     let entry = factory::create_team_tournament(&db, &team.id, &tournament.id, 1).await?;
//!
//!     // Two entries and a pending challenge between them
//!     let matchup = factory::helpers::create_matchup(&db, 2, 1).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `team` - Create teams together with their captain membership
//! - `tournament` - Create tournaments, active by default
//! - `team_tournament` - Create ladder entries
//! - `challenge` - Create challenges between ladder entries
//! - `helpers` - ID generation and multi-entity setups

pub mod challenge;
pub mod helpers;
pub mod team;
pub mod team_tournament;
pub mod tournament;

pub use challenge::create_challenge;
pub use team::create_team;
pub use team_tournament::create_team_tournament;
pub use tournament::create_tournament;
