//! SeaORM entity models for the ladder database.
//!
//! Each module maps one table. Enumerations stored as strings live next to the table that
//! owns them and are re-exported through `prelude` alongside the entities.

pub mod prelude;

pub mod challenge;
pub mod challenge_game;
pub mod challenge_proposed_date;
pub mod team;
pub mod team_member;
pub mod team_tournament;
pub mod tournament;
