//! Database repository layer for ladder entities.
//!
//! Repositories handle all reads and writes through SeaORM and convert entity models into
//! domain models at this boundary. Every repository is generic over `ConnectionTrait` so the
//! same code runs against the pool or inside a transaction opened by a service.

pub mod challenge;
pub mod team;
pub mod team_tournament;
pub mod tournament;
