//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and are what
//! services and controllers work with. Parameter structs describe the input of a single
//! operation.

pub mod challenge;
pub mod notification;
pub mod reference;
pub mod team;
pub mod team_tournament;
pub mod tournament;
