use crate::server::data::team_tournament::TeamTournamentRepository;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update_standing;
