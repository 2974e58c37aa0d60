use crate::server::{
    data::tournament::TournamentRepository,
    model::tournament::{CreateTournamentParams, TournamentRewards, TournamentRules},
};
use chrono::{Duration, Utc};
use entity::tournament::{MatchFormat, TournamentStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod list_active;
