use crate::server::{data::team::TeamRepository, model::team::CreateTeamParams};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
