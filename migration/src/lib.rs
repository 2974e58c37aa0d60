pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_team_table;
mod m20260301_000002_create_team_member_table;
mod m20260301_000003_create_tournament_table;
mod m20260301_000004_create_team_tournament_table;
mod m20260301_000005_create_challenge_table;
mod m20260301_000006_create_challenge_proposed_date_table;
mod m20260301_000007_create_challenge_game_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_team_table::Migration),
            Box::new(m20260301_000002_create_team_member_table::Migration),
            Box::new(m20260301_000003_create_tournament_table::Migration),
            Box::new(m20260301_000004_create_team_tournament_table::Migration),
            Box::new(m20260301_000005_create_challenge_table::Migration),
            Box::new(m20260301_000006_create_challenge_proposed_date_table::Migration),
            Box::new(m20260301_000007_create_challenge_game_table::Migration),
        ]
    }
}
