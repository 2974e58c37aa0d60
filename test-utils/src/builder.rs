use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Team, TeamMember};
///
/// let test = TestBuilder::new()
///     .with_table(Team)
///     .with_table(TeamMember)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite backend
    /// syntax. Tables with foreign keys should be added after their referenced tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for team registry operations.
    ///
    /// Adds, in dependency order:
    /// - Team
    /// - TeamMember
    pub fn with_team_tables(self) -> Self {
        self.with_table(Team).with_table(TeamMember)
    }

    /// Adds every table used by the ladder.
    ///
    /// Adds, in dependency order:
    /// - Team
    /// - TeamMember
    /// - Tournament
    /// - TeamTournament
    /// - Challenge
    /// - ChallengeProposedDate
    /// - ChallengeGame
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_ladder_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_ladder_tables(self) -> Self {
        self.with_team_tables()
            .with_table(Tournament)
            .with_table(TeamTournament)
            .with_table(Challenge)
            .with_table(ChallengeProposedDate)
            .with_table(ChallengeGame)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
