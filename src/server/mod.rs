//! Ladder backend.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - Inbound commands, maps rule violations to declined results
//! - **Service Layer** (`service/`) - Challenge state machine, registry rules, ladder math, notifications
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, notifier, scheduler handle)
//! - **Startup** (`startup`) - Tracing and database initialization
//! - **Scheduler** (`scheduler/`) - Daily maintenance sweep that auto-forfeits stale challenges
//! - **Bot** (`bot/`) - Discord gateway connection

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
