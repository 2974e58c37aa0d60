//! Discord gateway connection.
//!
//! The bot keeps the gateway session alive and reports on connect. Its HTTP client is built
//! separately during startup and shared with the notifier, so direct messages and channel
//! posts go out without a second connection to Discord.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is requested. The ladder does not read messages or member lists.

pub mod handler;
pub mod start;
