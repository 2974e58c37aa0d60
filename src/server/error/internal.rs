use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a Discord id stored as a String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A row that was just written inside the same operation could not be read back
    #[error("{table} with id {id} missing after write")]
    MissingAfterWrite {
        /// Table the row was written to
        table: &'static str,
        /// Primary key of the missing row
        id: String,
    },
}
