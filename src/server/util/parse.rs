use chrono::{DateTime, NaiveDateTime, Utc};

use crate::server::error::{internal::InternalError, AppError};

/// Format accepted for proposed dates besides RFC 3339. Interpreted as UTC.
const PROPOSED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a u64 value from a String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(InternalError::ParseStringId)` - Failed to parse the string as a u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, InternalError> {
    value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })
}

/// Parses a date option submitted by a team.
///
/// Accepts `YYYY-MM-DD HH:MM` (UTC) or a full RFC 3339 timestamp with offset.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed instant
/// - `Err(AppError::Validation)` - Neither format matched
pub fn parse_proposed_date(raw: &str) -> Result<DateTime<Utc>, AppError> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, PROPOSED_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            AppError::Validation(format!(
                "Could not read date '{}', expected YYYY-MM-DD HH:MM",
                raw
            ))
        })
}
