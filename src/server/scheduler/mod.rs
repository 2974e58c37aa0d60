//! Background jobs.
//!
//! - `maintenance` - Daily sweep that forfeits challenges whose defender never responded

pub mod maintenance;

#[cfg(test)]
mod test;
