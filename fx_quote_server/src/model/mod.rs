//! Domain models for the quote server.
//!
//! - `record` — a quote paired with the generated row id used for persistence.

pub mod record;
