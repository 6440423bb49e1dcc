//! Scheduled background jobs.

pub mod voice_flush;
