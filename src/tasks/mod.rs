//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the cache.
//!
//! # Tasks
//! - Reaper: removes entries whose deadline has passed, at a fixed interval

mod reaper;

pub use reaper::spawn_reaper;
