//! Type-safe wrappers and enums for fantasy market data.

pub mod filters;
pub mod ids;
pub mod position;
pub mod time;
