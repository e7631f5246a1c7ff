//! Constants module for centralized configuration values

pub mod schedule;
pub mod trending;
