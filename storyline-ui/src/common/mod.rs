//! Common module containing shared types used across domains

pub mod messages;

pub use messages::UpdateResult;
