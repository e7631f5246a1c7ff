//! Domain modules for the Storyline UI core
//!
//! Each domain owns its state, its message type and an update function.
//! Domains are independent; no data flows between the schedule modal and the
//! trending carousel.

pub mod feedback;
pub mod schedule;
pub mod trending;
