//! Mock backend plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the user record shared by the session core and the views,
//! and `latency` stands in for network round-trips.

pub mod latency;
pub mod types;
