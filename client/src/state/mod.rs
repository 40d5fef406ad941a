//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `incidents`, `audit`, etc.) so
//! individual components can depend on small focused models. `session` is
//! the only writer of `auth`.

pub mod audit;
pub mod auth;
pub mod incidents;
pub mod scripts;
pub mod session;
pub mod ui;
