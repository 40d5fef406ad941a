//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the console chrome and the dashboard tabs. Shared UI
//! state comes from Leptos context; the session is passed in explicitly to the
//! few components that can sign out or guard a route.

pub mod audit_log;
pub mod header;
pub mod incident_alert;
pub mod navigation;
pub mod notice;
pub mod overview;
pub mod route_guard;
pub mod script_helper;
pub mod status_card;
