//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages that sign users in or out receive the session store
//! as a prop from `App`.

pub mod dashboard;
pub mod landing;
pub mod not_found;
pub mod sign_in;
pub mod sign_up;
