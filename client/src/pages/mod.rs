//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Gated pages wrap their content in `Protected`.

pub mod about;
pub mod dashboard;
pub mod details;
pub mod fleet;
pub mod home;
pub mod login;
pub mod not_found;
pub mod product;
pub mod robots;
pub mod solution;
