//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the persisted marker, `credentials` decides who may create
//! one, and `auth` is the observable snapshot pages and guards read.

pub mod auth;
pub mod credentials;
pub mod session;
