//! Content sources for the site pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` hosts the mock fetchers standing in for a backend, `cache` keeps
//! their results for the session, and `types`
//! defines the page content schema they return.

pub mod api;
pub mod cache;
pub mod types;
