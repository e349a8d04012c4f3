//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome (navigation, footer, spinners) and the
//! shared pieces of the gated area while reading shared state from Leptos
//! context providers.

pub mod content;
pub mod loading_spinner;
pub mod nav_bar;
pub mod protected;
pub mod robot_filter;
pub mod site_footer;
