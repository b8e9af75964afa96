//! Folio: a single-page portfolio with an embedded assistant chat.
//!
//! Re-exports the page components, static content, and chat bridge for
//! embedding in other Dioxus apps.

pub mod bridge;
pub mod components;
pub mod content;
pub mod state;

/// Page CSS for embedding in host apps.
pub const SITE_CSS: &str = include_str!("../assets/site.css");
