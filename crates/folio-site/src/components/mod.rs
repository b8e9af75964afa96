//! UI components for the portfolio page.

pub mod app;
pub mod nav;
pub mod sections;
pub mod chat_widget;
pub mod message_bubble;
pub mod message_input;
