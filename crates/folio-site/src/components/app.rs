//! Root app component: the page shell plus the chat widget.

use std::sync::Arc;

use dioxus::prelude::*;
use folio_chat::ChatConfig;

use super::chat_widget::ChatWidget;
use super::nav::NavBar;
use super::sections::{About, Contact, Education, Experience, Footer, Hero, Skills};
use crate::bridge;

/// Root application component.
#[component]
pub fn App() -> Element {
    let handle = use_hook(|| match bridge::connect(ChatConfig::from_env()) {
        Ok(handle) => Some(Arc::new(handle)),
        Err(e) => {
            tracing::error!("Chat relay unavailable, hiding widget: {}", e);
            None
        }
    });

    rsx! {
        div { class: "page",
            NavBar {}
            Hero {}
            About {}
            Education {}
            Experience {}
            Skills {}
            Contact {}
            Footer {}

            if let Some(handle) = handle.clone() {
                ChatWidget { handle }
            }
        }
    }
}
