//! Transcript bubbles.

use dioxus::prelude::*;

use crate::content::chat;

/// One transcript entry. Visitor messages sit on the right.
#[component]
pub fn MessageBubble(content: String, is_user: bool) -> Element {
    let bubble_class = if is_user { "chat-bubble mine" } else { "chat-bubble theirs" };

    rsx! {
        div { class: "{bubble_class}", "{content}" }
    }
}

/// Placeholder bubble shown while a reply is pending.
#[component]
pub fn TypingBubble() -> Element {
    rsx! {
        div { class: "chat-bubble theirs typing", {chat::TYPING} }
    }
}
