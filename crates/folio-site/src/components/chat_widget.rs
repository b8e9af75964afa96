//! Floating assistant chat: launcher button and panel.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use folio_chat::{submit, ChatSession};

use super::message_bubble::{MessageBubble, TypingBubble};
use super::message_input::MessageInput;
use crate::bridge::ChatHandle;
use crate::content::chat;
use crate::state::{ChatContext, SessionSignal};

const SCROLL_TO_LATEST_JS: &str =
    r#"document.getElementById('chat-scroll-anchor')?.scrollIntoView({behavior:'smooth'})"#;

/// Chat widget root. Owns the session for this page view.
#[component]
pub fn ChatWidget(handle: Arc<ChatHandle>) -> Element {
    let mut ctx = use_context_provider(|| ChatContext {
        session: Signal::new(ChatSession::new(&handle.config)),
        handle: Signal::new(handle.clone()),
    });

    let is_open = ctx.session.read().is_open();

    // Tasks spawned here belong to the widget scope, so closing the panel
    // does not cancel a request in flight.
    let on_submit = move |_: ()| {
        let handle = ctx.handle.read().clone();
        spawn(async move {
            submit(SessionSignal(ctx.session), handle.transport.as_ref()).await;
        });
    };

    rsx! {
        button {
            class: "chat-launcher",
            title: chat::TITLE,
            onclick: move |_| ctx.session.write().open(),
            "💬"
        }

        if is_open {
            ChatPanel { on_submit }
        }
    }
}

/// Open panel: header, transcript, compose bar.
#[component]
fn ChatPanel(on_submit: EventHandler<()>) -> Element {
    let mut ctx = use_context::<ChatContext>();
    let session = ctx.session.read().clone();

    // Keep the newest bubble in view.
    use_effect(move || {
        let session = ctx.session.read();
        if session.is_empty() && !session.is_loading() {
            return;
        }
        drop(session);
        spawn(async move {
            // Small delay to let DOM update
            tokio::time::sleep(Duration::from_millis(50)).await;
            document::eval(SCROLL_TO_LATEST_JS);
        });
    });

    rsx! {
        div { class: "chat-panel",
            div { class: "chat-panel-header",
                h3 { class: "chat-panel-title", {chat::TITLE} }
                button {
                    class: "chat-close",
                    onclick: move |_| {
                        tracing::debug!("Chat closed, transcript cleared");
                        ctx.session.write().close();
                    },
                    "✕"
                }
            }

            div { class: "chat-transcript",
                if session.is_empty() {
                    div { class: "chat-greeting", {chat::GREETING} }
                }
                for (i, message) in session.messages().iter().enumerate() {
                    MessageBubble {
                        key: "{i}",
                        content: message.content().to_string(),
                        is_user: message.is_user(),
                    }
                }
                if session.is_loading() {
                    TypingBubble {}
                }
                div { id: "chat-scroll-anchor" }
            }

            MessageInput {
                draft: session.draft().to_string(),
                busy: session.is_loading(),
                on_draft_change: move |text: String| ctx.session.write().set_draft(text),
                on_submit: move |_| on_submit.call(()),
            }
        }
    }
}
