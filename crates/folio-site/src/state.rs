//! Widget state shared through Dioxus context.

use std::sync::Arc;

use dioxus::prelude::*;
use folio_chat::{ChatSession, SessionHandle};

use crate::bridge::ChatHandle;

/// Chat widget state provided via Dioxus context.
#[derive(Clone, Copy)]
pub struct ChatContext {
    /// The one session of this page view.
    pub session: Signal<ChatSession>,
    pub handle: Signal<Arc<ChatHandle>>,
}

/// Lets the exchange driver mutate the signal-backed session.
#[derive(Clone, Copy)]
pub struct SessionSignal(pub Signal<ChatSession>);

impl SessionHandle for SessionSignal {
    /// Skips the update when the signal's owner scope is already gone, which
    /// happens when an exchange settles during teardown.
    fn with_mut<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R> {
        let mut signal = self.0;
        let mut session = signal.try_write().ok()?;
        Some(f(&mut *session))
    }
}
