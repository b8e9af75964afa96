//! Driving one submission from draft to settled transcript.
//!
//! [`submit`] takes the synchronous first half of a submission, awaits the
//! transport, then settles. The loading flag is owned by a [`SettleGuard`]
//! for the whole await, so dropping the future (cancellation, unmount, panic)
//! still clears it.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::error::ChatError;
use crate::session::{ChatSession, PendingExchange};
use crate::transport::{ChatReply, ChatTransport};

pub use crate::session::SubmitResult;

/// Shared access to the widget's session from UI-thread code.
pub trait SessionHandle: Clone {
    /// Run `f` with exclusive access to the session.
    ///
    /// Returns `None` without running `f` when the session can no longer be
    /// reached, e.g. its owner was torn down.
    fn with_mut<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R>;
}

impl SessionHandle for Rc<RefCell<ChatSession>> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R> {
        let mut session = self.try_borrow_mut().ok()?;
        Some(f(&mut *session))
    }
}

/// Owns a pending exchange until it is settled.
///
/// Dropping the guard without calling [`SettleGuard::settle`] abandons the
/// exchange, which clears the loading flag and appends nothing.
pub struct SettleGuard<H: SessionHandle> {
    handle: H,
    pending: Option<PendingExchange>,
}

impl<H: SessionHandle> SettleGuard<H> {
    pub fn new(handle: H, pending: PendingExchange) -> Self {
        Self {
            handle,
            pending: Some(pending),
        }
    }

    /// Apply the transport outcome to the session.
    ///
    /// Returns [`SubmitResult::Abandoned`] when the session is gone.
    pub fn settle(mut self, outcome: Result<ChatReply, ChatError>) -> SubmitResult {
        let Some(pending) = self.pending.take() else {
            return SubmitResult::Abandoned;
        };
        self.handle
            .with_mut(|s| s.settle(pending, outcome))
            .unwrap_or_else(|| {
                debug!("Session gone before the reply arrived");
                SubmitResult::Abandoned
            })
    }
}

impl<H: SessionHandle> Drop for SettleGuard<H> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            if self.handle.with_mut(|s| s.abandon(pending)).is_none() {
                debug!("Session gone, nothing to abandon");
            }
        }
    }
}

/// Submit the session's current draft through `transport`.
///
/// Returns [`SubmitResult::Ignored`] immediately when the draft is blank or
/// another exchange is in flight.
pub async fn submit<H, T>(handle: H, transport: &T) -> SubmitResult
where
    H: SessionHandle,
    T: ChatTransport + ?Sized,
{
    let Some(pending) = handle.with_mut(|s| s.begin_submit()).flatten() else {
        return SubmitResult::Ignored;
    };
    let message = pending.message().to_string();
    let guard = SettleGuard::new(handle, pending);

    let outcome = transport.send(&message).await;
    let result = guard.settle(outcome);
    debug!(?result, "Chat exchange settled");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Weak;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tokio::sync::oneshot;
    use tokio_test::{assert_pending, task};

    use crate::config::{DEFAULT_REPLY, FALLBACK_REPLY};
    use crate::message::ChatMessage;

    /// Answers every message the same way.
    enum FixedTransport {
        Reply(Option<&'static str>),
        Status(u16),
    }

    #[async_trait]
    impl ChatTransport for FixedTransport {
        async fn send(&self, _message: &str) -> Result<ChatReply, ChatError> {
            match self {
                FixedTransport::Reply(text) => Ok(ChatReply {
                    response: text.map(str::to_string),
                }),
                FixedTransport::Status(status) => Err(ChatError::Status { status: *status }),
            }
        }
    }

    /// Holds the reply until the test releases it.
    struct GatedTransport {
        gate: Mutex<Option<oneshot::Receiver<ChatReply>>>,
        sent: Mutex<Vec<String>>,
    }

    impl GatedTransport {
        fn new() -> (Self, oneshot::Sender<ChatReply>) {
            let (tx, rx) = oneshot::channel();
            let transport = Self {
                gate: Mutex::new(Some(rx)),
                sent: Mutex::new(Vec::new()),
            };
            (transport, tx)
        }
    }

    #[async_trait]
    impl ChatTransport for GatedTransport {
        async fn send(&self, message: &str) -> Result<ChatReply, ChatError> {
            self.sent.lock().unwrap().push(message.to_string());
            let rx = self.gate.lock().unwrap().take();
            match rx {
                Some(rx) => Ok(rx.await.unwrap_or_default()),
                None => Err(ChatError::Status { status: 429 }),
            }
        }
    }

    fn session_with_draft(draft: &str) -> Rc<RefCell<ChatSession>> {
        let mut session = ChatSession::default();
        session.open();
        session.set_draft(draft);
        Rc::new(RefCell::new(session))
    }

    #[tokio::test]
    async fn test_successful_exchange() {
        let session = session_with_draft("Merhaba");
        let transport = FixedTransport::Reply(Some("Selam!"));

        let result = submit(session.clone(), &transport).await;

        assert_eq!(result, SubmitResult::Delivered);
        let session = session.borrow();
        assert_eq!(
            session.messages(),
            &[ChatMessage::user("Merhaba"), ChatMessage::assistant("Selam!")]
        );
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_reply_without_response_field() {
        let session = session_with_draft("Test");
        let transport = FixedTransport::Reply(None);

        submit(session.clone(), &transport).await;

        let session = session.borrow();
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].content(), DEFAULT_REPLY);
    }

    #[tokio::test]
    async fn test_failed_exchange_appends_fallback() {
        folio_logging::init_testing();
        let session = session_with_draft("Hata");
        let transport = FixedTransport::Status(502);

        let result = submit(session.clone(), &transport).await;

        assert_eq!(result, SubmitResult::Failed);
        let session = session.borrow();
        assert_eq!(
            session.messages(),
            &[ChatMessage::user("Hata"), ChatMessage::assistant(FALLBACK_REPLY)]
        );
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_blank_draft_is_ignored() {
        let session = session_with_draft("   ");
        let transport = FixedTransport::Reply(Some("unused"));

        assert_eq!(submit(session.clone(), &transport).await, SubmitResult::Ignored);
        assert!(session.borrow().is_empty());
        assert!(!session.borrow().is_loading());
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_noop() {
        let session = session_with_draft("Merhaba");
        let (transport, release) = GatedTransport::new();

        let first = submit(session.clone(), &transport);
        let second = async {
            tokio::task::yield_now().await;
            assert!(session.borrow().is_loading());

            session.borrow_mut().set_draft("İkinci");
            let result = submit(session.clone(), &transport).await;
            assert_eq!(result, SubmitResult::Ignored);
            assert_eq!(session.borrow().messages().len(), 1);

            release
                .send(ChatReply {
                    response: Some("Selam!".to_string()),
                })
                .unwrap();
        };

        let (first_result, ()) = tokio::join!(first, second);

        assert_eq!(first_result, SubmitResult::Delivered);
        assert_eq!(*transport.sent.lock().unwrap(), vec!["Merhaba".to_string()]);
        let session = session.borrow();
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.draft(), "İkinci");
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_close_while_pending_discards_reply() {
        let session = session_with_draft("Merhaba");
        let (transport, release) = GatedTransport::new();

        let exchange = submit(session.clone(), &transport);
        let user = async {
            tokio::task::yield_now().await;
            session.borrow_mut().close();
            release
                .send(ChatReply {
                    response: Some("Selam!".to_string()),
                })
                .unwrap();
        };

        let (result, ()) = tokio::join!(exchange, user);

        assert_eq!(result, SubmitResult::Discarded);
        let session = session.borrow();
        assert!(session.is_empty());
        assert!(!session.is_open());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_dropped_exchange_clears_loading() {
        let session = session_with_draft("Merhaba");
        let (transport, _release) = GatedTransport::new();

        let mut exchange = task::spawn(submit(session.clone(), &transport));
        assert_pending!(exchange.poll());
        assert!(session.borrow().is_loading());

        drop(exchange);
        assert!(!session.borrow().is_loading());
        assert_eq!(session.borrow().messages().len(), 1);
    }

    /// Session reached through a weak reference, like a signal whose owner
    /// scope can be dropped while an exchange is pending.
    #[derive(Clone)]
    struct DetachedHandle(Weak<RefCell<ChatSession>>);

    impl SessionHandle for DetachedHandle {
        fn with_mut<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R> {
            self.0.upgrade()?.with_mut(f)
        }
    }

    #[test]
    fn test_settle_after_teardown_is_abandoned() {
        let session = session_with_draft("Merhaba");
        let pending = session.borrow_mut().begin_submit().unwrap();
        let guard = SettleGuard::new(DetachedHandle(Rc::downgrade(&session)), pending);
        drop(session);

        let result = guard.settle(Ok(ChatReply {
            response: Some("Selam!".to_string()),
        }));
        assert_eq!(result, SubmitResult::Abandoned);
    }

    #[test]
    fn test_dropped_exchange_after_teardown_does_not_panic() {
        let session = session_with_draft("Merhaba");
        let handle = DetachedHandle(Rc::downgrade(&session));
        let (transport, _release) = GatedTransport::new();

        let mut exchange = task::spawn(submit(handle, &transport));
        assert_pending!(exchange.poll());
        drop(session);

        drop(exchange);
    }

    #[test]
    fn test_guard_drop_while_session_borrowed_skips_update() {
        let session = session_with_draft("Merhaba");
        let pending = session.borrow_mut().begin_submit().unwrap();
        let guard = SettleGuard::new(session.clone(), pending);

        {
            let _reader = session.borrow();
            drop(guard);
        }
        assert!(session.borrow().is_loading());
    }

    #[test]
    fn test_guard_settle_consumes_pending() {
        let session = session_with_draft("Merhaba");
        let pending = session.borrow_mut().begin_submit().unwrap();
        let guard = SettleGuard::new(session.clone(), pending);

        let result = guard.settle(Ok(ChatReply {
            response: Some("Selam!".to_string()),
        }));
        assert_eq!(result, SubmitResult::Delivered);
        assert!(!session.borrow().is_loading());
        assert_eq!(session.borrow().messages().len(), 2);
    }
}
