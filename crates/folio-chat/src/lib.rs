//! Headless core of the portfolio chat widget.
//!
//! The widget owns one [`ChatSession`]: open flag, transcript, draft input and
//! a loading flag. A submission is split into two synchronous transitions
//! ([`ChatSession::begin_submit`] and [`ChatSession::settle`]) with the network
//! round-trip in between, driven by [`submit`].
//!
//! # Quick Start
//!
//! ```ignore
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use folio_chat::{submit, ChatConfig, ChatSession, HttpChatTransport};
//!
//! let config = ChatConfig::from_env();
//! let transport = HttpChatTransport::new(&config)?;
//! let session = Rc::new(RefCell::new(ChatSession::new(&config)));
//!
//! session.borrow_mut().open();
//! session.borrow_mut().set_draft("Merhaba");
//! submit(session.clone(), &transport).await;
//! ```
//!
//! Everything runs on one thread. At most one request is in flight, and the
//! loading flag is what enforces it.

pub mod config;
pub mod error;
pub mod exchange;
pub mod message;
pub mod session;
pub mod transport;

pub use config::{ChatConfig, DEFAULT_ENDPOINT, DEFAULT_REPLY, ENDPOINT_ENV, FALLBACK_REPLY};
pub use error::ChatError;
pub use exchange::{submit, SessionHandle, SettleGuard, SubmitResult};
pub use message::{ChatMessage, ChatRole};
pub use session::{ChatSession, PendingExchange};
pub use transport::{ChatReply, ChatRequest, ChatTransport, HttpChatTransport};
