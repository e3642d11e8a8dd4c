//! rekap-chat — the report dialog, independent of any chat transport.
//!
//! A transport adapter turns whatever it receives into an [`Inbound`] event,
//! hands it to [`Conversation::handle`] together with the sender's
//! [`SessionId`], and delivers the returned [`Reply`] values back.
//!
//! ```text
//! upload ──► sheet menu ──► number / button ──► report ──► ya / tidak
//!               ▲                                            │
//!               └──────────────────── ya ────────────────────┘
//! ```

pub mod conversation;
pub mod input;
pub mod messages;
pub mod session;

pub use conversation::{Button, Conversation, Inbound, Reply};
pub use session::{SessionId, Sessions, Stage};
