//! Simulated health-assistant chat.
//!
//! A [`ChatSession`] owns one conversation, the draft input and the speech
//! adapter. Submitting text appends a user message and schedules one canned
//! assistant reply after a fixed delay.

pub mod conversation;
pub mod input;
pub mod responder;
pub mod session;

pub use conversation::Conversation;
pub use input::{DraftInput, InputController};
pub use responder::{CannedResponder, ReplySource};
pub use session::{ChatSession, ChatSettings, Update};
