//! Chat domain module.
//!
//! Validation and normalization of website chat requests: the bounded
//! conversation window, the role whitelist, and locale-based prompt selection.

mod conversation;
mod locale;

pub use conversation::{
    admit_chat, ChatAdmission, ChatReply, ChatRole, ChatTurn, TrimmedConversation,
    MAX_CONVERSATION_TURNS, MAX_OUTPUT_TOKENS,
};
pub use locale::Locale;
