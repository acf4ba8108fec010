//! Scripted support assistant.
//!
//! A finite dialogue over a fixed table of canned answers, ending in an
//! optional e-mail hand-off to the support team.

mod canned;
mod error;
mod machine;
mod message;

pub use canned::{CannedAnswer, CannedAnswers, TOPIC_COUNT};
pub use error::AssistantError;
pub use machine::{
    AssistantPhase, EmailForm, ScriptedAssistant, SupportHandoff, CONFIRMATION_TEMPLATE,
    EMAIL_PROMPT, FOLLOW_UP_PROMPT, WELCOME_MESSAGE,
};
pub use message::{ChatMessage, ChatOption, CONTACT_SUPPORT_LABEL};
