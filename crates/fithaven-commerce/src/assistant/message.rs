use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::MessageId;

/// Label of the option that starts the e-mail hand-off.
pub const CONTACT_SUPPORT_LABEL: &str = "Contact Support";

/// A quick-reply button offered under an assistant message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum ChatOption {
    /// A canned-answer topic.
    Topic(String),
    /// Hand the conversation to the support team.
    ContactSupport,
}

impl ChatOption {
    pub fn label(&self) -> &str {
        match self {
            ChatOption::Topic(label) => label,
            ChatOption::ContactSupport => CONTACT_SUPPORT_LABEL,
        }
    }
}

impl fmt::Display for ChatOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry in the chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    /// `true` for the shopper's echoes, `false` for assistant replies.
    pub is_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ChatOption>>,
}

impl ChatMessage {
    /// Options to render, empty when the message has none.
    pub fn options(&self) -> &[ChatOption] {
        self.options.as_deref().unwrap_or(&[])
    }
}
