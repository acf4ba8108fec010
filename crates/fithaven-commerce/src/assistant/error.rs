use thiserror::Error;

/// Errors raised by the scripted assistant.
///
/// None of these change the conversation; the caller shows the message and
/// waits for the next event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// Topic label is not in the canned table.
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    /// Event not allowed in the current phase.
    #[error("Cannot {event} while {phase}")]
    InvalidTransition {
        event: &'static str,
        phase: &'static str,
    },

    #[error("Please enter your email address")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    InvalidEmail(String),

    /// Canned table does not have the fixed number of topics.
    #[error("Canned answer table needs exactly {expected} topics, got {got}")]
    TopicCount { expected: usize, got: usize },

    #[error("Canned answer topic must not be empty")]
    EmptyTopic,

    #[error("Canned answer for {0:?} must not be empty")]
    EmptyAnswer(String),

    #[error("Duplicate canned answer topic: {0}")]
    DuplicateTopic(String),

    /// Topic label collides with the support option.
    #[error("Topic label {0:?} is reserved")]
    ReservedTopic(String),
}
