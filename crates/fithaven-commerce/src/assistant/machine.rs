//! Assistant conversation state machine.

use serde::{Deserialize, Serialize};

use super::{AssistantError, CannedAnswers, ChatMessage, ChatOption, CONTACT_SUPPORT_LABEL};
use crate::email::is_valid_email;
use crate::ids::MessageId;
use crate::notice::Notice;

pub const WELCOME_MESSAGE: &str = "Hi there! 👋 Welcome to FitHaven! How can I help you today?";
pub const FOLLOW_UP_PROMPT: &str = "Is there anything else I can help you with?";
pub const EMAIL_PROMPT: &str = "I'd be happy to connect you with our support team! Please provide your email address and any specific message you'd like to send:";
/// `{email}` is replaced with the submitted address.
pub const CONFIRMATION_TEMPLATE: &str =
    "Thank you! Our team will get back to you soon at {email}. We typically respond within 24 hours.";

const FIRST_MESSAGE_ID: MessageId = MessageId::new(1);

/// Where the conversation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantPhase {
    /// No history yet; the next open greets.
    NotStarted,
    /// Welcome message shown with the topic menu.
    Greeting,
    /// A canned answer was given, followed by the follow-up menu.
    AnsweredWithFollowUp,
    /// E-mail form is open.
    AwaitingEmail,
}

impl AssistantPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssistantPhase::NotStarted => "not started",
            AssistantPhase::Greeting => "greeting",
            AssistantPhase::AnsweredWithFollowUp => "answered",
            AssistantPhase::AwaitingEmail => "awaiting email",
        }
    }
}

/// Fields of the support e-mail form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailForm {
    pub email: String,
    pub message: String,
}

/// A validated request to hand the shopper over to support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportHandoff {
    pub email: String,
    pub message: Option<String>,
    pub notice: Notice,
}

/// The chat widget's state: history, window visibility, and e-mail form.
#[derive(Debug, Clone)]
pub struct ScriptedAssistant {
    answers: CannedAnswers,
    messages: Vec<ChatMessage>,
    next_id: MessageId,
    phase: AssistantPhase,
    open: bool,
    form: EmailForm,
}

impl Default for ScriptedAssistant {
    fn default() -> Self {
        Self::new(CannedAnswers::standard())
    }
}

impl ScriptedAssistant {
    pub fn new(answers: CannedAnswers) -> Self {
        Self {
            answers,
            messages: Vec::new(),
            next_id: FIRST_MESSAGE_ID,
            phase: AssistantPhase::NotStarted,
            open: false,
            form: EmailForm::default(),
        }
    }

    pub fn answers(&self) -> &CannedAnswers {
        &self.answers
    }

    /// Full history, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn phase(&self) -> AssistantPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show_email_form(&self) -> bool {
        self.phase == AssistantPhase::AwaitingEmail
    }

    /// Last typed e-mail form values.
    pub fn email_form(&self) -> &EmailForm {
        &self.form
    }

    /// Options under the most recent message, if any.
    pub fn current_options(&self) -> &[ChatOption] {
        self.messages
            .last()
            .map(ChatMessage::options)
            .unwrap_or(&[])
    }

    /// Show the window, greeting first if there is no history.
    ///
    /// Returns the messages appended by this call.
    pub fn open(&mut self) -> &[ChatMessage] {
        self.open = true;
        if !self.messages.is_empty() {
            return &[];
        }

        self.phase = AssistantPhase::Greeting;
        tracing::debug!("assistant greeting");
        self.append(vec![(
            WELCOME_MESSAGE.to_string(),
            false,
            Some(self.answers.menu()),
        )])
    }

    /// Hide the window; history and form values are kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Answer a topic from the canned table.
    pub fn select_topic(&mut self, topic: &str) -> Result<&[ChatMessage], AssistantError> {
        self.require(
            "select a topic",
            &[AssistantPhase::Greeting, AssistantPhase::AnsweredWithFollowUp],
        )?;
        let answer = self
            .answers
            .answer(topic)
            .ok_or_else(|| {
                tracing::warn!(topic, "unknown assistant topic");
                AssistantError::UnknownTopic(topic.to_string())
            })?
            .to_string();

        self.phase = AssistantPhase::AnsweredWithFollowUp;
        tracing::debug!(topic, "assistant answered");
        Ok(self.append(vec![
            (topic.to_string(), true, None),
            (answer, false, None),
            (
                FOLLOW_UP_PROMPT.to_string(),
                false,
                Some(self.answers.follow_up_menu()),
            ),
        ]))
    }

    /// Start the e-mail hand-off.
    pub fn select_contact_support(&mut self) -> Result<&[ChatMessage], AssistantError> {
        self.require("contact support", &[AssistantPhase::AnsweredWithFollowUp])?;

        self.phase = AssistantPhase::AwaitingEmail;
        tracing::debug!("assistant awaiting email");
        Ok(self.append(vec![
            (CONTACT_SUPPORT_LABEL.to_string(), true, None),
            (EMAIL_PROMPT.to_string(), false, None),
        ]))
    }

    /// Submit the e-mail form.
    ///
    /// The typed values are kept when validation fails. On success the form
    /// closes, both fields clear, and a confirmation is appended.
    pub fn submit_email(
        &mut self,
        email: &str,
        message: &str,
    ) -> Result<SupportHandoff, AssistantError> {
        self.require("submit an email", &[AssistantPhase::AwaitingEmail])?;
        self.form = EmailForm {
            email: email.to_string(),
            message: message.to_string(),
        };

        // Checked exactly as typed; surrounding spaces make it invalid.
        if email.is_empty() {
            return Err(AssistantError::EmailRequired);
        }
        if !is_valid_email(email) {
            tracing::warn!("rejected support email address");
            return Err(AssistantError::InvalidEmail(email.to_string()));
        }

        let handoff = SupportHandoff {
            email: email.to_string(),
            message: Some(message.trim())
                .filter(|m| !m.is_empty())
                .map(str::to_string),
            notice: Notice::success("Your message has been sent to our support team!"),
        };

        self.form = EmailForm::default();
        self.phase = AssistantPhase::AnsweredWithFollowUp;
        self.append(vec![(
            CONFIRMATION_TEMPLATE.replace("{email}", email),
            false,
            None,
        )]);
        tracing::info!(has_message = handoff.message.is_some(), "support hand-off sent");
        Ok(handoff)
    }

    /// Clear the conversation and hide the window.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.next_id = FIRST_MESSAGE_ID;
        self.phase = AssistantPhase::NotStarted;
        self.form = EmailForm::default();
        self.open = false;
        tracing::debug!("assistant reset");
    }

    fn require(
        &self,
        event: &'static str,
        allowed: &[AssistantPhase],
    ) -> Result<(), AssistantError> {
        if !self.open {
            return Err(AssistantError::InvalidTransition {
                event,
                phase: "closed",
            });
        }
        if !allowed.contains(&self.phase) {
            return Err(AssistantError::InvalidTransition {
                event,
                phase: self.phase.as_str(),
            });
        }
        Ok(())
    }

    /// Append a batch, reserving one consecutive id per message.
    fn append(&mut self, batch: Vec<(String, bool, Option<Vec<ChatOption>>)>) -> &[ChatMessage] {
        let start = self.messages.len();
        let mut id = self.next_id;
        for (text, is_user, options) in batch {
            self.messages.push(ChatMessage {
                id,
                text,
                is_user,
                options,
            });
            id = id.next();
        }
        self.next_id = id;
        &self.messages[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> ScriptedAssistant {
        let mut assistant = ScriptedAssistant::default();
        assistant.open();
        assistant
    }

    fn awaiting_email() -> ScriptedAssistant {
        let mut assistant = opened();
        assistant.select_topic("Payment Methods").unwrap();
        assistant.select_contact_support().unwrap();
        assistant
    }

    #[test]
    fn test_open_greets() {
        let mut assistant = ScriptedAssistant::default();
        let greeting = assistant.open().to_vec();
        assert_eq!(greeting.len(), 1);
        assert_eq!(greeting[0].id, MessageId::new(1));
        assert_eq!(greeting[0].text, WELCOME_MESSAGE);
        assert!(!greeting[0].is_user);
        assert_eq!(greeting[0].options(), CannedAnswers::standard().menu().as_slice());
        assert_eq!(assistant.phase(), AssistantPhase::Greeting);
    }

    #[test]
    fn test_reopen_keeps_history() {
        let mut assistant = opened();
        assistant.close();
        assert!(!assistant.is_open());
        assert!(assistant.open().is_empty());
        assert_eq!(assistant.messages().len(), 1);
    }

    #[test]
    fn test_select_topic_appends_triple() {
        let mut assistant = opened();
        let appended = assistant.select_topic("Shipping & Delivery").unwrap().to_vec();

        assert_eq!(appended.len(), 3);
        assert!(appended[0].is_user);
        assert_eq!(appended[0].text, "Shipping & Delivery");
        assert!(appended[1].text.starts_with("We offer free shipping"));
        assert_eq!(appended[2].text, FOLLOW_UP_PROMPT);
        assert_eq!(appended[2].options().last(), Some(&ChatOption::ContactSupport));
        assert_eq!(assistant.phase(), AssistantPhase::AnsweredWithFollowUp);
    }

    #[test]
    fn test_same_topic_twice_yields_identical_triples() {
        let mut assistant = opened();
        let first = assistant.select_topic("Returns & Warranty").unwrap().to_vec();
        let second = assistant.select_topic("Returns & Warranty").unwrap().to_vec();

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.text, b.text);
            assert_eq!(a.is_user, b.is_user);
            assert_eq!(a.options, b.options);
        }
        assert_eq!(first[0].id, MessageId::new(2));
        assert_eq!(first[2].id, MessageId::new(4));
        assert_eq!(second[0].id, MessageId::new(5));

        let ids: Vec<_> = assistant.messages().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unknown_topic_rejected() {
        let mut assistant = opened();
        let err = assistant.select_topic("Gift Cards").unwrap_err();
        assert_eq!(err, AssistantError::UnknownTopic("Gift Cards".to_string()));
        assert_eq!(assistant.messages().len(), 1);
        assert_eq!(assistant.phase(), AssistantPhase::Greeting);
    }

    #[test]
    fn test_contact_support_requires_an_answer_first() {
        let mut assistant = opened();
        assert!(matches!(
            assistant.select_contact_support(),
            Err(AssistantError::InvalidTransition { .. })
        ));
        assert_eq!(assistant.messages().len(), 1);
    }

    #[test]
    fn test_events_rejected_while_closed() {
        let mut assistant = ScriptedAssistant::default();
        assert_eq!(
            assistant.select_topic("Payment Methods"),
            Err(AssistantError::InvalidTransition {
                event: "select a topic",
                phase: "closed",
            })
        );
        assert!(assistant.messages().is_empty());
    }

    #[test]
    fn test_contact_support_opens_form() {
        let assistant = awaiting_email();
        assert!(assistant.show_email_form());
        let last_two = &assistant.messages()[assistant.messages().len() - 2..];
        assert_eq!(last_two[0].text, CONTACT_SUPPORT_LABEL);
        assert!(last_two[0].is_user);
        assert_eq!(last_two[1].text, EMAIL_PROMPT);
    }

    #[test]
    fn test_topic_rejected_while_awaiting_email() {
        let mut assistant = awaiting_email();
        let before = assistant.messages().len();
        assert!(assistant.select_topic("Payment Methods").is_err());
        assert_eq!(assistant.messages().len(), before);
        assert!(assistant.show_email_form());
    }

    #[test]
    fn test_submit_empty_email() {
        let mut assistant = awaiting_email();
        let before = assistant.messages().len();
        assert_eq!(
            assistant.submit_email("", "hello"),
            Err(AssistantError::EmailRequired)
        );
        assert_eq!(assistant.messages().len(), before);
        assert!(assistant.show_email_form());
        assert_eq!(assistant.email_form().message, "hello");
    }

    #[test]
    fn test_email_checked_as_typed() {
        let mut assistant = awaiting_email();
        assert_eq!(
            assistant.submit_email("  ", ""),
            Err(AssistantError::InvalidEmail("  ".to_string()))
        );
        assert_eq!(
            assistant.submit_email(" a@b.co", ""),
            Err(AssistantError::InvalidEmail(" a@b.co".to_string()))
        );
        assert_eq!(assistant.email_form().email, " a@b.co");
        assert_eq!(assistant.phase(), AssistantPhase::AwaitingEmail);
    }

    #[test]
    fn test_submit_invalid_email_keeps_fields() {
        let mut assistant = awaiting_email();
        let err = assistant.submit_email("a@b", "need help").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email address");
        assert!(assistant.show_email_form());
        assert_eq!(assistant.email_form().email, "a@b");
        assert_eq!(assistant.email_form().message, "need help");
    }

    #[test]
    fn test_submit_valid_email() {
        let mut assistant = awaiting_email();
        let handoff = assistant.submit_email("a@b.co", "").unwrap();

        assert_eq!(handoff.email, "a@b.co");
        assert_eq!(handoff.message, None);
        assert_eq!(
            handoff.notice.message,
            "Your message has been sent to our support team!"
        );
        assert!(!assistant.show_email_form());
        assert_eq!(assistant.email_form(), &EmailForm::default());
        assert_eq!(
            assistant.messages().last().unwrap().text,
            "Thank you! Our team will get back to you soon at a@b.co. We typically respond within 24 hours."
        );
        assert_eq!(assistant.phase(), AssistantPhase::AnsweredWithFollowUp);
    }

    #[test]
    fn test_reset_then_open_reproduces_greeting() {
        let mut assistant = ScriptedAssistant::default();
        let first = assistant.open().to_vec();
        assistant.select_topic("Customer Support").unwrap();

        assistant.reset();
        assert!(assistant.messages().is_empty());
        assert!(!assistant.is_open());
        assert!(!assistant.show_email_form());

        let again = assistant.open().to_vec();
        assert_eq!(first, again);
    }
}
