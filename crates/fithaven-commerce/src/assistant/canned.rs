//! Canned answer table.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use super::message::{ChatOption, CONTACT_SUPPORT_LABEL};
use super::AssistantError;

/// Number of topics every table offers.
pub const TOPIC_COUNT: usize = 5;

const STANDARD_ANSWERS: [(&str, &str); TOPIC_COUNT] = [
    (
        "Product Information",
        "We offer a wide range of gym equipment including treadmills, dumbbells, resistance bands, yoga mats, and more. All our products are high-quality and designed for both home and commercial use.",
    ),
    (
        "Shipping & Delivery",
        "We offer free shipping on orders over $50. Standard delivery takes 3-5 business days, and express delivery is available for 1-2 business days with additional charges.",
    ),
    (
        "Returns & Warranty",
        "All products come with a 30-day return policy and manufacturer warranty. Defective items can be returned within 30 days for a full refund or replacement.",
    ),
    (
        "Payment Methods",
        "We accept all major credit cards, PayPal, and bank transfers. All transactions are secure and encrypted for your safety.",
    ),
    (
        "Customer Support",
        "Our customer support team is available Monday-Friday 8 AM to 8 PM, Saturday 9 AM to 6 PM, and Sunday 10 AM to 4 PM. You can reach us via phone, email, or this chat.",
    ),
];

/// A topic label and its fixed reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedAnswer {
    pub topic: String,
    pub answer: String,
}

impl CannedAnswer {
    pub fn new(topic: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            answer: answer.into(),
        }
    }
}

/// Read-only topic table shared by every assistant session.
///
/// Cloning shares the underlying entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedAnswers {
    entries: Arc<[CannedAnswer]>,
}

impl CannedAnswers {
    /// Build a table of exactly [`TOPIC_COUNT`] entries, rejecting empty,
    /// duplicate, or reserved labels.
    pub fn new(entries: Vec<CannedAnswer>) -> Result<Self, AssistantError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            let topic = entry.topic.trim();
            if topic.is_empty() {
                return Err(AssistantError::EmptyTopic);
            }
            if topic.eq_ignore_ascii_case(CONTACT_SUPPORT_LABEL) {
                return Err(AssistantError::ReservedTopic(entry.topic.clone()));
            }
            if entry.answer.trim().is_empty() {
                return Err(AssistantError::EmptyAnswer(entry.topic.clone()));
            }
            if !seen.insert(topic) {
                return Err(AssistantError::DuplicateTopic(entry.topic.clone()));
            }
        }
        if entries.len() != TOPIC_COUNT {
            return Err(AssistantError::TopicCount {
                expected: TOPIC_COUNT,
                got: entries.len(),
            });
        }

        Ok(Self {
            entries: entries.into(),
        })
    }

    /// The storefront's five standard topics, built once per process.
    pub fn standard() -> Self {
        static STANDARD: OnceLock<CannedAnswers> = OnceLock::new();
        STANDARD
            .get_or_init(|| Self {
                entries: STANDARD_ANSWERS
                    .iter()
                    .map(|(topic, answer)| CannedAnswer::new(*topic, *answer))
                    .collect(),
            })
            .clone()
    }

    /// Answer for a topic label.
    pub fn answer(&self, topic: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.topic == topic)
            .map(|e| e.answer.as_str())
    }

    /// Topic labels in table order.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.topic.as_str())
    }

    pub fn entries(&self) -> &[CannedAnswer] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Topic menu shown with the greeting.
    pub fn menu(&self) -> Vec<ChatOption> {
        self.topics()
            .map(|t| ChatOption::Topic(t.to_string()))
            .collect()
    }

    /// Topic menu plus the support option, shown after every answer.
    pub fn follow_up_menu(&self) -> Vec<ChatOption> {
        let mut options = self.menu();
        options.push(ChatOption::ContactSupport);
        options
    }
}

impl Default for CannedAnswers {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = CannedAnswers::standard();
        assert_eq!(table.len(), 5);
        assert_eq!(
            table.topics().collect::<Vec<_>>(),
            vec![
                "Product Information",
                "Shipping & Delivery",
                "Returns & Warranty",
                "Payment Methods",
                "Customer Support",
            ]
        );
        assert!(table
            .answer("Payment Methods")
            .unwrap()
            .starts_with("We accept all major credit cards"));
        assert!(table.answer("Gift Cards").is_none());
    }

    #[test]
    fn test_standard_table_is_shared() {
        let a = CannedAnswers::standard();
        let b = CannedAnswers::standard();
        assert!(Arc::ptr_eq(&a.entries, &b.entries));
    }

    #[test]
    fn test_follow_up_menu_ends_with_support() {
        let menu = CannedAnswers::standard().follow_up_menu();
        assert_eq!(menu.len(), 6);
        assert_eq!(menu.last(), Some(&ChatOption::ContactSupport));
    }

    #[test]
    fn test_rejects_bad_tables() {
        assert_eq!(
            CannedAnswers::new(vec![]),
            Err(AssistantError::TopicCount {
                expected: 5,
                got: 0
            })
        );
        assert_eq!(
            CannedAnswers::new(vec![CannedAnswer::new(" ", "x")]),
            Err(AssistantError::EmptyTopic)
        );
        assert_eq!(
            CannedAnswers::new(vec![CannedAnswer::new("Contact Support", "x")]),
            Err(AssistantError::ReservedTopic("Contact Support".to_string()))
        );
        assert_eq!(
            CannedAnswers::new(vec![
                CannedAnswer::new("Hours", "9-5"),
                CannedAnswer::new("Hours", "8-6"),
            ]),
            Err(AssistantError::DuplicateTopic("Hours".to_string()))
        );
        assert_eq!(
            CannedAnswers::new(vec![CannedAnswer::new("Hours", "")]),
            Err(AssistantError::EmptyAnswer("Hours".to_string()))
        );
    }

    fn five_topics() -> Vec<CannedAnswer> {
        (1..=5)
            .map(|n| CannedAnswer::new(format!("Topic {n}"), format!("Answer {n}")))
            .collect()
    }

    #[test]
    fn test_requires_five_topics() {
        let table = CannedAnswers::new(five_topics()).unwrap();
        assert_eq!(table.menu().len(), 5);
        assert_eq!(table.answer("Topic 3"), Some("Answer 3"));

        assert_eq!(
            CannedAnswers::new(vec![CannedAnswer::new("Only", "one")]),
            Err(AssistantError::TopicCount {
                expected: 5,
                got: 1
            })
        );

        let mut six = five_topics();
        six.push(CannedAnswer::new("Topic 6", "Answer 6"));
        assert_eq!(
            CannedAnswers::new(six),
            Err(AssistantError::TopicCount {
                expected: 5,
                got: 6
            })
        );
    }
}
