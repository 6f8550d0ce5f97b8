//! Offer assistant chat and the respond-to-offer form.
//!
//! The assistant is scripted: a question is matched against keyword groups
//! in a fixed order and the first group that matches picks the answer, with
//! the offer's own figures filled in.

use std::time::Duration;

use tracing::{debug, info};

use crate::models::{Offer, OfferDetail};
use crate::utils::dates::long_date;
use crate::utils::format_currency;

/// How long the assistant "thinks" before answering
pub const REPLY_DELAY: Duration = Duration::from_secs(1);

pub const GREETING: &str = "Hi! I'm here to help you understand this offer and answer any \
questions about the buyer. What would you like to know?";

const DEFAULT_REPLY: &str = "I'd be happy to help you understand this offer better. You can ask me about:\n\n\
• The buyer and their background\n\
• Offer amount and deal structure\n\
• Earnout terms and conditions\n\
• Employment requirements\n\
• Non-compete clauses\n\
• Important dates and deadlines\n\
• Attached documents\n\n\
What would you like to know more about?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Buyer,
    Amount,
    Earnout,
    Employment,
    Transition,
    NonCompete,
    Expiration,
    Documents,
    Recommendation,
    NextSteps,
}

/// Checked top to bottom; the first hit wins
const TOPICS: &[(Topic, &[&str])] = &[
    (Topic::Buyer, &["buyer", "who", "company"]),
    (Topic::Amount, &["amount", "price", "money"]),
    (Topic::Earnout, &["earnout", "earn out"]),
    (Topic::Employment, &["employment", "work", "stay"]),
    (Topic::Transition, &["transition", "support"]),
    (Topic::NonCompete, &["compete", "non-compete"]),
    (Topic::Expiration, &["expire", "deadline"]),
    (Topic::Documents, &["document", "paperwork"]),
    (Topic::Recommendation, &["recommend", "should i", "accept"]),
    (Topic::NextSteps, &["next", "respond", "what do"]),
];

fn topic_for(question: &str) -> Option<Topic> {
    let lower = question.to_lowercase();
    TOPICS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(topic, _)| *topic)
}

/// The scripted answer to a question about an offer
pub fn canned_reply(question: &str, offer: &Offer, detail: &OfferDetail) -> String {
    let terms = &detail.deal_terms;
    match topic_for(question) {
        Some(Topic::Buyer) => format!(
            "{} is a {} with a strong track record in veterinary practice acquisitions. \
             Based on their profile, they focus on maintaining practice culture and team \
             continuity while providing growth resources.",
            offer.buyer_name, offer.buyer_type
        ),
        Some(Topic::Amount) => format!(
            "The total offer amount is {}. The deal structure includes {}% cash at close ({}) \
             and {}% earnout ({}).",
            format_currency(offer.offer_amount),
            terms.cash_percentage,
            format_currency(terms.cash_at_close),
            terms.earnout_percentage,
            format_currency(terms.earnout_amount)
        ),
        Some(Topic::Earnout) => format!(
            "The earnout structure is: {}. This means a portion of the total offer amount will \
             be paid based on future performance metrics.",
            terms.earnout_structure
        ),
        Some(Topic::Employment) => format!(
            "The employment term is {}. This is the period during which you would continue \
             working at the practice post-acquisition.",
            offer.employment_term()
        ),
        Some(Topic::Transition) => format!(
            "Transition support details: {}. This outlines how the buyer will help ensure a \
             smooth transition for you, your team, and your clients.",
            terms.transition_support
        ),
        Some(Topic::NonCompete) => format!(
            "The non-compete clause states: {}. This restricts your ability to open or work at \
             competing practices within a certain timeframe and geographic area.",
            terms.competition_clause
        ),
        Some(Topic::Expiration) => format!(
            "This offer expires on {}. You'll need to respond before this date to keep the \
             offer active.",
            long_date(&offer.expiration_date)
        ),
        Some(Topic::Documents) => format!(
            "{} documents have been attached to this offer, including the Letter of Intent, \
             Purchase Agreement, and Financial Statements. You can view and download them in \
             the Documents section.",
            detail.documents.len()
        ),
        Some(Topic::Recommendation) => "I can't make this decision for you, but I can help you \
             evaluate the offer. Consider factors like: the total compensation, cash vs. earnout \
             structure, employment terms, cultural fit with the buyer, and how this compares to \
             other offers. Would you like me to explain any specific aspect in more detail?"
            .to_string(),
        Some(Topic::NextSteps) => "You have several options: 1) Accept the offer as-is, \
             2) Submit a counter offer with different terms, 3) Request more time or \
             information, or 4) Decline the offer. You can use \"Respond to Offer\" to take \
             action."
            .to_string(),
        None => DEFAULT_REPLY.to_string(),
    }
}

// ============================================================================
// Chat transcript
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Conversation with the assistant about one offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantChat {
    pub offer_id: String,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    /// Replies still on their way
    pub pending: usize,
}

impl AssistantChat {
    pub fn new(offer_id: impl Into<String>) -> Self {
        Self {
            offer_id: offer_id.into(),
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                content: GREETING.to_string(),
            }],
            input: String::new(),
            pending: 0,
        }
    }

    /// Move the typed question into the transcript.
    ///
    /// Returns the question so the caller can schedule the reply, or `None`
    /// if the input was blank.
    pub fn submit(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        let question = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: question.clone(),
        });
        self.pending += 1;
        debug!(offer_id = %self.offer_id, "Assistant question submitted");
        Some(question)
    }

    pub fn receive(&mut self, reply: String) {
        self.pending = self.pending.saturating_sub(1);
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content: reply,
        });
    }

    pub fn is_thinking(&self) -> bool {
        self.pending > 0
    }
}

// ============================================================================
// Respond-to-offer form
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseChoice {
    #[default]
    Interested,
    NotInterested,
}

impl ResponseChoice {
    pub fn label(&self) -> &'static str {
        match self {
            ResponseChoice::Interested => "I'm Interested",
            ResponseChoice::NotInterested => "Not Interested",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            ResponseChoice::Interested => {
                "Let the buyer know you're interested in their offer and what next steps you'd like to take."
            }
            ResponseChoice::NotInterested => {
                "Politely decline the offer and provide any feedback that might be helpful."
            }
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            ResponseChoice::Interested => ResponseChoice::NotInterested,
            ResponseChoice::NotInterested => ResponseChoice::Interested,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferResponse {
    pub choice: ResponseChoice,
    pub message: String,
}

impl OfferResponse {
    /// Record the response and clear the message, keeping the last choice.
    pub fn send(&mut self, offer: &Offer) -> (ResponseChoice, String) {
        let message = std::mem::take(&mut self.message);
        info!(
            offer_id = %offer.id,
            buyer = %offer.buyer_name,
            choice = self.choice.label(),
            "Offer response sent"
        );
        (self.choice, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataStore;

    fn first_offer() -> (Offer, OfferDetail) {
        let store = DataStore::embedded().unwrap();
        let offer = store.offer("1").unwrap().clone();
        let detail = store.offer_detail("1").unwrap().clone();
        (offer, detail)
    }

    #[test]
    fn test_keyword_groups_in_order() {
        assert_eq!(topic_for("Who is this buyer?"), Some(Topic::Buyer));
        assert_eq!(topic_for("What's the PRICE?"), Some(Topic::Amount));
        assert_eq!(topic_for("explain the earn out"), Some(Topic::Earnout));
        assert_eq!(topic_for("how long must I stay"), Some(Topic::Employment));
        assert_eq!(topic_for("non-compete terms?"), Some(Topic::NonCompete));
        assert_eq!(topic_for("when is the deadline"), Some(Topic::Expiration));
        assert_eq!(topic_for("Should I take it?"), Some(Topic::Recommendation));
        assert_eq!(topic_for("hello"), None);
    }

    #[test]
    fn test_earlier_group_wins() {
        // "amount" and "earnout" both appear; amount is checked first
        assert_eq!(topic_for("earnout amount"), Some(Topic::Amount));
        // "company" beats "document"
        assert_eq!(topic_for("company documents"), Some(Topic::Buyer));
    }

    #[test]
    fn test_reply_uses_offer_figures() {
        let (offer, detail) = first_offer();
        let reply = canned_reply("how much money?", &offer, &detail);
        assert!(reply.contains(&format_currency(offer.offer_amount)));
        assert!(reply.contains(&format!("{}% cash", detail.deal_terms.cash_percentage)));

        let reply = canned_reply("when does it expire", &offer, &detail);
        assert!(reply.contains(&long_date(&offer.expiration_date)));

        let reply = canned_reply("list the documents", &offer, &detail);
        assert!(reply.starts_with(&detail.documents.len().to_string()));
    }

    #[test]
    fn test_default_reply() {
        let (offer, detail) = first_offer();
        assert_eq!(canned_reply("hi there", &offer, &detail), DEFAULT_REPLY);
    }

    #[test]
    fn test_chat_flow() {
        let mut chat = AssistantChat::new("1");
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].content, GREETING);

        chat.input = "   ".to_string();
        assert_eq!(chat.submit(), None);

        chat.input = "Who are they?".to_string();
        assert_eq!(chat.submit(), Some("Who are they?".to_string()));
        assert!(chat.input.is_empty());
        assert!(chat.is_thinking());

        chat.receive("answer".to_string());
        assert!(!chat.is_thinking());
        assert_eq!(chat.messages.len(), 3);
        assert_eq!(chat.messages[2].role, ChatRole::Assistant);
    }

    #[test]
    fn test_response_form() {
        let (offer, _) = first_offer();
        let mut form = OfferResponse::default();
        form.choice = form.choice.toggle();
        form.message = "Thank you for the offer.".to_string();
        let (choice, message) = form.send(&offer);
        assert_eq!(choice, ResponseChoice::NotInterested);
        assert_eq!(message, "Thank you for the offer.");
        assert!(form.message.is_empty());
    }
}
