use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThreadKind {
    PotentialBuyer,
    Question,
    CurrentDeal,
    PracticeStaff,
}

impl ThreadKind {
    pub fn label(&self) -> &'static str {
        match self {
            ThreadKind::PotentialBuyer => "Potential Buyer",
            ThreadKind::Question => "Question",
            ThreadKind::CurrentDeal => "Current Deal",
            ThreadKind::PracticeStaff => "Practice Staff",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(rename = "senderId")]
    pub sender_id: String,
    #[serde(rename = "senderName")]
    pub sender_name: String,
    #[serde(rename = "senderRole")]
    pub sender_role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub content: String,
    pub timestamp: NaiveDateTime,
    #[serde(rename = "isRead", default)]
    pub is_read: bool,
    #[serde(rename = "threadId")]
    pub thread_id: String,
    #[serde(rename = "buyerId", default, skip_serializing_if = "Option::is_none")]
    pub buyer_id: Option<String>,
    #[serde(rename = "buyerName", default, skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    #[serde(rename = "isQuestion", default, skip_serializing_if = "Option::is_none")]
    pub is_question: Option<bool>,
    #[serde(rename = "isAnswered", default, skip_serializing_if = "Option::is_none")]
    pub is_answered: Option<bool>,
}

impl Message {
    /// Sent by the practice owner rather than the other participant
    pub fn is_from_owner(&self) -> bool {
        self.sender_id == OWNER_SENDER_ID
    }
}

/// Sender id used for messages written by the practice owner
pub const OWNER_SENDER_ID: &str = "practice-owner";

/// A conversation with one participant. `unread_count` is carried as authored
/// and is not recomputed from the messages' read flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageThread {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ThreadKind,
    pub subject: String,
    #[serde(rename = "participantName")]
    pub participant_name: String,
    #[serde(rename = "participantRole")]
    pub participant_role: String,
    #[serde(rename = "lastMessage")]
    pub last_message: String,
    #[serde(rename = "lastMessageTime")]
    pub last_message_time: NaiveDateTime,
    #[serde(rename = "unreadCount", default)]
    pub unread_count: u32,
    #[serde(rename = "buyerId", default, skip_serializing_if = "Option::is_none")]
    pub buyer_id: Option<String>,
    #[serde(rename = "isQuestion", default)]
    pub is_question: bool,
    #[serde(rename = "isAnswered", default)]
    pub is_answered: bool,
    #[serde(default)]
    pub messages: Vec<Message>,
}
