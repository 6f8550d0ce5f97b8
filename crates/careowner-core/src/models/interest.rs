use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::deal_room::Priority;
use super::offer::BuyerType;
use crate::utils::dates::long_date_format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterestStatus {
    Pending,
    Responded,
    ScheduledMeeting,
    Declined,
}

impl InterestStatus {
    pub const ALL: [InterestStatus; 4] = [
        InterestStatus::Pending,
        InterestStatus::Responded,
        InterestStatus::ScheduledMeeting,
        InterestStatus::Declined,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InterestStatus::Pending => "Pending Review",
            InterestStatus::Responded => "Responded",
            InterestStatus::ScheduledMeeting => "Meeting Scheduled",
            InterestStatus::Declined => "Declined",
        }
    }
}

/// A buyer's informal request to start a conversation, ahead of any offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestRequest {
    pub id: String,
    #[serde(rename = "buyerId")]
    pub buyer_id: String,
    #[serde(rename = "buyerName")]
    pub buyer_name: String,
    #[serde(rename = "buyerType")]
    pub buyer_type: BuyerType,
    #[serde(rename = "submittedDate", with = "long_date_format")]
    pub submitted_date: NaiveDate,
    pub status: InterestStatus,
    #[serde(rename = "personalMessage")]
    pub personal_message: String,
    #[serde(rename = "whatTheyLike", default)]
    pub what_they_like: Vec<String>,
    #[serde(rename = "whyEngage")]
    pub why_engage: String,
    #[serde(default)]
    pub questions: Vec<String>,
    pub urgency: Priority,
    #[serde(rename = "preferredMeetingType")]
    pub preferred_meeting_type: String,
    pub timeline: String,
}

impl InterestRequest {
    pub fn urgency_label(&self) -> &'static str {
        match self.urgency {
            Priority::High => "High urgency",
            Priority::Medium => "Medium urgency",
            Priority::Low => "Flexible timeline",
        }
    }
}
