use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::offer::BuyerType;
use crate::utils::dates::{clock_time_format, long_date_format};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeetingStatus {
    Scheduled,
    Confirmed,
    PendingConfirmation,
    Completed,
    Cancelled,
}

impl MeetingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MeetingStatus::Scheduled => "Scheduled",
            MeetingStatus::Confirmed => "Confirmed",
            MeetingStatus::PendingConfirmation => "Pending Confirmation",
            MeetingStatus::Completed => "Completed",
            MeetingStatus::Cancelled => "Cancelled",
        }
    }

    /// Neither held yet nor called off
    pub fn is_upcoming(&self) -> bool {
        !matches!(self, MeetingStatus::Completed | MeetingStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    #[serde(rename = "buyerId")]
    pub buyer_id: String,
    #[serde(rename = "buyerName")]
    pub buyer_name: String,
    #[serde(rename = "buyerType")]
    pub buyer_type: BuyerType,
    #[serde(rename = "meetingType")]
    pub meeting_type: String,
    #[serde(with = "long_date_format")]
    pub date: NaiveDate,
    #[serde(with = "clock_time_format")]
    pub time: NaiveTime,
    pub duration: String,
    pub status: MeetingStatus,
    pub agenda: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "meetingLink", default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
}
