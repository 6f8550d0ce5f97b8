use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::deal_room::Priority;
use crate::utils::dates::stamp_format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    Offer,
    OfferUpdated,
    Message,
    Question,
    Interest,
    DocumentRequest,
    MeetingScheduled,
    SiteVisitRequest,
}

/// An entry in the dashboard's recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    #[serde(with = "stamp_format")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "buyerId", default, skip_serializing_if = "Option::is_none")]
    pub buyer_id: Option<String>,
    #[serde(rename = "buyerName", default, skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    #[serde(rename = "isUnread", default)]
    pub is_unread: bool,
    pub priority: Priority,
}
