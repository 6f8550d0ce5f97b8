use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::dates::{long_date_format, opt_long_date_format};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    Complete,
    InProgress,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Complete,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Complete];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Complete => "Complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Uploaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QaStatus {
    Pending,
    Answered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    Buyer,
    Seller,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub role: String,
    pub initials: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: StepStatus,
    // Free text: a single day or a span such as "October 8 - October 30, 2025"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealTask {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "assignedTo")]
    pub assigned_to: String,
    #[serde(rename = "dueDate", with = "long_date_format")]
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedDocument {
    pub id: String,
    pub name: String,
    #[serde(rename = "uploadedBy")]
    pub uploaded_by: Party,
    #[serde(rename = "uploadedDate", with = "long_date_format")]
    pub uploaded_date: NaiveDate,
    pub category: String,
    pub size: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRequest {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "requestedBy")]
    pub requested_by: String,
    #[serde(rename = "requestedDate", with = "long_date_format")]
    pub requested_date: NaiveDate,
    #[serde(rename = "dueDate", with = "long_date_format")]
    pub due_date: NaiveDate,
    pub status: RequestStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaItem {
    pub id: String,
    pub question: String,
    #[serde(rename = "askedBy")]
    pub asked_by: String,
    #[serde(rename = "askedDate", with = "long_date_format")]
    pub asked_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(rename = "answeredBy", default, skip_serializing_if = "Option::is_none")]
    pub answered_by: Option<String>,
    #[serde(
        rename = "answeredDate",
        with = "opt_long_date_format",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub answered_date: Option<NaiveDate>,
    pub status: QaStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealDetails {
    #[serde(rename = "cashPercentage")]
    pub cash_percentage: u8,
    #[serde(rename = "earnoutPercentage")]
    pub earnout_percentage: u8,
    #[serde(rename = "employmentYears")]
    pub employment_years: u32,
    #[serde(rename = "submittedDate", with = "long_date_format")]
    pub submitted_date: NaiveDate,
    #[serde(rename = "expirationDate", with = "long_date_format")]
    pub expiration_date: NaiveDate,
    #[serde(rename = "cashAtClose")]
    pub cash_at_close: u64,
    #[serde(rename = "earnoutAmount")]
    pub earnout_amount: u64,
    #[serde(rename = "totalValue")]
    pub total_value: u64,
}

/// Shared workspace for an accepted offer on its way to closing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealRoom {
    pub id: String,
    #[serde(rename = "buyerId")]
    pub buyer_id: String,
    #[serde(rename = "buyerName")]
    pub buyer_name: String,
    #[serde(rename = "offerAmount")]
    pub offer_amount: u64,
    #[serde(rename = "estimatedClosingDate", with = "long_date_format")]
    pub estimated_closing_date: NaiveDate,
    pub status: String,
    #[serde(rename = "accessList", default)]
    pub access_list: Vec<Participant>,
    #[serde(default)]
    pub timeline: Vec<TimelineStep>,
    #[serde(default)]
    pub tasks: Vec<DealTask>,
    #[serde(default)]
    pub documents: Vec<SharedDocument>,
    #[serde(rename = "requestedDocuments", default)]
    pub requested_documents: Vec<DocumentRequest>,
    #[serde(default)]
    pub qa: Vec<QaItem>,
    #[serde(rename = "dealDetails")]
    pub deal_details: DealDetails,
}
