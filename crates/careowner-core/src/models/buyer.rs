use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::offer::BuyerType;
use crate::utils::dates::long_date_format;

/// Where a buyer stands in the seller's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuyerStatus {
    OfferSubmitted,
    InDiscussion,
    InitialInterest,
    Rejected,
    Archived,
}

impl BuyerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BuyerStatus::OfferSubmitted => "Offer Submitted",
            BuyerStatus::InDiscussion => "In Discussion",
            BuyerStatus::InitialInterest => "Initial Interest",
            BuyerStatus::Rejected => "Rejected",
            BuyerStatus::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyContact {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Buyer {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub buyer_type: BuyerType,
    pub description: String,
    pub headquarters: String,
    pub founded: String,
    pub website: Option<String>,
    #[serde(rename = "totalAcquisitions")]
    pub total_acquisitions: u32,
    #[serde(rename = "recentAcquisitions", default)]
    pub recent_acquisitions: Vec<String>,
    #[serde(rename = "investmentRange")]
    pub investment_range: String,
    #[serde(rename = "preferredDealStructure")]
    pub preferred_deal_structure: String,
    #[serde(rename = "postAcquisitionModel")]
    pub post_acquisition_model: String,
    #[serde(rename = "keyContacts", default)]
    pub key_contacts: Vec<KeyContact>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub considerations: Vec<String>,
    #[serde(rename = "cultureFit")]
    pub culture_fit: u8,
    #[serde(rename = "financialStrength")]
    pub financial_strength: u8,
    #[serde(rename = "trackRecord")]
    pub track_record: u8,
    pub status: BuyerStatus,
    #[serde(rename = "lastContact", with = "long_date_format")]
    pub last_contact: NaiveDate,
}

impl Buyer {
    /// Mean of the three evaluation scores, one decimal place
    pub fn overall_score(&self) -> f32 {
        let total = self.culture_fit as f32 + self.financial_strength as f32 + self.track_record as f32;
        (total / 3.0 * 10.0).round() / 10.0
    }
}
