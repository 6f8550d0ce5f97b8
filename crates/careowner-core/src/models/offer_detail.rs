use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::dates::long_date_format;

/// Narrative letter that accompanies a formal offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetter {
    pub opening: String,
    #[serde(rename = "aboutPractice")]
    pub about_practice: String,
    #[serde(rename = "aboutCompany")]
    pub about_company: String,
    #[serde(rename = "whyGoodFit")]
    pub why_good_fit: String,
    pub closing: String,
}

impl CoverLetter {
    /// Sections in reading order with their headings
    pub fn sections(&self) -> [(&'static str, &str); 5] {
        [
            ("", self.opening.as_str()),
            ("About Your Practice", self.about_practice.as_str()),
            ("About Us", self.about_company.as_str()),
            ("Why We're a Good Fit", self.why_good_fit.as_str()),
            ("", self.closing.as_str()),
        ]
    }
}

/// Price structure of an offer: the cash/earnout split and the restrictive covenants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealTerms {
    #[serde(rename = "cashPercentage")]
    pub cash_percentage: u8,
    #[serde(rename = "earnoutPercentage")]
    pub earnout_percentage: u8,
    #[serde(rename = "cashAtClose")]
    pub cash_at_close: u64,
    #[serde(rename = "earnoutAmount")]
    pub earnout_amount: u64,
    #[serde(rename = "totalValue")]
    pub total_value: u64,
    #[serde(rename = "earnoutStructure")]
    pub earnout_structure: String,
    #[serde(rename = "competitionClause")]
    pub competition_clause: String,
    #[serde(rename = "transitionSupport")]
    pub transition_support: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferDocument {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: String,
    #[serde(rename = "uploadedDate", with = "long_date_format")]
    pub uploaded_date: NaiveDate,
}

/// Long-form content behind an offer, keyed by the offer id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferDetail {
    #[serde(rename = "offerId")]
    pub offer_id: String,
    #[serde(rename = "coverLetter")]
    pub cover_letter: CoverLetter,
    #[serde(rename = "dealTerms")]
    pub deal_terms: DealTerms,
    #[serde(default)]
    pub documents: Vec<OfferDocument>,
}
