use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::dates::long_date_format;
use crate::utils::format_currency;

/// Acquirer category as shown on offer and buyer records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuyerType {
    #[serde(rename = "Parent Company")]
    ParentCompany,
    #[serde(rename = "Corporate Group")]
    CorporateGroup,
    #[serde(rename = "Joint Venture")]
    JointVenture,
    #[serde(rename = "Strategic Partner")]
    StrategicPartner,
    #[serde(rename = "Private Equity")]
    PrivateEquity,
    #[serde(rename = "Individual Buyer")]
    IndividualBuyer,
}

impl BuyerType {
    pub const ALL: [BuyerType; 6] = [
        BuyerType::ParentCompany,
        BuyerType::CorporateGroup,
        BuyerType::JointVenture,
        BuyerType::StrategicPartner,
        BuyerType::PrivateEquity,
        BuyerType::IndividualBuyer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BuyerType::ParentCompany => "Parent Company",
            BuyerType::CorporateGroup => "Corporate Group",
            BuyerType::JointVenture => "Joint Venture",
            BuyerType::StrategicPartner => "Strategic Partner",
            BuyerType::PrivateEquity => "Private Equity",
            BuyerType::IndividualBuyer => "Individual Buyer",
        }
    }

    /// Badge shown in the offers table. Corporate groups badge as parent
    /// companies and strategic partners as joint ventures.
    pub fn badge_group(&self) -> &'static str {
        match self {
            BuyerType::ParentCompany | BuyerType::CorporateGroup => "Parent Company",
            BuyerType::JointVenture | BuyerType::StrategicPartner => "Joint Venture",
            BuyerType::PrivateEquity => "Private Equity",
            BuyerType::IndividualBuyer => "Individual Buyer",
        }
    }
}

impl std::fmt::Display for BuyerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OfferStatus {
    Pending,
    UnderReview,
    Accepted,
    Declined,
}

impl OfferStatus {
    /// Wire key, also the sort key for the status column
    pub fn key(&self) -> &'static str {
        match self {
            OfferStatus::Pending => "pending",
            OfferStatus::UnderReview => "under-review",
            OfferStatus::Accepted => "accepted",
            OfferStatus::Declined => "declined",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OfferStatus::Pending => "Pending Review",
            OfferStatus::UnderReview => "Under Review",
            OfferStatus::Accepted => "Accepted",
            OfferStatus::Declined => "Declined",
        }
    }

    /// Still awaiting a decision from the seller
    pub fn is_active(&self) -> bool {
        matches!(self, OfferStatus::Pending | OfferStatus::UnderReview)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, OfferStatus::Accepted | OfferStatus::Declined)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incentive {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    #[serde(rename = "buyerId")]
    pub buyer_id: String,
    #[serde(rename = "buyerName")]
    pub buyer_name: String,
    #[serde(rename = "buyerType")]
    pub buyer_type: BuyerType,
    #[serde(rename = "offerAmount")]
    pub offer_amount: u64,
    #[serde(rename = "receivedDate", with = "long_date_format")]
    pub received_date: NaiveDate,
    #[serde(rename = "expirationDate", with = "long_date_format")]
    pub expiration_date: NaiveDate,
    pub status: OfferStatus,
    #[serde(rename = "day1Valuation")]
    pub day1_valuation: u64,
    #[serde(rename = "day1Cash")]
    pub day1_cash: u64,
    #[serde(rename = "percentageBuying")]
    pub percentage_buying: u8,
    #[serde(rename = "employmentYears")]
    pub employment_years: u32,
    #[serde(default)]
    pub incentives: Vec<Incentive>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
}

impl Offer {
    pub fn amount_display(&self) -> String {
        format_currency(self.offer_amount)
    }

    pub fn day1_valuation_display(&self) -> String {
        format_currency(self.day1_valuation)
    }

    pub fn day1_cash_display(&self) -> String {
        format_currency(self.day1_cash)
    }

    /// `1 year` / `3 years`
    pub fn employment_term(&self) -> String {
        employment_term(self.employment_years)
    }

    /// Share of the headline price paid in cash on day one, rounded to a whole percent
    pub fn cash_percent(&self) -> u64 {
        if self.offer_amount == 0 {
            return 0;
        }
        (self.day1_cash * 100 + self.offer_amount / 2) / self.offer_amount
    }
}

pub fn employment_term(years: u32) -> String {
    if years == 1 {
        "1 year".to_string()
    } else {
        format!("{} years", years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Offer {
        serde_json::from_str(
            r#"{
                "id": "2",
                "buyerId": "2",
                "buyerName": "Lakeside Veterinary Group",
                "buyerType": "Joint Venture",
                "offerAmount": 3450000,
                "receivedDate": "September 28, 2025",
                "expirationDate": "October 12, 2025",
                "status": "under-review",
                "day1Valuation": 3450000,
                "day1Cash": 2415000,
                "percentageBuying": 80,
                "employmentYears": 2
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_offer_deserializes_with_defaults() {
        let offer = sample();
        assert_eq!(offer.status, OfferStatus::UnderReview);
        assert_eq!(offer.buyer_type, BuyerType::JointVenture);
        assert!(offer.incentives.is_empty());
        assert_eq!(offer.received_date, NaiveDate::from_ymd_opt(2025, 9, 28).unwrap());
    }

    #[test]
    fn test_offer_display_fields_derive_from_numbers() {
        let offer = sample();
        assert_eq!(offer.amount_display(), "$3,450,000");
        assert_eq!(offer.day1_cash_display(), "$2,415,000");
        assert_eq!(offer.employment_term(), "2 years");
        assert_eq!(offer.cash_percent(), 70);
    }

    #[test]
    fn test_employment_term_singular() {
        assert_eq!(employment_term(1), "1 year");
        assert_eq!(employment_term(4), "4 years");
    }

    #[test]
    fn test_status_groups() {
        assert!(OfferStatus::Pending.is_active());
        assert!(OfferStatus::UnderReview.is_active());
        assert!(!OfferStatus::Declined.is_active());
        assert!(OfferStatus::Accepted.is_closed());
        assert_eq!(OfferStatus::Pending.label(), "Pending Review");
    }

    #[test]
    fn test_badge_group_folds_synonyms() {
        assert_eq!(BuyerType::CorporateGroup.badge_group(), "Parent Company");
        assert_eq!(BuyerType::StrategicPartner.badge_group(), "Joint Venture");
        assert_eq!(BuyerType::PrivateEquity.badge_group(), "Private Equity");
    }
}
