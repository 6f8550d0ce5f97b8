use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SellingStatus {
    #[serde(rename = "Not for Sale")]
    NotForSale,
    #[serde(rename = "Open to Discussion")]
    OpenToDiscussion,
    #[serde(rename = "Actively Listening")]
    ActivelyListening,
    #[serde(rename = "Ready for Offers")]
    ReadyForOffers,
    #[serde(rename = "Offer in Progress")]
    OfferInProgress,
    #[serde(rename = "Just Sold")]
    JustSold,
}

impl SellingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SellingStatus::NotForSale => "Not for Sale",
            SellingStatus::OpenToDiscussion => "Open to Discussion",
            SellingStatus::ActivelyListening => "Actively Listening",
            SellingStatus::ReadyForOffers => "Ready for Offers",
            SellingStatus::OfferInProgress => "Offer in Progress",
            SellingStatus::JustSold => "Just Sold",
        }
    }

    /// Next option in the status picker (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            SellingStatus::NotForSale => SellingStatus::OpenToDiscussion,
            SellingStatus::OpenToDiscussion => SellingStatus::ActivelyListening,
            SellingStatus::ActivelyListening => SellingStatus::ReadyForOffers,
            SellingStatus::ReadyForOffers => SellingStatus::OfferInProgress,
            SellingStatus::OfferInProgress => SellingStatus::JustSold,
            SellingStatus::JustSold => SellingStatus::NotForSale,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub bio: String,
    pub age: Option<i32>,
    #[serde(default)]
    pub school: String,
    #[serde(rename = "yearsExperience", default)]
    pub years_experience: i32,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub complaints: u32,
    #[serde(rename = "professionalExperience", default)]
    pub professional_experience: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technician {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "hourlySalary")]
    pub hourly_salary: f64,
    #[serde(rename = "hoursPerWeek")]
    pub hours_per_week: u32,
    #[serde(rename = "hasHealthInsurance")]
    pub has_health_insurance: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub rating: u8,
    pub date: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewSummary {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
}

/// A reported figure and whether it came from connected accounting software
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialMetric {
    pub value: String,
    pub verified: bool,
}

/// One month of the revenue/expenses chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyFigure {
    pub month: String,
    pub revenue: u64,
    pub expenses: u64,
    /// Forecast rather than booked
    #[serde(default)]
    pub projected: bool,
}

/// Share of revenue or expenses for one line item, in percent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub label: String,
    pub percent: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Financials {
    #[serde(rename = "annualRevenue")]
    pub annual_revenue: FinancialMetric,
    pub ebitda: FinancialMetric,
    #[serde(rename = "ebitdaMargin")]
    pub ebitda_margin: FinancialMetric,
    #[serde(rename = "revenueMultiple")]
    pub revenue_multiple: FinancialMetric,
    #[serde(rename = "valuationRange")]
    pub valuation_range: FinancialMetric,
    #[serde(rename = "totalTransactions")]
    pub total_transactions: FinancialMetric,
    #[serde(rename = "averageTransaction")]
    pub average_transaction: FinancialMetric,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    #[serde(rename = "connectedAccounts", default)]
    pub connected_accounts: Vec<String>,
    #[serde(default)]
    pub monthly: Vec<MonthlyFigure>,
    #[serde(rename = "revenueBreakdown", default)]
    pub revenue_breakdown: Vec<BreakdownItem>,
    #[serde(rename = "expenseBreakdown", default)]
    pub expense_breakdown: Vec<BreakdownItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ownership {
    Owned,
    Leased,
}

impl Ownership {
    pub fn label(&self) -> &'static str {
        match self {
            Ownership::Owned => "Owned",
            Ownership::Leased => "Leased",
        }
    }
}

/// The physical facility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    #[serde(rename = "sizeInSqFt")]
    pub size_sq_ft: u32,
    pub ownership: Ownership,
    #[serde(rename = "examRooms")]
    pub exam_rooms: u32,
    /// Room left in the floor plan for more exam rooms
    #[serde(rename = "additionalExamRooms", default)]
    pub additional_exam_rooms: u32,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(rename = "servicesOffered", default)]
    pub services_offered: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(rename = "floorPlan", default)]
    pub floor_plan: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealMatchCriterion {
    pub text: String,
    #[serde(rename = "isPositive")]
    pub is_positive: bool,
}

/// The practice being sold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Practice {
    pub id: String,
    #[serde(rename = "businessName")]
    pub business_name: String,
    pub address: String,
    pub website: Option<String>,
    #[serde(rename = "yearsInBusiness")]
    pub years_in_business: u32,
    #[serde(rename = "practiceType")]
    pub practice_type: String,
    #[serde(rename = "hoursOfOperation")]
    pub hours_of_operation: String,
    #[serde(rename = "numberOfDoctors")]
    pub number_of_doctors: u32,
    #[serde(rename = "numberOfTechnicians")]
    pub number_of_technicians: u32,
    #[serde(rename = "numberOfExamRooms")]
    pub number_of_exam_rooms: u32,
    #[serde(rename = "locationType")]
    pub location_type: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(rename = "googleRating")]
    pub google_rating: f32,
    #[serde(rename = "currentValuation")]
    pub current_valuation: String,
    #[serde(rename = "growthScore")]
    pub growth_score: u8,
    #[serde(rename = "growthDescription", default)]
    pub growth_description: String,
    #[serde(rename = "dealMatchScore")]
    pub deal_match_score: u8,
    #[serde(rename = "dealMatchCriteria", default)]
    pub deal_match_criteria: Vec<DealMatchCriterion>,
    #[serde(rename = "sellingStatus")]
    pub selling_status: SellingStatus,
    pub financials: Financials,
    #[serde(default)]
    pub team: Vec<Doctor>,
    #[serde(default)]
    pub technicians: Vec<Technician>,
    pub building: Building,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(rename = "reviewSummary", default)]
    pub review_summary: ReviewSummary,
}

impl Practice {
    pub fn average_review_rating(&self) -> Option<f32> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: u32 = self.reviews.iter().map(|r| r.rating as u32).sum();
        Some(total as f32 / self.reviews.len() as f32)
    }
}

/// A suggested change that would raise the practice's sale value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub effort: String,
    pub category: String,
    #[serde(rename = "potentialValueIncrease")]
    pub potential_value_increase: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selling_status_next_wraps() {
        let mut status = SellingStatus::NotForSale;
        for _ in 0..6 {
            status = status.next();
        }
        assert_eq!(status, SellingStatus::NotForSale);
        assert_eq!(SellingStatus::ActivelyListening.next(), SellingStatus::ReadyForOffers);
    }

    #[test]
    fn test_doctor_defaults_optional_fields() {
        let doctor: Doctor =
            serde_json::from_str(r#"{"id":"d","name":"Dr. A","title":"Associate","age":null}"#).unwrap();
        assert_eq!(doctor.age, None);
        assert_eq!(doctor.years_experience, 0);
        assert!(doctor.professional_experience.is_empty());
    }
}
