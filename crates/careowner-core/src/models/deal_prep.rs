use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

/// One graded area of sale readiness
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessMetric {
    pub title: String,
    pub grade: Grade,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyerTypePreference {
    pub label: String,
    pub preferred: bool,
}

/// What the owner is looking for in a buyer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyerPreferences {
    #[serde(rename = "buyerTypes", default)]
    pub buyer_types: Vec<BuyerTypePreference>,
    pub geographic: String,
    #[serde(rename = "dealStructure", default)]
    pub deal_structure: Vec<String>,
    pub transition: String,
    #[serde(rename = "targetClose")]
    pub target_close: String,
    #[serde(rename = "transitionSupport")]
    pub transition_support: String,
    #[serde(rename = "coreValues", default)]
    pub core_values: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestLevel {
    High,
    Medium,
    Low,
}

impl InterestLevel {
    pub fn label(&self) -> &'static str {
        match self {
            InterestLevel::High => "High",
            InterestLevel::Medium => "Medium",
            InterestLevel::Low => "Low",
        }
    }
}

/// An anonymous buyer's indicative range from a market check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketCheckResponse {
    pub id: String,
    #[serde(rename = "buyerType")]
    pub buyer_type: String,
    #[serde(rename = "offerRange")]
    pub offer_range: String,
    pub interest: InterestLevel,
    pub feedback: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSummary {
    #[serde(rename = "valuationRange")]
    pub valuation_range: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Sale readiness, buyer preferences and market check results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealPreparation {
    #[serde(rename = "readyToSell")]
    pub ready_to_sell: bool,
    #[serde(rename = "readinessSummary")]
    pub readiness_summary: String,
    #[serde(default)]
    pub readiness: Vec<ReadinessMetric>,
    pub preferences: BuyerPreferences,
    #[serde(rename = "marketSummary")]
    pub market_summary: MarketSummary,
    #[serde(rename = "marketCheck", default)]
    pub market_check: Vec<MarketCheckResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grades_order_best_first() {
        let mut grades = vec![Grade::C, Grade::A, Grade::B];
        grades.sort();
        assert_eq!(grades, vec![Grade::A, Grade::B, Grade::C]);
    }

    #[test]
    fn test_market_check_response_parses_interest() {
        let response: MarketCheckResponse = serde_json::from_str(
            r#"{"id":"1","buyerType":"Regional Chain","offerRange":"$2.6M - $3.0M",
                "interest":"Medium","feedback":"Solid."}"#,
        )
        .unwrap();
        assert_eq!(response.interest, InterestLevel::Medium);
        assert!(response.recommendations.is_empty());
    }
}
