//! Data models for the practice-sale portal.
//!
//! - `Offer`, `OfferDetail`: acquisition offers and their long-form content
//! - `Buyer`: prospective acquirer profiles
//! - `MessageThread`, `Message`: owner inbox
//! - `DealRoom`: timeline, tasks, documents and Q&A for the deal in progress
//! - `Meeting`, `Activity`, `InterestRequest`: scheduling and dashboard feed
//! - `Practice`, `Doctor`: the practice being sold and its team
//! - `DealPreparation`: sale readiness and market check results

pub mod activity;
pub mod buyer;
pub mod deal_prep;
pub mod deal_room;
pub mod interest;
pub mod meeting;
pub mod message;
pub mod offer;
pub mod offer_detail;
pub mod practice;

pub use activity::{Activity, ActivityKind};
pub use buyer::{Buyer, BuyerStatus, KeyContact};
pub use deal_prep::{
    BuyerPreferences, BuyerTypePreference, DealPreparation, Grade, InterestLevel,
    MarketCheckResponse, MarketSummary, ReadinessMetric,
};
pub use deal_room::{
    DealDetails, DealRoom, DealTask, DocumentRequest, Participant, Party, Priority, QaItem,
    QaStatus, RequestStatus, SharedDocument, StepStatus, TaskStatus, TimelineStep,
};
pub use interest::{InterestRequest, InterestStatus};
pub use meeting::{Meeting, MeetingStatus};
pub use message::{Message, MessageThread, ThreadKind, OWNER_SENDER_ID};
pub use offer::{employment_term, BuyerType, Incentive, Offer, OfferStatus};
pub use offer_detail::{CoverLetter, DealTerms, OfferDetail, OfferDocument};
pub use practice::{
    BreakdownItem, Building, DealMatchCriterion, Doctor, FinancialMetric, Financials, MonthlyFigure,
    Ownership, Practice, Recommendation, Review, ReviewSummary, SellingStatus, Technician,
};
