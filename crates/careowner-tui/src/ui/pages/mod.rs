//! Content renderers, one module per area of the portal.

pub mod buyers;
pub mod dashboard;
pub mod deal_prep;
pub mod deal_room;
pub mod engagement;
pub mod facilities;
pub mod financials;
pub mod messages;
pub mod offer_detail;
pub mod offers;
pub mod practice;
pub mod reviews;
