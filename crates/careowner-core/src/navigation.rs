//! Page routing for the portal.
//!
//! A page is identified by a string key (`"dashboard"`, `"offer-detail"`, ...).
//! The [`Navigator`] owns the current page plus the two pieces of transient
//! selection state: the buyer shown on `buyer-profile` and the offer shown on
//! `offer-detail`. Leaving either page clears its selection.

use tracing::debug;

use crate::models::ActivityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    PracticeProfile,
    Team,
    Facilities,
    Financials,
    Reviews,
    Recommendations,
    Documents,
    DealPreparation,
    Buyers,
    BrowseBuyers,
    Interest,
    Offers,
    DealRoom,
    Meetings,
    BuyerProfile,
    OfferDetail,
    Messages,
    Account,
    Settings,
}

impl Page {
    /// Pages listed in the sidebar, in display order
    pub const MENU: [Page; 17] = [
        Page::Dashboard,
        Page::PracticeProfile,
        Page::Team,
        Page::Facilities,
        Page::Financials,
        Page::Reviews,
        Page::Recommendations,
        Page::Documents,
        Page::DealPreparation,
        Page::Buyers,
        Page::Interest,
        Page::Offers,
        Page::DealRoom,
        Page::Meetings,
        Page::Messages,
        Page::Account,
        Page::Settings,
    ];

    pub const ALL: [Page; 20] = [
        Page::Dashboard,
        Page::PracticeProfile,
        Page::Team,
        Page::Facilities,
        Page::Financials,
        Page::Reviews,
        Page::Recommendations,
        Page::Documents,
        Page::DealPreparation,
        Page::Buyers,
        Page::BrowseBuyers,
        Page::Interest,
        Page::Offers,
        Page::DealRoom,
        Page::Meetings,
        Page::BuyerProfile,
        Page::OfferDetail,
        Page::Messages,
        Page::Account,
        Page::Settings,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::PracticeProfile => "practice-profile",
            Page::Team => "team",
            Page::Facilities => "facilities",
            Page::Financials => "financials",
            Page::Reviews => "reviews",
            Page::Recommendations => "recommendations",
            Page::Documents => "documents",
            Page::DealPreparation => "deal-preparation",
            Page::Buyers => "buyers",
            Page::BrowseBuyers => "browse-buyers",
            Page::Interest => "interest",
            Page::Offers => "offers",
            Page::DealRoom => "deal-room",
            Page::Meetings => "meetings",
            Page::BuyerProfile => "buyer-profile",
            Page::OfferDetail => "offer-detail",
            Page::Messages => "messages",
            Page::Account => "account",
            Page::Settings => "settings",
        }
    }

    /// Parse a page key. Unknown keys land on the dashboard.
    pub fn from_key(key: &str) -> Self {
        Page::ALL
            .iter()
            .copied()
            .find(|p| p.key() == key)
            .unwrap_or(Page::Dashboard)
    }

    /// Label used in breadcrumbs
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::PracticeProfile => "Practice Details",
            Page::Team => "Team",
            Page::Facilities => "Facilities",
            Page::Financials => "Financials",
            Page::Reviews => "Reviews",
            Page::Recommendations => "Recommendations",
            Page::Documents => "Documents",
            Page::DealPreparation => "Deal Preparation",
            Page::Buyers => "Buyers",
            Page::BrowseBuyers => "Browse Buyers",
            Page::Interest => "Interest",
            Page::Offers => "Offers",
            Page::DealRoom => "Deal Room",
            Page::Meetings => "Meetings",
            Page::BuyerProfile => "Buyer Profile",
            Page::OfferDetail => "Offer Details",
            Page::Messages => "Messages",
            Page::Account => "My Account",
            Page::Settings => "Settings",
        }
    }

    /// Label used in the sidebar
    pub fn menu_title(&self) -> &'static str {
        match self {
            Page::PracticeProfile => "Practice Overview",
            other => other.title(),
        }
    }

    /// The page one level up in the breadcrumb trail
    pub fn parent(&self) -> Option<Page> {
        match self {
            Page::Dashboard => None,
            Page::Team | Page::Facilities => Some(Page::PracticeProfile),
            Page::Reviews => Some(Page::Financials),
            Page::BrowseBuyers
            | Page::Interest
            | Page::Offers
            | Page::DealRoom
            | Page::Meetings
            | Page::BuyerProfile => Some(Page::Buyers),
            Page::OfferDetail => Some(Page::Offers),
            _ => Some(Page::Dashboard),
        }
    }

    /// Next sidebar page (wrapping around). Pages outside the sidebar
    /// continue from their parent's position.
    pub fn next(&self) -> Self {
        let index = self.menu_index();
        Page::MENU[(index + 1) % Page::MENU.len()]
    }

    /// Previous sidebar page (wrapping around)
    pub fn prev(&self) -> Self {
        let index = self.menu_index();
        Page::MENU[(index + Page::MENU.len() - 1) % Page::MENU.len()]
    }

    /// Position in the sidebar of this page or its nearest listed ancestor
    pub fn menu_index(&self) -> usize {
        let mut page = *self;
        loop {
            if let Some(i) = Page::MENU.iter().position(|p| *p == page) {
                return i;
            }
            match page.parent() {
                Some(parent) => page = parent,
                None => return 0,
            }
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One step of the breadcrumb trail. `target` is `None` for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crumb {
    pub label: &'static str,
    pub target: Option<Page>,
}

/// Breadcrumb trail from the dashboard down to `page`
pub fn breadcrumbs(page: Page) -> Vec<Crumb> {
    let mut trail = vec![Crumb {
        label: page.title(),
        target: None,
    }];
    let mut current = page.parent();
    while let Some(ancestor) = current {
        trail.push(Crumb {
            label: ancestor.title(),
            target: Some(ancestor),
        });
        current = ancestor.parent();
    }
    trail.reverse();
    trail
}

/// Where a dashboard activity item leads when opened
pub fn activity_target(kind: ActivityKind) -> Page {
    match kind {
        ActivityKind::Offer | ActivityKind::OfferUpdated => Page::Offers,
        ActivityKind::Message | ActivityKind::Question => Page::Messages,
        ActivityKind::Interest => Page::Interest,
        ActivityKind::DocumentRequest => Page::Documents,
        ActivityKind::MeetingScheduled | ActivityKind::SiteVisitRequest => Page::Meetings,
    }
}

/// Current page plus the selection state owned by the two detail pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    page: Page,
    selected_buyer_id: Option<String>,
    selected_offer_id: Option<String>,
}

impl Navigator {
    pub fn new(start: Page) -> Self {
        let mut nav = Self::default();
        nav.navigate(start);
        nav
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selected_buyer_id(&self) -> Option<&str> {
        self.selected_buyer_id.as_deref()
    }

    pub fn selected_offer_id(&self) -> Option<&str> {
        self.selected_offer_id.as_deref()
    }

    /// Switch pages. Leaving `buyer-profile` drops the selected buyer and
    /// leaving `offer-detail` drops the selected offer.
    pub fn navigate(&mut self, page: Page) {
        debug!(from = %self.page, to = %page, "Navigate");
        self.page = page;
        if page != Page::BuyerProfile {
            self.selected_buyer_id = None;
        }
        if page != Page::OfferDetail {
            self.selected_offer_id = None;
        }
    }

    /// Show a buyer's profile. The offer selection is cleared, as by any
    /// navigation away from `offer-detail`.
    pub fn view_buyer(&mut self, buyer_id: impl Into<String>) {
        self.selected_buyer_id = Some(buyer_id.into());
        self.navigate(Page::BuyerProfile);
    }

    pub fn view_offer(&mut self, offer_id: impl Into<String>) {
        self.selected_offer_id = Some(offer_id.into());
        self.navigate(Page::OfferDetail);
    }

    /// Go one level up the breadcrumb trail
    pub fn back(&mut self) {
        if let Some(parent) = self.page.parent() {
            self.navigate(parent);
        }
    }

    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        breadcrumbs(self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(page: Page) -> Vec<&'static str> {
        breadcrumbs(page).iter().map(|c| c.label).collect()
    }

    #[test]
    fn test_page_keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), page);
        }
    }

    #[test]
    fn test_unknown_key_is_dashboard() {
        assert_eq!(Page::from_key("pricing"), Page::Dashboard);
        assert_eq!(Page::from_key(""), Page::Dashboard);
    }

    #[test]
    fn test_breadcrumbs() {
        assert_eq!(labels(Page::Dashboard), vec!["Dashboard"]);
        assert_eq!(labels(Page::Team), vec!["Dashboard", "Practice Details", "Team"]);
        assert_eq!(labels(Page::Reviews), vec!["Dashboard", "Financials", "Reviews"]);
        assert_eq!(labels(Page::Meetings), vec!["Dashboard", "Buyers", "Meetings"]);
        assert_eq!(
            labels(Page::OfferDetail),
            vec!["Dashboard", "Buyers", "Offers", "Offer Details"]
        );
        assert_eq!(labels(Page::Account), vec!["Dashboard", "My Account"]);
    }

    #[test]
    fn test_breadcrumb_targets() {
        let crumbs = breadcrumbs(Page::OfferDetail);
        assert_eq!(crumbs[0].target, Some(Page::Dashboard));
        assert_eq!(crumbs[2].target, Some(Page::Offers));
        assert_eq!(crumbs[3].target, None);
    }

    #[test]
    fn test_view_offer_then_leave_clears_selection() {
        let mut nav = Navigator::default();
        nav.view_offer("2");
        assert_eq!(nav.page(), Page::OfferDetail);
        assert_eq!(nav.selected_offer_id(), Some("2"));

        nav.navigate(Page::Offers);
        assert_eq!(nav.selected_offer_id(), None);
    }

    #[test]
    fn test_view_buyer_then_leave_clears_selection() {
        let mut nav = Navigator::default();
        nav.view_buyer("7");
        assert_eq!(nav.page(), Page::BuyerProfile);
        assert_eq!(nav.selected_buyer_id(), Some("7"));

        nav.navigate(Page::Messages);
        assert_eq!(nav.selected_buyer_id(), None);
    }

    #[test]
    fn test_navigating_to_owning_page_keeps_selection() {
        let mut nav = Navigator::default();
        nav.view_buyer("3");
        nav.navigate(Page::BuyerProfile);
        assert_eq!(nav.selected_buyer_id(), Some("3"));
    }

    #[test]
    fn test_switching_detail_pages_clears_the_other() {
        let mut nav = Navigator::default();
        nav.view_offer("1");
        nav.view_buyer("1");
        assert_eq!(nav.selected_offer_id(), None);
        assert_eq!(nav.selected_buyer_id(), Some("1"));

        nav.view_offer("4");
        assert_eq!(nav.selected_buyer_id(), None);
        assert_eq!(nav.selected_offer_id(), Some("4"));
    }

    #[test]
    fn test_back_follows_breadcrumbs() {
        let mut nav = Navigator::default();
        nav.view_offer("1");
        nav.back();
        assert_eq!(nav.page(), Page::Offers);
        nav.back();
        assert_eq!(nav.page(), Page::Buyers);
        nav.back();
        nav.back();
        assert_eq!(nav.page(), Page::Dashboard);
    }

    #[test]
    fn test_menu_cycle() {
        assert_eq!(Page::Dashboard.next(), Page::PracticeProfile);
        assert_eq!(Page::Settings.next(), Page::Dashboard);
        assert_eq!(Page::Dashboard.prev(), Page::Settings);
        // Detail pages continue from their parent's slot
        assert_eq!(Page::OfferDetail.next(), Page::DealRoom);
        assert_eq!(Page::BrowseBuyers.next(), Page::Interest);
    }

    #[test]
    fn test_activity_targets() {
        assert_eq!(activity_target(ActivityKind::OfferUpdated), Page::Offers);
        assert_eq!(activity_target(ActivityKind::Question), Page::Messages);
        assert_eq!(activity_target(ActivityKind::DocumentRequest), Page::Documents);
        assert_eq!(activity_target(ActivityKind::SiteVisitRequest), Page::Meetings);
    }
}
