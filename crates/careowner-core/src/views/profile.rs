//! Practice profile: selling status, tabs, and what buyers are allowed to see.

use std::collections::HashSet;

use tracing::{debug, info};

use super::{select_next, select_prev};
use crate::models::{Buyer, Practice};

// ============================================================================
// Buyer visibility
// ============================================================================

/// A piece of the profile that can be hidden from buyers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    OverviewTab,
    FinancialsTab,
    TeamTab,
    FacilitiesTab,
    QaTab,
    GrowthScore,
    SellingStatus,
    ValuationRange,
    KeyMetrics,
    Description,
    Highlights,
    FinancialsValuation,
    FinancialsMetrics,
    FinancialsChart,
    FinancialsBreakdown,
    TeamMembers,
    TeamStructure,
    FacilityDetails,
    FacilityImages,
    Equipment,
}

impl Widget {
    pub fn label(&self) -> &'static str {
        match self {
            Widget::OverviewTab => "Overview tab",
            Widget::FinancialsTab => "Financials tab",
            Widget::TeamTab => "Team tab",
            Widget::FacilitiesTab => "Facilities tab",
            Widget::QaTab => "Q&A tab",
            Widget::GrowthScore => "Growth score",
            Widget::SellingStatus => "Selling status",
            Widget::ValuationRange => "Valuation range",
            Widget::KeyMetrics => "Key metrics",
            Widget::Description => "Description",
            Widget::Highlights => "Highlights",
            Widget::FinancialsValuation => "Valuation",
            Widget::FinancialsMetrics => "Financial metrics",
            Widget::FinancialsChart => "Revenue chart",
            Widget::FinancialsBreakdown => "Revenue breakdown",
            Widget::TeamMembers => "Team members",
            Widget::TeamStructure => "Team structure",
            Widget::FacilityDetails => "Facility details",
            Widget::FacilityImages => "Facility images",
            Widget::Equipment => "Equipment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilitySection {
    Tabs,
    Overview,
    Financials,
    Team,
    Facilities,
}

impl VisibilitySection {
    pub const ALL: [VisibilitySection; 5] = [
        VisibilitySection::Tabs,
        VisibilitySection::Overview,
        VisibilitySection::Financials,
        VisibilitySection::Team,
        VisibilitySection::Facilities,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            VisibilitySection::Tabs => "Tabs",
            VisibilitySection::Overview => "Overview",
            VisibilitySection::Financials => "Financials",
            VisibilitySection::Team => "Team",
            VisibilitySection::Facilities => "Facilities",
        }
    }

    pub fn widgets(&self) -> &'static [Widget] {
        match self {
            VisibilitySection::Tabs => &[
                Widget::OverviewTab,
                Widget::FinancialsTab,
                Widget::TeamTab,
                Widget::FacilitiesTab,
                Widget::QaTab,
            ],
            VisibilitySection::Overview => &[
                Widget::GrowthScore,
                Widget::SellingStatus,
                Widget::ValuationRange,
                Widget::KeyMetrics,
                Widget::Description,
                Widget::Highlights,
            ],
            VisibilitySection::Financials => &[
                Widget::FinancialsValuation,
                Widget::FinancialsMetrics,
                Widget::FinancialsChart,
                Widget::FinancialsBreakdown,
            ],
            VisibilitySection::Team => &[Widget::TeamMembers, Widget::TeamStructure],
            VisibilitySection::Facilities => &[
                Widget::FacilityDetails,
                Widget::FacilityImages,
                Widget::Equipment,
            ],
        }
    }
}

/// Widgets hidden from buyers. Everything starts visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visibility {
    hidden: HashSet<Widget>,
}

impl Visibility {
    pub fn is_visible(&self, widget: Widget) -> bool {
        !self.hidden.contains(&widget)
    }

    pub fn toggle(&mut self, widget: Widget) {
        if !self.hidden.remove(&widget) {
            self.hidden.insert(widget);
        }
        debug!(?widget, visible = self.is_visible(widget), "Widget visibility toggled");
    }

    pub fn all_visible(&self, section: VisibilitySection) -> bool {
        section.widgets().iter().all(|&w| self.is_visible(w))
    }

    /// Show every widget in the section, or hide them all when all are
    /// already shown.
    pub fn toggle_section(&mut self, section: VisibilitySection) {
        let hide = self.all_visible(section);
        for &widget in section.widgets() {
            if hide {
                self.hidden.insert(widget);
            } else {
                self.hidden.remove(&widget);
            }
        }
        debug!(section = section.title(), visible = !hide, "Section visibility toggled");
    }
}

/// A row in the visibility settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Section(VisibilitySection),
    Widget(Widget),
}

pub fn settings_rows() -> Vec<SettingsRow> {
    VisibilitySection::ALL
        .iter()
        .flat_map(|&section| {
            std::iter::once(SettingsRow::Section(section))
                .chain(section.widgets().iter().map(|&w| SettingsRow::Widget(w)))
        })
        .collect()
}

// ============================================================================
// Profile screen
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Overview,
    Financials,
    Team,
    Facilities,
    Qa,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 5] = [
        ProfileTab::Overview,
        ProfileTab::Financials,
        ProfileTab::Team,
        ProfileTab::Facilities,
        ProfileTab::Qa,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ProfileTab::Overview => "Overview",
            ProfileTab::Financials => "Financials",
            ProfileTab::Team => "Team",
            ProfileTab::Facilities => "Facilities",
            ProfileTab::Qa => "Q&A",
        }
    }

    /// The tab's own visibility switch
    pub fn widget(&self) -> Widget {
        match self {
            ProfileTab::Overview => Widget::OverviewTab,
            ProfileTab::Financials => Widget::FinancialsTab,
            ProfileTab::Team => Widget::TeamTab,
            ProfileTab::Facilities => Widget::FacilitiesTab,
            ProfileTab::Qa => Widget::QaTab,
        }
    }
}

/// Whose eyes the profile is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewAs {
    #[default]
    Practice,
    /// Index into the buyer directory
    Buyer(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeProfileState {
    pub tab: ProfileTab,
    pub view_as: ViewAs,
    pub visibility: Visibility,
    /// Cursor in the settings panel, when it is open
    pub settings_cursor: Option<usize>,
}

impl PracticeProfileState {
    /// Advance the practice's selling status, wrapping after "Just Sold".
    pub fn cycle_selling_status(&self, practice: &mut Practice) {
        practice.selling_status = practice.selling_status.next();
        info!(status = practice.selling_status.label(), "Selling status changed");
    }

    /// Tabs a viewer can open. The owner sees every tab.
    pub fn tabs(&self) -> Vec<ProfileTab> {
        ProfileTab::ALL
            .iter()
            .copied()
            .filter(|t| self.shows(t.widget()))
            .collect()
    }

    pub fn shows(&self, widget: Widget) -> bool {
        match self.view_as {
            ViewAs::Practice => true,
            ViewAs::Buyer(_) => self.visibility.is_visible(widget),
        }
    }

    pub fn next_tab(&mut self) {
        self.step_tab(1);
    }

    pub fn prev_tab(&mut self) {
        self.step_tab(-1);
    }

    fn step_tab(&mut self, step: isize) {
        let tabs = self.tabs();
        if tabs.is_empty() {
            return;
        }
        let len = tabs.len() as isize;
        let current = tabs.iter().position(|t| *t == self.tab).unwrap_or(0) as isize;
        self.tab = tabs[((current + step).rem_euclid(len)) as usize];
    }

    /// Switch between the owner's view and a buyer preview, cycling the
    /// previewed buyer on each press.
    pub fn cycle_view_as(&mut self, buyer_count: usize) {
        self.view_as = match self.view_as {
            ViewAs::Practice if buyer_count > 0 => ViewAs::Buyer(0),
            ViewAs::Practice => ViewAs::Practice,
            ViewAs::Buyer(i) if i + 1 < buyer_count => ViewAs::Buyer(i + 1),
            ViewAs::Buyer(_) => ViewAs::Practice,
        };
        self.ensure_tab_visible();
        debug!(view_as = ?self.view_as, "Profile preview changed");
    }

    pub fn previewed_buyer<'a>(&self, buyers: &'a [Buyer]) -> Option<&'a Buyer> {
        match self.view_as {
            ViewAs::Practice => None,
            ViewAs::Buyer(i) => buyers.get(i),
        }
    }

    fn ensure_tab_visible(&mut self) {
        let tabs = self.tabs();
        if !tabs.contains(&self.tab) {
            if let Some(&first) = tabs.first() {
                self.tab = first;
            }
        }
    }

    pub fn toggle_settings(&mut self) {
        self.settings_cursor = match self.settings_cursor {
            Some(_) => None,
            None => Some(0),
        };
    }

    pub fn settings_next(&mut self) {
        if let Some(cursor) = self.settings_cursor.as_mut() {
            select_next(cursor, settings_rows().len());
        }
    }

    pub fn settings_prev(&mut self) {
        if let Some(cursor) = self.settings_cursor.as_mut() {
            select_prev(cursor);
        }
    }

    /// Toggle whatever row the settings cursor is on
    pub fn toggle_at_cursor(&mut self) {
        let Some(cursor) = self.settings_cursor else {
            return;
        };
        match settings_rows().get(cursor) {
            Some(SettingsRow::Section(section)) => self.visibility.toggle_section(*section),
            Some(SettingsRow::Widget(widget)) => self.visibility.toggle(*widget),
            None => {}
        }
        self.ensure_tab_visible();
    }
}
