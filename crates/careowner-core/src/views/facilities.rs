//! Facilities page: property details, equipment and shared media.

use crate::models::Building;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaTab {
    #[default]
    Photos,
    Videos,
    FloorPlan,
}

impl MediaTab {
    pub const ALL: [MediaTab; 3] = [MediaTab::Photos, MediaTab::Videos, MediaTab::FloorPlan];

    pub fn title(&self) -> &'static str {
        match self {
            MediaTab::Photos => "Photos",
            MediaTab::Videos => "Videos",
            MediaTab::FloorPlan => "Floor Plan",
        }
    }

    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let i = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Files shared under this tab
    pub fn files<'a>(&self, building: &'a Building) -> &'a [String] {
        match self {
            MediaTab::Photos => &building.photos,
            MediaTab::Videos => &building.videos,
            MediaTab::FloorPlan => &building.floor_plan,
        }
    }

    /// Shown when nothing has been uploaded under this tab
    pub fn empty_message(&self) -> &'static str {
        match self {
            MediaTab::Photos => "No photos uploaded yet",
            MediaTab::Videos => "No videos uploaded yet",
            MediaTab::FloorPlan => "No floor plan uploaded yet",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacilitiesState {
    pub media_tab: MediaTab,
}

impl FacilitiesState {
    pub fn next_tab(&mut self) {
        self.media_tab = self.media_tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.media_tab = self.media_tab.prev();
    }
}

/// Exam rooms today plus the room left to add more
pub fn exam_room_capacity(building: &Building) -> u32 {
    building.exam_rooms + building.additional_exam_rooms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ownership;
    use pretty_assertions::assert_eq;

    fn building() -> Building {
        Building {
            size_sq_ft: 4800,
            ownership: Ownership::Leased,
            exam_rooms: 5,
            additional_exam_rooms: 2,
            equipment: vec!["Digital X-ray system".to_string()],
            services_offered: Vec::new(),
            photos: vec!["reception.jpg".to_string()],
            videos: Vec::new(),
            floor_plan: vec!["floor-plan.pdf".to_string()],
        }
    }

    #[test]
    fn test_media_tabs_wrap_both_ways() {
        let mut state = FacilitiesState::default();
        state.prev_tab();
        assert_eq!(state.media_tab, MediaTab::FloorPlan);
        state.next_tab();
        assert_eq!(state.media_tab, MediaTab::Photos);
    }

    #[test]
    fn test_media_files_per_tab() {
        let building = building();
        assert_eq!(MediaTab::Photos.files(&building), ["reception.jpg".to_string()]);
        assert!(MediaTab::Videos.files(&building).is_empty());
        assert_eq!(MediaTab::FloorPlan.files(&building).len(), 1);
    }

    #[test]
    fn test_exam_room_capacity() {
        assert_eq!(exam_room_capacity(&building()), 7);
    }
}
