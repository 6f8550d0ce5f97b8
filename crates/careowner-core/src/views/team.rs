//! Team roster and the add-member form.
//!
//! Two fields of a new member are derived rather than typed: the age comes
//! from the date of birth and the years of experience are read out of the
//! free-text experience lines.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use tracing::{info, warn};

use super::{clamp_selection, select_next, select_prev};
use crate::models::{Doctor, Practice};

// ============================================================================
// Derived fields
// ============================================================================

/// Whole years elapsed between a `YYYY-MM-DD` date of birth and `today`.
/// Returns `None` for an empty or unparseable date.
pub fn calculate_age(date_of_birth: &str, today: NaiveDate) -> Option<i32> {
    let dob = date_of_birth.trim();
    if dob.is_empty() {
        return None;
    }
    let birth = NaiveDate::parse_from_str(dob, "%Y-%m-%d").ok()?;

    let mut age = today.year() - birth.year();
    let month_diff = today.month() as i32 - birth.month() as i32;
    if month_diff < 0 || (month_diff == 0 && today.day() < birth.day()) {
        age -= 1;
    }
    Some(age)
}

struct ExperiencePatterns {
    years: Regex,
    range: Regex,
}

static EXPERIENCE_PATTERNS: OnceLock<Option<ExperiencePatterns>> = OnceLock::new();

fn experience_patterns() -> Option<&'static ExperiencePatterns> {
    EXPERIENCE_PATTERNS
        .get_or_init(|| {
            let build = || -> Result<ExperiencePatterns, regex::Error> {
                Ok(ExperiencePatterns {
                    years: Regex::new(r"(?i)([0-9]+)\s*years?")?,
                    range: Regex::new(r"\(([0-9]{4})-([0-9]{4})\)")?,
                })
            };
            match build() {
                Ok(patterns) => Some(patterns),
                Err(e) => {
                    warn!(error = %e, "Experience patterns failed to compile");
                    None
                }
            }
        })
        .as_ref()
}

/// Years of experience found in one free-text line: `"3 years"` counts 3,
/// `"(2015-2019)"` counts 4. When both appear the explicit year count wins.
/// A reversed range counts negative. Anything else counts zero.
fn years_in_entry(patterns: &ExperiencePatterns, entry: &str) -> i32 {
    if let Some(caps) = patterns.years.captures(entry) {
        return caps[1].parse().unwrap_or(0);
    }
    if let Some(caps) = patterns.range.captures(entry) {
        let start: i32 = caps[1].parse().unwrap_or(0);
        let end: i32 = caps[2].parse().unwrap_or(0);
        return end - start;
    }
    0
}

/// Total years across all experience lines
pub fn calculate_years_of_experience<S: AsRef<str>>(entries: &[S]) -> i32 {
    let Some(patterns) = experience_patterns() else {
        return 0;
    };
    entries
        .iter()
        .map(|e| years_in_entry(patterns, e.as_ref()))
        .fold(0i32, i32::saturating_add)
}

// ============================================================================
// Add-member form
// ============================================================================

/// Editable fields of the add-member form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    Name,
    Title,
    DateOfBirth,
    School,
    License,
    Bio,
    Experience(usize),
}

impl MemberField {
    pub fn label(&self) -> String {
        match self {
            MemberField::Name => "Name".to_string(),
            MemberField::Title => "Title".to_string(),
            MemberField::DateOfBirth => "Date of Birth (YYYY-MM-DD)".to_string(),
            MemberField::School => "School".to_string(),
            MemberField::License => "License".to_string(),
            MemberField::Bio => "Bio".to_string(),
            MemberField::Experience(i) => format!("Experience {}", i + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDraft {
    pub name: String,
    pub title: String,
    pub date_of_birth: String,
    pub school: String,
    pub license: String,
    pub bio: String,
    pub age: Option<i32>,
    pub years_experience: Option<i32>,
    pub complaints: u32,
    pub professional_experience: Vec<String>,
}

impl Default for MemberDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            date_of_birth: String::new(),
            school: String::new(),
            license: String::new(),
            bio: String::new(),
            age: None,
            years_experience: None,
            complaints: 0,
            professional_experience: vec![String::new()],
        }
    }
}

impl MemberDraft {
    /// Every field in tab order, one per experience line
    pub fn fields(&self) -> Vec<MemberField> {
        let mut fields = vec![
            MemberField::Name,
            MemberField::Title,
            MemberField::DateOfBirth,
            MemberField::School,
            MemberField::License,
            MemberField::Bio,
        ];
        fields.extend((0..self.professional_experience.len()).map(MemberField::Experience));
        fields
    }

    pub fn text(&self, field: MemberField) -> &str {
        match field {
            MemberField::Name => &self.name,
            MemberField::Title => &self.title,
            MemberField::DateOfBirth => &self.date_of_birth,
            MemberField::School => &self.school,
            MemberField::License => &self.license,
            MemberField::Bio => &self.bio,
            MemberField::Experience(i) => self
                .professional_experience
                .get(i)
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    /// Replace a field's text, recomputing whichever derived value depends on it.
    pub fn set_text(&mut self, field: MemberField, value: String, today: NaiveDate) {
        match field {
            MemberField::Name => self.name = value,
            MemberField::Title => self.title = value,
            MemberField::DateOfBirth => self.set_date_of_birth(value, today),
            MemberField::School => self.school = value,
            MemberField::License => self.license = value,
            MemberField::Bio => self.bio = value,
            MemberField::Experience(i) => self.set_experience(i, value),
        }
    }

    pub fn push_char(&mut self, field: MemberField, c: char, today: NaiveDate) {
        let mut value = self.text(field).to_string();
        value.push(c);
        self.set_text(field, value, today);
    }

    pub fn pop_char(&mut self, field: MemberField, today: NaiveDate) {
        let mut value = self.text(field).to_string();
        value.pop();
        self.set_text(field, value, today);
    }

    pub fn set_date_of_birth(&mut self, dob: String, today: NaiveDate) {
        self.age = calculate_age(&dob, today);
        self.date_of_birth = dob;
    }

    pub fn set_experience(&mut self, index: usize, value: String) {
        if let Some(entry) = self.professional_experience.get_mut(index) {
            *entry = value;
            self.years_experience = Some(calculate_years_of_experience(&self.professional_experience));
        }
    }

    pub fn add_experience_field(&mut self) {
        self.professional_experience.push(String::new());
    }

    pub fn remove_experience_field(&mut self, index: usize) {
        if self.professional_experience.len() > 1 && index < self.professional_experience.len() {
            self.professional_experience.remove(index);
            self.years_experience = Some(calculate_years_of_experience(&self.professional_experience));
        }
    }

    pub fn can_save(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn into_doctor(self, id: String) -> Doctor {
        Doctor {
            id,
            name: self.name.trim().to_string(),
            title: self.title.trim().to_string(),
            bio: self.bio,
            age: self.age,
            school: self.school,
            years_experience: self.years_experience.unwrap_or(0),
            license: self.license,
            complaints: self.complaints,
            professional_experience: self
                .professional_experience
                .into_iter()
                .filter(|e| !e.trim().is_empty())
                .collect(),
        }
    }
}

// ============================================================================
// Screen state
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamState {
    pub selection: usize,
    pub form: Option<MemberDraft>,
    pub form_field: usize,
}

impl TeamState {
    pub fn open_form(&mut self) {
        self.form = Some(MemberDraft::default());
        self.form_field = 0;
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    pub fn focused_field(&self) -> Option<MemberField> {
        let form = self.form.as_ref()?;
        let fields = form.fields();
        fields.get(clamp_selection(self.form_field, fields.len())).copied()
    }

    pub fn next_field(&mut self) {
        if let Some(form) = &self.form {
            self.form_field = (self.form_field + 1) % form.fields().len();
        }
    }

    pub fn prev_field(&mut self) {
        if let Some(form) = &self.form {
            let len = form.fields().len();
            self.form_field = (self.form_field + len - 1) % len;
        }
    }

    /// Add an experience line and move focus to it
    pub fn add_experience_field(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.add_experience_field();
            self.form_field = form.fields().len() - 1;
        }
    }

    /// Append the drafted member to the team and reset the form.
    /// Returns false (keeping the form open) when the draft has no name.
    pub fn save_member(&mut self, practice: &mut Practice) -> bool {
        let Some(form) = self.form.take() else {
            return false;
        };
        if !form.can_save() {
            self.form = Some(form);
            return false;
        }
        let id = format!("doc-{}", practice.team.len() + 1);
        let doctor = form.into_doctor(id);
        info!(name = %doctor.name, years = doctor.years_experience, "Team member added");
        practice.team.push(doctor);
        practice.number_of_doctors = practice.team.len() as u32;
        self.form_field = 0;
        true
    }

    pub fn select_next(&mut self, len: usize) {
        select_next(&mut self.selection, len);
    }

    pub fn select_prev(&mut self) {
        select_prev(&mut self.selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataStore;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -------------------------------------------------------------------------
    // calculate_age
    // -------------------------------------------------------------------------

    #[test]
    fn test_age_after_birthday() {
        assert_eq!(calculate_age("2000-01-01", ymd(2025, 6, 15)), Some(25));
    }

    #[test]
    fn test_age_birthday_not_yet_reached() {
        // Later month
        assert_eq!(calculate_age("2000-09-30", ymd(2025, 6, 15)), Some(24));
        // Same month, later day
        assert_eq!(calculate_age("2000-06-20", ymd(2025, 6, 15)), Some(24));
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(calculate_age("2000-01-01", ymd(2025, 1, 1)), Some(25));
        assert_eq!(calculate_age("2000-06-15", ymd(2025, 6, 15)), Some(25));
    }

    #[test]
    fn test_age_empty_or_invalid() {
        assert_eq!(calculate_age("", ymd(2025, 6, 15)), None);
        assert_eq!(calculate_age("   ", ymd(2025, 6, 15)), None);
        assert_eq!(calculate_age("2000-13-01", ymd(2025, 6, 15)), None);
        assert_eq!(calculate_age("June 1 2000", ymd(2025, 6, 15)), None);
    }

    // -------------------------------------------------------------------------
    // calculate_years_of_experience
    // -------------------------------------------------------------------------

    #[test]
    fn test_years_from_count_and_range() {
        assert_eq!(
            calculate_years_of_experience(&["Associate (3 years)", "Lead (2015-2019)"]),
            7
        );
    }

    #[test]
    fn test_years_patterns() {
        assert_eq!(calculate_years_of_experience(&["Resident, 1 year"]), 1);
        assert_eq!(calculate_years_of_experience(&["Surgeon (12 YEARS)"]), 12);
        assert_eq!(calculate_years_of_experience(&["Surgeon 4years"]), 4);
        assert_eq!(calculate_years_of_experience(&["Intern (2018-2019)"]), 1);
    }

    #[test]
    fn test_years_unparseable_counts_zero() {
        assert_eq!(calculate_years_of_experience(&["", "Volunteer", "2015-2019"]), 0);
        let empty: [&str; 0] = [];
        assert_eq!(calculate_years_of_experience(&empty), 0);
    }

    #[test]
    fn test_years_count_wins_over_range() {
        assert_eq!(calculate_years_of_experience(&["Partner (2010-2020), 6 years"]), 6);
    }

    #[test]
    fn test_years_reversed_range_counts_negative() {
        assert_eq!(calculate_years_of_experience(&["Odd (2020-2015)"]), -5);
        assert_eq!(
            calculate_years_of_experience(&["A (3 years)", "B (2020-2015)"]),
            -2
        );
    }

    #[test]
    fn test_years_ignore_non_ascii_digits() {
        // Arabic-Indic three is not a year count, so the range still applies
        assert_eq!(
            calculate_years_of_experience(&["Lead (2015-2019) \u{0663} years"]),
            4
        );
        assert_eq!(calculate_years_of_experience(&["\u{0663} years"]), 0);
    }

    #[test]
    fn test_seed_team_experience_matches_lines() {
        let store = DataStore::embedded().unwrap();
        for doctor in &store.practice.team {
            assert_eq!(
                calculate_years_of_experience(&doctor.professional_experience),
                doctor.years_experience,
                "{}",
                doctor.name
            );
        }
    }

    // -------------------------------------------------------------------------
    // MemberDraft
    // -------------------------------------------------------------------------

    #[test]
    fn test_draft_recomputes_age_while_typing() {
        let today = ymd(2025, 6, 15);
        let mut draft = MemberDraft::default();
        for c in "1990-07-0".chars() {
            draft.push_char(MemberField::DateOfBirth, c, today);
        }
        assert_eq!(draft.age, None);
        draft.push_char(MemberField::DateOfBirth, '1', today);
        assert_eq!(draft.age, Some(34));
        draft.pop_char(MemberField::DateOfBirth, today);
        assert_eq!(draft.age, None);
    }

    #[test]
    fn test_draft_recomputes_years_on_experience_edits() {
        let today = ymd(2025, 6, 15);
        let mut draft = MemberDraft::default();
        assert_eq!(draft.years_experience, None);
        draft.set_text(MemberField::Experience(0), "Associate (3 years)".into(), today);
        assert_eq!(draft.years_experience, Some(3));

        draft.add_experience_field();
        draft.set_experience(1, "Lead (2015-2019)".into());
        assert_eq!(draft.years_experience, Some(7));

        draft.remove_experience_field(0);
        assert_eq!(draft.years_experience, Some(4));
        // The last line cannot be removed
        draft.remove_experience_field(0);
        assert_eq!(draft.professional_experience.len(), 1);
    }

    #[test]
    fn test_draft_fields_follow_experience_lines() {
        let mut draft = MemberDraft::default();
        assert_eq!(draft.fields().len(), 7);
        draft.add_experience_field();
        assert_eq!(draft.fields().last(), Some(&MemberField::Experience(1)));
    }

    #[test]
    fn test_save_member_appends_and_resets() {
        let mut practice = DataStore::embedded().unwrap().practice;
        let mut state = TeamState::default();
        let today = ymd(2025, 6, 15);

        state.open_form();
        assert!(!state.save_member(&mut practice));
        assert!(state.form.is_some());

        let form = state.form.as_mut().unwrap();
        form.set_text(MemberField::Name, "Dr. Sam Rivera ".into(), today);
        form.set_text(MemberField::DateOfBirth, "1988-02-10".into(), today);
        form.set_text(MemberField::Experience(0), "Associate (5 years)".into(), today);
        form.add_experience_field();

        assert!(state.save_member(&mut practice));
        assert!(state.form.is_none());
        let added = practice.team.last().unwrap();
        assert_eq!(added.name, "Dr. Sam Rivera");
        assert_eq!(added.age, Some(37));
        assert_eq!(added.years_experience, 5);
        assert_eq!(added.professional_experience, vec!["Associate (5 years)"]);
        assert_eq!(practice.number_of_doctors, 4);

        state.open_form();
        assert_eq!(state.form, Some(MemberDraft::default()));
    }

    #[test]
    fn test_form_focus_wraps() {
        let mut state = TeamState::default();
        assert_eq!(state.focused_field(), None);
        state.open_form();
        state.prev_field();
        assert_eq!(state.focused_field(), Some(MemberField::Experience(0)));
        state.next_field();
        assert_eq!(state.focused_field(), Some(MemberField::Name));
        state.add_experience_field();
        assert_eq!(state.focused_field(), Some(MemberField::Experience(1)));
    }
}
