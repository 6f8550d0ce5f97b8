use ratatui::style::{Color, Modifier, Style};

use careowner_core::models::{BuyerType, Grade, InterestLevel, OfferStatus, Priority};

// Color palette
pub const PRIMARY: Color = Color::Rgb(64, 128, 192);
pub const SECONDARY: Color = Color::Rgb(96, 160, 96);
pub const ACCENT: Color = Color::Rgb(192, 160, 64);
pub const ERROR: Color = Color::Rgb(192, 64, 64);
pub const MUTED: Color = Color::Rgb(128, 128, 128);
pub const HIGHLIGHT: Color = Color::Rgb(48, 48, 64);
pub const PURPLE: Color = Color::Rgb(150, 110, 200);

// Styles
pub fn title_style() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default().bg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

pub fn list_item_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn highlight_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn success_style() -> Style {
    Style::default().fg(SECONDARY)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR)
}

pub fn tab_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(PRIMARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(PRIMARY)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn search_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn status_bar_style() -> Style {
    Style::default().bg(Color::Rgb(32, 32, 40)).fg(Color::White)
}

pub fn help_key_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn help_desc_style() -> Style {
    Style::default().fg(Color::White)
}

// Badge colors

pub fn offer_status_style(status: OfferStatus) -> Style {
    match status {
        OfferStatus::Pending => highlight_style(),
        OfferStatus::UnderReview => Style::default().fg(PRIMARY),
        OfferStatus::Accepted => success_style(),
        OfferStatus::Declined => error_style(),
    }
}

/// Buyer types share a color per badge group
pub fn buyer_type_style(buyer_type: BuyerType) -> Style {
    match buyer_type.badge_group() {
        "Parent Company" => Style::default().fg(PRIMARY),
        "Joint Venture" => Style::default().fg(PURPLE),
        "Private Equity" => highlight_style(),
        _ => success_style(),
    }
}

pub fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::High => error_style(),
        Priority::Medium => highlight_style(),
        Priority::Low => muted_style(),
    }
}

/// Buyer fit scores: 8+ good, 6+ fair, lower is a caution
pub fn score_style(score: u8) -> Style {
    if score >= 8 {
        success_style()
    } else if score >= 6 {
        highlight_style()
    } else {
        error_style()
    }
}

pub fn grade_style(grade: Grade) -> Style {
    match grade {
        Grade::A => success_style(),
        Grade::B => Style::default().fg(PRIMARY),
        Grade::C => highlight_style(),
        Grade::D => error_style(),
    }
}

pub fn interest_style(interest: InterestLevel) -> Style {
    match interest {
        InterestLevel::High => success_style(),
        InterestLevel::Medium => highlight_style(),
        InterestLevel::Low => muted_style(),
    }
}
