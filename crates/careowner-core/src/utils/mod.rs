//! Utility functions for string formatting, comparison and date handling.

pub mod dates;
pub mod format;

// Re-export commonly used functions at module level
pub use format::{
    cmp_ignore_case, contains_ignore_case, format_currency, format_millions, initials,
    truncate_string,
};
