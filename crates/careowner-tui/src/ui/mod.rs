//! Terminal UI module using ratatui.
//!
//! - `render`: frame layout, sidebar, breadcrumbs and overlays
//! - `input`: keyboard event handling
//! - `styles`: color scheme and text styling
//! - `pages`: per-page content rendering

pub mod input;
pub mod pages;
pub mod render;
pub mod styles;
