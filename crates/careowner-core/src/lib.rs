//! Core library for the CareOwner practice-sale portal.
//!
//! Holds everything that does not touch the terminal:
//!
//! - `models`: offers, buyers, message threads, the deal room, meetings and the practice
//! - `store`: seed data embedded at compile time, optionally overridden from a directory
//! - `navigation`: page keys, breadcrumbs and the selection-clearing contract
//! - `views`: per-screen view state with the filter/sort/derive operations behind each screen
//! - `config`: user configuration stored under the platform config directory

pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod store;
pub mod utils;
pub mod views;

pub use config::Config;
pub use error::DataError;
pub use navigation::{Navigator, Page};
pub use store::DataStore;
