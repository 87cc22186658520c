//! Terminal user interface
//!
//! A ratatui front end over the filter store. The layout follows the
//! browsing flow top to bottom:
//!
//! ```text
//! ┌ Users ──────────────────────────────┐
//! │  All   Roma   Anna   Max            │
//! ├ Search ─────────────────────────────┤
//! │ / sun│                          [x] │
//! ├ Albums ─────────────────────────────┤
//! │  All   quidem molestiae   ...       │
//! ├─────────────────────────────────────┤
//! │          Reset all filters          │
//! ├ Photos 3/24 ────────────────────────┤
//! │ ID   Photo name   Album   User name │
//! └─────────────────────────────────────┘
//! ```
//!
//! All filter changes go through [`crate::filters::FilterStore`]; the view
//! subscribes to it and redraws, re-evaluating the visible set each frame.

mod browser;
mod error;
pub mod events;
pub mod state;
mod theme;
pub mod widgets;

pub use browser::PhotoBrowser;
pub use error::{Result, UiError};
pub use state::{Focus, Mode, ViewState};
pub use theme::Theme;
