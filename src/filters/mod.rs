//! Filter state management and evaluation
//!
//! - [`FilterState`] / [`FilterAction`]: the criteria and their pure transitions
//! - [`FilterStore`]: the session-owned state with change subscribers
//! - [`evaluate`]: the visible subset of a joined catalog for a given state

pub mod evaluate;
pub mod state;

pub use evaluate::{Matcher, evaluate};
pub use state::{ALL_USERS, FilterAction, FilterState, FilterStore, Subscriber};
