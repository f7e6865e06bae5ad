//! Card strip for browsing timeline records.
//!
//! This module provides:
//! - [`StripState`] - Horizontal scroll position and mouse drag tracking
//! - `RecordCard` - A single record summary card
//! - [`CardStrip`] - Widget rendering the visible slice of the strip

mod card;
mod state;
mod widget;

pub use card::CARD_HEIGHT;
#[cfg(test)]
pub use state::CARD_STRIDE;
pub use state::{StripState, WHEEL_STEP};
pub use widget::CardStrip;
