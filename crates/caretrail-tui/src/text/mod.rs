//! Text layout helpers.
//!
//! - [`visual_width`], [`truncate_to_width`] - unicode-aware measuring
//! - [`clamp_lines`] - wrap to a width and keep at most N lines

mod clamp;
mod width;

pub use clamp::clamp_lines;
pub use width::{truncate_to_width, visual_width};
