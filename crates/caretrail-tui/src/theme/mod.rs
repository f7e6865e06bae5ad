//! Colors, icons and box-drawing for caretrail.
//!
//! Everything here depends on two settings: the configured theme name and
//! whether `NO_COLOR` is set, which switches icons and borders to ASCII.

mod borders;
mod colors;
mod icons;

pub use borders::BorderSet;
pub use colors::Theme;
pub use icons::{IconMode, IconSet};
