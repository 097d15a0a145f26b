//! Color modes and the palettes drawn for each.
//!
//! - [`ColorMode`]: light or dark, with the literals that get persisted
//! - [`Theme`]: a named collection of styles with a fluent builder
//! - [`AdaptiveTheme`]: one theme per mode, selected by the caller

mod adaptive;
mod mode;
mod palette;

pub use adaptive::AdaptiveTheme;
pub use mode::{ColorMode, ParseColorModeError};
pub use palette::Theme;
