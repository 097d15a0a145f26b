//! Named styles for the terminal rendition of the page.
//!
//! - [`StyleValue`]: a concrete `console::Style` or an alias to another name
//! - [`Styles`]: the registry a palette is built from
//! - [`StyleValidationError`]: dangling or cyclic aliases
//!
//! Section templates only reference semantic names (`heading`, `bullet`,
//! `link`); palettes alias those to a handful of visual styles, so the light
//! and dark variants differ only in their visual layer.

mod error;
mod registry;
mod value;

pub use error::StyleValidationError;
pub use registry::{Styles, DEFAULT_MISSING_STYLE_INDICATOR};
pub use value::StyleValue;
