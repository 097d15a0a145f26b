//! A named collection of styles.

use crate::style::{StyleValidationError, StyleValue, Styles};

/// The styles one rendition of the page is drawn with.
///
/// Built fluently; values are either concrete `console::Style`s or aliases
/// to other names in the same theme:
///
/// ```rust
/// use vitae::Theme;
/// use console::Style;
///
/// let theme = Theme::new()
///     .add("accent", Style::new().blue().bold())
///     .add("muted", Style::new().dim())
///     .add("heading", "accent")
///     .add("footer", "muted");
/// assert!(theme.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub(crate) styles: Styles,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_styles(styles: Styles) -> Self {
        Self { styles }
    }

    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.styles = self.styles.add(name, value);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Checks aliases up front; the renderer refuses an invalid theme.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        self.styles.validate()
    }
}
