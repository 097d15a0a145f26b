//! # Vitae - a résumé page with a remembered light/dark theme
//!
//! Vitae renders a single résumé from a static [`ResumeContent`] to the
//! terminal, to plain text, to JSON or to a standalone HTML page. The only
//! behavior beyond rendering is the theme preference:
//!
//! - On start, [`ThemeController::initialize`] reads the stored choice
//!   (`"theme"` → `"dark"`/`"light"`), falls back to the OS color scheme, and
//!   applies the result to the [`PresentationRoot`] before anything is drawn.
//! - [`ThemeController::toggle`] flips the mode, applies it and stores it.
//!   A store that cannot be written only costs persistence.
//!
//! The [`Renderer`] draws nothing until the controller is ready, so output is
//! never produced in a palette the root disagrees with.
//!
//! ```rust
//! use vitae::{
//!     ColorMode, FixedSignal, MemoryStore, OutputMode, PresentationRoot, Renderer,
//!     ResumeContent, ThemeController,
//! };
//!
//! let mut controller = ThemeController::new(
//!     MemoryStore::with_theme("light"),
//!     FixedSignal::dark(),
//!     PresentationRoot::new(),
//! );
//! // the stored choice beats the OS preference
//! assert_eq!(controller.initialize().mode, ColorMode::Light);
//!
//! let renderer = Renderer::new(OutputMode::Html).unwrap();
//! let page = renderer
//!     .render_page(controller.state(), controller.root(), ResumeContent::builtin())
//!     .unwrap();
//! assert!(page.starts_with("<!DOCTYPE html>"));
//! ```

pub mod content;
mod output;
pub mod preference;
pub mod render;
pub mod style;
pub mod theme;
mod util;

pub use content::{
    ContactInfo, ContentError, Education, Project, ResumeContent, ResumeDownload, SkillGroup,
};
pub use output::{OutputMode, ParseOutputModeError};
pub use preference::{
    ColorSchemeSignal, FileStore, FixedSignal, MemoryStore, PreferenceSource, PreferenceStore,
    PresentationRoot, StoreError, SystemSignal, ThemeController, ThemePreference, ThemeState,
    VisualRoot, COLOR_SCHEME_ENV, THEME_KEY,
};
pub use render::{RenderError, Renderer, TemplateRegistry};
pub use style::{StyleValidationError, StyleValue, Styles};
pub use theme::{AdaptiveTheme, ColorMode, ParseColorModeError, Theme};
pub use util::{rgb_to_ansi256, truncate_to_width, wrap_to_width};
