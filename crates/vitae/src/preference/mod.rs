//! The light/dark preference and its collaborators.
//!
//! - [`ThemeController`]: resolves, applies and persists the preference
//! - [`PreferenceStore`]: where the choice survives between sessions
//! - [`ColorSchemeSignal`]: the host's own light/dark answer
//! - [`VisualRoot`]: the surface the resolved mode is applied to

mod controller;
mod signal;
mod store;
mod surface;

pub use controller::{PreferenceSource, ThemeController, ThemePreference, ThemeState};
pub use signal::{ColorSchemeSignal, FixedSignal, SystemSignal, COLOR_SCHEME_ENV};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, THEME_KEY};
pub use surface::{PresentationRoot, VisualRoot};
