//! Resolution, application and persistence of the light/dark preference.

use serde::Serialize;
use tracing::{debug, info};

use super::signal::ColorSchemeSignal;
use super::store::{PreferenceStore, THEME_KEY};
use super::surface::VisualRoot;
use crate::theme::ColorMode;

/// Where the current mode came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreferenceSource {
    /// Read from, or just written to, the preference store.
    Persisted,
    /// Derived from the host's color-scheme signal.
    SystemDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePreference {
    pub mode: ColorMode,
    pub source: PreferenceSource,
}

impl ThemePreference {
    pub fn persisted(mode: ColorMode) -> Self {
        Self {
            mode,
            source: PreferenceSource::Persisted,
        }
    }

    pub fn system_default(mode: ColorMode) -> Self {
        Self {
            mode,
            source: PreferenceSource::SystemDefault,
        }
    }

    /// The preference after a user toggle. A toggled mode is always an
    /// explicit choice, so it is marked persisted.
    pub fn toggled(self) -> Self {
        Self::persisted(self.mode.toggled())
    }
}

/// Lifecycle of the controller.
///
/// Theme-dependent output is only produced in `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeState {
    #[default]
    Uninitialized,
    Ready(ThemePreference),
}

impl ThemeState {
    pub fn preference(&self) -> Option<ThemePreference> {
        match self {
            ThemeState::Uninitialized => None,
            ThemeState::Ready(pref) => Some(*pref),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ThemeState::Ready(_))
    }
}

/// Owns the theme preference for one session.
///
/// The store, the OS signal and the visual root are injected, so the same
/// controller drives a file-backed CLI session and an in-memory test.
///
/// ```rust
/// use vitae::{ColorMode, FixedSignal, MemoryStore, PresentationRoot, ThemeController};
///
/// let mut controller =
///     ThemeController::new(MemoryStore::new(), FixedSignal::dark(), PresentationRoot::new());
/// assert_eq!(controller.initialize().mode, ColorMode::Dark);
/// assert_eq!(controller.toggle().mode, ColorMode::Light);
/// assert_eq!(controller.root().class(), None);
/// ```
#[derive(Debug)]
pub struct ThemeController<S, P, R> {
    store: S,
    signal: P,
    root: R,
    state: ThemeState,
}

impl<S, P, R> ThemeController<S, P, R>
where
    S: PreferenceStore,
    P: ColorSchemeSignal,
    R: VisualRoot,
{
    pub fn new(store: S, signal: P, root: R) -> Self {
        Self {
            store,
            signal,
            root,
            state: ThemeState::Uninitialized,
        }
    }

    /// Resolves the mode, applies it to the root and marks the controller ready.
    ///
    /// A stored `"dark"`/`"light"` wins; anything else falls back to the OS
    /// signal, and an unanswered signal means light. Never writes to the store.
    pub fn initialize(&mut self) -> ThemePreference {
        let pref = self.resolve();
        self.root.apply(pref.mode);
        self.state = ThemeState::Ready(pref);
        info!(mode = %pref.mode, source = ?pref.source, "theme initialized");
        pref
    }

    /// Flips the mode, applies it and persists it.
    ///
    /// An uninitialized controller is initialized first. A failing store
    /// only costs persistence; the session still switches, and the failure is
    /// logged below the default level so the user never sees an error.
    pub fn toggle(&mut self) -> ThemePreference {
        let current = match self.state {
            ThemeState::Ready(pref) => pref,
            ThemeState::Uninitialized => self.initialize(),
        };
        self.commit(current.toggled())
    }

    /// Forces `mode` as an explicit choice.
    pub fn set(&mut self, mode: ColorMode) -> ThemePreference {
        self.commit(ThemePreference::persisted(mode))
    }

    /// Forgets the stored choice and goes back to following the OS signal.
    pub fn reset(&mut self) -> ThemePreference {
        if let Err(e) = self.store.remove(THEME_KEY) {
            info!(error = %e, "could not clear stored theme");
        }
        self.initialize()
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn preference(&self) -> Option<ThemePreference> {
        self.state.preference()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn signal(&self) -> &P {
        &self.signal
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    fn resolve(&self) -> ThemePreference {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => match raw.parse::<ColorMode>() {
                Ok(mode) => return ThemePreference::persisted(mode),
                Err(e) => debug!(error = %e, "ignoring stored theme"),
            },
            Ok(None) => debug!("no stored theme"),
            Err(e) => info!(error = %e, "theme store unavailable, using system preference"),
        }

        let mode = match self.signal.prefers_dark() {
            Some(true) => ColorMode::Dark,
            Some(false) => ColorMode::Light,
            None => {
                debug!("no color scheme signal, defaulting to light");
                ColorMode::Light
            }
        };
        ThemePreference::system_default(mode)
    }

    fn commit(&mut self, pref: ThemePreference) -> ThemePreference {
        self.root.apply(pref.mode);
        self.state = ThemeState::Ready(pref);
        match self.store.set(THEME_KEY, pref.mode.as_str()) {
            Ok(()) => info!(mode = %pref.mode, "theme saved"),
            Err(e) => info!(error = %e, mode = %pref.mode, "theme not persisted, keeping it for this session"),
        }
        pref
    }
}
