//! The host's read-only "prefers dark" signal.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use crate::theme::ColorMode;

/// Environment variable that overrides OS detection (`dark` or `light`).
pub const COLOR_SCHEME_ENV: &str = "VITAE_COLOR_SCHEME";

/// Answers whether the host prefers a dark color scheme.
///
/// `None` means the host gives no answer; the controller then assumes light.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> Option<bool>;
}

impl<T: ColorSchemeSignal + ?Sized> ColorSchemeSignal for Box<T> {
    fn prefers_dark(&self) -> Option<bool> {
        (**self).prefers_dark()
    }
}

/// The operating system's color scheme, optionally overridden.
#[derive(Debug, Clone, Default)]
pub struct SystemSignal {
    override_value: Option<String>,
}

impl SystemSignal {
    /// Reads the override from [`COLOR_SCHEME_ENV`].
    pub fn from_env() -> Self {
        Self {
            override_value: std::env::var(COLOR_SCHEME_ENV).ok(),
        }
    }

    pub fn with_override(value: impl Into<String>) -> Self {
        Self {
            override_value: Some(value.into()),
        }
    }
}

impl ColorSchemeSignal for SystemSignal {
    fn prefers_dark(&self) -> Option<bool> {
        if let Some(raw) = self.override_value.as_deref() {
            match raw.trim().parse::<ColorMode>() {
                Ok(mode) => return Some(mode.is_dark()),
                Err(e) => tracing::debug!(error = %e, "ignoring {}", COLOR_SCHEME_ENV),
            }
        }
        match detect_os_theme() {
            OsThemeMode::Dark => Some(true),
            OsThemeMode::Light => Some(false),
        }
    }
}

/// A signal with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedSignal(pub Option<bool>);

impl FixedSignal {
    pub fn dark() -> Self {
        Self(Some(true))
    }

    pub fn light() -> Self {
        Self(Some(false))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl From<ColorMode> for FixedSignal {
    fn from(mode: ColorMode) -> Self {
        Self(Some(mode.is_dark()))
    }
}

impl ColorSchemeSignal for FixedSignal {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}
