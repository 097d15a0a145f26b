//! Light/dark theme pairs.

use console::Style;

use super::mode::ColorMode;
use super::palette::Theme;
use crate::style::StyleValidationError;
use crate::util::rgb_to_ansi256;

/// Separate themes for each [`ColorMode`].
///
/// Unlike a detector-driven theme, the pair never decides which variant is
/// active: the caller passes the mode the controller resolved.
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// The palette pair the built-in page templates are written against.
    pub fn resume() -> Self {
        Self::new(resume_light(), resume_dark())
    }

    pub fn resolve(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    pub fn validate(&self) -> Result<(), StyleValidationError> {
        self.light.validate()?;
        self.dark.validate()
    }
}

impl Default for AdaptiveTheme {
    fn default() -> Self {
        Self::resume()
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Style {
    Style::new().color256(rgb_to_ansi256((r, g, b)))
}

/// Semantic names shared by both palettes, mapped onto the visual layer.
fn with_semantics(theme: Theme) -> Theme {
    theme
        .add("name", "strong")
        .add("heading", "strong")
        .add("subheading", "ink")
        .add("tagline", "accent")
        .add("body", "ink")
        .add("bullet", "accent")
        .add("check", "accent")
        .add("link", "accent")
        .add("skill", "chip")
        .add("footer", "muted")
        .add("toggle", "muted")
}

fn resume_light() -> Theme {
    // gray-900 / gray-700 / blue-600 / gray-500 on a light background
    with_semantics(
        Theme::new()
            .add("strong", rgb(17, 24, 39).bold())
            .add("ink", rgb(55, 65, 81))
            .add("accent", rgb(37, 99, 235))
            .add("muted", rgb(107, 114, 128))
            .add("chip", rgb(30, 64, 175).on_color256(rgb_to_ansi256((219, 234, 254)))),
    )
}

fn resume_dark() -> Theme {
    // white / gray-300 / blue-400 / gray-400 on a dark background
    with_semantics(
        Theme::new()
            .add("strong", rgb(255, 255, 255).bold())
            .add("ink", rgb(209, 213, 219))
            .add("accent", rgb(96, 165, 250))
            .add("muted", rgb(156, 163, 175))
            .add("chip", rgb(191, 219, 254).on_color256(rgb_to_ansi256((30, 58, 138)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_palettes_validate() {
        assert!(AdaptiveTheme::resume().validate().is_ok());
    }

    #[test]
    fn test_resolve_picks_variant() {
        let light = Theme::new().add("tone", Style::new().green());
        let dark = Theme::new().add("tone", Style::new().red());
        let adaptive = AdaptiveTheme::new(light, dark);

        let out = adaptive
            .resolve(ColorMode::Dark)
            .styles()
            .apply_with_mode("tone", "hi", true);
        assert!(out.contains("\x1b[31"));

        let out = adaptive
            .resolve(ColorMode::Light)
            .styles()
            .apply_with_mode("tone", "hi", true);
        assert!(out.contains("\x1b[32"));
    }

    #[test]
    fn test_palettes_define_same_names() {
        let adaptive = AdaptiveTheme::resume();
        for name in ["name", "heading", "tagline", "bullet", "skill", "footer"] {
            assert!(adaptive.resolve(ColorMode::Light).styles().has(name));
            assert!(adaptive.resolve(ColorMode::Dark).styles().has(name));
        }
    }
}
