use crate::theme::ColorMode;

/// The top-level surface whose class selects the palette.
pub trait VisualRoot {
    fn apply(&mut self, mode: ColorMode);
}

/// Holds the presentation class the renderer reads.
///
/// Starts with nothing applied; the renderer shows nothing until a mode has
/// been applied, so content is never drawn in a palette the root disagrees with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationRoot {
    applied: Option<ColorMode>,
}

impl PresentationRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Option<ColorMode> {
        self.applied
    }

    /// `Some("dark")` in dark mode, `None` in light mode or before any apply.
    pub fn class(&self) -> Option<&'static str> {
        self.applied.and_then(ColorMode::class)
    }
}

impl VisualRoot for PresentationRoot {
    fn apply(&mut self, mode: ColorMode) {
        self.applied = Some(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_starts_unapplied() {
        let root = PresentationRoot::new();
        assert_eq!(root.mode(), None);
        assert_eq!(root.class(), None);
    }

    #[test]
    fn test_root_class_follows_mode() {
        let mut root = PresentationRoot::new();
        root.apply(ColorMode::Dark);
        assert_eq!(root.class(), Some("dark"));
        root.apply(ColorMode::Light);
        assert_eq!(root.class(), None);
        assert_eq!(root.mode(), Some(ColorMode::Light));
    }
}
