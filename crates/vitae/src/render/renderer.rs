//! Page renderer.

use chrono::Datelike;
use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use super::filters::register_filters;
use super::registry::{RegistryError, TemplateRegistry, TEMPLATE_EXTENSIONS};
use crate::content::ResumeContent;
use crate::output::OutputMode;
use crate::preference::{PresentationRoot, ThemePreference, ThemeState, THEME_KEY};
use crate::style::StyleValidationError;
use crate::theme::{AdaptiveTheme, ColorMode, Theme};

/// Template used for `auto`, `term`, `text` and `term-debug` output.
pub const TERM_TEMPLATE: &str = "page.term";
/// Template used for `html` output.
pub const HTML_TEMPLATE: &str = "page.html";
/// Column budget when the caller does not know the terminal width.
pub const DEFAULT_WIDTH: usize = 80;

const BUILTIN_TERM: &str = include_str!("templates/page.term.j2");
const BUILTIN_HTML: &str = include_str!("templates/page.html.j2");

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Template(#[from] minijinja::Error),

    #[error("invalid palette: {0}")]
    Palette(#[from] StyleValidationError),

    #[error("failed to encode page as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders the résumé in the palette the visual root carries.
///
/// ```rust
/// use vitae::{
///     FixedSignal, MemoryStore, OutputMode, PresentationRoot, Renderer, ResumeContent,
///     ThemeController,
/// };
///
/// let mut controller =
///     ThemeController::new(MemoryStore::new(), FixedSignal::dark(), PresentationRoot::new());
/// let renderer = Renderer::new(OutputMode::Text).unwrap();
/// let content = ResumeContent::builtin();
///
/// // nothing is drawn before the theme is resolved
/// let early = renderer.render_page(controller.state(), controller.root(), content).unwrap();
/// assert!(early.is_empty());
///
/// controller.initialize();
/// let page = renderer.render_page(controller.state(), controller.root(), content).unwrap();
/// assert!(page.contains("Gagan Veeravelly"));
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    registry: TemplateRegistry,
    palettes: AdaptiveTheme,
    output: OutputMode,
    width: usize,
    year: i32,
}

#[derive(Serialize)]
struct SkillView<'a> {
    label: String,
    skills: &'a [String],
}

#[derive(Serialize)]
struct PageView<'a> {
    content: &'a ResumeContent,
    theme: ThemePreference,
    mode: ColorMode,
    root_class: Option<&'static str>,
    toggle_label: &'static str,
    storage_key: &'static str,
    initials: String,
    email_address: &'a str,
    mailto: String,
    qr_code_url: String,
    resume_file_name: String,
    skill_groups: Vec<SkillView<'a>>,
    rule: String,
    footer: String,
}

#[derive(Serialize)]
struct JsonPage<'a> {
    theme: ThemePreference,
    content: &'a ResumeContent,
}

impl Renderer {
    /// A renderer with the built-in palettes and templates.
    pub fn new(output: OutputMode) -> Result<Self, RenderError> {
        Self::with_palettes(AdaptiveTheme::resume(), output)
    }

    /// # Errors
    ///
    /// Returns an error if either palette has dangling or cyclic aliases.
    pub fn with_palettes(palettes: AdaptiveTheme, output: OutputMode) -> Result<Self, RenderError> {
        palettes.validate()?;

        let mut registry = TemplateRegistry::new();
        registry.add_builtin(TERM_TEMPLATE, BUILTIN_TERM);
        registry.add_builtin(HTML_TEMPLATE, BUILTIN_HTML);

        Ok(Self {
            registry,
            palettes,
            output,
            width: DEFAULT_WIDTH,
            year: chrono::Local::now().year(),
        })
    }

    /// Column budget for wrapping in terminal output.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Year printed in the footer; defaults to the current year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn output(&self) -> OutputMode {
        self.output
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Template overrides go here, e.g. [`TemplateRegistry::add_directory`].
    pub fn registry_mut(&mut self) -> &mut TemplateRegistry {
        &mut self.registry
    }

    /// Renders the whole page.
    ///
    /// Returns an empty string while `state` is uninitialized, `root` has no
    /// mode applied, or the two name different modes.
    pub fn render_page(
        &self,
        state: ThemeState,
        root: &PresentationRoot,
        content: &ResumeContent,
    ) -> Result<String, RenderError> {
        let (theme, mode) = match (state.preference(), root.mode()) {
            (Some(theme), Some(mode)) if theme.mode == mode => (theme, mode),
            (Some(theme), Some(mode)) => {
                tracing::debug!(state = %theme.mode, root = %mode, "theme and root disagree, rendering nothing");
                return Ok(String::new());
            }
            _ => {
                tracing::debug!("theme not resolved yet, rendering nothing");
                return Ok(String::new());
            }
        };

        match self.output {
            OutputMode::Json => {
                let page = JsonPage { theme, content };
                Ok(serde_json::to_string_pretty(&page)?)
            }
            OutputMode::Html => self.render_template(HTML_TEMPLATE, theme, mode, content),
            _ => self.render_template(TERM_TEMPLATE, theme, mode, content),
        }
    }

    fn render_template(
        &self,
        name: &str,
        theme: ThemePreference,
        mode: ColorMode,
        content: &ResumeContent,
    ) -> Result<String, RenderError> {
        let env = self.environment(self.palettes.resolve(mode))?;
        let view = self.view(theme, mode, content);
        let output = env.get_template(name)?.render(&view)?;
        tracing::debug!(template = name, %mode, bytes = output.len(), "rendered page");
        Ok(output)
    }

    fn environment(&self, theme: &Theme) -> Result<Environment<'static>, RenderError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_auto_escape_callback(|name| {
            let base = TEMPLATE_EXTENSIONS
                .iter()
                .find_map(|ext| name.strip_suffix(ext))
                .unwrap_or(name);
            if base.ends_with(".html") {
                AutoEscape::Html
            } else {
                AutoEscape::None
            }
        });
        register_filters(&mut env, theme, self.output, self.width);

        // templates compile on first use, so a broken unrelated override
        // does not fail the page
        let registry = self.registry.clone();
        env.set_loader(move |name| match registry.get_content(name) {
            Ok(source) => Ok(Some(source)),
            Err(RegistryError::NotFound { .. }) => Ok(None),
            Err(e) => Err(minijinja::Error::new(
                minijinja::ErrorKind::InvalidOperation,
                e.to_string(),
            )),
        });
        Ok(env)
    }

    fn view<'a>(
        &self,
        theme: ThemePreference,
        mode: ColorMode,
        content: &'a ResumeContent,
    ) -> PageView<'a> {
        PageView {
            content,
            theme,
            mode,
            root_class: mode.class(),
            toggle_label: match mode {
                ColorMode::Dark => "☀",
                ColorMode::Light => "☾",
            },
            storage_key: THEME_KEY,
            initials: content.initials(),
            email_address: content.contact_info.email_address(),
            mailto: content.contact_info.mailto(),
            qr_code_url: content.contact_info.qr_code_url(),
            resume_file_name: content.resume_file_name(),
            skill_groups: content
                .skills
                .iter()
                .map(|group| SkillView {
                    label: group.label(),
                    skills: &group.skills,
                })
                .collect(),
            rule: "─".repeat(self.width.min(60)),
            footer: format!("© {} {}. All Rights Reserved.", self.year, content.name),
        }
    }
}
