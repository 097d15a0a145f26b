//! Template-based rendering of the résumé page.
//!
//! - [`Renderer`]: renders a [`ResumeContent`](crate::ResumeContent) in the
//!   palette the visual root carries, in any [`OutputMode`](crate::OutputMode)
//! - [`TemplateRegistry`]: built-in templates plus directory and inline overrides

mod filters;
mod registry;
mod renderer;

pub use registry::{
    walk_template_dir, RegistryError, ResolvedTemplate, TemplateFile, TemplateRegistry,
    TEMPLATE_EXTENSIONS,
};
pub use renderer::{RenderError, Renderer, DEFAULT_WIDTH, HTML_TEMPLATE, TERM_TEMPLATE};
