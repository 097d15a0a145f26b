//! Command handlers.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use console::{style, Term};
use tracing::{debug, info};
use vitae::{
    ColorSchemeSignal, FileStore, FixedSignal, OutputMode, PreferenceSource, PresentationRoot,
    Renderer, ResumeContent, SystemSignal, ThemeController, ThemePreference,
};

use crate::cli::{Cli, Commands, ExportArgs, ShowArgs, ThemeAction};

const DEFAULT_WIDTH: usize = 80;
const MAX_WIDTH: usize = 100;

type Controller = ThemeController<FileStore, Box<dyn ColorSchemeSignal>, PresentationRoot>;

/// Everything one invocation needs: a ready theme controller and the content.
pub struct Session {
    controller: Controller,
    content: ResumeContent,
}

impl Session {
    /// Opens the store, asks the OS once and resolves the theme.
    ///
    /// The controller is initialized here so nothing downstream ever sees an
    /// unresolved theme.
    pub fn open(cli: &Cli) -> Result<Self> {
        let store = match &cli.store {
            Some(path) => FileStore::new(path),
            None => FileStore::at_default_location(),
        };
        match store.path() {
            Some(path) => debug!(path = %path.display(), "preference store"),
            None => info!("no config directory found, theme changes last for this run only"),
        }

        let signal: Box<dyn ColorSchemeSignal> = match cli.system {
            Some(mode) => Box::new(FixedSignal::from(mode)),
            None => Box::new(SystemSignal::from_env()),
        };

        let content = match &cli.content {
            Some(path) => ResumeContent::from_path(path)
                .with_context(|| format!("Failed to load content from {}", path.display()))?,
            None => ResumeContent::builtin().clone(),
        };

        let mut controller = ThemeController::new(store, signal, PresentationRoot::new());
        controller.initialize();
        Ok(Self { controller, content })
    }

    fn renderer(&self, cli: &Cli, output: OutputMode) -> Result<Renderer> {
        let mut renderer = Renderer::new(output)
            .context("Failed to build renderer")?
            .with_width(terminal_width());
        if let Some(dir) = &cli.templates {
            let count = renderer
                .registry_mut()
                .add_directory(dir)
                .with_context(|| format!("Failed to load templates from {}", dir.display()))?;
            info!(count, dir = %dir.display(), "loaded template overrides");
        }
        Ok(renderer)
    }

    fn render(&self, cli: &Cli, output: OutputMode) -> Result<String> {
        let renderer = self.renderer(cli, output)?;
        renderer
            .render_page(self.controller.state(), self.controller.root(), &self.content)
            .context("Failed to render page")
    }
}

pub fn run(cli: &Cli, session: &mut Session) -> Result<()> {
    match &cli.command {
        None => cmd_show(cli, session, &ShowArgs::default()),
        Some(Commands::Show(args)) => cmd_show(cli, session, args),
        Some(Commands::Export(args)) => cmd_export(cli, session, args),
        Some(Commands::Theme(args)) => {
            cmd_theme(session, args.action.clone().unwrap_or(ThemeAction::Show))
        }
    }
}

fn cmd_show(cli: &Cli, session: &Session, args: &ShowArgs) -> Result<()> {
    let page = session.render(cli, args.output)?;
    write_stdout(&page)
}

fn cmd_export(cli: &Cli, session: &Session, args: &ExportArgs) -> Result<()> {
    let page = session.render(cli, OutputMode::Html)?;
    match &args.out {
        Some(path) => {
            write_file(path, &page)?;
            info!(path = %path.display(), bytes = page.len(), "exported page");
            Ok(())
        }
        None => write_stdout(&page),
    }
}

fn cmd_theme(session: &mut Session, action: ThemeAction) -> Result<()> {
    let controller = &mut session.controller;
    let pref = match action {
        ThemeAction::Show => controller
            .preference()
            .context("Theme was not initialized")?,
        ThemeAction::Toggle => controller.toggle(),
        ThemeAction::Set { mode } => controller.set(mode),
        ThemeAction::Reset => controller.reset(),
    };
    write_stdout(&describe(pref))
}

fn describe(pref: ThemePreference) -> String {
    let source = match pref.source {
        PreferenceSource::Persisted => "saved",
        PreferenceSource::SystemDefault => "from system",
    };
    format!("{} ({})", style(pref.mode).bold(), style(source).dim())
}

fn terminal_width() -> usize {
    Term::stdout()
        .size_checked()
        .map(|(_, cols)| usize::from(cols).min(MAX_WIDTH))
        .unwrap_or(DEFAULT_WIDTH)
}

fn write_stdout(text: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}
