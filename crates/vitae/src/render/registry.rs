//! Template lookup across built-in, directory and inline sources.
//!
//! Page templates ship with the crate, and a directory of overrides can
//! replace any of them by name. Resolution order for a name:
//!
//! 1. inline templates added with [`TemplateRegistry::add_inline`]
//! 2. files from override directories, first registered directory wins
//! 3. built-in templates
//!
//! Files are recognized by extension, highest priority first:
//!
//! | Priority | Extension |
//! |----------|-----------|
//! | 1 | `.tmpl` |
//! | 2 | `.jinja2` |
//! | 3 | `.j2` |
//!
//! so `page.html.j2` registers as both `page.html` and `page.html.j2`. Two
//! directories providing the same name is a [`RegistryError::Collision`].

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// Recognized template file extensions in priority order.
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".tmpl", ".jinja2", ".j2"];

/// A template file found while walking an override directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Resolution name without the template extension, e.g. `page.html`.
    pub name: String,
    /// Resolution name with the extension, e.g. `page.html.j2`.
    pub name_with_ext: String,
    pub absolute_path: PathBuf,
    /// The directory root the file was found under.
    pub source_dir: PathBuf,
}

impl TemplateFile {
    pub fn new(
        name: impl Into<String>,
        name_with_ext: impl Into<String>,
        absolute_path: impl Into<PathBuf>,
        source_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            name_with_ext: name_with_ext.into(),
            absolute_path: absolute_path.into(),
            source_dir: source_dir.into(),
        }
    }

    /// Lower is higher priority; unknown extensions sort last.
    pub fn extension_priority(&self) -> usize {
        TEMPLATE_EXTENSIONS
            .iter()
            .position(|ext| self.name_with_ext.ends_with(ext))
            .unwrap_or(usize::MAX)
    }
}

/// Where a template's source comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTemplate {
    /// Source held in memory (inline or built-in).
    Inline(String),
    /// Source read from disk at render time.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two override directories provide the same template name.
    Collision {
        name: String,
        existing_path: PathBuf,
        existing_dir: PathBuf,
        conflicting_path: PathBuf,
        conflicting_dir: PathBuf,
    },
    NotFound {
        name: String,
    },
    ReadError {
        path: PathBuf,
        message: String,
    },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::Collision {
                name,
                existing_path,
                existing_dir,
                conflicting_path,
                conflicting_dir,
            } => {
                write!(
                    f,
                    "template \"{}\" is provided twice:\n  \
                     - {} (from {})\n  \
                     - {} (from {})",
                    name,
                    existing_path.display(),
                    existing_dir.display(),
                    conflicting_path.display(),
                    conflicting_dir.display()
                )
            }
            RegistryError::NotFound { name } => write!(f, "no template named \"{}\"", name),
            RegistryError::ReadError { path, message } => {
                write!(f, "cannot read template {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    /// Inline and file templates, keyed with and without extension.
    templates: HashMap<String, ResolvedTemplate>,
    /// Base name -> (path, source dir) of file templates, for collisions.
    sources: HashMap<String, (PathBuf, PathBuf)>,
    /// Fallbacks consulted after everything else.
    builtin: HashMap<String, ResolvedTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a lowest-priority template.
    pub fn add_builtin(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.builtin
            .insert(name.into(), ResolvedTemplate::Inline(content.into()));
    }

    /// Registers a highest-priority template.
    pub fn add_inline(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.templates
            .insert(name.into(), ResolvedTemplate::Inline(content.into()));
    }

    /// Registers files from a directory walk.
    ///
    /// Within one directory the higher-priority extension wins the bare name;
    /// across directories the earlier one wins and a later duplicate is a
    /// collision. A collision leaves the registry unchanged.
    pub fn add_from_files(&mut self, files: Vec<TemplateFile>) -> Result<(), RegistryError> {
        let mut sorted_files = files;
        sorted_files.sort_by_key(|f| f.extension_priority());

        let mut claimed: HashMap<&str, (&Path, &Path)> = HashMap::new();
        for file in &sorted_files {
            let owner = self
                .sources
                .get(&file.name)
                .map(|(path, dir)| (path.as_path(), dir.as_path()))
                .or_else(|| claimed.get(file.name.as_str()).copied());
            match owner {
                Some((existing_path, existing_dir)) if existing_dir != file.source_dir.as_path() => {
                    return Err(RegistryError::Collision {
                        name: file.name.clone(),
                        existing_path: existing_path.to_path_buf(),
                        existing_dir: existing_dir.to_path_buf(),
                        conflicting_path: file.absolute_path.clone(),
                        conflicting_dir: file.source_dir.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    claimed.insert(&file.name, (&file.absolute_path, &file.source_dir));
                }
            }
        }

        for file in sorted_files {
            if self.sources.contains_key(&file.name) {
                continue;
            }

            let resolved = ResolvedTemplate::File(file.absolute_path.clone());
            // inline entries keep shadowing files with the same name
            self.templates
                .entry(file.name.clone())
                .or_insert_with(|| resolved.clone());
            self.templates
                .entry(file.name_with_ext.clone())
                .or_insert(resolved);
            self.sources
                .insert(file.name, (file.absolute_path, file.source_dir));
        }

        Ok(())
    }

    /// Walks `dir` and registers every template found.
    pub fn add_directory(&mut self, dir: impl AsRef<Path>) -> Result<usize, RegistryError> {
        let dir = dir.as_ref();
        let files = walk_template_dir(dir).map_err(|e| RegistryError::ReadError {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        let count = files.len();
        self.add_from_files(files)?;
        tracing::debug!(dir = %dir.display(), count, "registered template overrides");
        Ok(count)
    }

    pub fn get(&self, name: &str) -> Result<&ResolvedTemplate, RegistryError> {
        self.templates
            .get(name)
            .or_else(|| self.builtin.get(name))
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    /// Template source, read from disk for file templates.
    pub fn get_content(&self, name: &str) -> Result<String, RegistryError> {
        match self.get(name)? {
            ResolvedTemplate::Inline(content) => Ok(content.clone()),
            ResolvedTemplate::File(path) => {
                std::fs::read_to_string(path).map_err(|e| RegistryError::ReadError {
                    path: path.clone(),
                    message: e.to_string(),
                })
            }
        }
    }

    /// All resolvable names, sorted and without duplicates.
    pub fn names(&self) -> Vec<&str> {
        self.templates
            .keys()
            .chain(self.builtin.keys())
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names().len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty() && self.builtin.is_empty()
    }
}

/// Recursively collects template files under `root`.
pub fn walk_template_dir(root: impl AsRef<Path>) -> Result<Vec<TemplateFile>, std::io::Error> {
    let root_canonical = root.as_ref().canonicalize()?;
    let mut files = Vec::new();
    walk_dir_recursive(&root_canonical, &root_canonical, &mut files)?;
    Ok(files)
}

fn walk_dir_recursive(
    current: &Path,
    root: &Path,
    files: &mut Vec<TemplateFile>,
) -> Result<(), std::io::Error> {
    for entry in std::fs::read_dir(current)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_dir_recursive(&path, root, files)?;
        } else if let Some(template_file) = try_parse_template_file(&path, root) {
            files.push(template_file);
        }
    }
    Ok(())
}

fn try_parse_template_file(path: &Path, root: &Path) -> Option<TemplateFile> {
    let path_str = path.to_string_lossy();
    let extension = TEMPLATE_EXTENSIONS
        .iter()
        .find(|ext| path_str.ends_with(*ext))?;

    let relative = path.strip_prefix(root).ok()?;
    let name_with_ext = relative
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/");
    let name = name_with_ext.strip_suffix(extension)?.to_string();

    Some(TemplateFile::new(name, name_with_ext, path, root))
}
