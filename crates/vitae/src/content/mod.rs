//! The résumé data the page is rendered from.
//!
//! Content is authored once and never mutated. The built-in résumé is
//! available through [`ResumeContent::builtin`]; a JSON or YAML file with the
//! same shape can replace it.

mod builtin;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// QR service the LinkedIn code image is fetched from.
pub const QR_CODE_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=";

const DEFAULT_CONTACT_BLURB: &str = "I'm always open to discussing new projects, creative ideas, or opportunities to be part of an innovative team.";

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported content file {} (expected .json, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    pub name: String,
    pub tagline: String,
    pub contact_info: ContactInfo,
    pub career_objective: String,
    pub education: Education,
    /// Skill groups in display order.
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub achievements: Vec<String>,
    pub interests: Vec<String>,
    #[serde(default)]
    pub resume: ResumeDownload,
    #[serde(default = "default_contact_blurb")]
    pub contact_blurb: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Display text, may carry a decorative prefix such as a pin emoji.
    pub location: String,
    /// Display text, may carry a decorative prefix such as an envelope emoji.
    pub email: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub university: String,
    pub graduation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: Vec<String>,
}

/// Where the downloadable PDF lives and what it is saved as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDownload {
    pub url: String,
    /// Defaults to `<Name_With_Underscores>_Resume.pdf`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl Default for ResumeDownload {
    fn default() -> Self {
        Self {
            url: "/resume.pdf".to_string(),
            file_name: None,
        }
    }
}

fn default_contact_blurb() -> String {
    DEFAULT_CONTACT_BLURB.to_string()
}

impl ResumeContent {
    /// Loads content from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let is_json = match ext.as_deref() {
            Some("json") => true,
            Some("yaml") | Some("yml") => false,
            _ => {
                return Err(ContentError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content: Self = if is_json {
            serde_json::from_str(&raw).map_err(|source| ContentError::Json {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            serde_yaml::from_str(&raw).map_err(|source| ContentError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        };
        tracing::debug!(path = %path.display(), projects = content.projects.len(), "loaded content");
        Ok(content)
    }

    /// Navigation monogram: the first letter of each word of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn resume_file_name(&self) -> String {
        match &self.resume.file_name {
            Some(name) => name.clone(),
            None => format!("{}_Resume.pdf", self.name.split_whitespace().collect::<Vec<_>>().join("_")),
        }
    }
}

impl ContactInfo {
    /// The bare address, without any decorative prefix.
    pub fn email_address(&self) -> &str {
        self.email
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .trim_end()
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email_address())
    }

    pub fn qr_code_url(&self) -> String {
        format!("{}{}", QR_CODE_ENDPOINT, self.linkedin)
    }
}

impl SkillGroup {
    /// Category with its first letter upper-cased (`coreCS` → `CoreCS`).
    pub fn label(&self) -> String {
        let mut chars = self.category.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
