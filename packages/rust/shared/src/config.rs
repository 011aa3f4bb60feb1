//! Settings for docnav.
//!
//! Settings live in an optional `docnav.toml` at the project root.
//! CLI flags override settings file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DocNavError, Result};
use crate::types::{NavLayout, PageSpec, SectionSpec};

/// Default settings file name, looked up at the project root.
pub const SETTINGS_FILE_NAME: &str = "docnav.toml";

/// Top-level settings, deserialized from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Documentation root, relative to the project root.
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    /// Site configuration file to patch, relative to the project root.
    #[serde(default = "default_config_file")]
    pub config_file: String,

    /// Root pages (`[[pages]]`).
    #[serde(default = "default_pages")]
    pub pages: Vec<PageSpec>,

    /// Sections (`[[sections]]`).
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionSpec>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            config_file: default_config_file(),
            pages: default_pages(),
            sections: default_sections(),
        }
    }
}

fn default_docs_dir() -> String {
    "ebook".into()
}
fn default_config_file() -> String {
    "mkdocs.yml".into()
}
fn default_pages() -> Vec<PageSpec> {
    NavLayout::default().pages
}
fn default_sections() -> Vec<SectionSpec> {
    NavLayout::default().sections
}

impl Settings {
    /// The page and section layout handed to the navigation builder.
    pub fn layout(&self) -> NavLayout {
        NavLayout {
            pages: self.pages.clone(),
            sections: self.sections.clone(),
        }
    }

    /// Check that every page and section names a single plain path component.
    pub fn validate(&self) -> Result<()> {
        for page in &self.pages {
            if page.title.trim().is_empty() {
                return Err(DocNavError::settings(format!(
                    "page '{}' has an empty title",
                    page.file
                )));
            }
            check_component("page file", &page.file)?;
        }
        for section in &self.sections {
            if section.label.trim().is_empty() {
                return Err(DocNavError::settings(format!(
                    "section '{}' has an empty label",
                    section.dir
                )));
            }
            check_component("section dir", &section.dir)?;
        }
        Ok(())
    }
}

fn check_component(kind: &str, value: &str) -> Result<()> {
    let plain = !value.is_empty()
        && value != "."
        && value != ".."
        && !value.contains(['/', '\\']);
    if plain {
        Ok(())
    } else {
        Err(DocNavError::settings(format!(
            "{kind} '{value}' must be a single path component"
        )))
    }
}

// ---------------------------------------------------------------------------
// Settings loading
// ---------------------------------------------------------------------------

/// Load settings for a project.
///
/// An explicit path must exist. Without one, `<project_root>/docnav.toml` is
/// used when present and defaults otherwise.
pub fn load_settings(project_root: &Path, explicit: Option<&Path>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = project_root.join(SETTINGS_FILE_NAME);
            if !path.exists() {
                tracing::debug!(?path, "settings file not found, using defaults");
                return Ok(Settings::default());
            }
            path
        }
    };

    load_settings_from(&path)
}

/// Load and validate settings from a specific file path.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path).map_err(|e| DocNavError::io(path, e))?;

    let settings: Settings = toml::from_str(&content).map_err(|e| {
        DocNavError::settings(format!("failed to parse {}: {e}", path.display()))
    })?;
    settings.validate()?;

    tracing::debug!(?path, sections = settings.sections.len(), "loaded settings");
    Ok(settings)
}

/// Write a default `docnav.toml` at the project root.
/// Refuses to overwrite an existing file. Returns the path written.
pub fn init_settings(project_root: &Path) -> Result<PathBuf> {
    let path = project_root.join(SETTINGS_FILE_NAME);
    if path.exists() {
        return Err(DocNavError::settings(format!(
            "{} already exists",
            path.display()
        )));
    }

    let content = toml::to_string_pretty(&Settings::default())
        .map_err(|e| DocNavError::settings(e.to_string()))?;
    std::fs::write(&path, content).map_err(|e| DocNavError::io(&path, e))?;
    tracing::info!(?path, "created default settings file");

    Ok(path)
}

/// Resolve a settings-relative path against the project root.
pub fn resolve(project_root: &Path, relative: &str) -> PathBuf {
    project_root.join(relative)
}
