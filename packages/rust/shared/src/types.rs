//! Core domain types for docnav outlines.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// A standalone page at the documentation root (e.g. `Home` → `index.md`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    /// Label shown in the navigation.
    pub title: String,
    /// File name relative to the documentation root.
    pub file: String,
}

/// A section label bound to one subdirectory of the documentation root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    /// Label shown in the navigation (e.g. `Part I – Bash Fundamentals`).
    pub label: String,
    /// Subdirectory name under the documentation root.
    pub dir: String,
}

/// The ordered pages and sections the navigation builder looks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLayout {
    /// Root pages, emitted first when present.
    #[serde(default = "default_pages")]
    pub pages: Vec<PageSpec>,
    /// Sections, emitted in order when their directory exists.
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionSpec>,
}

impl Default for NavLayout {
    fn default() -> Self {
        Self {
            pages: default_pages(),
            sections: default_sections(),
        }
    }
}

fn page(title: &str, file: &str) -> PageSpec {
    PageSpec {
        title: title.into(),
        file: file.into(),
    }
}

fn section(label: &str, dir: &str) -> SectionSpec {
    SectionSpec {
        label: label.into(),
        dir: dir.into(),
    }
}

fn default_pages() -> Vec<PageSpec> {
    vec![page("Home", "index.md"), page("About", "about.md")]
}

fn default_sections() -> Vec<SectionSpec> {
    vec![
        section("Part I – Bash Fundamentals", "part1_bash_fundamentals"),
        section(
            "Part II – Advanced Security Scripting",
            "part2_advanced_security",
        ),
        section("Part III – Real-World Projects", "part3_real_world_projects"),
        section("Appendices", "appendices"),
    ]
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A markdown file discovered inside a section directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name including extension (e.g. `01_intro.md`).
    pub file_name: String,
    /// First integer in the file name; `None` sorts after every number.
    pub chapter_number: Option<u64>,
    /// Display title from the first-line heading or the file name.
    pub title: String,
}

// ---------------------------------------------------------------------------
// Outline
// ---------------------------------------------------------------------------

/// A single `title: path` navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display title.
    pub title: String,
    /// Path relative to the documentation root.
    pub path: String,
}

/// A section header with its ordered entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    pub label: String,
    pub dir: String,
    pub entries: Vec<NavEntry>,
}

/// The full navigation outline: root pages first, then sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavOutline {
    pub pages: Vec<NavEntry>,
    pub sections: Vec<NavSection>,
}

impl NavOutline {
    /// Number of entries across pages and sections (headers excluded).
    pub fn entry_count(&self) -> usize {
        self.pages.len() + self.sections.iter().map(|s| s.entries.len()).sum::<usize>()
    }
}
