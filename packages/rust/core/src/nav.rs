//! Navigation outline builder.
//!
//! Scans the documentation root for the root pages and section directories
//! named by a [`NavLayout`], and renders them as an indented `nav` block:
//!
//! ```text
//!   - Home: index.md
//!   - "Part I – Bash Fundamentals":
//!     - Introduction: part1_bash_fundamentals/01_intro.md
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use docnav_markdown::{quote_label, quote_title, read_document, sort_documents};
use docnav_shared::{Document, NavEntry, NavLayout, NavOutline, NavSection, SectionSpec};

/// Indentation for root pages and section headers.
const TOP_INDENT: &str = "  ";

/// Indentation for entries under a section header.
const ENTRY_INDENT: &str = "    ";

/// Build the outline for a documentation root.
///
/// Missing pages and missing section directories are omitted. Nothing here
/// fails: unreadable documents get a file-name title and unreadable
/// directories contribute no entries.
#[instrument(skip_all, fields(docs_root = %docs_root.display()))]
pub fn build_outline(docs_root: &Path, layout: &NavLayout) -> NavOutline {
    let pages = layout
        .pages
        .iter()
        .filter(|page| docs_root.join(&page.file).exists())
        .map(|page| NavEntry {
            title: page.title.clone(),
            path: page.file.clone(),
        })
        .collect();

    let sections: Vec<NavSection> = layout
        .sections
        .iter()
        .filter_map(|spec| build_section(docs_root, spec))
        .collect();

    let outline = NavOutline { pages, sections };
    debug!(
        pages = outline.pages.len(),
        sections = outline.sections.len(),
        entries = outline.entry_count(),
        "navigation outline built"
    );
    outline
}

/// Render an outline as `nav` block lines joined by `\n`, no trailing newline.
pub fn render_outline(outline: &NavOutline) -> String {
    let mut lines: Vec<String> = Vec::new();

    for page in &outline.pages {
        lines.push(format!("{TOP_INDENT}- {}", entry_line(page)));
    }

    for section in &outline.sections {
        lines.push(format!("{TOP_INDENT}- {}:", quote_label(&section.label)));
        for entry in &section.entries {
            lines.push(format!("{ENTRY_INDENT}- {}", entry_line(entry)));
        }
    }

    lines.join("\n")
}

/// Build and render the outline in one step.
pub fn generate_nav(docs_root: &Path, layout: &NavLayout) -> String {
    render_outline(&build_outline(docs_root, layout))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn entry_line(entry: &NavEntry) -> String {
    format!("{}: {}", quote_title(&entry.title), entry.path)
}

fn build_section(docs_root: &Path, spec: &SectionSpec) -> Option<NavSection> {
    let dir = docs_root.join(&spec.dir);
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "section directory missing, skipping");
        return None;
    }

    let mut docs: Vec<Document> = list_markdown(&dir)
        .iter()
        .filter_map(|path| read_document(path))
        .collect();
    sort_documents(&mut docs);

    let entries = docs
        .into_iter()
        .map(|doc| NavEntry {
            path: format!("{}/{}", spec.dir, doc.file_name),
            title: doc.title,
        })
        .collect();

    Some(NavSection {
        label: spec.label.clone(),
        dir: spec.dir.clone(),
        entries,
    })
}

/// Markdown files directly inside `dir`, dotfiles included; subdirectories are skipped.
fn list_markdown(dir: &Path) -> Vec<PathBuf> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot list section directory");
            return Vec::new();
        }
    };

    read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_markdown(path))
        .collect()
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("docnav-nav-test-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn end_to_end_outline() {
        let tmp = temp_dir();
        write(&tmp, "index.md", "# Home\n");
        write(&tmp, "about.md", "# About\n");
        write(&tmp, "part1_bash_fundamentals/02_variables.md", "# Variables\n");
        write(&tmp, "part1_bash_fundamentals/01_intro.md", "# Introduction\n");

        let nav = generate_nav(&tmp, &NavLayout::default());
        let expected = [
            "  - Home: index.md",
            "  - About: about.md",
            "  - \"Part I – Bash Fundamentals\":",
            "    - Introduction: part1_bash_fundamentals/01_intro.md",
            "    - Variables: part1_bash_fundamentals/02_variables.md",
        ]
        .join("\n");
        assert_eq!(nav, expected);

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[test]
    fn missing_sections_are_omitted() {
        let tmp = temp_dir();
        write(&tmp, "appendices/a_glossary.md", "# Glossary\n");

        let outline = build_outline(&tmp, &NavLayout::default());
        assert!(outline.pages.is_empty());
        assert_eq!(outline.sections.len(), 1);
        assert_eq!(outline.sections[0].label, "Appendices");

        let nav = render_outline(&outline);
        assert!(!nav.contains("Part I"));
        assert_eq!(nav, "  - Appendices:\n    - Glossary: appendices/a_glossary.md");

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[test]
    fn empty_root_renders_nothing() {
        let tmp = temp_dir();
        assert_eq!(generate_nav(&tmp, &NavLayout::default()), "");
        std::fs::remove_dir_all(&tmp).ok();
    }

    #[test]
    fn colon_titles_are_quoted() {
        let tmp = temp_dir();
        write(&tmp, "part2_advanced_security/01_hashing.md", "# Title: Sub\n");

        let nav = generate_nav(&tmp, &NavLayout::default());
        assert!(nav.contains("    - \"Title: Sub\": part2_advanced_security/01_hashing.md"));

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[test]
    fn section_sorting_and_fallback_titles() {
        let tmp = temp_dir();
        write(&tmp, "appendices/cheat_sheet.md", "no heading here\n");
        write(&tmp, "appendices/10_resources.md", "# Resources\n");
        write(&tmp, "appendices/2_tools.md", "");
        write(&tmp, "appendices/notes.txt", "# Not markdown\n");
        write(&tmp, "appendices/.draft.md", "# Draft\n");
        write(&tmp, "appendices/nested/03_deep.md", "# Deep\n");

        let outline = build_outline(&tmp, &NavLayout::default());
        let entries = &outline.sections[0].entries;
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "appendices/2_tools.md",
                "appendices/10_resources.md",
                "appendices/.draft.md",
                "appendices/cheat_sheet.md",
            ]
        );
        assert_eq!(entries[0].title, "2 Tools");
        assert_eq!(entries[2].title, "Draft");
        assert_eq!(entries[3].title, "Cheat Sheet");

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[test]
    fn section_without_markdown_keeps_header() {
        let tmp = temp_dir();
        std::fs::create_dir_all(tmp.join("part3_real_world_projects")).unwrap();

        let nav = generate_nav(&tmp, &NavLayout::default());
        assert_eq!(nav, "  - \"Part III – Real-World Projects\":");

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[test]
    fn custom_layout_order_is_respected() {
        let tmp = temp_dir();
        write(&tmp, "guides/01_start.md", "# Start\n");
        write(&tmp, "reference/01_api.md", "# API\n");

        let layout = NavLayout {
            pages: vec![],
            sections: vec![
                SectionSpec {
                    label: "Reference".into(),
                    dir: "reference".into(),
                },
                SectionSpec {
                    label: "Guides".into(),
                    dir: "guides".into(),
                },
            ],
        };

        let nav = generate_nav(&tmp, &layout);
        assert_eq!(
            nav,
            "  - Reference:\n    - API: reference/01_api.md\n  - Guides:\n    - Start: guides/01_start.md"
        );

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[test]
    fn outline_serializes_to_json() {
        let tmp = temp_dir();
        write(&tmp, "index.md", "# Home\n");

        let outline = build_outline(&tmp, &NavLayout::default());
        let json = serde_json::to_value(&outline).unwrap();
        assert_eq!(json["pages"][0]["path"], "index.md");
        assert_eq!(json["sections"].as_array().map(Vec::len), Some(0));

        std::fs::remove_dir_all(&tmp).ok();
    }
}
