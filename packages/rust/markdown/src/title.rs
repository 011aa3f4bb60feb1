//! Display titles for markdown documents.
//!
//! A title comes from the first line of the file when that line is a `#`
//! heading. Anything else falls back to a title built from the file name.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::trace;

/// Title for a document: its first-line heading, or the file-name fallback.
///
/// Never fails. Read and decode errors select the fallback.
pub fn document_title(path: &Path) -> String {
    match heading_title(path) {
        Some(title) => title,
        None => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            fallback_title(&stem)
        }
    }
}

/// Read the first line of `path` and return its heading text, if any.
///
/// Exactly one leading `#` is removed before trimming, so `## Setup`
/// yields `# Setup`. An empty heading counts as no heading.
pub fn heading_title(path: &Path) -> Option<String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            trace!(path = %path.display(), error = %e, "cannot open document");
            return None;
        }
    };

    let mut first_line = String::new();
    if let Err(e) = BufReader::new(file).read_line(&mut first_line) {
        trace!(path = %path.display(), error = %e, "cannot read first line");
        return None;
    }

    heading_text(&first_line)
}

/// Heading text of a single line, or `None` when it is not a heading.
pub fn heading_text(line: &str) -> Option<String> {
    let line = line.trim_start_matches('\u{feff}').trim();
    let title = line.strip_prefix('#')?.trim();
    // A bare `#` would render as `- : path`; use the file-name title instead.
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Build a title from a file stem: underscores become spaces and each word
/// is capitalized (`01_intro` → `01 Intro`, `error_HANDLING` → `Error Handling`).
///
/// A word is a run of alphabetic characters; the first letter of each run is
/// uppercased and the rest lowercased.
pub fn fallback_title(stem: &str) -> String {
    let mut title = String::with_capacity(stem.len());
    let mut in_word = false;

    for c in stem.replace('_', " ").chars() {
        if c.is_alphabetic() {
            if in_word {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            title.push(c);
            in_word = false;
        }
    }

    title
}
