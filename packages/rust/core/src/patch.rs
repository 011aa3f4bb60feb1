//! Site configuration patcher.
//!
//! Replaces the `nav:` block of an `mkdocs.yml`-style file with a freshly
//! generated outline. The edit is line-oriented text substitution so that
//! everything outside the block, comments and formatting included, survives
//! byte for byte.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, instrument, warn};

use docnav_shared::{DocNavError, NavLayout, Result};

use crate::nav::generate_nav;

/// The `nav:` block: marker line, body, blank lines kept before the next
/// section, then the first allow-listed top-level key or end of input.
static NAV_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)(^nav:\s*\n)(?s:(.*?))((?:^[ \t]*\n)*)(^(?:plugins|copyright|extra|theme|site_[A-Za-z0-9_]*|repo_[A-Za-z0-9_]*|docs_dir|markdown_extensions):|\z)",
    )
    .expect("valid regex")
});

/// What happened to the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The `nav:` block was replaced and the file rewritten.
    Updated,
    /// No `nav:` block was found; the file was left untouched.
    NavNotFound,
}

/// Result of [`update_config_nav`].
#[derive(Debug, Clone)]
pub struct PatchReport {
    pub outcome: PatchOutcome,
    /// Non-blank lines in the generated outline.
    pub nav_items: usize,
}

/// Regenerate the navigation for `docs_root` and splice it into `config_path`.
///
/// Fails with [`DocNavError::ConfigNotFound`] when the configuration file is
/// absent, without creating it. A file with no `nav:` block is not an error:
/// it is left as is and reported as [`PatchOutcome::NavNotFound`].
#[instrument(skip_all, fields(config = %config_path.display()))]
pub fn update_config_nav(
    config_path: &Path,
    docs_root: &Path,
    layout: &NavLayout,
) -> Result<PatchReport> {
    if !config_path.exists() {
        return Err(DocNavError::config_not_found(config_path));
    }

    let content =
        std::fs::read_to_string(config_path).map_err(|e| DocNavError::io(config_path, e))?;

    let nav = generate_nav(docs_root, layout);
    let nav_items = nav.lines().filter(|line| !line.trim().is_empty()).count();

    let outcome = match splice_nav(&content, &nav) {
        Some(patched) => {
            std::fs::write(config_path, patched).map_err(|e| DocNavError::io(config_path, e))?;
            info!(nav_items, "nav section updated");
            PatchOutcome::Updated
        }
        None => {
            warn!("no nav section found, file left unchanged");
            PatchOutcome::NavNotFound
        }
    };

    Ok(PatchReport {
        outcome,
        nav_items,
    })
}

/// Replace the body of the first `nav:` block in `content` with `nav`.
///
/// The marker line, blank lines separating the block from the next key, and
/// the key line itself are kept as found. Returns `None` when there is no
/// `nav:` line.
pub fn splice_nav(content: &str, nav: &str) -> Option<String> {
    let caps = NAV_BLOCK_RE.captures(content)?;
    let block = caps.get(0)?;

    let mut patched = String::with_capacity(content.len() + nav.len());
    patched.push_str(&content[..block.start()]);
    patched.push_str(&caps[1]);
    patched.push_str(nav);
    patched.push('\n');
    patched.push_str(&caps[3]);
    patched.push_str(&caps[4]);
    patched.push_str(&content[block.end()..]);
    Some(patched)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
