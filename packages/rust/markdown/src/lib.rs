//! Markdown document helpers for docnav.
//!
//! Turns files on disk into [`Document`]s: display title, chapter number
//! for ordering, and the quoting rules for emitting them as nav entries.

mod title;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::path::Path;
use std::sync::LazyLock;

use docnav_shared::Document;
use regex::Regex;
use tracing::debug;

pub use title::{document_title, fallback_title, heading_text, heading_title};

/// Build a [`Document`] for a file, reading its title from disk.
///
/// Returns `None` only when the path has no UTF-8 file name.
pub fn read_document(path: &Path) -> Option<Document> {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        debug!(path = %path.display(), "skipping file with non UTF-8 name");
        return None;
    };

    Some(Document {
        file_name: file_name.to_string(),
        chapter_number: chapter_number(file_name),
        title: document_title(path),
    })
}

// ---------------------------------------------------------------------------
// Chapter ordering
// ---------------------------------------------------------------------------

/// First run of decimal digits in a file name, parsed as an integer.
///
/// Numbers too large for `u64` saturate so they still sort among numbered files.
pub fn chapter_number(file_name: &str) -> Option<u64> {
    static DIGITS_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

    DIGITS_RE
        .find(file_name)
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
}

/// Order documents by chapter number, un-numbered last, then by file name.
pub fn compare_documents(a: &Document, b: &Document) -> Ordering {
    let key = |d: &Document| (d.chapter_number.is_none(), d.chapter_number);
    key(a)
        .cmp(&key(b))
        .then_with(|| a.file_name.cmp(&b.file_name))
}

/// Sort documents in navigation order.
pub fn sort_documents(docs: &mut [Document]) {
    docs.sort_by(compare_documents);
}

// ---------------------------------------------------------------------------
// Quoting
// ---------------------------------------------------------------------------

/// Quote an entry title when it contains a colon.
pub fn quote_title(title: &str) -> Cow<'_, str> {
    if title.contains(':') {
        Cow::Owned(double_quote(title))
    } else {
        Cow::Borrowed(title)
    }
}

/// Quote a section label unless it is plain ASCII words.
///
/// `Appendices` stays bare; `Part I – Bash Fundamentals` is quoted.
pub fn quote_label(label: &str) -> Cow<'_, str> {
    let plain = label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ');
    if plain {
        Cow::Borrowed(label)
    } else {
        Cow::Owned(double_quote(label))
    }
}

fn double_quote(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(file_name: &str) -> Document {
        Document {
            file_name: file_name.into(),
            chapter_number: chapter_number(file_name),
            title: file_name.into(),
        }
    }

    #[test]
    fn chapter_number_takes_first_digit_run() {
        assert_eq!(chapter_number("01_intro.md"), Some(1));
        assert_eq!(chapter_number("chapter12_part3.md"), Some(12));
        assert_eq!(chapter_number("appendix.md"), None);
        assert_eq!(
            chapter_number("99999999999999999999999_big.md"),
            Some(u64::MAX)
        );
    }

    #[test]
    fn sort_orders_numbered_then_unnumbered() {
        let mut docs = vec![
            doc("glossary.md"),
            doc("10_testing.md"),
            doc("02_variables.md"),
            doc("cheat_sheet.md"),
            doc("01_intro.md"),
            doc("1000_epilogue.md"),
        ];
        sort_documents(&mut docs);

        let names: Vec<&str> = docs.iter().map(|d| d.file_name.as_str()).collect();
        assert_eq!(
            names,
            [
                "01_intro.md",
                "02_variables.md",
                "10_testing.md",
                "1000_epilogue.md",
                "cheat_sheet.md",
                "glossary.md",
            ]
        );
    }

    #[test]
    fn sorted_chapters_are_non_decreasing() {
        let mut docs: Vec<Document> = ["7_g.md", "3_c.md", "3_b.md", "12_l.md", "0_a.md"]
            .into_iter()
            .map(doc)
            .collect();
        sort_documents(&mut docs);
        let numbers: Vec<u64> = docs.iter().filter_map(|d| d.chapter_number).collect();
        assert!(numbers.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(docs[1].file_name, "3_b.md");
    }

    #[test]
    fn quote_title_only_with_colon() {
        assert_eq!(quote_title("Variables"), "Variables");
        assert_eq!(quote_title("Title: Sub"), "\"Title: Sub\"");
        assert_eq!(quote_title("Say \"hi\": now"), r#""Say \"hi\": now""#);
    }

    #[test]
    fn quote_label_for_non_plain_text() {
        assert_eq!(quote_label("Appendices"), "Appendices");
        assert_eq!(
            quote_label("Part I – Bash Fundamentals"),
            "\"Part I – Bash Fundamentals\""
        );
        assert_eq!(quote_label("Part III: Projects"), "\"Part III: Projects\"");
    }
}
