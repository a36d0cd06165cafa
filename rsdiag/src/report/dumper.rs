//! Section-grouped INI dump
//!
//! Headers are emitted positionally: a new `[section]` line appears whenever a
//! record's section differs from the one before it, so the dump mirrors the
//! file's own order line for line. Embedded line breaks are escaped so every
//! record stays on exactly one line.

use rsdiag_common::ConfigRecord;
use std::borrow::Cow;

const INDENT: &str = "  ";

/// Render records as indented `[section]` headers and `key=value` lines
pub fn dump_sections(records: &[ConfigRecord]) -> Vec<String> {
    let mut lines = Vec::with_capacity(records.len() + 1);
    let mut current: Option<&str> = None;

    for record in records {
        if current != Some(record.section.as_str()) {
            current = Some(record.section.as_str());
            lines.push(format!("{}[{}]", INDENT, escape_line_breaks(&record.section)));
        }
        lines.push(format!(
            "{}{}={}",
            INDENT,
            escape_line_breaks(&record.key),
            escape_line_breaks(&record.value.to_string())
        ));
    }

    lines
}

fn escape_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains(['\r', '\n']) {
        Cow::Owned(text.replace('\r', "\\r").replace('\n', "\\n"))
    } else {
        Cow::Borrowed(text)
    }
}
