//! Creation of `/// <reference />` manifest files from resolved source paths.

use chrono::NaiveDateTime;

use crate::timestamp::{create_friendly_timestamp, TimestampSettings};

/// Creates the contents of a /// references file.
///
/// Each source path becomes one reference line, rendered verbatim, followed
/// by a trailing blank line. An empty path list without a timestamp yields
/// an empty file.
///
/// # Arguments
/// * `source_files` - Resolved source paths to reference
/// * `date` - Timestamp to generate on top of the file
/// * `settings` - Settings for the timestamp header
pub fn create_references_file(
    source_files: &[String],
    date: NaiveDateTime,
    settings: &TimestampSettings,
) -> String {
    let mut lines: Vec<String> = source_files
        .iter()
        .map(|source_file| format!(r#"/// <reference path="{}" />"#, source_file))
        .collect();
    lines.push(String::new());

    if settings.include_timestamp {
        let timestamp = create_friendly_timestamp(date, settings);
        lines.insert(0, String::new());
        lines.insert(0, format!("// {}", timestamp));
    }

    lines.join("\n")
}
