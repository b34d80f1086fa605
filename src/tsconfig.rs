//! Assembly of complete tsconfig.json documents.
//! Joins a parsed template, caller overrides, and resolved source paths into
//! serialized output text.

use std::io;

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::ConverterResult;
use crate::merge::merge_settings;
use crate::timestamp::{create_friendly_timestamp, TimestampSettings};

/// How much to indent created JSON files.
const INDENTATION: &[u8] = b"    ";

/// Serializes a settings structure with 4-space indentation.
///
/// Key order follows insertion order, so output is byte-identical across
/// runs for identical inputs.
fn serialize_settings(settings: &Value) -> ConverterResult<String> {
    let formatter = PrettyFormatter::with_indent(INDENTATION);
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

    settings.serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8.
    String::from_utf8(buffer)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error).into())
}

/// Joins source file paths into a tsconfig template.
///
/// Merges overrides onto the template, then forcibly sets the `files` key to
/// the resolved source paths, regardless of anything the merge produced
/// under it.
///
/// # Arguments
/// * `template` - Parsed template structure for a tsconfig.json
/// * `overrides` - Caller overrides to merge onto the template
/// * `source_files` - Resolved source file paths
/// * `date` - Timestamp to generate on top of the file
/// * `settings` - Settings for the timestamp header
///
/// # Returns
/// * The resultant completed tsconfig.json text
pub fn create_target_tsconfig(
    template: &Value,
    overrides: &Value,
    source_files: &[String],
    date: NaiveDateTime,
    settings: &TimestampSettings,
) -> ConverterResult<String> {
    let mut merged = merge_settings(template, overrides);

    if let Some(structure) = merged.as_object_mut() {
        structure.insert(
            "files".to_string(),
            Value::from(source_files.to_vec()),
        );
    }

    let serialized = serialize_settings(&merged)?;

    if settings.include_timestamp {
        let timestamp = create_friendly_timestamp(date, settings);
        return Ok(format!("// {}\n\n{}", timestamp, serialized));
    }

    Ok(serialized)
}
