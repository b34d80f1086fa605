//! Conversion of raw CLI settings into runtime conversion settings.
//! Classifies `key=value` replacement pairs into the three substitution
//! categories and shapes per-output settings for the converter.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::cli::Args;
use crate::error::{ConverterError, ConverterResult};
use crate::substitution::{Replacements, Resolver, TokenKind};
use crate::timestamp::TimestampSettings;

/// Settings to generate one output file.
#[derive(Clone, Debug)]
pub struct OutputFileSettings {
    /// File path to output into.
    pub file_name: PathBuf,

    /// Settings for the timestamp header.
    pub timestamp: TimestampSettings,
}

/// Settings to generate an output tsconfig file.
#[derive(Clone, Debug)]
pub struct TsconfigOutputSettings {
    /// Shared output file settings.
    pub output: OutputFileSettings,

    /// Path to the template tsconfig file to merge settings onto.
    pub template: PathBuf,

    /// Any overrides to merge onto the template structure.
    pub overrides: serde_json::Value,
}

/// Runtime settings to convert one .csproj file.
pub struct ConversionSettings {
    /// File path to the source .csproj file.
    pub csproj: PathBuf,

    /// MSBuild values to replace in raw source file paths.
    pub replacements: Replacements,

    /// Settings to generate a /// references file, if any.
    pub references: Option<OutputFileSettings>,

    /// Settings to generate a tsconfig file, if any.
    pub tsconfig: Option<TsconfigOutputSettings>,
}

/// Builds a name → value resolver over an exact-match map.
///
/// Names absent from the map resolve through `fallback`, which lets
/// property and item resolvers decline by reassembling the original token.
fn map_resolver(
    map: IndexMap<String, String>,
    fallback: impl Fn(&str) -> String + 'static,
) -> Option<Resolver> {
    if map.is_empty() {
        return None;
    }

    Some(Box::new(move |name| {
        map.get(name).cloned().unwrap_or_else(|| fallback(name))
    }))
}

/// Classifies raw `key=value` replacement pairs into per-category resolvers.
///
/// Keys of the form `$(name)` feed the properties resolver, `@(name)` the
/// items resolver, and anything else the whole-path files resolver (matched
/// against the fully resolved file name).
///
/// # Errors
/// * `ConverterError::SettingsError` for a pair without an `=` separator
pub fn parse_replacements(pairs: &[String]) -> ConverterResult<Replacements> {
    let mut properties = IndexMap::new();
    let mut items = IndexMap::new();
    let mut files = IndexMap::new();

    for pair in pairs {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            ConverterError::SettingsError(format!(
                "Malformed replacement (expected key=value): '{}'",
                pair
            ))
        })?;

        if let Some(name) = token_name(key, "$(") {
            properties.insert(name.to_string(), value.to_string());
        } else if let Some(name) = token_name(key, "@(") {
            items.insert(name.to_string(), value.to_string());
        } else {
            files.insert(key.to_string(), value.to_string());
        }
    }

    Ok(Replacements {
        properties: map_resolver(properties, |name| TokenKind::Property.token(name)),
        items: map_resolver(items, |name| TokenKind::Item.token(name)),
        files: map_resolver(files, str::to_string),
    })
}

/// Extracts `name` from a `prefix + name + ")"` replacement key.
fn token_name<'k>(key: &'k str, prefix: &str) -> Option<&'k str> {
    key.strip_prefix(prefix)?.strip_suffix(')')
}

/// Converts raw CLI settings to runtime settings.
///
/// # Arguments
/// * `args` - Raw CLI settings
///
/// # Returns
/// * The equivalent runtime settings
///
/// # Errors
/// * `ConverterError::SettingsError` for malformed replacement pairs
pub fn parse_settings(args: &Args) -> ConverterResult<ConversionSettings> {
    let timestamp = TimestampSettings {
        include_timestamp: args.timestamp,
        locale: args.locale.clone(),
    };

    let references = args.reference.as_ref().map(|file_name| OutputFileSettings {
        file_name: file_name.clone(),
        timestamp: timestamp.clone(),
    });

    let tsconfig = match (&args.target, &args.template) {
        (Some(target), Some(template)) => Some(TsconfigOutputSettings {
            output: OutputFileSettings {
                file_name: target.clone(),
                timestamp: timestamp.clone(),
            },
            template: template.clone(),
            overrides: serde_json::Value::Null,
        }),
        (Some(target), None) => Some(TsconfigOutputSettings {
            output: OutputFileSettings {
                file_name: target.clone(),
                timestamp,
            },
            // Without an explicit template the target itself is the base.
            template: target.clone(),
            overrides: serde_json::Value::Null,
        }),
        (None, _) => None,
    };

    Ok(ConversionSettings {
        csproj: args.csproj.clone(),
        replacements: parse_replacements(&args.replacement)?,
        references,
        tsconfig,
    })
}
