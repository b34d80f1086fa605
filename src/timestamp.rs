//! Friendly timestamp rendering for generated file headers.

use chrono::NaiveDateTime;

/// Settings for the optional generated-file timestamp header.
#[derive(Clone, Debug, Default)]
pub struct TimestampSettings {
    /// Whether to include a timestamp before files.
    pub include_timestamp: bool,

    /// Timestamp locale, if not en-US.
    pub locale: Option<String>,
}

/// Date format per recognized locale. Unrecognized locales fall back to an
/// unambiguous ISO-like rendering.
fn locale_format(locale: &str) -> &'static str {
    match locale {
        "en-US" => "%-m/%-d/%Y, %-I:%M:%S %p",
        "en-GB" => "%d/%m/%Y, %H:%M:%S",
        _ => "%Y-%m-%d %H:%M:%S",
    }
}

/// Renders the friendly `Generated <date>` timestamp text.
///
/// # Arguments
/// * `date` - The date to render
/// * `settings` - Timestamp settings carrying the locale
pub fn create_friendly_timestamp(date: NaiveDateTime, settings: &TimestampSettings) -> String {
    let locale = settings.locale.as_deref().unwrap_or("en-US");

    format!("Generated {}", date.format(locale_format(locale)))
}
