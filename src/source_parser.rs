//! Parses source file paths from .csproj manifests.
//! Recognizes `<TypeScriptCompile Include="..." />` inclusion elements and
//! resolves MSBuild tokens in their paths via the substitution engine.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::substitution::{substitute, Replacements, TokenKind};

/// Matches a single inclusion element whose Include attribute ends in .ts,
/// tolerating single or double quoting, attribute casing, and an optional
/// self-closing slash.
static INCLUDE_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<TypeScriptCompile\s+Include=['"]([^'"]*\.ts)['"]\s*/?\s*>"#).unwrap()
});

/// Retrieves source file paths from raw .csproj contents.
///
/// For each inclusion element, the raw path goes through the properties
/// pass, then the items pass, then the whole-path files transform. Entries
/// still containing a `$` afterwards reference unknown properties and are
/// dropped. Manifest order is preserved; nothing is deduplicated.
///
/// # Arguments
/// * `contents` - Raw contents of a .csproj file
/// * `replacements` - MSBuild values to replace in raw source file paths
///
/// # Returns
/// * The manifest's resolved source file paths, in manifest order. A
///   manifest without inclusion elements yields an empty list.
pub fn parse_csproj_source(contents: &str, replacements: &Replacements) -> Vec<String> {
    INCLUDE_ELEMENT
        .captures_iter(contents)
        .map(|captures| {
            let raw_path = &captures[1];
            debug!("Found inclusion element: {}", raw_path);

            let resolved = substitute(
                raw_path,
                TokenKind::Property,
                replacements.properties.as_ref(),
            );
            let resolved =
                substitute(&resolved, TokenKind::Item, replacements.items.as_ref());

            match &replacements.files {
                Some(resolver) => resolver(&resolved),
                None => resolved,
            }
        })
        .filter(|path| {
            let resolved = !path.contains('$');
            if !resolved {
                debug!("Dropping unresolved source path: {}", path);
            }
            resolved
        })
        .collect()
}
