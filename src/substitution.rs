//! Variable substitution engine for MSBuild-style tokens.
//! Resolves `$(name)` property tokens and `@(name)` item tokens inside raw
//! source paths using pluggable per-category resolvers.

use std::sync::LazyLock;

use log::warn;
use regex::Regex;

/// Resolves a captured token name (or a whole file path) to its replacement.
pub type Resolver = Box<dyn Fn(&str) -> String>;

/// MSBuild values to replace in raw source file paths.
///
/// Each field is an independent resolver for one substitution category.
/// A missing resolver means "no transformation for this category".
#[derive(Default)]
pub struct Replacements {
    /// Resolves `$(name)` property tokens by name.
    pub properties: Option<Resolver>,

    /// Resolves `@(name)` item tokens by name.
    pub items: Option<Resolver>,

    /// Transforms a fully assembled file path as a final pass.
    pub files: Option<Resolver>,
}

/// Substitution token categories found inside raw source paths.
#[derive(Clone, Copy, Debug)]
pub enum TokenKind {
    /// A `$(name)` PropertyGroup token.
    Property,

    /// An `@(name)` ItemGroup token.
    Item,
}

static PROPERTY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\(([^)]+)\)").unwrap());

static ITEM_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\(([^)]+)\)").unwrap());

/// Upper bound on replacements per substitution call. A resolver whose
/// output reintroduces a matching token would otherwise never terminate.
const MAX_PASSES: usize = 32;

impl TokenKind {
    fn pattern(self) -> &'static Regex {
        match self {
            TokenKind::Property => &PROPERTY_TOKEN,
            TokenKind::Item => &ITEM_TOKEN,
        }
    }

    /// Reassembles the full token text for a captured name.
    pub fn token(self, name: &str) -> String {
        match self {
            TokenKind::Property => format!("$({})", name),
            TokenKind::Item => format!("@({})", name),
        }
    }
}

/// Replaces every token of one category inside `text` using `resolver`.
///
/// The text is rescanned after each replacement, so resolver output
/// containing further tokens is resolved too, up to the replacement bound.
/// A resolver may decline a token by returning the token text itself; the
/// token is then kept verbatim and scanning resumes after it.
///
/// # Arguments
/// * `text` - Raw text possibly containing substitution tokens
/// * `kind` - Which token category to resolve
/// * `resolver` - Resolver for the category, if any
///
/// # Returns
/// * The text with all reachable tokens of the category replaced; the text
///   unchanged when no resolver is supplied.
pub fn substitute(text: &str, kind: TokenKind, resolver: Option<&Resolver>) -> String {
    let resolver = match resolver {
        Some(resolver) => resolver,
        None => return text.to_string(),
    };

    let pattern = kind.pattern();
    let mut result = text.to_string();
    let mut search_from = 0;
    let mut replacements = 0;

    while let Some(captures) = pattern.captures_at(&result, search_from) {
        let token = captures.get(0).map_or(0..0, |m| m.range());
        let name = captures.get(1).map_or("", |m| m.as_str());
        let replacement = resolver(name);

        if replacement.as_str() == &result[token.clone()] {
            search_from = token.end;
            continue;
        }

        if replacements >= MAX_PASSES {
            warn!(
                "Gave up substituting {:?} tokens after {} replacements: {}",
                kind, MAX_PASSES, result
            );
            break;
        }

        let start = token.start;
        result.replace_range(token, &replacement);
        search_from = start;
        replacements += 1;
    }

    result
}
