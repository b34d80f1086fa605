//! csproj2tsconfig converts legacy .csproj build manifests into modern
//! project configuration: a tsconfig.json built from a template plus the
//! manifest's source files, and/or a /// references manifest.

/// Command-line interface module for the csproj2tsconfig application
pub mod cli;

/// Conversion orchestration with pluggable file access and clock
pub mod converter;

/// Error types and handling for the csproj2tsconfig application
pub mod error;

/// Deep merging of partial tsconfig settings structures
pub mod merge;

/// Creation of /// references manifest files
pub mod references;

/// Settings/file validation and status-code mapping around the converter
pub mod runner;

/// Conversion of raw CLI settings into runtime conversion settings
pub mod settings;

/// Extraction of source file paths from .csproj manifests
pub mod source_parser;

/// MSBuild-style token substitution
/// Resolves $(name) property and @(name) item tokens via pluggable resolvers
pub mod substitution;

/// Parsing of JSON-with-comments tsconfig templates
pub mod template;

/// Friendly timestamp rendering for generated file headers
pub mod timestamp;

/// Assembly of complete tsconfig.json documents
pub mod tsconfig;
