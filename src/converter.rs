//! Conversion orchestration for .csproj manifests.
//! Reads the manifest once, then produces the requested references and/or
//! tsconfig outputs. File access and the clock sit behind traits so the
//! whole pipeline is testable without touching disk.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use log::debug;

use crate::error::{ConverterError, ConverterResult};
use crate::references::create_references_file;
use crate::settings::{ConversionSettings, OutputFileSettings, TsconfigOutputSettings};
use crate::source_parser::parse_csproj_source;
use crate::template::parse_tsconfig_template;
use crate::tsconfig::create_target_tsconfig;

/// Reads and writes files as strings.
pub trait FileSystem {
    /// Reads a file's contents as a string.
    fn read(&self, path: &Path) -> ConverterResult<String>;

    /// Writes new string contents to a file.
    fn write(&self, path: &Path, contents: &str) -> ConverterResult<()>;

    /// Whether a file exists at the path.
    fn exists(&self, path: &Path) -> bool;
}

/// Provides the current date.
pub trait Clock {
    /// The current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Disk-backed file access.
pub struct DiskFileSystem;

impl FileSystem for DiskFileSystem {
    fn read(&self, path: &Path) -> ConverterResult<String> {
        fs::read_to_string(path).map_err(ConverterError::IoError)
    }

    fn write(&self, path: &Path, contents: &str) -> ConverterResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(ConverterError::IoError)?;
            }
        }
        fs::write(path, contents).map_err(ConverterError::IoError)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Converts .csproj files to their references and/or tsconfig equivalents.
pub struct Converter<'a> {
    file_system: &'a dyn FileSystem,
    clock: &'a dyn Clock,
}

impl<'a> Converter<'a> {
    /// Initializes a new Converter over the given collaborators.
    pub fn new(file_system: &'a dyn FileSystem, clock: &'a dyn Clock) -> Self {
        Self { file_system, clock }
    }

    /// Converts a .csproj file to its references and/or tsconfig
    /// equivalent(s), writing each requested output.
    ///
    /// # Arguments
    /// * `settings` - Runtime settings for the conversion
    pub fn convert(&self, settings: &ConversionSettings) -> ConverterResult<()> {
        let csproj_contents = self.file_system.read(&settings.csproj)?;
        let source_files = parse_csproj_source(&csproj_contents, &settings.replacements);
        debug!("Parsed {} source paths from manifest", source_files.len());

        if let Some(references) = &settings.references {
            self.convert_references(references, &source_files)?;
        }

        if let Some(tsconfig) = &settings.tsconfig {
            self.convert_tsconfig(tsconfig, &source_files)?;
        }

        Ok(())
    }

    fn convert_references(
        &self,
        output: &OutputFileSettings,
        source_files: &[String],
    ) -> ConverterResult<()> {
        let contents =
            create_references_file(source_files, self.clock.now(), &output.timestamp);

        self.file_system.write(&output.file_name, &contents)
    }

    fn convert_tsconfig(
        &self,
        settings: &TsconfigOutputSettings,
        source_files: &[String],
    ) -> ConverterResult<()> {
        let template_contents = self.file_system.read(&settings.template)?;
        let template = parse_tsconfig_template(&template_contents)?;

        let contents = create_target_tsconfig(
            &template,
            &settings.overrides,
            source_files,
            self.clock.now(),
            &settings.output.timestamp,
        )?;

        self.file_system.write(&settings.output.file_name, &contents)
    }
}
