use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use csproj2tsconfig::converter::{Clock, Converter, FileSystem};
use csproj2tsconfig::error::{ConverterError, ConverterResult};
use csproj2tsconfig::settings::{
    parse_replacements, ConversionSettings, OutputFileSettings, TsconfigOutputSettings,
};
use csproj2tsconfig::substitution::Replacements;
use csproj2tsconfig::timestamp::TimestampSettings;

const CSPROJ_NAME: &str = "test.csproj";
const OUTPUT_NAME: &str = "tsconfig.json";
const TEMPLATE_NAME: &str = "template.json";
const REFERENCES_NAME: &str = "_AllReferences.ts";

struct MemoryFileSystem {
    files: RefCell<HashMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    fn new(seeded: &[(&str, String)]) -> Self {
        let files = seeded
            .iter()
            .map(|(name, contents)| (PathBuf::from(name), contents.clone()))
            .collect();

        Self { files: RefCell::new(files) }
    }

    fn contents_of(&self, name: &str) -> String {
        self.files.borrow().get(Path::new(name)).cloned().unwrap()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read(&self, path: &Path) -> ConverterResult<String> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            ConverterError::IoError(io::Error::new(
                io::ErrorKind::NotFound,
                path.display().to_string(),
            ))
        })
    }

    fn write(&self, path: &Path, contents: &str) -> ConverterResult<()> {
        self.files.borrow_mut().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }
}

struct StubClock;

impl Clock for StubClock {
    fn now(&self) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1234, 6, 6)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap()
    }
}

fn stub_csproj_contents(file_paths: &[&str]) -> String {
    let includes = file_paths
        .iter()
        .map(|file_path| format!(r#"<TypeScriptCompile Include="{}" />"#, file_path))
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"
    <irrelevant />
    <ItemGroup>
        {}
    </ItemGroup>
"#,
        includes
    )
}

fn stub_template_contents() -> String {
    "{\n    \"compilerOptions\": {}\n}".to_string()
}

fn tsconfig_settings(replacements: Replacements, timestamp: TimestampSettings) -> ConversionSettings {
    ConversionSettings {
        csproj: PathBuf::from(CSPROJ_NAME),
        replacements,
        references: None,
        tsconfig: Some(TsconfigOutputSettings {
            output: OutputFileSettings {
                file_name: PathBuf::from(OUTPUT_NAME),
                timestamp,
            },
            template: PathBuf::from(TEMPLATE_NAME),
            overrides: serde_json::Value::Null,
        }),
    }
}

#[test]
fn test_converts_a_single_file() {
    let file_system = MemoryFileSystem::new(&[
        (CSPROJ_NAME, stub_csproj_contents(&["file.ts"])),
        (TEMPLATE_NAME, stub_template_contents()),
    ]);
    let clock = StubClock;
    let converter = Converter::new(&file_system, &clock);
    let settings =
        tsconfig_settings(Replacements::default(), TimestampSettings::default());

    converter.convert(&settings).unwrap();

    assert_eq!(
        file_system.contents_of(OUTPUT_NAME),
        r#"{
    "compilerOptions": {},
    "files": [
        "file.ts"
    ]
}"#
    );
}

#[test]
fn test_converts_file_item_group_and_property_group_replacements() {
    let file_system = MemoryFileSystem::new(&[
        (
            CSPROJ_NAME,
            stub_csproj_contents(&[
                "MyFile.ts",
                "MyDefinitionFile.d.ts",
                "@(MyItem).ts",
                "$(MyProperty).ts",
            ]),
        ),
        (TEMPLATE_NAME, stub_template_contents()),
    ]);
    let clock = StubClock;
    let converter = Converter::new(&file_system, &clock);
    let replacements = parse_replacements(&[
        "MyFile.ts=OutputFile.ts".to_string(),
        "MyDefinitionFile.d.ts=OutputDefinitionFile.d.ts".to_string(),
        "@(MyItem)=OutputItem".to_string(),
        "$(MyProperty)=OutputProperty".to_string(),
    ])
    .unwrap();
    let settings = tsconfig_settings(replacements, TimestampSettings::default());

    converter.convert(&settings).unwrap();

    assert_eq!(
        file_system.contents_of(OUTPUT_NAME),
        r#"{
    "compilerOptions": {},
    "files": [
        "OutputFile.ts",
        "OutputDefinitionFile.d.ts",
        "OutputItem.ts",
        "OutputProperty.ts"
    ]
}"#
    );
}

#[test]
fn test_drops_unreplaced_property_includes() {
    let file_system = MemoryFileSystem::new(&[
        (CSPROJ_NAME, stub_csproj_contents(&["kept.ts", "$(Missing).ts"])),
        (TEMPLATE_NAME, stub_template_contents()),
    ]);
    let clock = StubClock;
    let converter = Converter::new(&file_system, &clock);
    let settings =
        tsconfig_settings(Replacements::default(), TimestampSettings::default());

    converter.convert(&settings).unwrap();

    assert_eq!(
        file_system.contents_of(OUTPUT_NAME),
        r#"{
    "compilerOptions": {},
    "files": [
        "kept.ts"
    ]
}"#
    );
}

#[test]
fn test_adds_a_timestamp_if_directed() {
    let file_system = MemoryFileSystem::new(&[
        (CSPROJ_NAME, stub_csproj_contents(&["file.ts"])),
        (TEMPLATE_NAME, stub_template_contents()),
    ]);
    let clock = StubClock;
    let converter = Converter::new(&file_system, &clock);
    let settings = tsconfig_settings(
        Replacements::default(),
        TimestampSettings { include_timestamp: true, locale: None },
    );

    converter.convert(&settings).unwrap();

    assert_eq!(
        file_system.contents_of(OUTPUT_NAME),
        "// Generated 6/6/1234, 7:08:09 AM\n\n{\n    \"compilerOptions\": {},\n    \"files\": [\n        \"file.ts\"\n    ]\n}"
    );
}

#[test]
fn test_writes_both_outputs_from_one_manifest() {
    let file_system = MemoryFileSystem::new(&[
        (CSPROJ_NAME, stub_csproj_contents(&["first.ts", "second.ts"])),
        (TEMPLATE_NAME, stub_template_contents()),
    ]);
    let clock = StubClock;
    let converter = Converter::new(&file_system, &clock);
    let mut settings =
        tsconfig_settings(Replacements::default(), TimestampSettings::default());
    settings.references = Some(OutputFileSettings {
        file_name: PathBuf::from(REFERENCES_NAME),
        timestamp: TimestampSettings::default(),
    });

    converter.convert(&settings).unwrap();

    assert_eq!(
        file_system.contents_of(REFERENCES_NAME),
        "/// <reference path=\"first.ts\" />\n/// <reference path=\"second.ts\" />\n"
    );
    assert!(file_system.contents_of(OUTPUT_NAME).contains("\"second.ts\""));
}

#[test]
fn test_malformed_template_propagates_as_error() {
    let file_system = MemoryFileSystem::new(&[
        (CSPROJ_NAME, stub_csproj_contents(&["file.ts"])),
        (TEMPLATE_NAME, "{ not json".to_string()),
    ]);
    let clock = StubClock;
    let converter = Converter::new(&file_system, &clock);
    let settings =
        tsconfig_settings(Replacements::default(), TimestampSettings::default());

    let result = converter.convert(&settings);

    assert!(matches!(result, Err(ConverterError::TemplateError(_))));
}
