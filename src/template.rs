//! Parsing of tsconfig template files.
//! Templates are JSON with comments: standard JSON plus `//` and `/* */`
//! comments, which are stripped before parsing.

use serde_json::Value;

use crate::error::ConverterResult;

/// Removes `//` and `/* */` comments from JSON-with-comments text.
///
/// Comment markers inside string literals are left alone. Stripped comments
/// are replaced by nothing, so line numbers in parse errors shift for
/// block comments spanning lines.
fn strip_json_comments(contents: &str) -> String {
    let mut output = String::with_capacity(contents.len());
    let mut chars = contents.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(character) = chars.next() {
        if in_string {
            output.push(character);
            if escaped {
                escaped = false;
            } else if character == '\\' {
                escaped = true;
            } else if character == '"' {
                in_string = false;
            }
            continue;
        }

        match character {
            '"' => {
                in_string = true;
                output.push(character);
            }
            '/' if chars.peek() == Some(&'/') => {
                for line_character in chars.by_ref() {
                    if line_character == '\n' {
                        output.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut previous = '\0';
                for block_character in chars.by_ref() {
                    if previous == '*' && block_character == '/' {
                        break;
                    }
                    previous = block_character;
                }
            }
            _ => output.push(character),
        }
    }

    output
}

/// Parses a tsconfig template file.
///
/// # Arguments
/// * `contents` - Contents of a tsconfig template file
///
/// # Returns
/// * The parsed structure of the file
///
/// # Errors
/// * `ConverterError::TemplateError` if the contents are not valid JSON
///   once comments are stripped
pub fn parse_tsconfig_template(contents: &str) -> ConverterResult<Value> {
    Ok(serde_json::from_str(&strip_json_comments(contents))?)
}
