//! Deep merging of partial tsconfig settings structures.

use serde_json::Value;

/// Whether a value carries no information for merge-precedence purposes.
///
/// An empty target value is always replaced outright by the donor's value,
/// never merged into.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(boolean) => !boolean,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(string) => string.is_empty(),
        Value::Array(array) => array.is_empty(),
        Value::Object(object) => object.is_empty(),
    }
}

/// Deeply overrides a target value with a donor.
///
/// # Arguments
/// * `target` - Target value to receive properties
/// * `source` - Donor value of properties
fn override_onto(target: &mut Value, source: &Value) {
    let source = match source.as_object() {
        Some(source) => source,
        None => return,
    };

    if !target.is_object() {
        *target = Value::Object(serde_json::Map::new());
    }

    let output = match target.as_object_mut() {
        Some(output) => output,
        None => return,
    };

    for (key, setting) in source {
        match output.get_mut(key) {
            Some(existing) if !is_empty(existing) => {
                // Only plain nested objects merge recursively; scalars and
                // arrays are replaced wholesale.
                if setting.is_object() && existing.is_object() {
                    override_onto(existing, setting);
                } else {
                    *existing = setting.clone();
                }
            }
            _ => {
                output.insert(key.clone(), setting.clone());
            }
        }
    }
}

/// Merges a source settings structure onto a target.
///
/// Produces a brand-new structure without mutating either input. For any key
/// held by both, the source wins: recursively for nested objects, by
/// replacement for everything else. Keys whose target value is empty take
/// the source value outright.
///
/// # Arguments
/// * `target` - Target settings to receive properties
/// * `source` - Donor settings
///
/// # Returns
/// * Deeply merged settings
pub fn merge_settings(target: &Value, source: &Value) -> Value {
    let mut output = Value::Object(serde_json::Map::new());

    override_onto(&mut output, target);
    override_onto(&mut output, source);

    output
}
