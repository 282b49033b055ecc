//! Small helpers around serde_yaml values

use serde_yaml::Value;

/// Build a YAML string key
pub fn yaml_key(name: &str) -> Value {
    Value::String(name.to_string())
}

/// Number of entries in a mapping-valued field, 0 when the field is
/// absent or has another shape
pub fn mapping_len(value: Option<&Value>) -> usize {
    match value {
        Some(Value::Mapping(map)) => map.len(),
        _ => 0,
    }
}

/// Number of entries in a sequence-valued field, 0 when the field is
/// absent or has another shape
pub fn sequence_len(value: Option<&Value>) -> usize {
    match value {
        Some(Value::Sequence(seq)) => seq.len(),
        _ => 0,
    }
}
