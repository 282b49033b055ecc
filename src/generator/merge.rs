use log::warn;
use serde_yaml::{Mapping, Value};

/// Per-field merge policy.
///
/// The policy is carried in a small per-profile table rather than
/// inferred from runtime shapes, so the primitive stays exhaustively
/// testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// The incoming fragment fully supersedes the existing value,
    /// including deletion of base-only sub-keys
    Replace,
    /// Shallow key union: every incoming key overwrites the same key in
    /// the existing mapping, keys present only in the existing mapping
    /// survive. Not recursive.
    ShallowMergeKeys,
}

/// Merge one field of the configuration.
///
/// `existing` is the base configuration's current value for the field,
/// absent when the base never had it. A merge request against a
/// non-mapping incoming value keeps the existing value unchanged; this
/// is a malformed fragment, never a fatal error.
pub fn merge_field(existing: Option<&Value>, incoming: Value, policy: MergePolicy) -> Value {
    match policy {
        MergePolicy::Replace => incoming,
        MergePolicy::ShallowMergeKeys => match incoming {
            Value::Mapping(incoming_map) => {
                let mut merged = match existing {
                    Some(Value::Mapping(existing_map)) => existing_map.clone(),
                    _ => Mapping::new(),
                };
                for (key, value) in incoming_map {
                    merged.insert(key, value);
                }
                Value::Mapping(merged)
            }
            _ => match existing {
                Some(value) => {
                    warn!("cannot merge non-mapping fragment, keeping existing value");
                    value.clone()
                }
                None => incoming,
            },
        },
    }
}
