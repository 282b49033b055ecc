//! The synthesis engine
//!
//! Combines a caller-supplied base configuration with the fragments a
//! profile injects: group derivation, the per-field merge primitive and
//! the orchestrator that ties the steps together in a fixed order.

pub mod group;
pub mod merge;
pub mod synthesis;

pub use group::derive_groups;
pub use merge::{merge_field, MergePolicy};
pub use synthesis::{synthesize, synthesize_str};

use thiserror::Error;

/// Errors surfaced by profile synthesis
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("no proxies or proxy-providers found in base configuration")]
    MissingProxies,

    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    #[error("invalid profile '{profile}': {reason}")]
    InvalidProfile { profile: String, reason: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
