pub mod yaml;

// Re-export common utilities
pub use yaml::{mapping_len, sequence_len, yaml_key};
