//! Profile synthesis for Clash-style proxy clients
//!
//! Takes a previously-deserialized base configuration (a proxy list
//! plus arbitrary other fields) and deterministically produces a
//! complete runtime configuration: DNS policy, routing rules, rule
//! providers and selection groups derived from the supplied proxies.
//! Several built-in profiles cover different deployment flavors; all
//! of them implement the same transformation contract.
//!
//! ```rust
//! use subprofile::{synthesize_str, GeoxUrlPolicy, ProfileRegistry};
//!
//! let registry = ProfileRegistry::builtin(&GeoxUrlPolicy::Origin).unwrap();
//! let profile = registry.get("standard").unwrap();
//! let base = "proxies:\n  - name: node-1\n    type: ss\n";
//! let synthesized = synthesize_str(base, profile).unwrap();
//! assert!(synthesized.contains("proxy-groups"));
//! ```

pub mod generator;
pub mod models;
pub mod profiles;
pub mod utils;

// Re-export the entry points and the main configuration types
pub use generator::{synthesize, synthesize_str, MergePolicy, SynthesisError};
pub use models::{DnsConfig, ProxyGroupConfig, Rule, RuleProviderConfig, RuleTarget};
pub use profiles::{GeoxUrlPolicy, ProfileRegistry, ProfileVariant};
