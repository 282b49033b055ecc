//! Synthesis orchestrator
//!
//! Entry point of the engine. The step order is fixed: validate the
//! proxy precondition, derive groups, obtain the profile's fragments,
//! then merge field by field. Later steps may read state derived by
//! earlier ones, never the reverse.

use log::{debug, info, warn};
use serde_yaml::{Mapping, Value};

use super::{derive_groups, merge_field, MergePolicy, SynthesisError};
use crate::models::Rule;
use crate::profiles::ProfileVariant;
use crate::utils::{mapping_len, sequence_len, yaml_key};

/// Synthesize a complete runtime configuration from serialized input.
///
/// Self-deserializing form of [`synthesize`]: parses the base document,
/// applies the profile and re-serializes the result. Parse errors from
/// the underlying format propagate unchanged.
pub fn synthesize_str(content: &str, profile: &ProfileVariant) -> Result<String, SynthesisError> {
    let base: Value = serde_yaml::from_str(content)?;
    let synthesized = synthesize(&base, profile)?;
    Ok(serde_yaml::to_string(&synthesized)?)
}

/// Synthesize a complete runtime configuration.
///
/// Returns a new configuration equal to the base with the profile's
/// DNS, rules, rule-providers, proxy-groups and miscellaneous options
/// applied. Every other field passes through unchanged, including
/// unknown forward-compatible ones. The base is never mutated.
///
/// Fails with [`SynthesisError::MissingProxies`] before any fragment is
/// computed when the base has neither proxies nor proxy-providers.
pub fn synthesize(base: &Value, profile: &ProfileVariant) -> Result<Value, SynthesisError> {
    let base_map = match base {
        Value::Mapping(map) => map,
        _ => return Err(SynthesisError::MissingProxies),
    };
    if sequence_len(base_map.get("proxies")) == 0 && mapping_len(base_map.get("proxy-providers")) == 0
    {
        return Err(SynthesisError::MissingProxies);
    }

    let proxy_names = collect_proxy_names(base_map);
    debug!(
        "deriving {} groups from {} named proxies",
        profile.groups.len(),
        proxy_names.len()
    );
    let groups = derive_groups(&proxy_names, profile);

    let mut config = base_map.clone();

    // Profiles may scrub stale base fields before injecting their own
    for field in &profile.strip_fields {
        if config.remove(field.as_str()).is_some() {
            debug!("stripped base field '{}'", field);
        }
    }

    apply_fragment(
        &mut config,
        "dns",
        serde_yaml::to_value(&profile.dns)?,
        profile.dns_policy,
    );
    apply_fragment(
        &mut config,
        "proxy-groups",
        serde_yaml::to_value(&groups)?,
        MergePolicy::Replace,
    );
    apply_fragment(&mut config, "rules", rules_fragment(profile), MergePolicy::Replace);
    apply_fragment(
        &mut config,
        "rule-providers",
        providers_fragment(profile)?,
        MergePolicy::Replace,
    );

    if let Some(misc) = &profile.misc {
        match serde_yaml::to_value(misc)? {
            Value::Mapping(misc_map) => {
                for (key, value) in misc_map {
                    config.insert(key, value);
                }
            }
            _ => warn!("miscellaneous options did not serialize to a mapping, skipping"),
        }
    }

    info!(
        "profile '{}' applied: {} groups, {} rules, {} rule providers",
        profile.name,
        groups.len(),
        profile.rules.len(),
        profile.rule_providers.len()
    );
    Ok(Value::Mapping(config))
}

fn apply_fragment(config: &mut Mapping, field: &str, incoming: Value, policy: MergePolicy) {
    let merged = merge_field(config.get(field), incoming, policy);
    config.insert(yaml_key(field), merged);
}

/// Proxy names in original list order; entries without a name are
/// skipped (uniqueness is assumed, not verified)
fn collect_proxy_names(base: &Mapping) -> Vec<String> {
    match base.get("proxies") {
        Some(Value::Sequence(proxies)) => proxies
            .iter()
            .filter_map(|proxy| proxy.get("name"))
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

// Rules are re-emitted in canonical form; a line that fails to parse is
// passed through verbatim rather than aborting the synthesis.
fn rules_fragment(profile: &ProfileVariant) -> Value {
    let rendered = profile
        .rules
        .iter()
        .map(|line| match line.parse::<Rule>() {
            Ok(rule) => rule.to_string(),
            Err(reason) => {
                warn!("passing malformed rule '{}' through unparsed: {}", line, reason);
                line.clone()
            }
        })
        .map(Value::String)
        .collect();
    Value::Sequence(rendered)
}

fn providers_fragment(profile: &ProfileVariant) -> Result<Value, SynthesisError> {
    let mut providers = Mapping::new();
    for (name, provider) in &profile.rule_providers {
        providers.insert(yaml_key(name), serde_yaml::to_value(provider)?);
    }
    Ok(Value::Mapping(providers))
}
