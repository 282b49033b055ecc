//! Group derivation
//!
//! Expands a profile's group templates against the proxy names found in
//! the base configuration. Membership is a view recomputed on every
//! synthesis run, never persisted.

use crate::models::ProxyGroupConfig;
use crate::profiles::{GroupTemplate, ProfileVariant};

/// Derive the full proxy-group list for a profile.
///
/// Every template expands to its fixed prelude targets followed by all
/// base proxy names in their original order. Duplicate proxy names in
/// the base list propagate as duplicate members.
pub fn derive_groups(proxy_names: &[String], profile: &ProfileVariant) -> Vec<ProxyGroupConfig> {
    profile
        .groups
        .iter()
        .map(|template| expand_template(template, proxy_names, profile))
        .collect()
}

fn expand_template(
    template: &GroupTemplate,
    proxy_names: &[String],
    profile: &ProfileVariant,
) -> ProxyGroupConfig {
    let mut group = ProxyGroupConfig::new(template.name.clone(), template.kind);

    group.proxies = template.prelude.clone();
    if template.include_proxies {
        group.proxies.extend(proxy_names.iter().cloned());
    }

    if let Some(base) = &profile.group_base {
        group.apply_base_options(base);
    }

    // Per-template overrides win over the shared options
    if let Some(url) = &template.url {
        group.url = Some(url.clone());
    }
    if let Some(status) = &template.expected_status {
        group.expected_status = Some(status.clone());
    }
    if let Some(filter) = &template.filter {
        group.filter = Some(filter.clone());
    }
    if let Some(icon) = &template.icon {
        group.icon = Some(icon.clone());
    }

    group
}
