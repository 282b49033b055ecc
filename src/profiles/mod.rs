//! Profile variants and the registry that validates them
//!
//! A profile is a named bundle of literal DNS, rule, rule-provider and
//! group data representing one deployment flavor. The registry is an
//! explicit value handed to callers; profiles are validated once at
//! registration time so the cross-component naming contract (rule
//! targets must resolve to derived group names) cannot be violated at
//! synthesis time.

pub mod legacy;
pub mod openai;
pub mod standard;

use std::collections::HashSet;

use regex::Regex;

use crate::generator::{MergePolicy, SynthesisError};
use crate::models::{DnsConfig, GroupBaseOptions, MiscOptions, ProxyGroupType, Rule, RuleProviderConfig, RuleTarget};

/// Whether GEO database downloads go to the origin or through an
/// acceleration prefix. A deployment choice, not derivable from the
/// transformation logic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GeoxUrlPolicy {
    #[default]
    Origin,
    Accelerated(String),
}

impl GeoxUrlPolicy {
    /// Apply the policy to an origin download URL
    pub fn apply(&self, url: &str) -> String {
        match self {
            GeoxUrlPolicy::Origin => url.to_string(),
            GeoxUrlPolicy::Accelerated(prefix) => format!("{}{}", prefix, url),
        }
    }
}

/// Template one derived group is expanded from
#[derive(Debug, Clone)]
pub struct GroupTemplate {
    pub name: String,
    pub kind: ProxyGroupType,
    /// Fixed leading targets: built-ins or other group names
    pub prelude: Vec<String>,
    /// Whether every base proxy name is appended after the prelude
    pub include_proxies: bool,
    pub url: Option<String>,
    pub expected_status: Option<String>,
    pub filter: Option<String>,
    pub icon: Option<String>,
}

impl GroupTemplate {
    /// Plain selector group template
    pub fn select(name: &str, prelude: &[&str], include_proxies: bool) -> Self {
        GroupTemplate {
            name: name.to_string(),
            kind: ProxyGroupType::Select,
            prelude: strings(prelude),
            include_proxies,
            url: None,
            expected_status: None,
            filter: None,
            icon: None,
        }
    }
}

/// A named bundle of literal configuration data for one deployment
/// flavor. All fields are injected as-is on every synthesis run.
#[derive(Debug, Clone)]
pub struct ProfileVariant {
    pub name: String,
    pub dns: DnsConfig,
    /// How the DNS fragment combines with an existing `dns` field
    pub dns_policy: MergePolicy,
    /// Routing rules, position-sensitive
    pub rules: Vec<String>,
    /// Rule providers in emission order
    pub rule_providers: Vec<(String, RuleProviderConfig)>,
    pub groups: Vec<GroupTemplate>,
    /// Health-check options shared by every derived group, when the
    /// flavor carries them
    pub group_base: Option<GroupBaseOptions>,
    /// Extra top-level options applied key by key
    pub misc: Option<MiscOptions>,
    /// Base fields deleted before injection
    pub strip_fields: Vec<String>,
}

/// Validated collection of profiles
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: Vec<ProfileVariant>,
}

impl ProfileRegistry {
    /// Registry holding the built-in profiles, validated
    pub fn builtin(geox: &GeoxUrlPolicy) -> Result<Self, SynthesisError> {
        let mut registry = ProfileRegistry::default();
        registry.register(standard::profile(geox))?;
        registry.register(openai::profile())?;
        registry.register(legacy::profile())?;
        Ok(registry)
    }

    /// Register a profile, rejecting it when its static tables are
    /// internally inconsistent. A profile with the same name as an
    /// already-registered one replaces it.
    pub fn register(&mut self, profile: ProfileVariant) -> Result<(), SynthesisError> {
        validate(&profile).map_err(|reason| SynthesisError::InvalidProfile {
            profile: profile.name.clone(),
            reason,
        })?;
        self.profiles.retain(|existing| existing.name != profile.name);
        self.profiles.push(profile);
        Ok(())
    }

    /// Look up a profile by name
    pub fn get(&self, name: &str) -> Option<&ProfileVariant> {
        self.profiles.iter().find(|profile| profile.name == name)
    }

    /// The first registered profile, used when the caller names none
    pub fn default_profile(&self) -> Option<&ProfileVariant> {
        self.profiles.first()
    }

    /// Names of all registered profiles, in registration order
    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|profile| profile.name.as_str()).collect()
    }
}

fn validate(profile: &ProfileVariant) -> Result<(), String> {
    if profile.name.is_empty() {
        return Err("profile name is empty".to_string());
    }
    if profile.groups.is_empty() {
        return Err("profile defines no groups".to_string());
    }

    let mut group_names: HashSet<&str> = HashSet::new();
    for template in &profile.groups {
        if template.name.is_empty() {
            return Err("group name is empty".to_string());
        }
        if !group_names.insert(template.name.as_str()) {
            return Err(format!("duplicate group name '{}'", template.name));
        }
    }

    for template in &profile.groups {
        for entry in &template.prelude {
            if entry != "DIRECT" && entry != "REJECT" && !group_names.contains(entry.as_str()) {
                return Err(format!(
                    "group '{}' references undeclared target '{}'",
                    template.name, entry
                ));
            }
        }
        if let Some(filter) = &template.filter {
            Regex::new(filter)
                .map_err(|e| format!("group '{}' has an invalid filter: {}", template.name, e))?;
        }
    }

    let provider_names: HashSet<&str> = profile
        .rule_providers
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();

    for line in &profile.rules {
        let rule: Rule = line
            .parse()
            .map_err(|reason| format!("rule '{}': {}", line, reason))?;
        if let RuleTarget::Group(name) = &rule.target {
            if !group_names.contains(name.as_str()) {
                return Err(format!("rule '{}' targets undeclared group '{}'", line, name));
            }
        }
        if let Some(set) = rule.ruleset_name() {
            if !provider_names.contains(set) {
                return Err(format!(
                    "rule '{}' references undeclared rule provider '{}'",
                    line, set
                ));
            }
        }
    }

    Ok(())
}

pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_validates() {
        let registry = ProfileRegistry::builtin(&GeoxUrlPolicy::Origin).unwrap();
        assert_eq!(registry.names(), vec!["standard", "openai", "legacy"]);
        assert_eq!(registry.default_profile().unwrap().name, "standard");
    }

    #[test]
    fn test_register_rejects_undeclared_rule_target() {
        let mut profile = legacy::profile();
        profile.name = "broken".to_string();
        profile.rules.push("DOMAIN,example.com,幽灵组".to_string());

        let mut registry = ProfileRegistry::default();
        let err = registry.register(profile).unwrap_err();
        match err {
            SynthesisError::InvalidProfile { profile, reason } => {
                assert_eq!(profile, "broken");
                assert!(reason.contains("幽灵组"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_register_rejects_missing_provider() {
        let mut profile = legacy::profile();
        profile.name = "broken".to_string();
        profile.rules.push("RULE-SET,ghost,DIRECT".to_string());

        let mut registry = ProfileRegistry::default();
        assert!(registry.register(profile).is_err());
    }

    #[test]
    fn test_register_rejects_duplicate_group_names() {
        let mut profile = legacy::profile();
        profile.name = "broken".to_string();
        let duplicate = profile.groups[0].clone();
        profile.groups.push(duplicate);

        let mut registry = ProfileRegistry::default();
        assert!(registry.register(profile).is_err());
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = ProfileRegistry::default();
        registry.register(legacy::profile()).unwrap();
        registry.register(legacy::profile()).unwrap();
        assert_eq!(registry.names().len(), 1);
    }

    #[test]
    fn test_geox_policy_applies_prefix() {
        let origin = GeoxUrlPolicy::Origin;
        assert_eq!(origin.apply("https://github.com/x.dat"), "https://github.com/x.dat");

        let accel = GeoxUrlPolicy::Accelerated("https://mirror.example/".to_string());
        assert_eq!(
            accel.apply("https://github.com/x.dat"),
            "https://mirror.example/https://github.com/x.dat"
        );
    }
}
