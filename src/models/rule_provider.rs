use serde::Serialize;

/// Default refresh interval for remote rule sets, in seconds
pub const DEFAULT_UPDATE_INTERVAL: u32 = 86400;

/// How the contents of a remote rule-set file are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleBehavior {
    #[serde(rename = "domain")]
    Domain,
    #[serde(rename = "ipcidr")]
    IpCidr,
    #[serde(rename = "classical")]
    Classical,
}

impl RuleBehavior {
    /// Get string representation of the behavior
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleBehavior::Domain => "domain",
            RuleBehavior::IpCidr => "ipcidr",
            RuleBehavior::Classical => "classical",
        }
    }
}

/// A remotely-updatable rule bundle, referenced from the rule table via
/// `RULE-SET,<name>,<target>`.
///
/// `behavior` must agree with how the remote file is written; the engine
/// cannot validate that, it only constructs the declaration.
#[derive(Debug, Clone, Serialize)]
pub struct RuleProviderConfig {
    #[serde(rename = "type")]
    pub provider_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub behavior: RuleBehavior,
    pub url: String,
    pub path: String,
    pub interval: u32,
}

impl RuleProviderConfig {
    /// Create an HTTP provider refreshed at the default interval
    pub fn http(behavior: RuleBehavior, url: String, path: String) -> Self {
        Self {
            provider_type: "http".to_string(),
            format: None,
            behavior,
            url,
            path,
            interval: DEFAULT_UPDATE_INTERVAL,
        }
    }
}
