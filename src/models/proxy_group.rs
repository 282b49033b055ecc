use serde::Serialize;

/// Type of proxy group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProxyGroupType {
    #[serde(rename = "select")]
    Select,
    #[serde(rename = "url-test")]
    URLTest,
    #[serde(rename = "fallback")]
    Fallback,
}

impl ProxyGroupType {
    /// Get string representation of the proxy group type
    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyGroupType::Select => "select",
            ProxyGroupType::URLTest => "url-test",
            ProxyGroupType::Fallback => "fallback",
        }
    }
}

/// Health-check options shared by every group a profile derives.
///
/// Individual group templates may override the probe URL for services
/// that need a distinct health-check target.
#[derive(Debug, Clone)]
pub struct GroupBaseOptions {
    /// URL probed to test group members
    pub url: String,
    /// Seconds between probes
    pub interval: u32,
    /// Probe timeout in milliseconds
    pub timeout: u32,
    /// Whether to defer probing until the group is used
    pub lazy: bool,
    /// Consecutive failures before a member is marked down
    pub max_failed_times: u32,
    /// Whether the group is hidden from selection UIs
    pub hidden: bool,
}

impl Default for GroupBaseOptions {
    fn default() -> Self {
        Self {
            url: "https://www.google.com/generate_204".to_string(),
            interval: 300,
            timeout: 3000,
            lazy: true,
            max_failed_times: 3,
            hidden: false,
        }
    }
}

/// A derived proxy selection group, serialized straight into the
/// `proxy-groups` field of the synthesized document.
///
/// `proxies` always leads with built-in pseudo-targets (`DIRECT`,
/// `REJECT`) or other group names, followed by every proxy name from the
/// base configuration in its original order.
#[derive(Debug, Clone, Serialize)]
pub struct ProxyGroupConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: ProxyGroupType,
    pub proxies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lazy: Option<bool>,
    #[serde(rename = "max-failed-times", skip_serializing_if = "Option::is_none")]
    pub max_failed_times: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(rename = "expected-status", skip_serializing_if = "Option::is_none")]
    pub expected_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ProxyGroupConfig {
    /// Create a new proxy group config with no members or options
    pub fn new(name: String, group_type: ProxyGroupType) -> Self {
        Self {
            name,
            group_type,
            proxies: Vec::new(),
            url: None,
            interval: None,
            timeout: None,
            lazy: None,
            max_failed_times: None,
            hidden: None,
            filter: None,
            expected_status: None,
            icon: None,
        }
    }

    /// Copy the shared health-check options onto this group
    pub fn apply_base_options(&mut self, base: &GroupBaseOptions) {
        self.url = Some(base.url.clone());
        self.interval = Some(base.interval);
        self.timeout = Some(base.timeout);
        self.lazy = Some(base.lazy);
        self.max_failed_times = Some(base.max_failed_times);
        self.hidden = Some(base.hidden);
    }

    /// Get string representation of the group type
    pub fn type_str(&self) -> &'static str {
        self.group_type.as_str()
    }
}
