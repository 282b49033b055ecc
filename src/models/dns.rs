use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Filter deciding which fallback resolver results are trusted
#[derive(Debug, Clone, Serialize)]
pub struct FallbackFilter {
    pub geoip: bool,
    #[serde(rename = "geoipCode")]
    pub geoip_code: String,
    pub ipcidr: Vec<String>,
    pub domain: Vec<String>,
}

/// DNS resolution policy fragment.
///
/// Internally consistent only as a unit: the nameserver lists,
/// `nameserver-policy` and the fake-ip settings reference each other, so
/// profiles always inject the whole block.
#[derive(Debug, Clone, Serialize)]
pub struct DnsConfig {
    pub enable: bool,
    pub listen: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<bool>,
    #[serde(rename = "use-system-hosts", skip_serializing_if = "Option::is_none")]
    pub use_system_hosts: Option<bool>,
    #[serde(rename = "cache-algorithm", skip_serializing_if = "Option::is_none")]
    pub cache_algorithm: Option<String>,
    #[serde(rename = "enhanced-mode")]
    pub enhanced_mode: String,
    #[serde(rename = "fake-ip-range")]
    pub fake_ip_range: String,
    #[serde(rename = "fake-ip-filter", skip_serializing_if = "Vec::is_empty")]
    pub fake_ip_filter: Vec<String>,
    #[serde(rename = "default-nameserver")]
    pub default_nameserver: Vec<String>,
    pub nameserver: Vec<String>,
    #[serde(
        rename = "proxy-server-nameserver",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub proxy_server_nameserver: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fallback: Vec<String>,
    #[serde(
        rename = "nameserver-policy",
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_policy"
    )]
    pub nameserver_policy: Vec<(String, Vec<String>)>,
    #[serde(rename = "fallbackFilter", skip_serializing_if = "Option::is_none")]
    pub fallback_filter: Option<FallbackFilter>,
}

// Ordered selector -> nameserver-list pairs rendered as a mapping
fn serialize_policy<S>(policy: &[(String, Vec<String>)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(policy.len()))?;
    for (selector, nameservers) in policy {
        map.serialize_entry(selector, nameservers)?;
    }
    map.end()
}
