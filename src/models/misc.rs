use serde::Serialize;
use serde_yaml::Mapping;

/// A sniffable port: a single port number or an inclusive range
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PortEntry {
    Port(u16),
    Range(String),
}

/// Ports one sniffed protocol listens on
#[derive(Debug, Clone, Serialize)]
pub struct SniffPorts {
    pub ports: Vec<PortEntry>,
    #[serde(
        rename = "override-destination",
        skip_serializing_if = "Option::is_none"
    )]
    pub override_destination: Option<bool>,
}

/// Protocol sniffing configuration
#[derive(Debug, Clone, Serialize)]
pub struct SnifferConfig {
    pub enable: bool,
    pub sniff: SniffProtocols,
}

#[derive(Debug, Clone, Serialize)]
pub struct SniffProtocols {
    #[serde(rename = "TLS")]
    pub tls: SniffPorts,
    #[serde(rename = "HTTP")]
    pub http: SniffPorts,
}

/// Persisted selection state
#[derive(Debug, Clone, Serialize)]
pub struct ProfileStore {
    #[serde(rename = "store-selected")]
    pub store_selected: bool,
    #[serde(rename = "store-fake-ip")]
    pub store_fake_ip: bool,
}

/// GEO database download locations
#[derive(Debug, Clone, Serialize)]
pub struct GeoxUrls {
    pub geoip: String,
    pub geosite: String,
    pub mmdb: String,
}

/// Miscellaneous top-level options injected alongside the main fragments.
///
/// Unlike the other fragments this block is not a single field: each key
/// is applied at the top level of the document, replacing that key only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MiscOptions {
    #[serde(rename = "unified-delay", skip_serializing_if = "Option::is_none")]
    pub unified_delay: Option<bool>,
    #[serde(rename = "tcp-concurrent", skip_serializing_if = "Option::is_none")]
    pub tcp_concurrent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileStore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sniffer: Option<SnifferConfig>,
    #[serde(rename = "geodata-mode", skip_serializing_if = "Option::is_none")]
    pub geodata_mode: Option<bool>,
    #[serde(rename = "geox-url", skip_serializing_if = "Option::is_none")]
    pub geox_url: Option<GeoxUrls>,
    #[serde(rename = "proxy-providers", skip_serializing_if = "Option::is_none")]
    pub proxy_providers: Option<Mapping>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_entries_serialize_untagged() {
        let ports = SniffPorts {
            ports: vec![PortEntry::Port(80), PortEntry::Range("8080-8880".to_string())],
            override_destination: Some(true),
        };
        let value = serde_yaml::to_value(ports).unwrap();
        let seq = value.get("ports").unwrap().as_sequence().unwrap();
        assert_eq!(seq[0].as_u64(), Some(80));
        assert_eq!(seq[1].as_str(), Some("8080-8880"));
    }

    #[test]
    fn test_empty_misc_serializes_to_empty_mapping() {
        let value = serde_yaml::to_value(MiscOptions::default()).unwrap();
        assert_eq!(value.as_mapping().map(|m| m.len()), Some(0));
    }
}
