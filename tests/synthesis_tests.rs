use serde_yaml::Value;

use subprofile::profiles::{GeoxUrlPolicy, ProfileRegistry};
use subprofile::{synthesize, synthesize_str, SynthesisError};

#[cfg(test)]
mod synthesis_tests {
    use super::*;

    fn registry() -> ProfileRegistry {
        ProfileRegistry::builtin(&GeoxUrlPolicy::Origin).unwrap()
    }

    fn parse(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    const BASE: &str = r#"
port: 7890
custom-field: 42
proxies:
  - name: "a"
    type: ss
    server: a.example.com
  - name: "b"
    type: vmess
    server: b.example.com
  - name: "c"
    type: trojan
    server: c.example.com
"#;

    #[test]
    fn test_fails_fast_without_proxies() {
        let registry = registry();
        let profile = registry.get("standard").unwrap();

        let base = parse(
            r#"
proxies: []
proxy-providers: {}
"#,
        );
        let before = base.clone();
        let err = synthesize(&base, profile).unwrap_err();
        assert!(matches!(err, SynthesisError::MissingProxies));
        // the input is never mutated
        assert_eq!(base, before);
    }

    #[test]
    fn test_fails_fast_on_non_mapping_base() {
        let registry = registry();
        let profile = registry.get("standard").unwrap();
        assert!(matches!(
            synthesize(&Value::Null, profile),
            Err(SynthesisError::MissingProxies)
        ));
    }

    #[test]
    fn test_provider_only_base_is_accepted() {
        let registry = registry();
        let profile = registry.get("standard").unwrap();

        let base = parse(
            r#"
proxy-providers:
  remote:
    type: http
    url: https://example.com/sub
"#,
        );
        let result = synthesize(&base, profile).unwrap();
        // no named proxies: groups hold only their fixed targets
        let groups = result.get("proxy-groups").unwrap().as_sequence().unwrap();
        assert_eq!(
            groups[0].get("proxies").unwrap().as_sequence().unwrap().len(),
            1
        );
    }

    #[test]
    fn test_unrelated_fields_pass_through() {
        let registry = registry();
        let profile = registry.get("standard").unwrap();

        let result = synthesize(&parse(BASE), profile).unwrap();
        assert_eq!(result.get("custom-field").unwrap().as_u64(), Some(42));
        assert_eq!(result.get("port").unwrap().as_u64(), Some(7890));
        // the proxy list itself is untouched
        let proxies = result.get("proxies").unwrap().as_sequence().unwrap();
        assert_eq!(proxies.len(), 3);
        assert_eq!(proxies[1].get("server").unwrap().as_str(), Some("b.example.com"));
    }

    #[test]
    fn test_selector_group_preserves_proxy_order() {
        let registry = registry();
        let profile = registry.get("standard").unwrap();

        let result = synthesize(&parse(BASE), profile).unwrap();
        let groups = result.get("proxy-groups").unwrap().as_sequence().unwrap();
        let members: Vec<&str> = groups[0]
            .get("proxies")
            .unwrap()
            .as_sequence()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(members, vec!["DIRECT", "a", "b", "c"]);
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let registry = registry();
        for name in ["standard", "openai", "legacy"] {
            let profile = registry.get(name).unwrap();
            let first = synthesize_str(BASE, profile).unwrap();
            let second = synthesize_str(BASE, profile).unwrap();
            assert_eq!(first, second, "profile '{}' is not deterministic", name);
        }
    }

    #[test]
    fn test_standard_profile_merges_dns_keys() {
        let registry = registry();
        let profile = registry.get("standard").unwrap();

        let base = parse(
            r#"
proxies:
  - name: "p1"
    type: ss
dns:
  listen: 0.0.0.0:53
  enable: false
  fake-ip-filter-mode: blacklist
"#,
        );
        let result = synthesize(&base, profile).unwrap();
        let dns = result.get("dns").unwrap();
        // incoming keys overwrite
        assert_eq!(dns.get("enable").unwrap().as_bool(), Some(true));
        assert_eq!(dns.get("listen").unwrap().as_str(), Some("0.0.0.0:1053"));
        // keys only the base had survive
        assert_eq!(
            dns.get("fake-ip-filter-mode").unwrap().as_str(),
            Some("blacklist")
        );
    }

    #[test]
    fn test_openai_profile_replaces_dns_wholesale() {
        let registry = registry();
        let profile = registry.get("openai").unwrap();

        let base = parse(
            r#"
proxies:
  - name: "p1"
    type: ss
dns:
  fake-ip-filter-mode: blacklist
"#,
        );
        let result = synthesize(&base, profile).unwrap();
        let dns = result.get("dns").unwrap();
        assert!(dns.get("fake-ip-filter-mode").is_none());
        assert_eq!(dns.get("listen").unwrap().as_str(), Some("127.0.0.1:53"));
    }

    #[test]
    fn test_legacy_profile_strips_stale_base_fields() {
        let registry = registry();
        let profile = registry.get("legacy").unwrap();

        let base = parse(
            r#"
proxies:
  - name: "p1"
    type: ss
fallback:
  - tls://9.9.9.9:853
fake-ip-filter:
  - "+.stale"
nameserver-policy:
  "geosite:cn": [ "1.2.3.4" ]
proxy-providers:
  old:
    type: http
    url: https://example.com/old
"#,
        );
        let result = synthesize(&base, profile).unwrap();
        assert!(result.get("fallback").is_none());
        assert!(result.get("fake-ip-filter").is_none());
        assert!(result.get("nameserver-policy").is_none());
        // inline providers are cleared, not passed through
        let providers = result.get("proxy-providers").unwrap().as_mapping().unwrap();
        assert!(providers.is_empty());
        // the injected dns block carries its own fallback list
        let dns = result.get("dns").unwrap();
        assert_eq!(dns.get("fallback").unwrap().as_sequence().unwrap().len(), 4);
    }

    #[test]
    fn test_rules_are_emitted_in_canonical_form() {
        let registry = registry();
        let profile = registry.get("standard").unwrap();

        let result = synthesize(&parse(BASE), profile).unwrap();
        let rules: Vec<&str> = result
            .get("rules")
            .unwrap()
            .as_sequence()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        // stray whitespace from the literal table is normalized away
        assert!(rules.contains(&"DOMAIN-SUFFIX,byr.pt,DIRECT"));
        assert!(rules.contains(&"DOMAIN-SUFFIX,github.com,🔰 选择节点"));
        // the catch-all stays last
        assert_eq!(rules.last(), Some(&"MATCH,🐟 漏网之鱼"));
    }

    #[test]
    fn test_rule_providers_are_injected() {
        let registry = registry();
        let profile = registry.get("standard").unwrap();

        let result = synthesize(&parse(BASE), profile).unwrap();
        let reject = result.get("rule-providers").unwrap().get("reject").unwrap();
        assert_eq!(reject.get("type").unwrap().as_str(), Some("http"));
        assert_eq!(reject.get("behavior").unwrap().as_str(), Some("domain"));
        assert_eq!(reject.get("interval").unwrap().as_u64(), Some(86400));
    }

    #[test]
    fn test_standard_misc_options_applied_at_top_level() {
        let registry = registry();
        let profile = registry.get("standard").unwrap();

        let result = synthesize(&parse(BASE), profile).unwrap();
        assert_eq!(result.get("unified-delay").unwrap().as_bool(), Some(true));
        assert_eq!(result.get("geodata-mode").unwrap().as_bool(), Some(true));
        let sniffer = result.get("sniffer").unwrap();
        assert_eq!(sniffer.get("enable").unwrap().as_bool(), Some(true));
        let geox = result.get("geox-url").unwrap();
        assert!(geox
            .get("geoip")
            .unwrap()
            .as_str()
            .unwrap()
            .starts_with("https://github.com/MetaCubeX/"));
    }

    #[test]
    fn test_accelerated_geox_urls_get_prefix() {
        let geox = GeoxUrlPolicy::Accelerated("https://mirror.example/".to_string());
        let registry = ProfileRegistry::builtin(&geox).unwrap();
        let profile = registry.get("standard").unwrap();

        let result = synthesize(&parse(BASE), profile).unwrap();
        let geoip = result
            .get("geox-url")
            .unwrap()
            .get("geoip")
            .unwrap()
            .as_str()
            .unwrap();
        assert!(geoip.starts_with("https://mirror.example/https://github.com/"));
    }

    #[test]
    fn test_file_round_trip() {
        let registry = registry();
        let profile = registry.get("standard").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("base.yaml");
        let output_path = dir.path().join("out.yaml");
        std::fs::write(&input_path, BASE).unwrap();

        let content = std::fs::read_to_string(&input_path).unwrap();
        let synthesized = synthesize_str(&content, profile).unwrap();
        std::fs::write(&output_path, &synthesized).unwrap();

        let reread: Value =
            serde_yaml::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
        assert!(reread.get("proxy-groups").is_some());
        assert!(reread.get("rules").is_some());
        assert!(reread.get("dns").is_some());
    }
}
