//! Legacy profile
//!
//! The oldest flavor, kept for configurations produced by earlier
//! client versions: no group health-check options, a fallback resolver
//! list instead of a nameserver policy, and a scrub pass that deletes
//! stale DNS fields the old clients wrote at the top level.

use serde_yaml::Mapping;

use super::{strings, GroupTemplate, ProfileVariant};
use crate::generator::MergePolicy;
use crate::models::{DnsConfig, FallbackFilter, MiscOptions, RuleBehavior, RuleProviderConfig};

const FALLBACK_NAMESERVERS: &[&str] = &[
    "tls://8.8.4.4:853",
    "https://1.1.1.1/dns-query",
    "tls://1.1.1.1:853",
    "tls://8.8.8.8:853",
];

const FALLBACK_FILTER_DOMAINS: &[&str] = &[
    "+.lajichang.xyz",
    "+.lajichang.eu",
    "+.lajic.eu",
    "+.198466.xyz",
    "+.alibabaapi6.com",
    "+.19842333.xyz",
    "+.198477.xyz",
    "+.198488.xyz",
    "+.ipv6boy.xyz",
    "+.ipv6boy.com",
    "+.ipv6boy.top",
    "+.google.com",
    "+.facebook.com",
    "+.twitter.com",
    "+.tiktokv.com",
    "+.bytedance.map.fastly",
    "+.tiktok.com",
    "+.youtube.com",
    "+.xn--ngstr-lra8j.com",
    "+.google.cn",
    "+.googleapis.cn",
    "+.googleapis.com",
    "+.gvt1.com",
];

const RULES: &[&str] = &[
    "DOMAIN,gstatic.com,DIRECT",
    "RULE-SET,applications,DIRECT",
    "DOMAIN,clash.razord.top,DIRECT",
    "DOMAIN,local.adguard.org,DIRECT",
    "DOMAIN,yacd.haishan.me,DIRECT",
    "DOMAIN,injections.adguard.org, 🔰 选择节点",
    "DOMAIN,akamaized.net, 🔰 选择节点",
    "RULE-SET,private,DIRECT",
    "RULE-SET,reject,🛑 广告拦截",
    "RULE-SET,icloud,DIRECT",
    "RULE-SET,apple,DIRECT",
    "DOMAIN-SUFFIX,hust.edu.cn,DIRECT",
    "RULE-SET,google,🔰 选择节点",
    "RULE-SET,tld-not-cn,🔰 选择节点",
    "DOMAIN-SUFFIX,aka.ms,🔰 选择节点",
    "DOMAIN-SUFFIX,bing.com,🔰 选择节点",
    "DOMAIN-SUFFIX,github.com,🔰 选择节点",
    "DOMAIN-SUFFIX,typora.io,🔰 选择节点",
    "RULE-SET,gfw,🔰 选择节点",
    "RULE-SET,greatfire,🔰 选择节点",
    "RULE-SET,telegramcidr,🔰 选择节点",
    "RULE-SET,lancidr,DIRECT",
    "RULE-SET,cncidr,DIRECT",
    "GEOIP,CN,DIRECT",
    "RULE-SET,direct,DIRECT",
    "RULE-SET,proxy,🔰 选择节点",
    "MATCH,🐟 漏网之鱼",
];

/// Build the legacy profile
pub fn profile() -> ProfileVariant {
    // Old clients carried inline providers that shadow the injected
    // rule set, so the field is cleared rather than passed through
    let misc = MiscOptions {
        proxy_providers: Some(Mapping::new()),
        ..MiscOptions::default()
    };

    ProfileVariant {
        name: "legacy".to_string(),
        dns: dns(),
        dns_policy: MergePolicy::Replace,
        rules: strings(RULES),
        rule_providers: rule_providers(),
        groups: groups(),
        group_base: None,
        misc: Some(misc),
        strip_fields: strings(&["dns", "fallback", "fake-ip-filter", "nameserver-policy"]),
    }
}

fn dns() -> DnsConfig {
    DnsConfig {
        enable: true,
        listen: "127.0.0.1:53".to_string(),
        ipv6: None,
        use_system_hosts: None,
        cache_algorithm: None,
        enhanced_mode: "fake-ip".to_string(),
        fake_ip_range: "198.18.0.1/16".to_string(),
        fake_ip_filter: Vec::new(),
        default_nameserver: strings(&["223.5.5.5", "119.29.29.29"]),
        nameserver: strings(&["https://107834.alidns.com/dns-query"]),
        proxy_server_nameserver: Vec::new(),
        fallback: strings(FALLBACK_NAMESERVERS),
        nameserver_policy: Vec::new(),
        fallback_filter: Some(FallbackFilter {
            geoip: true,
            geoip_code: "CN".to_string(),
            ipcidr: strings(&["240.0.0.0/4"]),
            domain: strings(FALLBACK_FILTER_DOMAINS),
        }),
    }
}

fn provider(behavior: RuleBehavior, name: &str) -> (String, RuleProviderConfig) {
    (
        name.to_string(),
        RuleProviderConfig::http(
            behavior,
            format!("https://cdn.jsdelivr.net/gh/Loyalsoldier/clash-rules@release/{}.txt", name),
            format!("./ruleset/{}.yaml", name),
        ),
    )
}

fn rule_providers() -> Vec<(String, RuleProviderConfig)> {
    vec![
        provider(RuleBehavior::Domain, "reject"),
        provider(RuleBehavior::Domain, "icloud"),
        provider(RuleBehavior::Domain, "apple"),
        provider(RuleBehavior::Domain, "google"),
        provider(RuleBehavior::Domain, "proxy"),
        provider(RuleBehavior::Domain, "direct"),
        provider(RuleBehavior::Domain, "private"),
        provider(RuleBehavior::Domain, "gfw"),
        provider(RuleBehavior::Domain, "greatfire"),
        provider(RuleBehavior::Domain, "tld-not-cn"),
        provider(RuleBehavior::IpCidr, "telegramcidr"),
        provider(RuleBehavior::IpCidr, "cncidr"),
        provider(RuleBehavior::IpCidr, "lancidr"),
        provider(RuleBehavior::Classical, "applications"),
    ]
}

fn groups() -> Vec<GroupTemplate> {
    vec![
        GroupTemplate::select("🔰 选择节点", &["DIRECT"], true),
        GroupTemplate::select("🛑 广告拦截", &["DIRECT", "REJECT", "🔰 选择节点"], false),
        GroupTemplate::select("🐟 漏网之鱼", &["DIRECT", "REJECT", "🔰 选择节点"], false),
    ]
}
