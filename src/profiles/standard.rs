//! Standard profile
//!
//! Fake-ip DNS with a domestic/foreign DoH split, Loyalsoldier rule
//! sets over cdn.jsdelivr, three selector groups and the sniffer /
//! geodata miscellaneous options. The only flavor whose DNS fragment
//! merges into an existing `dns` block instead of replacing it.

use super::{strings, GeoxUrlPolicy, GroupTemplate, ProfileVariant};
use crate::generator::MergePolicy;
use crate::models::{
    DnsConfig, GeoxUrls, GroupBaseOptions, MiscOptions, PortEntry, ProfileStore, RuleBehavior,
    RuleProviderConfig, SniffPorts, SniffProtocols, SnifferConfig,
};

const DOMESTIC_NAMESERVERS: &[&str] = &[
    "https://dns.alidns.com/dns-query",
    "https://doh.pub/dns-query",
];

const FOREIGN_NAMESERVERS: &[&str] = &[
    "https://1.1.1.1/dns-query",
    "https://1.0.0.1/dns-query",
    "https://208.67.222.222/dns-query",
    "https://208.67.220.220/dns-query",
    "https://194.242.2.2/dns-query",
    "https://194.242.2.3/dns-query",
];

const RULES: &[&str] = &[
    "DOMAIN-SUFFIX,github.com, 🔰 选择节点",
    "DOMAIN-SUFFIX,ipv6boy.xyz, 🔰 选择节点",
    "DOMAIN-SUFFIX,edaplayground.com, 🔰 选择节点",
    "DOMAIN-SUFFIX,docker.io, 🔰 选择节点",
    "DOMAIN-SUFFIX, byr.pt, DIRECT",
    "DOMAIN-SUFFIX, pandapt.net, DIRECT",
    "DOMAIN,gstatic.com,DIRECT",
    "DOMAIN-SUFFIX,acm.org,DIRECT",
    "DOMAIN-SUFFIX,ieee.org,DIRECT",
    "DOMAIN,hdlbits.01xz.net, 🔰 选择节点",
    "DOMAIN,sub.198477.xyz, 🔰 选择节点",
    "DOMAIN-SUFFIX,steamcontent.com,DIRECT",
    "DOMAIN-SUFFIX,steamstatic.com,DIRECT",
    "DOMAIN-SUFFIX,steamserver.net,DIRECT",
    "DOMAIN-SUFFIX,test.steampowered.com,DIRECT",
    "DOMAIN-SUFFIX,rmbgame.net,DIRECT",
    "RULE-SET,applications,DIRECT",
    "DOMAIN,clash.razord.top,DIRECT",
    "DOMAIN,local.adguard.org,DIRECT",
    "DOMAIN,yacd.haishan.me,DIRECT",
    "DOMAIN,injections.adguard.org, 🔰 选择节点",
    "DOMAIN,垃圾场珀.com, 🔰 选择节点",
    "DOMAIN,垃圾场六.com, 🔰 选择节点",
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
    "RULE-SET,lancidr,DIRECT,no-resolve",
    "RULE-SET,cncidr,DIRECT,no-resolve",
    "RULE-SET,direct,DIRECT",
    "RULE-SET,proxy,🔰 选择节点",
    "GEOIP,LAN,DIRECT,no-resolve",
    "GEOIP,CN,DIRECT,no-resolve",
    "MATCH,🐟 漏网之鱼",
];

const GEOIP_URL: &str =
    "https://github.com/MetaCubeX/meta-rules-dat/releases/download/latest/geoip-lite.dat";
const GEOSITE_URL: &str =
    "https://github.com/MetaCubeX/meta-rules-dat/releases/download/latest/geosite.dat";
const MMDB_URL: &str =
    "https://github.com/MetaCubeX/meta-rules-dat/releases/download/latest/country-lite.mmdb";

/// Build the standard profile
pub fn profile(geox: &GeoxUrlPolicy) -> ProfileVariant {
    ProfileVariant {
        name: "standard".to_string(),
        dns: dns(),
        dns_policy: MergePolicy::ShallowMergeKeys,
        rules: strings(RULES),
        rule_providers: rule_providers(),
        groups: groups(),
        group_base: Some(GroupBaseOptions::default()),
        misc: Some(misc(geox)),
        strip_fields: Vec::new(),
    }
}

fn dns() -> DnsConfig {
    let mut nameservers = strings(DOMESTIC_NAMESERVERS);
    nameservers.extend(strings(FOREIGN_NAMESERVERS));

    DnsConfig {
        enable: true,
        listen: "0.0.0.0:1053".to_string(),
        ipv6: Some(true),
        use_system_hosts: Some(true),
        cache_algorithm: Some("arc".to_string()),
        enhanced_mode: "fake-ip".to_string(),
        fake_ip_range: "198.18.0.1/16".to_string(),
        fake_ip_filter: strings(&[
            "+.lan",
            "+.local",
            "+.msftconnecttest.com",
            "+.msftncsi.com",
            "localhost.ptlogin2.qq.com",
            "localhost.sec.qq.com",
            "localhost.work.weixin.qq.com",
        ]),
        default_nameserver: strings(&["223.5.5.5", "119.29.29.29", "1.1.1.1", "8.8.8.8"]),
        nameserver: nameservers.clone(),
        proxy_server_nameserver: nameservers,
        fallback: Vec::new(),
        nameserver_policy: vec![
            (
                "geosite:private,cn,geolocation-cn".to_string(),
                strings(DOMESTIC_NAMESERVERS),
            ),
            (
                "geosite:google,youtube,telegram,gfw,geolocation-!cn".to_string(),
                strings(FOREIGN_NAMESERVERS),
            ),
        ],
        fallback_filter: None,
    }
}

fn provider(behavior: RuleBehavior, name: &str) -> (String, RuleProviderConfig) {
    let mut config = RuleProviderConfig::http(
        behavior,
        format!("https://cdn.jsdelivr.net/gh/Loyalsoldier/clash-rules@release/{}.txt", name),
        format!("./ruleset/{}.yaml", name),
    );
    config.format = Some("yaml".to_string());
    (name.to_string(), config)
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

fn misc(geox: &GeoxUrlPolicy) -> MiscOptions {
    MiscOptions {
        unified_delay: Some(true),
        tcp_concurrent: Some(true),
        profile: Some(ProfileStore {
            store_selected: true,
            store_fake_ip: true,
        }),
        sniffer: Some(SnifferConfig {
            enable: true,
            sniff: SniffProtocols {
                tls: SniffPorts {
                    ports: vec![PortEntry::Port(443), PortEntry::Port(8443)],
                    override_destination: None,
                },
                http: SniffPorts {
                    ports: vec![PortEntry::Port(80), PortEntry::Range("8080-8880".to_string())],
                    override_destination: Some(true),
                },
            },
        }),
        geodata_mode: Some(true),
        geox_url: Some(GeoxUrls {
            geoip: geox.apply(GEOIP_URL),
            geosite: geox.apply(GEOSITE_URL),
            mmdb: geox.apply(MMDB_URL),
        }),
        proxy_providers: None,
    }
}
