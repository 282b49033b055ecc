//! OpenAI-aware profile
//!
//! Variant of the standard flavor with a dedicated ChatGPT selector
//! group (country-filtered, probed against chatgpt.com), rule sets over
//! fastly.jsdelivr and per-group icons.

use super::{strings, GroupTemplate, ProfileVariant};
use crate::generator::MergePolicy;
use crate::models::{
    DnsConfig, FallbackFilter, GroupBaseOptions, RuleBehavior, RuleProviderConfig,
};

const DOMESTIC_NAMESERVERS: &[&str] = &["https://107834.alidns.com/dns-query"];

const FOREIGN_NAMESERVERS: &[&str] = &[
    "https://1.1.1.1/dns-query",
    "https://dns.google/dns-query",
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
    "DOMAIN-SUFFIX,googleapis.cn,节点选择",
    "DOMAIN-SUFFIX,gstatic.com,节点选择",
    "DOMAIN-SUFFIX,xn--ngstr-lra8j.com,节点选择",
    "RULE-SET,applications,DIRECT",
    "RULE-SET,private,DIRECT",
    "RULE-SET,reject,广告过滤",
    "RULE-SET,icloud,节点选择",
    "RULE-SET,apple,DIRECT",
    "RULE-SET,google,节点选择",
    "RULE-SET,proxy,节点选择",
    "RULE-SET,gfw,节点选择",
    "RULE-SET,tld-not-cn,节点选择",
    "RULE-SET,direct,DIRECT",
    "RULE-SET,lancidr,DIRECT,no-resolve",
    "RULE-SET,cncidr,DIRECT,no-resolve",
    "RULE-SET,telegramcidr,节点选择,no-resolve",
    "DOMAIN-SUFFIX,github.com, 节点选择",
    "DOMAIN-SUFFIX,youtube.com, 节点选择",
    "DOMAIN-SUFFIX,edaplayground.com, 节点选择",
    "DOMAIN-SUFFIX,docker.io, 节点选择",
    "DOMAIN,gstatic.com,DIRECT",
    "DOMAIN-SUFFIX,acm.org,DIRECT",
    "DOMAIN-SUFFIX,ieee.org,DIRECT",
    "DOMAIN,hdlbits.01xz.net, 节点选择",
    "DOMAIN-SUFFIX,steamcontent.com,DIRECT",
    "DOMAIN-SUFFIX,steamstatic.com,DIRECT",
    "DOMAIN-SUFFIX,steamserver.net,DIRECT",
    "DOMAIN-SUFFIX,test.steampowered.com,DIRECT",
    "DOMAIN-SUFFIX,api.steampowered.com,DIRECT",
    "DOMAIN-SUFFIX,rmbgame.net,DIRECT",
    "DOMAIN,clash.razord.top,DIRECT",
    "DOMAIN,local.adguard.org,DIRECT",
    "DOMAIN,yacd.haishan.me,DIRECT",
    "DOMAIN,injections.adguard.org, 节点选择",
    "DOMAIN,akamaized.net, 节点选择",
    "DOMAIN-SUFFIX,hust.edu.cn,DIRECT",
    "DOMAIN-SUFFIX,aka.ms,节点选择",
    "DOMAIN-SUFFIX,bing.com,节点选择",
    "DOMAIN-SUFFIX,typora.io,DIRECT",
    "GEOIP,LAN,DIRECT,no-resolve",
    "GEOIP,CN,DIRECT,no-resolve",
    "MATCH, 漏网之鱼",
];

const ICON_BASE: &str =
    "https://fastly.jsdelivr.net/gh/clash-verge-rev/clash-verge-rev.github.io@main/docs/assets/icons";

// Country codes and flags accepted by the ChatGPT group; everything
// OpenAI serves, which excludes CN/HK/MO/RU and a few others
const COUNTRY_FILTER: &str = "AD|🇦🇩|AE|🇦🇪|AF|🇦🇫|AG|🇦🇬|AL|🇦🇱|AM|🇦🇲|AO|🇦🇴|AR|🇦🇷|AT|🇦🇹|AU|🇦🇺|AZ|🇦🇿|BA|🇧🇦|BB|🇧🇧|BD|🇧🇩|BE|🇧🇪|BF|🇧🇫|BG|🇧🇬|BH|🇧🇭|BI|🇧🇮|BJ|🇧🇯|BN|🇧🇳|BO|🇧🇴|BR|🇧🇷|BS|🇧🇸|BT|🇧🇹|BW|🇧🇼|BZ|🇧🇿|CA|🇨🇦|CD|🇨🇩|CF|🇨🇫|CG|🇨🇬|CH|🇨🇭|CI|🇨🇮|CL|🇨🇱|CM|🇨🇲|CO|🇨🇴|CR|🇨🇷|CV|🇨🇻|CY|🇨🇾|CZ|🇨🇿|DE|🇩🇪|DJ|🇩🇯|DK|🇩🇰|DM|🇩🇲|DO|🇩🇴|DZ|🇩🇿|EC|🇪🇨|EE|🇪🇪|EG|🇪🇬|ER|🇪🇷|ES|🇪🇸|ET|🇪🇹|FI|🇫🇮|FJ|🇫🇯|FM|🇫🇲|FR|🇫🇷|GA|🇬🇦|GB|🇬🇧|GD|🇬🇩|GE|🇬🇪|GH|🇬🇭|GM|🇬🇲|GN|🇬🇳|GQ|🇬🇶|GR|🇬🇷|GT|🇬🇹|GW|🇬🇼|GY|🇬🇾|HN|🇭🇳|HR|🇭🇷|HT|🇭🇹|HU|🇭🇺|ID|🇮🇩|IE|🇮🇪|IL|🇮🇱|IN|🇮🇳|IQ|🇮🇶|IS|🇮🇸|IT|🇮🇹|JM|🇯🇲|JO|🇯🇴|JP|🇯🇵|KE|🇰🇪|KG|🇰🇬|KH|🇰🇭|KI|🇰🇮|KM|🇰🇲|KN|🇰🇳|KR|🇰🇷|KW|🇰🇼|KZ|🇰🇿|LA|🇱🇦|LB|🇱🇧|LC|🇱🇨|LI|🇱🇮|LK|🇱🇰|LR|🇱🇷|LS|🇱🇸|LT|🇱🇹|LU|🇱🇺|LV|🇱🇻|LY|🇱🇾|MA|🇲🇦|MC|🇲🇨|MD|🇲🇩|ME|🇲🇪|MG|🇲🇬|MH|🇲🇭|MK|🇲🇰|ML|🇲🇱|MM|🇲🇲|MN|🇲🇳|MR|🇲🇷|MT|🇲🇹|MU|🇲🇺|MV|🇲🇻|MW|🇲🇼|MX|🇲🇽|MY|🇲🇾|MZ|🇲🇿|NA|🇳🇦|NE|🇳🇪|NG|🇳🇬|NI|🇳🇮|NL|🇳🇱|NO|🇳🇴|NP|🇳🇵|NR|🇳🇷|NZ|🇳🇿|OM|🇴🇲|PA|🇵🇦|PE|🇵🇪|PG|🇵🇬|PH|🇵🇭|PK|🇵🇰|PL|🇵🇱|PS|🇵🇸|PT|🇵🇹|PW|🇵🇼|PY|🇵🇾|QA|🇶🇦|RO|🇷🇴|RS|🇷🇸|RW|🇷🇼|SA|🇸🇦|SB|🇸🇧|SC|🇸🇨|SD|🇸🇩|SE|🇸🇪|SG|🇸🇬|SI|🇸🇮|SK|🇸🇰|SL|🇸🇱|SM|🇸🇲|SN|🇸🇳|SO|🇸🇴|SR|🇸🇷|SS|🇸🇸|ST|🇸🇹|SV|🇸🇻|SZ|🇸🇿|TD|🇹🇩|TG|🇹🇬|TH|🇹🇭|TJ|🇹🇯|TL|🇹🇱|TM|🇹🇲|TN|🇹🇳|TO|🇹🇴|TR|🇹🇷|TT|🇹🇹|TV|🇹🇻|TW|🇹🇼|TZ|🇹🇿|UA|🇺🇦|UG|🇺🇬|US|🇺🇸|UY|🇺🇾|UZ|🇺🇿|VA|🇻🇦|VC|🇻🇨|VN|🇻🇳|VU|🇻🇺|WS|🇼🇸|YE|🇾🇪|ZA|🇿🇦|ZM|🇿🇲|ZW|🇿🇼";

/// Build the OpenAI-aware profile
pub fn profile() -> ProfileVariant {
    ProfileVariant {
        name: "openai".to_string(),
        dns: dns(),
        dns_policy: MergePolicy::Replace,
        rules: strings(RULES),
        rule_providers: rule_providers(),
        groups: groups(),
        group_base: Some(GroupBaseOptions::default()),
        misc: None,
        strip_fields: Vec::new(),
    }
}

fn dns() -> DnsConfig {
    let mut nameservers = strings(DOMESTIC_NAMESERVERS);
    nameservers.extend(strings(FOREIGN_NAMESERVERS));

    DnsConfig {
        enable: true,
        listen: "127.0.0.1:53".to_string(),
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
        default_nameserver: strings(&["223.5.5.5", "119.29.29.29"]),
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
        fallback_filter: Some(FallbackFilter {
            geoip: true,
            geoip_code: "CN".to_string(),
            ipcidr: strings(&["240.0.0.0/4"]),
            domain: strings(FALLBACK_FILTER_DOMAINS),
        }),
    }
}

fn loyalsoldier(behavior: RuleBehavior, name: &str) -> (String, RuleProviderConfig) {
    let mut config = RuleProviderConfig::http(
        behavior,
        format!("https://fastly.jsdelivr.net/gh/Loyalsoldier/clash-rules@release/{}.txt", name),
        format!("./ruleset/loyalsoldier/{}.yaml", name),
    );
    config.format = Some("yaml".to_string());
    (name.to_string(), config)
}

fn rule_providers() -> Vec<(String, RuleProviderConfig)> {
    let mut providers = vec![
        loyalsoldier(RuleBehavior::Domain, "reject"),
        loyalsoldier(RuleBehavior::Domain, "icloud"),
        loyalsoldier(RuleBehavior::Domain, "apple"),
        loyalsoldier(RuleBehavior::Domain, "google"),
        loyalsoldier(RuleBehavior::Domain, "proxy"),
        loyalsoldier(RuleBehavior::Domain, "direct"),
        loyalsoldier(RuleBehavior::Domain, "private"),
        loyalsoldier(RuleBehavior::Domain, "gfw"),
        loyalsoldier(RuleBehavior::Domain, "tld-not-cn"),
        loyalsoldier(RuleBehavior::IpCidr, "telegramcidr"),
        loyalsoldier(RuleBehavior::IpCidr, "cncidr"),
        loyalsoldier(RuleBehavior::IpCidr, "lancidr"),
        loyalsoldier(RuleBehavior::Classical, "applications"),
    ];

    let mut openai = RuleProviderConfig::http(
        RuleBehavior::Classical,
        "https://fastly.jsdelivr.net/gh/blackmatrix7/ios_rule_script@master/rule/Clash/OpenAI/OpenAI.yaml"
            .to_string(),
        "./ruleset/blackmatrix7/openai.yaml".to_string(),
    );
    openai.format = Some("yaml".to_string());
    providers.push(("openai".to_string(), openai));

    providers
}

fn groups() -> Vec<GroupTemplate> {
    let mut select = GroupTemplate::select("节点选择", &["DIRECT"], true);
    select.icon = Some(format!("{}/adjust.svg", ICON_BASE));

    let mut adblock = GroupTemplate::select("广告过滤", &["REJECT", "DIRECT", "节点选择"], false);
    adblock.icon = Some(format!("{}/bug.svg", ICON_BASE));

    let mut chatgpt = GroupTemplate::select("ChatGPT", &["DIRECT"], true);
    chatgpt.url = Some("https://chatgpt.com".to_string());
    chatgpt.expected_status = Some("200".to_string());
    chatgpt.filter = Some(COUNTRY_FILTER.to_string());
    chatgpt.icon = Some(format!("{}/chatgpt.svg", ICON_BASE));

    let mut fallthrough = GroupTemplate::select("漏网之鱼", &["DIRECT", "REJECT", "节点选择"], false);
    fallthrough.icon = Some(format!("{}/fish.svg", ICON_BASE));

    vec![select, adblock, chatgpt, fallthrough]
}
