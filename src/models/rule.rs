//! Typed routing rules
//!
//! Rules are position-sensitive: the routing engine evaluates the list
//! top to bottom and the first match wins, so the relative order of the
//! literal tables must survive synthesis untouched.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MATCHER_REGEX: Regex = Regex::new(r"^[A-Z][A-Z0-9-]*$").unwrap();
}

/// Target of a routing rule: a built-in action or a named proxy group.
///
/// Group targets are resolved by name against the derived group list, so
/// the name must exactly match a group produced for the same profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleTarget {
    Direct,
    Reject,
    Group(String),
}

impl RuleTarget {
    /// Parse a target name, treating anything that is not a built-in as
    /// a group reference
    pub fn from_name(name: &str) -> Self {
        match name {
            "DIRECT" => RuleTarget::Direct,
            "REJECT" => RuleTarget::Reject,
            other => RuleTarget::Group(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RuleTarget::Direct => "DIRECT",
            RuleTarget::Reject => "REJECT",
            RuleTarget::Group(name) => name,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, RuleTarget::Group(_))
    }
}

/// A single routing rule of the form
/// `<matcher>,<value>,<target>[,no-resolve]`.
///
/// The catch-all `MATCH,<target>` form carries no matcher value. Parsing
/// trims whitespace around every segment, so the canonical form rendered
/// by [`Display`](fmt::Display) may differ from the literal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub matcher: String,
    pub value: Option<String>,
    pub target: RuleTarget,
    pub no_resolve: bool,
}

impl Rule {
    /// Name of the rule provider referenced by a `RULE-SET` rule, if any
    pub fn ruleset_name(&self) -> Option<&str> {
        if self.matcher == "RULE-SET" {
            self.value.as_deref()
        } else {
            None
        }
    }
}

impl FromStr for Rule {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        let matcher = match parts.first() {
            Some(first) if !first.is_empty() => first.to_string(),
            _ => return Err("empty matcher".to_string()),
        };
        if !MATCHER_REGEX.is_match(&matcher) {
            return Err(format!("invalid matcher '{}'", matcher));
        }

        // The catch-all form has no matcher value
        if matcher == "MATCH" {
            if parts.len() != 2 {
                return Err("MATCH rule must be 'MATCH,<target>'".to_string());
            }
            return Ok(Rule {
                matcher,
                value: None,
                target: RuleTarget::from_name(parts[1]),
                no_resolve: false,
            });
        }

        if parts.len() < 3 || parts.len() > 4 {
            return Err(format!("expected 3 or 4 segments, found {}", parts.len()));
        }
        let no_resolve = match parts.get(3) {
            None => false,
            Some(&"no-resolve") => true,
            Some(option) => return Err(format!("unknown rule option '{}'", option)),
        };

        Ok(Rule {
            matcher,
            value: Some(parts[1].to_string()),
            target: RuleTarget::from_name(parts[2]),
            no_resolve,
        })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matcher)?;
        if let Some(value) = &self.value {
            write!(f, ",{}", value)?;
        }
        write!(f, ",{}", self.target.as_str())?;
        if self.no_resolve {
            write!(f, ",no-resolve")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_domain_rule() {
        let rule: Rule = "DOMAIN-SUFFIX,github.com,DIRECT".parse().unwrap();
        assert_eq!(rule.matcher, "DOMAIN-SUFFIX");
        assert_eq!(rule.value.as_deref(), Some("github.com"));
        assert_eq!(rule.target, RuleTarget::Direct);
        assert!(!rule.no_resolve);
    }

    #[test]
    fn test_parse_no_resolve() {
        let rule: Rule = "GEOIP,CN,DIRECT,no-resolve".parse().unwrap();
        assert!(rule.no_resolve);
        assert_eq!(rule.to_string(), "GEOIP,CN,DIRECT,no-resolve");
    }

    #[test]
    fn test_parse_match_rule() {
        let rule: Rule = "MATCH,🐟 漏网之鱼".parse().unwrap();
        assert_eq!(rule.matcher, "MATCH");
        assert_eq!(rule.value, None);
        assert_eq!(rule.target, RuleTarget::Group("🐟 漏网之鱼".to_string()));
    }

    #[test]
    fn test_parse_trims_stray_whitespace() {
        let rule: Rule = "DOMAIN-SUFFIX, byr.pt, DIRECT".parse().unwrap();
        assert_eq!(rule.value.as_deref(), Some("byr.pt"));
        assert_eq!(rule.to_string(), "DOMAIN-SUFFIX,byr.pt,DIRECT");

        let rule: Rule = "MATCH, 漏网之鱼".parse().unwrap();
        assert_eq!(rule.target, RuleTarget::Group("漏网之鱼".to_string()));
    }

    #[test]
    fn test_parse_ruleset_reference() {
        let rule: Rule = "RULE-SET,reject,🛑 广告拦截".parse().unwrap();
        assert_eq!(rule.ruleset_name(), Some("reject"));
        assert!(!rule.target.is_builtin());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("".parse::<Rule>().is_err());
        assert!("MATCH".parse::<Rule>().is_err());
        assert!("DOMAIN,example.com".parse::<Rule>().is_err());
        assert!("GEOIP,CN,DIRECT,resolve".parse::<Rule>().is_err());
        assert!("domain,example.com,DIRECT".parse::<Rule>().is_err());
    }
}
