//! Target shape checks run before any scan work starts.

use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::errors::OstrichError;

static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").unwrap()
});

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]{1,61}[a-zA-Z0-9]\.[a-zA-Z]{2,}$").unwrap()
});

pub fn is_ip_address(target: &str) -> bool {
    IPV4_RE.is_match(target)
}

/// Second-level domain with an alphabetic TLD, e.g. `example.com`.
pub fn is_domain(target: &str) -> bool {
    DOMAIN_RE.is_match(target)
}

/// Accept an IPv4-shaped address or a domain name.
pub fn validate_host(target: &str) -> Result<(), OstrichError> {
    if is_ip_address(target) || is_domain(target) {
        Ok(())
    } else {
        Err(OstrichError::Validation(
            "Invalid target format. Must be a valid IP address or domain name.".into(),
        ))
    }
}

pub fn validate_domain(domain: &str) -> Result<(), OstrichError> {
    if is_domain(domain) {
        Ok(())
    } else {
        Err(OstrichError::Validation("Invalid domain format.".into()))
    }
}

pub fn validate_url(target: &str) -> Result<url::Url, OstrichError> {
    url::Url::parse(target)
        .map_err(|_| OstrichError::Validation("Invalid target URL format.".into()))
}

const PORTS_REQUIRED: &str = "Valid ports array is required";
const PORT_RANGE: &str = "Ports must be between 1 and 65535";

/// Read the raw `ports` field of a request. It must be a non-empty array
/// of integers in 1..=65535; duplicates are dropped keeping the first
/// occurrence.
pub fn parse_ports(value: Option<&Value>) -> Result<Vec<u16>, OstrichError> {
    let items = match value {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(OstrichError::Validation(PORTS_REQUIRED.into())),
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut ports = Vec::with_capacity(items.len());
    for item in items {
        let port = match item {
            Value::Number(n) if n.is_i64() || n.is_u64() => n
                .as_u64()
                .and_then(|p| u16::try_from(p).ok())
                .filter(|p| *p != 0)
                .ok_or_else(|| OstrichError::Validation(PORT_RANGE.into()))?,
            _ => return Err(OstrichError::Validation(PORTS_REQUIRED.into())),
        };
        if seen.insert(port) {
            ports.push(port);
        }
    }
    Ok(ports)
}
