use serde::{Deserialize, Serialize};

/// Severity level for a finding, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// Sort key; the most severe level sorts first.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
            Severity::Info => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
        }
    }
}

/// A known CVE reported against a host by the vulnerability scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CveFinding {
    /// CVE identifier, e.g. "CVE-2021-44228".
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: Severity,
    pub cvss: f32,
    /// Host and service the finding applies to.
    pub affected: String,
    pub remediation: String,
}

/// An OWASP Top-10 issue reported by the web application scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebAppFinding {
    /// OWASP category identifier, e.g. "A03:2021".
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: Severity,
    pub evidence: String,
    pub remediation: String,
}
