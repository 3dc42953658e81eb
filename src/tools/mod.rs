pub mod nmap;
pub mod simulated;
pub mod targets;

use async_trait::async_trait;
use crate::errors::OstrichError;
use crate::models::osint::DomainOsint;
use crate::models::scan_result::{NetworkScan, PortScan, VulnerabilityScan, WebAppScan};

pub use simulated::SimulatedTools;

/// Scanning and OSINT backend used by the HTTP handlers. Targets are
/// validated by the caller before any method runs.
#[async_trait]
pub trait SecurityTools: Send + Sync {
    /// Service discovery on a host
    async fn scan_network(&self, target: &str) -> Result<NetworkScan, OstrichError>;

    /// Probe the given ports; only open ports are reported
    async fn scan_ports(&self, target: &str, ports: &[u16]) -> Result<PortScan, OstrichError>;

    /// Match a host against known CVEs
    async fn scan_vulnerabilities(&self, target: &str) -> Result<VulnerabilityScan, OstrichError>;

    /// OWASP-style checks against a URL
    async fn scan_web_application(&self, target: &str) -> Result<WebAppScan, OstrichError>;

    /// DNS, WHOIS, subdomain and mailbox discovery for a domain
    async fn collect_domain_osint(&self, domain: &str) -> Result<DomainOsint, OstrichError>;

    /// Engine name for logging
    fn engine_name(&self) -> &str;
}
