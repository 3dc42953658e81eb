//! Simulated security tooling. Nothing here touches the network: results
//! are canned or drawn at random, shaped like real tool output.

use std::ops::RangeInclusive;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::nmap::parse_service_table;
use super::SecurityTools;
use crate::config::SimulationConfig;
use crate::errors::OstrichError;
use crate::models::finding::{CveFinding, Severity, WebAppFinding};
use crate::models::osint::{DnsRecord, DomainOsint, WhoisData};
use crate::models::scan_result::{
    NetworkScan, PortProbe, PortScan, PortState, VulnerabilityScan, WebAppScan,
};

const SUBDOMAIN_PREFIXES: &[&str] = &[
    "www", "mail", "blog", "shop", "api", "dev", "admin", "portal", "secure", "vpn",
];

const MAILBOX_NAMES: &[&str] = &[
    "info", "admin", "support", "sales", "contact", "help", "webmaster", "security",
];

pub struct SimulatedTools {
    config: SimulationConfig,
}

impl SimulatedTools {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// No artificial delays; used by tests and local demos.
    pub fn instant(port_open_probability: f64) -> Self {
        Self::new(SimulationConfig {
            port_open_probability,
            vuln_scan_delay_ms: 0,
            webapp_scan_delay_ms: 0,
        })
    }

    async fn simulate_delay(&self, millis: u64) {
        if millis > 0 {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

#[async_trait]
impl SecurityTools for SimulatedTools {
    async fn scan_network(&self, target: &str) -> Result<NetworkScan, OstrichError> {
        let now = Utc::now();
        let report = nmap_report(target, now);
        let ports = parse_service_table(&report);
        info!(target = %target, ports = ports.len(), "Network scan complete");
        Ok(NetworkScan { timestamp: now, ports })
    }

    async fn scan_ports(&self, target: &str, ports: &[u16]) -> Result<PortScan, OstrichError> {
        let results = probe_ports(ports, self.config.port_open_probability);
        info!(
            target = %target,
            requested = ports.len(),
            open = results.len(),
            "Port scan complete"
        );
        Ok(PortScan {
            target: target.to_string(),
            timestamp: Utc::now(),
            results,
        })
    }

    async fn scan_vulnerabilities(&self, target: &str) -> Result<VulnerabilityScan, OstrichError> {
        self.simulate_delay(self.config.vuln_scan_delay_ms).await;
        let mut vulnerabilities = pick_distinct(&cve_catalog(target), 2..=4);
        vulnerabilities.sort_by_key(|v| v.severity.rank());
        info!(
            target = %target,
            found = vulnerabilities.len(),
            worst = worst_severity(vulnerabilities.iter().map(|v| v.severity)),
            "Vulnerability scan complete"
        );
        Ok(VulnerabilityScan {
            timestamp: Utc::now(),
            target: target.to_string(),
            vulnerabilities,
        })
    }

    async fn scan_web_application(&self, target: &str) -> Result<WebAppScan, OstrichError> {
        self.simulate_delay(self.config.webapp_scan_delay_ms).await;
        let mut vulnerabilities = pick_distinct(&owasp_catalog(target), 2..=3);
        vulnerabilities.sort_by_key(|v| v.severity.rank());
        info!(
            target = %target,
            found = vulnerabilities.len(),
            worst = worst_severity(vulnerabilities.iter().map(|v| v.severity)),
            "Web application scan complete"
        );
        Ok(WebAppScan {
            timestamp: Utc::now(),
            target: target.to_string(),
            vulnerabilities,
        })
    }

    async fn collect_domain_osint(&self, domain: &str) -> Result<DomainOsint, OstrichError> {
        let subdomains = pick_distinct(SUBDOMAIN_PREFIXES, 5..=8)
            .into_iter()
            .map(|prefix| format!("{}.{}", prefix, domain))
            .collect::<Vec<_>>();
        let emails = pick_distinct(MAILBOX_NAMES, 3..=6)
            .into_iter()
            .map(|name| format!("{}@{}", name, domain))
            .collect::<Vec<_>>();
        debug!(
            domain = %domain,
            subdomains = subdomains.len(),
            emails = emails.len(),
            "OSINT collected"
        );

        Ok(DomainOsint {
            domain: domain.to_string(),
            timestamp: Utc::now(),
            dns_records: dns_records(domain),
            whois_data: whois_data(domain),
            subdomains,
            emails,
        })
    }

    fn engine_name(&self) -> &str {
        "simulated"
    }
}

/// Service name conventionally bound to a port.
pub fn well_known_service(port: u16) -> &'static str {
    match port {
        21 => "ftp",
        22 => "ssh",
        23 => "telnet",
        25 => "smtp",
        53 => "dns",
        80 => "http",
        443 => "https",
        3306 => "mysql",
        3389 => "rdp",
        8080 => "http-proxy",
        _ => "unknown",
    }
}

/// Each port is independently open with the given probability. Closed
/// ports are left out; open ones keep request order.
fn probe_ports(ports: &[u16], open_probability: f64) -> Vec<PortProbe> {
    let mut rng = rand::thread_rng();
    ports
        .iter()
        .filter(|_| rng.gen_bool(open_probability))
        .map(|&port| PortProbe {
            port,
            state: PortState::Open,
            service: well_known_service(port).to_string(),
        })
        .collect()
}

fn worst_severity(severities: impl Iterator<Item = Severity>) -> &'static str {
    severities.min_by_key(Severity::rank).map_or("none", |s| s.as_str())
}

/// Pick a random number (within `count`) of distinct catalog entries.
fn pick_distinct<T: Clone>(catalog: &[T], count: RangeInclusive<usize>) -> Vec<T> {
    let mut rng = rand::thread_rng();
    let n = rng.gen_range(count).min(catalog.len());
    catalog.choose_multiple(&mut rng, n).cloned().collect()
}

fn nmap_report(target: &str, now: DateTime<Utc>) -> String {
    format!(
        "
Starting Nmap 7.92 ( https://nmap.org ) at {}
Nmap scan report for {}
Host is up (0.015s latency).
Not shown: 995 closed ports
PORT     STATE SERVICE       VERSION
22/tcp   open  ssh           OpenSSH 8.2p1
80/tcp   open  http          Apache httpd 2.4.41
443/tcp  open  https         Apache httpd 2.4.41
3306/tcp open  mysql         MySQL 8.0.28
8080/tcp open  http-proxy    Nginx 1.18.0

Service detection performed. Please report any incorrect results at https://nmap.org/submit/ .
Nmap done: 1 IP address (1 host up) scanned in 12.35 seconds
",
        now.format("%Y-%m-%d %H:%M %Z"),
        target
    )
}

fn cve_catalog(target: &str) -> Vec<CveFinding> {
    let entry = |id: &str,
                 name: &str,
                 description: &str,
                 severity: Severity,
                 cvss: f32,
                 service: &str,
                 remediation: &str| {
        CveFinding {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            severity,
            cvss,
            affected: format!("{} ({})", target, service),
            remediation: remediation.to_string(),
        }
    };

    vec![
        entry(
            "CVE-2021-44228",
            "Log4j Remote Code Execution (Log4Shell)",
            "A remote code execution vulnerability in Apache Log4j library",
            Severity::Critical,
            10.0,
            "Apache service",
            "Update to Log4j 2.15.0 or later",
        ),
        entry(
            "CVE-2023-23397",
            "Microsoft Outlook Elevation of Privilege",
            "A vulnerability in Microsoft Outlook that could allow privilege escalation",
            Severity::High,
            8.8,
            "Mail server",
            "Apply Microsoft security update",
        ),
        entry(
            "CVE-2022-22965",
            "Spring Framework RCE (Spring4Shell)",
            "Remote code execution vulnerability in Spring Framework",
            Severity::Critical,
            9.8,
            "Web application",
            "Update to Spring Framework 5.3.18 or later",
        ),
        entry(
            "CVE-2022-26809",
            "Windows RPC Runtime Remote Code Execution",
            "A vulnerability in Windows RPC runtime that could allow remote code execution",
            Severity::High,
            8.8,
            "Windows host",
            "Apply Microsoft security update",
        ),
        entry(
            "CVE-2022-1388",
            "F5 BIG-IP iControl REST Authentication Bypass",
            "Authentication bypass vulnerability in F5 BIG-IP",
            Severity::Critical,
            9.8,
            "Load balancer",
            "Update F5 BIG-IP to patched version",
        ),
    ]
}

fn owasp_catalog(target: &str) -> Vec<WebAppFinding> {
    vec![
        WebAppFinding {
            id: "A01:2021".to_string(),
            name: "Broken Access Control".to_string(),
            description: "Restrictions on authenticated users are not properly enforced"
                .to_string(),
            severity: Severity::High,
            evidence: format!("Found at: {}/admin, Authentication bypass possible", target),
            remediation: "Implement proper access controls and use principle of least privilege"
                .to_string(),
        },
        WebAppFinding {
            id: "A02:2021".to_string(),
            name: "Cryptographic Failures".to_string(),
            description: "Data transmitted over unencrypted channel".to_string(),
            severity: Severity::Medium,
            evidence: format!("HTTP form submission at {}/login", target),
            remediation: "Implement HTTPS across the entire site and use secure cookies"
                .to_string(),
        },
        WebAppFinding {
            id: "A03:2021".to_string(),
            name: "Injection".to_string(),
            description: "SQL Injection vulnerability in search function".to_string(),
            severity: Severity::Critical,
            evidence: format!("Parameter 'q' at {}/search is vulnerable to SQL injection", target),
            remediation: "Use parameterized queries or prepared statements".to_string(),
        },
        WebAppFinding {
            id: "A07:2021".to_string(),
            name: "Identification and Authentication Failures".to_string(),
            description: "Weak password policy allows easily guessable passwords".to_string(),
            severity: Severity::High,
            evidence: format!("Password policy at {}/register does not enforce complexity", target),
            remediation: "Implement strong password requirements and multi-factor authentication"
                .to_string(),
        },
    ]
}

fn dns_records(domain: &str) -> Vec<DnsRecord> {
    let record = |record_type: &str, value: String| DnsRecord {
        record_type: record_type.to_string(),
        value,
    };
    vec![
        record("A", "192.168.1.10".to_string()),
        record("MX", format!("mail.{}", domain)),
        record("NS", format!("ns1.{}", domain)),
        record("TXT", format!("v=spf1 include:_spf.{} ~all", domain)),
    ]
}

fn whois_data(domain: &str) -> WhoisData {
    WhoisData {
        domain_name: domain.to_string(),
        registrar: "GoDaddy.com, LLC".to_string(),
        creation_date: "2005-03-15T00:00:00Z".to_string(),
        expiration_date: "2025-03-15T00:00:00Z".to_string(),
        updated_date: "2023-02-28T00:00:00Z".to_string(),
        status: [
            "clientDeleteProhibited",
            "clientRenewProhibited",
            "clientTransferProhibited",
            "clientUpdateProhibited",
        ]
        .join(" "),
        name_servers: vec![format!("ns1.{}", domain), format!("ns2.{}", domain)],
        registrant_name: "Domain Administrator".to_string(),
        registrant_organization: "Example Corp".to_string(),
        registrant_email: format!("admin@{}", domain),
    }
}
