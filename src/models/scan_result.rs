use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::finding::{CveFinding, WebAppFinding};

/// Transport protocol of a reported port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
}

/// One service line of a network scan report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePort {
    pub port: u16,
    pub protocol: Protocol,
    /// State as printed by the scanner ("open", "filtered", ...).
    pub state: String,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkScan {
    pub timestamp: DateTime<Utc>,
    pub ports: Vec<ServicePort>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortState {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortProbe {
    pub port: u16,
    pub state: PortState,
    pub service: String,
}

/// Port scan outcome. `results` only lists open ports, in request order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortScan {
    pub target: String,
    pub timestamp: DateTime<Utc>,
    pub results: Vec<PortProbe>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulnerabilityScan {
    pub timestamp: DateTime<Utc>,
    pub target: String,
    pub vulnerabilities: Vec<CveFinding>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebAppScan {
    pub timestamp: DateTime<Utc>,
    pub target: String,
    pub vulnerabilities: Vec<WebAppFinding>,
}
