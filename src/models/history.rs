use serde::{Deserialize, Serialize};

/// A persisted scan run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: i64,
    pub user_id: i64,
    pub scan_type: String,
    pub target: String,
    pub results: serde_json::Value,
    pub created_at: String,
}

/// Input for recording a vulnerability against a scan.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewVulnerability {
    pub name: String,
    pub description: Option<String>,
    pub severity: Option<String>,
    /// Stored as "N/A" when absent.
    pub cve: Option<String>,
    pub affected: Option<String>,
    /// Stored as "open" when absent.
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulnerabilityRecord {
    pub id: i64,
    pub scan_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub severity: Option<String>,
    pub cve: String,
    pub affected: Option<String>,
    pub status: String,
    pub discovered_at: String,
    /// Scan target, filled in by the cross-scan listing only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}
