use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisData {
    pub domain_name: String,
    pub registrar: String,
    pub creation_date: String,
    pub expiration_date: String,
    pub updated_date: String,
    pub status: String,
    pub name_servers: Vec<String>,
    pub registrant_name: String,
    pub registrant_organization: String,
    pub registrant_email: String,
}

/// Everything collected about a domain in one OSINT run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainOsint {
    pub domain: String,
    pub timestamp: DateTime<Utc>,
    pub dns_records: Vec<DnsRecord>,
    pub whois_data: WhoisData,
    pub subdomains: Vec<String>,
    pub emails: Vec<String>,
}
