use chrono::Utc;
use crate::errors::OstrichError;
use crate::models::history::{NewVulnerability, VulnerabilityRecord};
use super::Database;

const VULN_COLUMNS: &str = "v.id, v.scan_id, v.name, v.description, v.severity, v.cve, \
                            v.affected, v.status, v.discovered_at";

fn vulnerability_from_row(row: &rusqlite::Row) -> rusqlite::Result<VulnerabilityRecord> {
    Ok(VulnerabilityRecord {
        id: row.get(0)?,
        scan_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        severity: row.get(4)?,
        cve: row.get(5)?,
        affected: row.get(6)?,
        status: row.get(7)?,
        discovered_at: row.get(8)?,
        target: None,
    })
}

impl Database {
    pub fn save_vulnerability(
        &self,
        scan_id: i64,
        vulnerability: &NewVulnerability,
    ) -> Result<VulnerabilityRecord, OstrichError> {
        let conn = self.lock()?;
        let discovered_at = Utc::now().to_rfc3339();
        let cve = vulnerability.cve.clone().unwrap_or_else(|| "N/A".to_string());
        let status = vulnerability.status.clone().unwrap_or_else(|| "open".to_string());
        conn.execute(
            "INSERT INTO vulnerabilities \
             (scan_id, name, description, severity, cve, affected, status, discovered_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                scan_id,
                vulnerability.name,
                vulnerability.description,
                vulnerability.severity,
                cve,
                vulnerability.affected,
                status,
                discovered_at,
            ],
        ).map_err(|e| OstrichError::Database(format!("Failed to save vulnerability: {}", e)))?;

        Ok(VulnerabilityRecord {
            id: conn.last_insert_rowid(),
            scan_id,
            name: vulnerability.name.clone(),
            description: vulnerability.description.clone(),
            severity: vulnerability.severity.clone(),
            cve,
            affected: vulnerability.affected.clone(),
            status,
            discovered_at,
            target: None,
        })
    }

    pub fn get_vulnerabilities_by_scan(
        &self,
        scan_id: i64,
    ) -> Result<Vec<VulnerabilityRecord>, OstrichError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM vulnerabilities v WHERE v.scan_id = ?1 ORDER BY v.id",
            VULN_COLUMNS
        )).map_err(|e| OstrichError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map(rusqlite::params![scan_id], vulnerability_from_row)
            .map_err(|e| OstrichError::Database(format!("Query error: {}", e)))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| OstrichError::Database(format!("Row error: {}", e)))?);
        }
        Ok(results)
    }

    /// Every vulnerability with the target of the scan that found it, newest first.
    pub fn get_all_vulnerabilities(&self) -> Result<Vec<VulnerabilityRecord>, OstrichError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {}, s.target FROM vulnerabilities v \
             JOIN scan_history s ON v.scan_id = s.id \
             ORDER BY v.discovered_at DESC, v.id DESC",
            VULN_COLUMNS
        )).map_err(|e| OstrichError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map([], |row: &rusqlite::Row| {
            let mut record = vulnerability_from_row(row)?;
            record.target = Some(row.get(9)?);
            Ok(record)
        }).map_err(|e| OstrichError::Database(format!("Query error: {}", e)))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| OstrichError::Database(format!("Row error: {}", e)))?);
        }
        Ok(results)
    }

    /// Returns false when no vulnerability has the given id.
    pub fn update_vulnerability_status(&self, id: i64, status: &str) -> Result<bool, OstrichError> {
        let conn = self.lock()?;
        let affected = conn.execute(
            "UPDATE vulnerabilities SET status = ?2 WHERE id = ?1",
            rusqlite::params![id, status],
        ).map_err(|e| OstrichError::Database(format!("Update failed: {}", e)))?;
        Ok(affected > 0)
    }
}
