use chrono::Utc;
use crate::errors::OstrichError;
use crate::models::history::ScanRecord;
use super::Database;

impl Database {
    pub fn save_scan_history(
        &self,
        user_id: i64,
        scan_type: &str,
        target: &str,
        results: &serde_json::Value,
    ) -> Result<ScanRecord, OstrichError> {
        let encoded = serde_json::to_string(results)?;
        let conn = self.lock()?;
        let created_at = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO scan_history (user_id, scan_type, target, results, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![user_id, scan_type, target, encoded, created_at],
        ).map_err(|e| OstrichError::Database(format!("Failed to save scan history: {}", e)))?;

        Ok(ScanRecord {
            id: conn.last_insert_rowid(),
            user_id,
            scan_type: scan_type.to_string(),
            target: target.to_string(),
            results: results.clone(),
            created_at,
        })
    }

    /// A user's scans, newest first.
    pub fn get_scan_history_by_user(&self, user_id: i64) -> Result<Vec<ScanRecord>, OstrichError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, scan_type, target, results, created_at FROM scan_history \
             WHERE user_id = ?1 ORDER BY created_at DESC, id DESC"
        ).map_err(|e| OstrichError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map(rusqlite::params![user_id], |row: &rusqlite::Row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, String>(5)?,
            ))
        }).map_err(|e| OstrichError::Database(format!("Query error: {}", e)))?;

        let mut records = Vec::new();
        for row in rows {
            let (id, user_id, scan_type, target, results, created_at) =
                row.map_err(|e| OstrichError::Database(format!("Row error: {}", e)))?;
            let results = match results {
                Some(text) => serde_json::from_str(&text)?,
                None => serde_json::json!({}),
            };
            records.push(ScanRecord { id, user_id, scan_type, target, results, created_at });
        }
        Ok(records)
    }
}
