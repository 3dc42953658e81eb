use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;
use crate::api::auth::{AdminUser, CurrentUser};
use crate::api::models::{require, ApiJson, UpdateStatusRequest};
use crate::api::AppState;
use crate::errors::OstrichError;

pub async fn list_history(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Value>, OstrichError> {
    let history = state.db.get_scan_history_by_user(user.id)
        .map_err(|e| e.mask("Failed to load scan history"))?;
    Ok(Json(json!({"success": true, "data": history})))
}

pub async fn list_vulnerabilities(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Result<Json<Value>, OstrichError> {
    let vulnerabilities = state.db.get_all_vulnerabilities()
        .map_err(|e| e.mask("Failed to load vulnerabilities"))?;
    Ok(Json(json!({"success": true, "data": vulnerabilities})))
}

pub async fn update_vulnerability_status(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i64>,
    ApiJson(req): ApiJson<UpdateStatusRequest>,
) -> Result<Json<Value>, OstrichError> {
    let status = require(&req.status, "Status is required")?;

    let updated = state.db.update_vulnerability_status(id, status)
        .map_err(|e| e.mask("Failed to update vulnerability"))?;
    if !updated {
        return Err(OstrichError::NotFound("Vulnerability not found".into()));
    }

    info!(
        vulnerability_id = id,
        status = %status,
        admin = %admin.username,
        "Vulnerability status updated"
    );
    Ok(Json(json!({"success": true, "data": {"id": id, "status": status}})))
}
