use axum::{extract::State, Json};
use serde_json::{json, Value};
use crate::api::models::{require_text, ApiJson, DomainRequest};
use crate::api::AppState;
use crate::errors::OstrichError;
use crate::tools::targets::validate_domain;

pub async fn collect_domain(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<DomainRequest>,
) -> Result<Json<Value>, OstrichError> {
    let domain = require_text(&req.domain, "Domain is required")?;
    validate_domain(domain)?;

    let results = state.tools.collect_domain_osint(domain).await
        .map_err(|e| e.mask("OSINT collection failed"))?;

    Ok(Json(json!({"success": true, "data": results})))
}
