use axum::{extract::State, Json};
use serde_json::{json, Value};
use crate::api::models::{require_text, ApiJson, PortScanRequest, TargetRequest};
use crate::api::AppState;
use crate::errors::OstrichError;
use crate::tools::targets::{parse_ports, validate_host, validate_url};

const TARGET_REQUIRED: &str = "Target is required";

pub async fn scan_network(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<TargetRequest>,
) -> Result<Json<Value>, OstrichError> {
    let target = require_text(&req.target, TARGET_REQUIRED)?;
    validate_host(target)?;

    let results = state.tools.scan_network(target).await
        .map_err(|e| e.mask("Network scan failed"))?;

    Ok(Json(json!({"success": true, "data": results})))
}

pub async fn scan_ports(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PortScanRequest>,
) -> Result<Json<Value>, OstrichError> {
    let target = require_text(&req.target, TARGET_REQUIRED)?;
    let ports = parse_ports(req.ports.as_ref())?;
    validate_host(target)?;

    let results = state.tools.scan_ports(target, &ports).await
        .map_err(|e| e.mask("Port scan failed"))?;

    Ok(Json(json!({"success": true, "data": results})))
}

pub async fn scan_vulnerabilities(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<TargetRequest>,
) -> Result<Json<Value>, OstrichError> {
    let target = require_text(&req.target, TARGET_REQUIRED)?;
    validate_host(target)?;

    let results = state.tools.scan_vulnerabilities(target).await
        .map_err(|e| e.mask("Vulnerability scan failed"))?;

    Ok(Json(json!({"success": true, "data": results})))
}

pub async fn scan_webapp(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<TargetRequest>,
) -> Result<Json<Value>, OstrichError> {
    let target = require_text(&req.target, TARGET_REQUIRED)?;
    validate_url(target)?;

    let results = state.tools.scan_web_application(target).await
        .map_err(|e| e.mask("Web application scan failed"))?;

    Ok(Json(json!({"success": true, "data": results})))
}
