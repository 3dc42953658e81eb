use axum::http::{header, StatusCode};
use axum::body::Body;
use async_trait::async_trait;
use http_body_util::BodyExt;
use tower::ServiceExt;
use serde_json::{json, Value};
use ostrich::api::{build_router, AppState};
use ostrich::auth::{create_user, CookieSettings, SessionManager, TokenSigner};
use ostrich::db::Database;
use ostrich::errors::OstrichError;
use ostrich::models::history::NewVulnerability;
use ostrich::models::osint::DomainOsint;
use ostrich::models::scan_result::{NetworkScan, PortScan, VulnerabilityScan, WebAppScan};
use ostrich::tools::{SecurityTools, SimulatedTools};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts every call before delegating to the instant simulator.
struct RecordingTools {
    inner: SimulatedTools,
    calls: AtomicUsize,
}

impl RecordingTools {
    fn new(port_open_probability: f64) -> Self {
        Self {
            inner: SimulatedTools::instant(port_open_probability),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl SecurityTools for RecordingTools {
    async fn scan_network(&self, target: &str) -> Result<NetworkScan, OstrichError> {
        self.record();
        self.inner.scan_network(target).await
    }

    async fn scan_ports(&self, target: &str, ports: &[u16]) -> Result<PortScan, OstrichError> {
        self.record();
        self.inner.scan_ports(target, ports).await
    }

    async fn scan_vulnerabilities(&self, target: &str) -> Result<VulnerabilityScan, OstrichError> {
        self.record();
        self.inner.scan_vulnerabilities(target).await
    }

    async fn scan_web_application(&self, target: &str) -> Result<WebAppScan, OstrichError> {
        self.record();
        self.inner.scan_web_application(target).await
    }

    async fn collect_domain_osint(&self, domain: &str) -> Result<DomainOsint, OstrichError> {
        self.record();
        self.inner.collect_domain_osint(domain).await
    }

    fn engine_name(&self) -> &str {
        "recording"
    }
}

/// Every tool call fails with an internal error carrying private detail.
struct FailingTools;

fn tool_failure() -> OstrichError {
    OstrichError::Database("secret detail: /var/lib/ostrich.db locked".into())
}

#[async_trait]
impl SecurityTools for FailingTools {
    async fn scan_network(&self, _target: &str) -> Result<NetworkScan, OstrichError> {
        Err(tool_failure())
    }

    async fn scan_ports(&self, _target: &str, _ports: &[u16]) -> Result<PortScan, OstrichError> {
        Err(tool_failure())
    }

    async fn scan_vulnerabilities(&self, _target: &str) -> Result<VulnerabilityScan, OstrichError> {
        Err(tool_failure())
    }

    async fn scan_web_application(&self, _target: &str) -> Result<WebAppScan, OstrichError> {
        Err(tool_failure())
    }

    async fn collect_domain_osint(&self, _domain: &str) -> Result<DomainOsint, OstrichError> {
        Err(tool_failure())
    }

    fn engine_name(&self) -> &str {
        "failing"
    }
}

fn create_test_state_with(tools: Arc<dyn SecurityTools>) -> AppState {
    let db = Database::in_memory().unwrap();
    let sessions = SessionManager::new(
        TokenSigner::new("test-secret", 8),
        CookieSettings::new(false, 28800),
        4,
    );
    AppState::new(db, sessions, tools)
}

fn create_test_state() -> AppState {
    create_test_state_with(Arc::new(SimulatedTools::instant(0.7)))
}

fn app(state: &AppState) -> axum::Router {
    build_router(state.clone())
}

fn make_request(method: &str, uri: &str, body: Option<Value>) -> axum::http::Request<Body> {
    make_request_with_cookie(method, uri, body, None)
}

fn make_request_with_cookie(
    method: &str,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> axum::http::Request<Body> {
    let mut builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    match body {
        Some(b) => builder.body(Body::from(serde_json::to_string(&b).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        panic!("Empty response body. Status: {}, Headers: {:?}", parts.status, parts.headers);
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

fn set_cookie(response: &axum::http::Response<Body>) -> String {
    response.headers()
        .get(header::SET_COOKIE)
        .expect("missing Set-Cookie")
        .to_str()
        .unwrap()
        .to_string()
}

/// `name=value` part of a Set-Cookie header, ready to send back.
fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap().trim().to_string()
}

async fn login_cookie(state: &AppState, username: &str, password: &str) -> String {
    let req = make_request("POST", "/api/auth/login", Some(json!({
        "username": username,
        "password": password,
    })));
    let response = app(state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    cookie_pair(&set_cookie(&response))
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = create_test_state();
    let req = make_request("GET", "/api/health", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "ostrich");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let built_at = body["built_at"].as_str().expect("build timestamp embedded");
    assert!(chrono::DateTime::parse_from_rfc3339(built_at).is_ok(), "{}", built_at);
    assert!(body["git_hash"].is_string() || body["git_hash"].is_null());
}

#[tokio::test]
async fn test_register_sets_session_and_rejects_duplicates() {
    let state = create_test_state();

    let req = make_request("POST", "/api/auth/register", Some(json!({
        "username": "alice",
        "password": "wonderland",
        "email": "alice@example.com",
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("auth_token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["role"], "user");

    let req = make_request("POST", "/api/auth/register", Some(json!({
        "username": "alice",
        "password": "other",
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Username or email already exists");

    assert_eq!(state.db.count_users().unwrap(), 1);
}

#[tokio::test]
async fn test_register_requires_credentials() {
    let state = create_test_state();
    let req = make_request("POST", "/api/auth/register", Some(json!({"username": "bob"})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Username and password are required");
}

#[tokio::test]
async fn test_login_then_current_user() {
    let state = create_test_state();
    let user = create_user(&state.db, "carol", "secret", None, "user", 4).await.unwrap();

    let cookie = login_cookie(&state, "carol", "secret").await;

    let req = make_request_with_cookie("GET", "/api/auth/user", None, Some(&cookie));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["user"]["id"], user.id);
    assert_eq!(body["user"]["username"], "carol");
    assert_eq!(body["user"]["role"], "user");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let state = create_test_state();
    create_user(&state.db, "dave", "right", None, "user", 4).await.unwrap();

    let req = make_request("POST", "/api/auth/login", Some(json!({
        "username": "dave",
        "password": "wrong",
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_unknown_user_matches_wrong_password() {
    let state = create_test_state();
    let req = make_request("POST", "/api/auth/login", Some(json!({
        "username": "nobody",
        "password": "x",
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let state = create_test_state();
    let req = make_request("POST", "/api/auth/login", Some(json!({"password": "x"})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Username and password are required");
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let state = create_test_state();
    let req = make_request("POST", "/api/auth/logout", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("auth_token=;"));
    assert!(cookie.contains("Max-Age=0"));

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_current_user_requires_session() {
    let state = create_test_state();

    let req = make_request("GET", "/api/auth/user", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Not authenticated");

    let req = make_request_with_cookie("GET", "/api/auth/user", None, Some("auth_token=not-a-jwt"));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_from_other_secret_rejected() {
    let state = create_test_state();
    let user = create_user(&state.db, "erin", "pw", None, "user", 4).await.unwrap();
    let forged = TokenSigner::new("someone-else", 8).issue(&user).unwrap();

    let req = make_request_with_cookie(
        "GET",
        "/api/auth/user",
        None,
        Some(&format!("auth_token={}", forged)),
    );
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_targets_rejected_before_tool_work() {
    let tools = Arc::new(RecordingTools::new(0.7));
    let state = create_test_state_with(tools.clone());

    let cases = [
        ("/api/scan/network", json!({"target": "not a host!"}), "Invalid target format. Must be a valid IP address or domain name."),
        ("/api/scan/vulnerabilities", json!({"target": "bad_host"}), "Invalid target format. Must be a valid IP address or domain name."),
        ("/api/scan/ports", json!({"target": "-bad-", "ports": [80]}), "Invalid target format. Must be a valid IP address or domain name."),
        ("/api/scan/webapp", json!({"target": "not a url"}), "Invalid target URL format."),
        ("/api/osint/domain", json!({"domain": "192.168.1.1"}), "Invalid domain format."),
        ("/api/scan/network", json!({}), "Target is required"),
        ("/api/osint/domain", json!({"domain": ""}), "Domain is required"),
    ];

    for (uri, body, message) in cases {
        let req = make_request("POST", uri, Some(body));
        let response = app(&state).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body = response_json(response).await;
        assert_eq!(body["error"], message, "{}", uri);
    }

    assert_eq!(tools.calls(), 0);
}

#[tokio::test]
async fn test_network_scan_returns_services() {
    let state = create_test_state();
    let req = make_request("POST", "/api/scan/network", Some(json!({"target": "192.168.1.10"})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    let ports = body["data"]["ports"].as_array().unwrap();
    assert!(!ports.is_empty());
    assert!(ports.iter().all(|p| p["port"].is_u64() && p["service"].is_string()));
    assert!(body["data"]["timestamp"].is_string());
}

#[tokio::test]
async fn test_port_scan_all_open() {
    let state = create_test_state_with(Arc::new(SimulatedTools::instant(1.0)));
    let req = make_request("POST", "/api/scan/ports", Some(json!({
        "target": "example.com",
        "ports": [22, 80, 443, 8080],
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["data"]["target"], "example.com");
    let results = body["data"]["results"].as_array().unwrap();
    let ports: Vec<u64> = results.iter().map(|r| r["port"].as_u64().unwrap()).collect();
    assert_eq!(ports, vec![22, 80, 443, 8080]);
    assert!(results.iter().all(|r| r["state"] == "open"));
    assert_eq!(results[0]["service"], "ssh");
}

#[tokio::test]
async fn test_port_scan_none_open() {
    let state = create_test_state_with(Arc::new(SimulatedTools::instant(0.0)));
    let req = make_request("POST", "/api/scan/ports", Some(json!({
        "target": "10.0.0.1",
        "ports": [21, 25],
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert!(body["data"]["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_port_scan_results_are_subset() {
    let state = create_test_state();
    let requested = [21u64, 22, 80, 443, 3306];
    let req = make_request("POST", "/api/scan/ports", Some(json!({
        "target": "10.0.0.1",
        "ports": requested,
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    for result in body["data"]["results"].as_array().unwrap() {
        assert!(requested.contains(&result["port"].as_u64().unwrap()));
    }
}

#[tokio::test]
async fn test_port_scan_requires_ports() {
    let tools = Arc::new(RecordingTools::new(1.0));
    let state = create_test_state_with(tools.clone());

    let cases = [
        (json!({"target": "10.0.0.1"}), "Valid ports array is required"),
        (json!({"target": "10.0.0.1", "ports": []}), "Valid ports array is required"),
        (json!({"target": "10.0.0.1", "ports": "80"}), "Valid ports array is required"),
        (json!({"target": "10.0.0.1", "ports": [80, "443"]}), "Valid ports array is required"),
        (json!({"target": "10.0.0.1", "ports": [0]}), "Ports must be between 1 and 65535"),
        (json!({"target": "10.0.0.1", "ports": [70000]}), "Ports must be between 1 and 65535"),
        (json!({"ports": "80"}), "Target is required"),
        (json!({"target": 42, "ports": [80]}), "Target is required"),
    ];

    for (body, message) in cases {
        let req = make_request("POST", "/api/scan/ports", Some(body.clone()));
        let response = app(&state).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", body);
        let response_body = response_json(response).await;
        assert_eq!(response_body["error"], message, "{}", body);
    }

    assert_eq!(tools.calls(), 0);
}

#[tokio::test]
async fn test_port_scan_drops_duplicate_ports() {
    let state = create_test_state_with(Arc::new(SimulatedTools::instant(1.0)));
    let req = make_request("POST", "/api/scan/ports", Some(json!({
        "target": "10.0.0.1",
        "ports": [443, 80, 443],
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let ports: Vec<u64> = body["data"]["results"].as_array().unwrap()
        .iter()
        .map(|r| r["port"].as_u64().unwrap())
        .collect();
    assert_eq!(ports, vec![443, 80]);
}

#[tokio::test]
async fn test_tool_failures_are_masked() {
    let state = create_test_state_with(Arc::new(FailingTools));

    let cases = [
        ("/api/scan/network", json!({"target": "10.0.0.1"}), "Network scan failed"),
        ("/api/scan/ports", json!({"target": "10.0.0.1", "ports": [22]}), "Port scan failed"),
        ("/api/scan/vulnerabilities", json!({"target": "example.com"}), "Vulnerability scan failed"),
        ("/api/scan/webapp", json!({"target": "https://example.com"}), "Web application scan failed"),
        ("/api/osint/domain", json!({"domain": "example.com"}), "OSINT collection failed"),
    ];

    for (uri, body, message) in cases {
        let req = make_request("POST", uri, Some(body));
        let response = app(&state).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8_lossy(&bytes);
        assert!(!text.contains("secret detail"), "{} leaked: {}", uri, text);

        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"error": message}), "{}", uri);
    }
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let state = create_test_state();
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/scan/network")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn test_vulnerability_scan() {
    let state = create_test_state();
    let req = make_request("POST", "/api/scan/vulnerabilities", Some(json!({"target": "example.com"})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["data"]["target"], "example.com");
    let vulns = body["data"]["vulnerabilities"].as_array().unwrap();
    assert!((2..=4).contains(&vulns.len()));
    for v in vulns {
        assert!(v["id"].as_str().unwrap().starts_with("CVE-"));
    }
}

#[tokio::test]
async fn test_webapp_scan() {
    let state = create_test_state();
    let req = make_request("POST", "/api/scan/webapp", Some(json!({"target": "https://example.com/login"})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let vulns = body["data"]["vulnerabilities"].as_array().unwrap();
    assert!((2..=3).contains(&vulns.len()));
}

#[tokio::test]
async fn test_domain_osint() {
    let state = create_test_state();
    let req = make_request("POST", "/api/osint/domain", Some(json!({"domain": "example.com"})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let data = &body["data"];
    assert_eq!(data["domain"], "example.com");
    assert_eq!(data["whoisData"]["domainName"], "example.com");

    let subdomains = data["subdomains"].as_array().unwrap();
    assert!((5..=8).contains(&subdomains.len()));
    assert!(subdomains.iter().all(|s| s.as_str().unwrap().ends_with(".example.com")));

    let emails = data["emails"].as_array().unwrap();
    assert!((3..=6).contains(&emails.len()));
    assert!(emails.iter().all(|e| e.as_str().unwrap().ends_with("@example.com")));

    assert!(data["dnsRecords"].as_array().unwrap().iter().any(|r| r["type"] == "A"));
}

#[tokio::test]
async fn test_history_requires_session() {
    let state = create_test_state();
    for uri in ["/api/history", "/api/vulnerabilities"] {
        let req = make_request("GET", uri, None);
        let response = app(&state).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[tokio::test]
async fn test_history_lists_own_scans() {
    let state = create_test_state();
    let user = create_user(&state.db, "frank", "pw", None, "user", 4).await.unwrap();
    let other = create_user(&state.db, "grace", "pw", None, "user", 4).await.unwrap();
    state.db.save_scan_history(user.id, "network", "10.0.0.1", &json!({"ports": []})).unwrap();
    state.db.save_scan_history(other.id, "network", "10.0.0.2", &json!({"ports": []})).unwrap();

    let cookie = login_cookie(&state, "frank", "pw").await;
    let req = make_request_with_cookie("GET", "/api/history", None, Some(&cookie));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["target"], "10.0.0.1");
}

#[tokio::test]
async fn test_update_vulnerability_requires_admin() {
    let state = create_test_state();
    let user = create_user(&state.db, "henry", "pw", None, "user", 4).await.unwrap();
    let scan = state.db.save_scan_history(user.id, "vulnerability", "example.com", &json!({})).unwrap();
    let vuln = state.db.save_vulnerability(scan.id, &NewVulnerability {
        name: "Weak TLS".into(),
        ..Default::default()
    }).unwrap();

    let cookie = login_cookie(&state, "henry", "pw").await;
    let req = make_request_with_cookie(
        "PATCH",
        &format!("/api/vulnerabilities/{}", vuln.id),
        Some(json!({"status": "resolved"})),
        Some(&cookie),
    );
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let stored = state.db.get_vulnerabilities_by_scan(scan.id).unwrap();
    assert_eq!(stored[0].status, "open");
}

#[tokio::test]
async fn test_update_vulnerability_as_admin() {
    let state = create_test_state();
    let admin = create_user(&state.db, "root", "pw", None, "admin", 4).await.unwrap();
    let scan = state.db.save_scan_history(admin.id, "vulnerability", "example.com", &json!({})).unwrap();
    let vuln = state.db.save_vulnerability(scan.id, &NewVulnerability {
        name: "Weak TLS".into(),
        ..Default::default()
    }).unwrap();

    let cookie = login_cookie(&state, "root", "pw").await;

    let req = make_request_with_cookie(
        "PATCH",
        &format!("/api/vulnerabilities/{}", vuln.id),
        Some(json!({"status": "resolved"})),
        Some(&cookie),
    );
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["status"], "resolved");

    let req = make_request_with_cookie(
        "PATCH",
        "/api/vulnerabilities/9999",
        Some(json!({"status": "resolved"})),
        Some(&cookie),
    );
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let req = make_request_with_cookie("GET", "/api/vulnerabilities", None, Some(&cookie));
    let response = app(&state).oneshot(req).await.unwrap();
    let body = response_json(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["status"], "resolved");
    assert_eq!(data[0]["target"], "example.com");
}
