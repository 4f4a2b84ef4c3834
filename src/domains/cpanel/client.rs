//! HTTP client for the cPanel account API and the WHM administrative API.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use super::call::{ApiCall, Surface};
use super::dns::{self, RecordDescriptor};
use super::email;
use super::error::{CpanelError, CpanelResult};
use super::profile::ConnectionProfile;
use super::response::ApiOutcome;

/// Timeout applied to every outbound call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Identity used for the administrative API.
pub const ADMIN_USER: &str = "root";

/// Client for both API surfaces of one cPanel server.
///
/// Holds only immutable state, so a single instance can be shared behind an
/// `Arc` by every concurrent tool invocation. Construction performs no I/O.
#[derive(Debug, Clone)]
pub struct CpanelClient {
    profile: ConnectionProfile,
    account_base_url: String,
    admin_base_url: String,
    account_http: reqwest::Client,
    admin_http: reqwest::Client,
}

impl CpanelClient {
    /// Create a client whose base URLs are derived from `profile`.
    pub fn new(profile: ConnectionProfile) -> CpanelResult<Self> {
        let account_base_url = profile.account_base_url();
        let admin_base_url = profile.admin_base_url();
        Self::with_base_urls(profile, account_base_url, admin_base_url)
    }

    /// Create a client pointed at explicit base URLs (mock servers, proxies).
    pub fn with_base_urls(
        profile: ConnectionProfile,
        account_base_url: impl Into<String>,
        admin_base_url: impl Into<String>,
    ) -> CpanelResult<Self> {
        let account_auth = format!("cpanel {}:{}", profile.username(), profile.api_token());
        let admin_auth = format!("whm {}:{}", ADMIN_USER, profile.api_token());

        let account_http = build_http(&account_auth, false)?;
        let admin_http = build_http(&admin_auth, !profile.verify_admin_tls())?;

        Ok(Self {
            account_base_url: account_base_url.into().trim_end_matches('/').to_string(),
            admin_base_url: admin_base_url.into().trim_end_matches('/').to_string(),
            profile,
            account_http,
            admin_http,
        })
    }

    pub fn profile(&self) -> &ConnectionProfile {
        &self.profile
    }

    pub fn account_base_url(&self) -> &str {
        &self.account_base_url
    }

    pub fn admin_base_url(&self) -> &str {
        &self.admin_base_url
    }

    /// Full URL (without query) that `call` is sent to.
    pub fn url_for(&self, call: &ApiCall) -> String {
        let base = match call.surface() {
            Surface::Account => &self.account_base_url,
            Surface::Admin => &self.admin_base_url,
        };
        format!("{}{}", base, call.path())
    }

    /// Call `module/function` on the account API.
    pub async fn uapi<K, V, I>(&self, module: &str, function: &str, params: I) -> CpanelResult<Value>
    where
        K: Into<String>,
        V: ToString,
        I: IntoIterator<Item = (K, V)>,
    {
        let call = ApiCall::account(module, function)?.params(params);
        self.execute(&call).await
    }

    /// Call `function` on the administrative API. `api.version=1` is always sent.
    pub async fn whm<K, V, I>(&self, function: &str, params: I) -> CpanelResult<Value>
    where
        K: Into<String>,
        V: ToString,
        I: IntoIterator<Item = (K, V)>,
    {
        let call = ApiCall::admin(function)?.params(params);
        self.execute(&call).await
    }

    /// Send `call` and classify the outcome.
    ///
    /// Transport failures and non-2xx statuses become `RequestFailed`, an
    /// undecodable body `InvalidResponse`, and an in-band failure `Api`.
    /// Successful bodies are returned untouched.
    #[instrument(skip_all, fields(surface = %call.surface(), path = call.path()))]
    pub async fn execute(&self, call: &ApiCall) -> CpanelResult<Value> {
        let http = match call.surface() {
            Surface::Account => &self.account_http,
            Surface::Admin => &self.admin_http,
        };
        let url = self.url_for(call);

        debug!(params = ?call.param_names(), "Sending request");

        let response = http
            .get(&url)
            .query(&call.query())
            .send()
            .await
            .map_err(CpanelError::RequestFailed)?
            .error_for_status()
            .map_err(CpanelError::RequestFailed)?;

        let body = response.text().await.map_err(CpanelError::RequestFailed)?;
        let value: Value = serde_json::from_str(&body)
            .map_err(|e| CpanelError::InvalidResponse(e.to_string()))?;

        let outcome = ApiOutcome::classify(call.surface(), value);
        if let ApiOutcome::Failure(message) = &outcome {
            debug!("API reported failure: {}", message);
        }
        outcome.into_result()
    }

    // ========================================================================
    // Mailboxes
    // ========================================================================

    pub async fn add_mailbox(&self, email: &str, password: &str, quota: i64) -> CpanelResult<Value> {
        self.execute(&email::add_mailbox(email, password, quota)?).await
    }

    pub async fn delete_mailbox(&self, email: &str) -> CpanelResult<Value> {
        self.execute(&email::delete_mailbox(email)?).await
    }

    pub async fn list_mailboxes(&self, domain: &str) -> CpanelResult<Value> {
        self.execute(&email::list_mailboxes(domain)?).await
    }

    pub async fn mailbox_client_settings(&self) -> CpanelResult<Value> {
        self.execute(&email::mailbox_client_settings()?).await
    }

    pub async fn update_quota(&self, email: &str, quota: i64) -> CpanelResult<Value> {
        self.execute(&email::update_quota(email, quota)?).await
    }

    pub async fn change_password(&self, email: &str, new_password: &str) -> CpanelResult<Value> {
        self.execute(&email::change_password(email, new_password)?).await
    }

    // ========================================================================
    // Forwarders
    // ========================================================================

    pub async fn create_forwarder(&self, email: &str, destination: &str) -> CpanelResult<Value> {
        self.execute(&email::create_forwarder(email, destination)?).await
    }

    pub async fn delete_forwarder(&self, email: &str, destination: &str) -> CpanelResult<Value> {
        self.execute(&email::delete_forwarder(email, destination)?).await
    }

    pub async fn list_forwarders(&self, domain: &str) -> CpanelResult<Value> {
        self.execute(&email::list_forwarders(domain)?).await
    }

    pub async fn forwarder_settings(&self) -> CpanelResult<Value> {
        self.execute(&email::forwarder_settings()?).await
    }

    // ========================================================================
    // DNS zones
    // ========================================================================

    pub async fn dns_records(&self, domain: &str) -> CpanelResult<Value> {
        self.execute(&dns::get_records(domain)?).await
    }

    pub async fn add_dns_record(&self, record: &RecordDescriptor) -> CpanelResult<Value> {
        self.execute(&dns::add_record(record)?).await
    }

    pub async fn edit_dns_record(&self, line: i64, record: &RecordDescriptor) -> CpanelResult<Value> {
        self.execute(&dns::edit_record(line, record)?).await
    }

    pub async fn delete_dns_record(&self, domain: &str, line: i64) -> CpanelResult<Value> {
        self.execute(&dns::delete_record(domain, line)?).await
    }
}

fn build_http(authorization: &str, accept_invalid_certs: bool) -> CpanelResult<reqwest::Client> {
    let mut headers = HeaderMap::new();
    let mut auth_value = HeaderValue::from_str(authorization)
        .map_err(|e| CpanelError::setup(format!("Invalid authorization header: {}", e)))?;
    auth_value.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth_value);

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .danger_accept_invalid_certs(accept_invalid_certs)
        .build()
        .map_err(|e| CpanelError::setup(format!("Failed to build HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::cpanel::dns::DEFAULT_TTL;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn profile() -> ConnectionProfile {
        ConnectionProfile::new("host.example.com", "acct", "tok", 2083, true).unwrap()
    }

    async fn mock_client() -> (MockServer, CpanelClient) {
        let server = MockServer::start().await;
        let client = CpanelClient::with_base_urls(profile(), server.uri(), server.uri()).unwrap();
        (server, client)
    }

    #[test]
    fn test_new_derives_base_urls() {
        let client = CpanelClient::new(profile()).unwrap();
        assert_eq!(client.account_base_url(), "https://host.example.com:2083");
        assert_eq!(client.admin_base_url(), "https://host.example.com:2087");

        let call = email::add_mailbox("joe@example.com", "p@ss", 100).unwrap();
        assert_eq!(
            format!("{}?{}", client.url_for(&call), call.query_string().unwrap()),
            "https://host.example.com:2083/execute/Email/add_pop?domain=example.com&email=joe&password=p%40ss&quota=100"
        );

        let call = dns::delete_record("example.com", 3).unwrap();
        assert_eq!(
            format!("{}?{}", client.url_for(&call), call.query_string().unwrap()),
            "https://host.example.com:2087/json-api/removezonerecord?domain=example.com&line=3&api.version=1"
        );
    }

    #[tokio::test]
    async fn test_add_mailbox_request() {
        let (server, client) = mock_client().await;
        let body = json!({"status": 1, "data": "joe+example.com", "errors": null});

        Mock::given(method("GET"))
            .and(path("/execute/Email/add_pop"))
            .and(query_param("domain", "example.com"))
            .and(query_param("email", "joe"))
            .and(query_param("password", "p@ss"))
            .and(query_param("quota", "100"))
            .and(header("Authorization", "cpanel acct:tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let result = client.add_mailbox("joe@example.com", "p@ss", 100).await.unwrap();
        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_delete_record_request() {
        let (server, client) = mock_client().await;
        let body = json!({"metadata": {"result": 1, "reason": "OK"}});

        Mock::given(method("GET"))
            .and(path("/json-api/removezonerecord"))
            .and(query_param("domain", "example.com"))
            .and(query_param("line", "3"))
            .and(query_param("api.version", "1"))
            .and(header("Authorization", "whm root:tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let result = client.delete_dns_record("example.com", 3).await.unwrap();
        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_account_api_error() {
        let (server, client) = mock_client().await;

        Mock::given(method("GET"))
            .and(path("/execute/Email/edit_pop_quota"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": 0, "errors": ["quota exceeded"]})),
            )
            .mount(&server)
            .await;

        let err = client.update_quota("joe@example.com", 5).await.unwrap_err();
        assert!(matches!(err, CpanelError::Api(ref m) if m == "quota exceeded"));
    }

    #[tokio::test]
    async fn test_admin_api_error() {
        let (server, client) = mock_client().await;

        Mock::given(method("GET"))
            .and(path("/json-api/dumpzone"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"result": 0, "reason": "zone not found"})),
            )
            .mount(&server)
            .await;

        let err = client.dns_records("missing.example").await.unwrap_err();
        assert!(matches!(err, CpanelError::Api(ref m) if m == "zone not found"));
    }

    #[tokio::test]
    async fn test_http_status_is_request_failure() {
        let (server, client) = mock_client().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Access denied"))
            .mount(&server)
            .await;

        let err = client.list_mailboxes("example.com").await.unwrap_err();
        assert!(matches!(err, CpanelError::RequestFailed(_)));
        assert!(!err.is_local());
    }

    #[tokio::test]
    async fn test_non_json_body_is_invalid_response() {
        let (server, client) = mock_client().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&server)
            .await;

        let err = client.forwarder_settings().await.unwrap_err();
        assert!(matches!(err, CpanelError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_admin_server_error_is_request_failure() {
        let (server, client) = mock_client().await;

        Mock::given(method("GET"))
            .and(path("/json-api/dumpzone"))
            .and(header("Authorization", "whm root:tok"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client.dns_records("example.com").await.unwrap_err();
        assert!(matches!(err, CpanelError::RequestFailed(_)));
        assert_eq!(err.kind(), "request_failed");
    }

    #[tokio::test]
    async fn test_admin_non_json_body_is_invalid_response() {
        let (server, client) = mock_client().await;

        Mock::given(method("GET"))
            .and(path("/json-api/removezonerecord"))
            .and(query_param("api.version", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>WHM login</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client.delete_dns_record("example.com", 3).await.unwrap_err();
        assert!(matches!(err, CpanelError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_failure() {
        // Nothing listens on port 1 of the loopback interface.
        let client =
            CpanelClient::with_base_urls(profile(), "http://127.0.0.1:1", "http://127.0.0.1:1")
                .unwrap();
        let err = client.mailbox_client_settings().await.unwrap_err();
        assert!(matches!(err, CpanelError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_validation_sends_nothing() {
        let (server, client) = mock_client().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": 1})))
            .expect(0)
            .mount(&server)
            .await;

        assert!(matches!(
            client.add_mailbox("invalid", "pw", 0).await,
            Err(CpanelError::InvalidFormat(_))
        ));
        assert!(matches!(
            client.delete_dns_record("example.com", 0).await,
            Err(CpanelError::Validation(_))
        ));
        assert!(matches!(
            client.uapi("Email", "", Vec::<(String, String)>::new()).await,
            Err(CpanelError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_add_dns_record_sends_uppercase_type() {
        let (server, client) = mock_client().await;

        Mock::given(method("GET"))
            .and(path("/json-api/addzonerecord"))
            .and(query_param("type", "A"))
            .and(query_param("class", "IN"))
            .and(query_param("ttl", "3600"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let record =
            RecordDescriptor::parse("example.com", "app", "a", "192.0.2.1", DEFAULT_TTL, "in")
                .unwrap();
        client.add_dns_record(&record).await.unwrap();
    }

    #[tokio::test]
    async fn test_raw_surface_calls() {
        let (server, client) = mock_client().await;

        Mock::given(method("GET"))
            .and(path("/execute/Email/list_pops"))
            .and(query_param("domain", "example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": 1, "data": []})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/json-api/dumpzone"))
            .and(query_param("api.version", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"zone": []}})))
            .expect(1)
            .mount(&server)
            .await;

        let pops = client
            .uapi("Email", "list_pops", [("domain", "example.com")])
            .await
            .unwrap();
        assert_eq!(pops["data"], json!([]));

        let zone = client
            .whm("dumpzone", [("domain", "example.com")])
            .await
            .unwrap();
        assert_eq!(zone["data"]["zone"], json!([]));
    }
}
