//! HR client behavior against a mocked HR API.

use secrecy::{ExposeSecret, SecretString};
use server::{Config, HrClient};
use types::{ErrorKind, MissingDepartment, Role, metrics};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer, extra: &str) -> Config {
    Config::from_toml(&format!(
        r#"
        hr_api_url = "{}/"
        session_secret = "test-secret"
        {extra}
        "#,
        server.uri()
    ))
    .unwrap()
}

fn client(server: &MockServer) -> HrClient {
    HrClient::new(&config(server, "")).unwrap()
}

fn token() -> SecretString {
    "access-123".to_string().into()
}

#[tokio::test]
async fn bare_list_is_aggregated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/employees/"))
        .and(header("authorization", "Bearer access-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "department": "Eng" },
            { "id": 2, "department": "Eng" },
            { "id": 3, "department": "Sales" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let records = client(&server).list_employees(&token()).await.unwrap();
    let metrics = metrics::aggregate(&records, MissingDepartment::Bucket);

    assert_eq!(metrics.total, 3);
    assert_eq!(metrics.department_count(), 2);
}

#[tokio::test]
async fn paginated_envelope_is_unwrapped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/employees/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{ "id": 9, "department": "HR" }]
        })))
        .mount(&server)
        .await;

    let records = client(&server).list_employees(&token()).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].department.as_deref(), Some("HR"));
}

#[tokio::test]
async fn unrecognized_payload_yields_no_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/employees/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "detail": "ok" })))
        .mount(&server)
        .await;

    let records = client(&server).list_employees(&token()).await.unwrap();
    let metrics = metrics::aggregate(&records, MissingDepartment::Bucket);
    assert_eq!(metrics.total, 0);
    assert!(metrics.departments.is_empty());
}

#[tokio::test]
async fn records_with_odd_field_types_are_all_counted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/employees/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": "many",
            "results": [
                { "department": "Eng" },
                { "department": "Eng", "position": 3 },
                { "department": { "id": 2 }, "phone": 5551234 },
                { "department": true }
            ]
        })))
        .mount(&server)
        .await;

    let records = client(&server).list_employees(&token()).await.unwrap();
    let metrics = metrics::aggregate(&records, MissingDepartment::Bucket);
    assert_eq!(metrics.total, 4);
    assert_eq!(metrics.department_count(), 3);
}

#[tokio::test]
async fn only_the_first_page_is_read_by_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/employees/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{ "department": "Eng" }],
            "next": format!("{}/api/employees/?page=2", server.uri())
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = client(&server).list_employees(&token()).await.unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn next_links_are_followed_when_enabled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/employees/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{ "department": "Sales" }],
            "next": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/employees/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{ "department": "Eng" }],
            "next": "/api/employees/?page=2"
        })))
        .mount(&server)
        .await;

    let client = HrClient::new(&config(&server, "follow_next_pages = true")).unwrap();
    let records = client.list_employees(&token()).await.unwrap();

    let departments: Vec<_> = records
        .iter()
        .filter_map(|r| r.department.as_deref())
        .collect();
    assert_eq!(departments, vec!["Eng", "Sales"]);
}

#[tokio::test]
async fn page_limit_stops_runaway_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/employees/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{ "department": "Eng" }],
            "next": "/api/employees/"
        })))
        .expect(3)
        .mount(&server)
        .await;

    let client = HrClient::new(&config(&server, "follow_next_pages = true\nmax_pages = 3")).unwrap();
    let records = client.list_employees(&token()).await.unwrap();
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn rejected_token_is_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/employees/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "detail": "Given token not valid for any token type"
        })))
        .mount(&server)
        .await;

    let error = client(&server).list_employees(&token()).await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::Unauthorized);
}

#[tokio::test]
async fn server_errors_and_garbage_are_fetch_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/employees/"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/employees/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client(&server);

    let error = client.list_employees(&token()).await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::Fetch);

    let error = client.list_employees(&token()).await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::Fetch);
}

#[tokio::test]
async fn missing_credentials_never_reach_the_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let no_token: Option<SecretString> = None;
    let error = client(&server).list_employees(&no_token).await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::Unauthorized);
}

#[tokio::test]
async fn sign_in_exchanges_password_and_reads_profile() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token/"))
        .and(body_json(serde_json::json!({ "username": "jdoe", "password": "hunter2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access": "access-123",
            "refresh": "refresh-456"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/profile/"))
        .and(header("authorization", "Bearer access-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 17,
            "username": "jdoe",
            "first_name": "Jane",
            "last_name": "Doe",
            "is_superuser": false,
            "is_hr_manager": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let password: SecretString = "hunter2".to_string().into();
    let session = client(&server).sign_in("jdoe", &password).await.unwrap();

    assert_eq!(session.user_id, "17");
    assert_eq!(session.first_name, "Jane");
    assert_eq!(session.role, Role::HrManager);
    assert_eq!(session.access_token.expose_secret(), "access-123");
}

#[tokio::test]
async fn bad_password_is_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let password: SecretString = "wrong".to_string().into();
    let error = client(&server).sign_in("jdoe", &password).await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::Unauthorized);
}
