//! End-to-end command runs against a mock API and token endpoint.

use std::io::Write;

use clap::Parser;
use searchads_cli::{run, Cli};
use serde_json::{json, Value};
use tempfile::NamedTempFile;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "cli-token";
const ORG_ID: &str = "424242";

fn write_config(server: &MockServer) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
default_profile = "test"

[profiles.test]
client_id = "SEARCHADS.client"
client_secret = "signed-assertion"
org_id = "{ORG_ID}"
base_url = "{uri}/api/v5"
token_url = "{uri}/auth/oauth2/token"
timeout_secs = 5
"#,
        uri = server.uri()
    )
    .unwrap();
    file
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/oauth2/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(server)
        .await;
}

async fn mount_acls(server: &MockServer, currency: &str) {
    Mock::given(method("GET"))
        .and(path("/api/v5/acls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "orgName": "Acme",
                "orgId": 424242,
                "currency": currency,
                "roleNames": ["Admin"]
            }]
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn invoke(config: &NamedTempFile, args: &[&str]) -> anyhow::Result<String> {
    let config_path = config.path().to_string_lossy().into_owned();
    let mut argv = vec!["searchads", "--config", config_path.as_str(), "-p", "test"];
    argv.extend_from_slice(args);

    let cli = Cli::try_parse_from(argv)?;
    let mut out = Vec::new();
    run(cli, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

fn campaign(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "adamId": 900001,
        "status": "ENABLED",
        "servingStatus": "RUNNING",
        "budgetAmount": {"amount": "1000", "currency": "USD"},
        "dailyBudgetAmount": {"amount": "50", "currency": "USD"},
        "countriesOrRegions": ["US"]
    })
}

#[tokio::test]
async fn campaigns_list_renders_table_with_auth_headers() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v5/campaigns"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "0"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .and(header("x-ap-context", format!("orgId={ORG_ID}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [campaign(1, "Brand"), campaign(2, "Generic")],
            "pagination": {"totalResults": 2, "startIndex": 0, "itemsPerPage": 20}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = write_config(&server);
    let out = invoke(&config, &["campaigns", "list"]).await.unwrap();

    assert!(out.contains("DAILY BUDGET"));
    assert!(out.contains("Brand"));
    assert!(out.contains("Generic"));
    assert!(out.contains("50 USD"));
}

#[tokio::test]
async fn empty_list_prints_no_results() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v5/campaigns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let config = write_config(&server);
    let out = invoke(&config, &["campaigns", "list"]).await.unwrap();
    assert_eq!(out, "No results found.\n");
}

#[tokio::test]
async fn get_with_json_output_prints_payload() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v5/campaigns/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": campaign(7, "Brand")})))
        .mount(&server)
        .await;

    let config = write_config(&server);
    let out = invoke(&config, &["campaigns", "get", "7", "-o", "json"]).await.unwrap();

    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["id"], json!(7));
    assert_eq!(value["name"], json!("Brand"));
}

#[tokio::test]
async fn create_uses_org_currency_and_fixed_search_fields() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_acls(&server, "EUR").await;
    Mock::given(method("POST"))
        .and(path("/api/v5/campaigns"))
        .and(body_partial_json(json!({
            "name": "Launch",
            "adamId": 900001,
            "budgetAmount": {"amount": "1000", "currency": "EUR"},
            "dailyBudgetAmount": {"amount": "50", "currency": "EUR"},
            "countriesOrRegions": ["DE", "FR"],
            "supplySources": ["APPSTORE_SEARCH_RESULTS"],
            "billingEvent": "TAPS",
            "adChannelType": "SEARCH"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": campaign(11, "Launch")})))
        .expect(1)
        .mount(&server)
        .await;

    let config = write_config(&server);
    let out = invoke(
        &config,
        &[
            "campaigns",
            "create",
            "--name",
            "Launch",
            "--app-id",
            "900001",
            "--countries",
            "DE,FR",
            "--budget",
            "1000",
            "--daily-budget",
            "50",
        ],
    )
    .await
    .unwrap();

    assert!(out.contains("Launch"));
}

#[tokio::test]
async fn update_without_flags_fails_before_any_request() {
    let server = MockServer::start().await;
    let config = write_config(&server);

    let err = invoke(&config, &["campaigns", "update", "7"]).await.unwrap_err();

    assert_eq!(err.to_string(), "no update flags provided");
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn delete_prints_confirmation() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/api/v5/campaigns/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let config = write_config(&server);
    let out = invoke(&config, &["campaigns", "delete", "7"]).await.unwrap();
    assert_eq!(out, "Campaign 7 deleted.\n");
}

#[tokio::test]
async fn api_error_surfaces_code_and_context() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v5/campaigns/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "data": null,
            "error": {"errors": [{"messageCode": "NOT_FOUND", "message": "campaign not found"}]}
        })))
        .mount(&server)
        .await;

    let config = write_config(&server);
    let err = invoke(&config, &["campaigns", "get", "404"]).await.unwrap_err();
    let message = format!("{err:#}");

    assert!(message.starts_with("getting campaign: "));
    assert!(message.contains("API error (HTTP 404) [NOT_FOUND]: campaign not found"));
}

#[tokio::test]
async fn find_all_follows_pagination() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v5/campaigns/find"))
        .and(body_partial_json(json!({"pagination": {"offset": 0, "limit": 1}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [campaign(1, "First")],
            "pagination": {"totalResults": 2, "startIndex": 0, "itemsPerPage": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v5/campaigns/find"))
        .and(body_partial_json(json!({"pagination": {"offset": 1, "limit": 1}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [campaign(2, "Second")],
            "pagination": {"totalResults": 2, "startIndex": 1, "itemsPerPage": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = write_config(&server);
    let out = invoke(
        &config,
        &["campaigns", "find", "--filter", "status=ENABLED", "--limit", "1", "--all", "-o", "json"],
    )
    .await
    .unwrap();

    let value: Value = serde_json::from_str(&out).unwrap();
    let names: Vec<&str> =
        value.as_array().unwrap().iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["First", "Second"]);
}

/// Accepts writes but fails every flush, like a closed pipe.
struct ClosedPipe(Vec<u8>);

impl Write for ClosedPipe {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
    }
}

#[tokio::test]
async fn failed_flush_is_reported_after_success() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/api/v5/campaigns/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let config = write_config(&server);
    let config_path = config.path().to_string_lossy().into_owned();
    let cli = Cli::try_parse_from([
        "searchads",
        "--config",
        config_path.as_str(),
        "-p",
        "test",
        "campaigns",
        "delete",
        "7",
    ])
    .unwrap();

    let mut out = ClosedPipe(Vec::new());
    let err = run(cli, &mut out).await.unwrap_err();

    assert_eq!(String::from_utf8(out.0).unwrap(), "Campaign 7 deleted.\n");
    assert!(format!("{err:#}").starts_with("flushing output: "));
}

#[tokio::test]
async fn keyword_delete_posts_id_list() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v5/campaigns/1/adgroups/2/targetingkeywords/delete/bulk"))
        .and(wiremock::matchers::body_json(json!([10, 11])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&server)
        .await;

    let config = write_config(&server);
    let out = invoke(
        &config,
        &["keywords", "delete", "--campaign-id", "1", "--adgroup-id", "2", "10,11"],
    )
    .await
    .unwrap();
    assert_eq!(out, "Deleted 2 keyword(s).\n");
}

#[tokio::test]
async fn malformed_filter_is_reported() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    let config = write_config(&server);

    let err = invoke(&config, &["campaigns", "find", "--filter", "nonsense"]).await.unwrap_err();
    assert!(err.to_string().contains("invalid filter expression 'nonsense'"));
}
