//! Integration tests for `AdminClient` using wiremock HTTP mocks.

use ga4d_admin::{AdminClient, PropertyType};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> AdminClient {
    AdminClient::with_base_url("Bearer test-token", 30, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn list_accounts_follows_page_tokens() {
    let server = MockServer::start().await;

    let first_page = serde_json::json!({
        "accounts": [
            { "name": "accounts/1", "displayName": "Burien Vet Group" }
        ],
        "nextPageToken": "page-2"
    });
    let second_page = serde_json::json!({
        "accounts": [
            { "name": "accounts/2", "displayName": "Just 4 Pets" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v1alpha/accounts"))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&second_page))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1alpha/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&first_page))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let accounts = client.list_accounts().await.expect("should list accounts");

    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].name, "accounts/1");
    assert_eq!(accounts[0].display_name, "Burien Vet Group");
    assert_eq!(accounts[1].name, "accounts/2");
}

#[tokio::test]
async fn list_accounts_sends_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1alpha/accounts"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accounts": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let accounts = client.list_accounts().await.expect("should list accounts");
    assert!(accounts.is_empty());
}

#[tokio::test]
async fn list_properties_filters_by_parent_account() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "properties": [
            {
                "name": "properties/123456789",
                "displayName": "Burien Vet Site",
                "propertyType": "PROPERTY_TYPE_ORDINARY",
                "currencyCode": "USD",
                "timeZone": "America/Los_Angeles",
                "parent": "accounts/1",
                "createTime": "2023-04-01T12:00:00Z"
            },
            {
                "name": "properties/987654321",
                "displayName": "Rollup",
                "propertyType": "PROPERTY_TYPE_ROLLUP"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v1alpha/properties"))
        .and(query_param("filter", "parent:accounts/1"))
        .and(query_param("showDeleted", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let properties = client
        .list_properties("accounts/1")
        .await
        .expect("should list properties");

    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].name, "properties/123456789");
    assert_eq!(properties[0].property_type, PropertyType::Ordinary);
    assert!(properties[0].is_ordinary());
    assert_eq!(properties[0].currency_code.as_deref(), Some("USD"));
    assert!(!properties[1].is_ordinary());
}

#[tokio::test]
async fn list_data_streams_exposes_web_stream_uri() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "dataStreams": [
            {
                "name": "properties/123/dataStreams/1",
                "type": "ANDROID_APP_DATA_STREAM"
            },
            {
                "name": "properties/123/dataStreams/2",
                "type": "WEB_DATA_STREAM",
                "webStreamData": {
                    "defaultUri": "https://www.example.com",
                    "measurementId": "G-ABC123"
                }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v1alpha/properties/123/dataStreams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let streams = client
        .list_data_streams("properties/123")
        .await
        .expect("should list streams");

    assert_eq!(streams.len(), 2);
    assert!(streams[0].web_stream_data.is_none());
    let web = streams[1].web_stream_data.as_ref().expect("web stream data");
    assert_eq!(web.default_uri.as_deref(), Some("https://www.example.com"));
}

#[tokio::test]
async fn create_access_binding_posts_user_and_roles() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1alpha/properties/123/accessBindings"))
        .and(body_partial_json(serde_json::json!({
            "user": "user:robot@example.iam.gserviceaccount.com",
            "roles": ["predefinedRoles/viewer"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "properties/123/accessBindings/555",
            "user": "user:robot@example.iam.gserviceaccount.com",
            "roles": ["predefinedRoles/viewer"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let binding = client
        .create_access_binding(
            "properties/123",
            "user:robot@example.iam.gserviceaccount.com",
            &["predefinedRoles/viewer".to_string()],
        )
        .await
        .expect("should create binding");

    assert_eq!(
        binding.name.as_deref(),
        Some("properties/123/accessBindings/555")
    );
    assert_eq!(binding.roles, vec!["predefinedRoles/viewer".to_string()]);
}

#[tokio::test]
async fn create_access_binding_surfaces_already_exists() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1alpha/properties/123/accessBindings"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "error": {
                "code": 409,
                "message": "The access binding already exists.",
                "status": "ALREADY_EXISTS"
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .create_access_binding("properties/123", "user:x@y.z", &["predefinedRoles/viewer".to_string()])
        .await
        .expect_err("duplicate binding should error");

    assert!(err.is_already_exists());
}

#[tokio::test]
async fn permission_denied_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1alpha/properties/123/accessBindings"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {
                "code": 403,
                "message": "The caller does not have permission",
                "status": "PERMISSION_DENIED"
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .list_access_bindings("properties/123")
        .await
        .expect_err("should surface 403");

    assert!(err.is_permission_denied());
}
