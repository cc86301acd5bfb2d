//! Integration tests for the Admin API client.
//!
//! A `mockito` server plays the Shopify Admin GraphQL endpoint; requests are
//! told apart by their `operationName`.

#![allow(clippy::unwrap_used)]

use hydrogen_link_admin::{AdminClient, AdminShopifyError, ShopifyAdminConfig};
use hydrogen_link_core::JobId;
use hydrogen_link_integration_tests::{TEST_TOKEN, graphql_data, test_client, test_shop};
use mockito::{Matcher, Server};
use serde_json::json;

fn operation(name: &str) -> Matcher {
    Matcher::PartialJson(json!({ "operationName": name }))
}

// ============================================================================
// Storefront listing
// ============================================================================

#[tokio::test]
async fn test_list_storefronts() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("x-shopify-access-token", TEST_TOKEN)
        .match_body(operation("ListStorefronts"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(graphql_data(&json!({
            "hydrogenStorefronts": [
                {
                    "id": "gid://shopify/HydrogenStorefront/1",
                    "title": "Snowdevil",
                    "productionUrl": "https://snowdevil.myshopify.dev"
                },
                {
                    "id": "gid://shopify/HydrogenStorefront/2",
                    "title": "Staging",
                    "productionUrl": null
                }
            ]
        })))
        .create_async()
        .await;

    let client = test_client(&server.url());
    let storefronts = client.list_storefronts().await.unwrap();

    assert_eq!(storefronts.len(), 2);
    assert_eq!(storefronts[0].title, "Snowdevil");
    assert_eq!(
        storefronts[0].production_url.as_deref(),
        Some("https://snowdevil.myshopify.dev")
    );
    assert_eq!(storefronts[1].id.as_str(), "gid://shopify/HydrogenStorefront/2");
    assert!(storefronts[1].production_url.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_storefronts_empty() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(graphql_data(&json!({ "hydrogenStorefronts": [] })))
        .create_async()
        .await;

    let storefronts = test_client(&server.url()).list_storefronts().await.unwrap();
    assert!(storefronts.is_empty());
}

#[test]
fn test_client_uses_endpoint_override() {
    let config = ShopifyAdminConfig::from_lookup(|key| match key {
        "SHOPIFY_ADMIN_TOKEN" => Some(TEST_TOKEN.to_string()),
        "SHOPIFY_ADMIN_ENDPOINT" => Some("http://127.0.0.1:1/graphql".to_string()),
        _ => None,
    })
    .unwrap();

    let client = AdminClient::new(&config, &test_shop());
    assert_eq!(client.endpoint(), "http://127.0.0.1:1/graphql");
    assert_eq!(client.shop().as_str(), "snowdevil.myshopify.com");
}

// ============================================================================
// Storefront creation
// ============================================================================

#[tokio::test]
async fn test_create_storefront_sends_title() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::AllOf(vec![
            operation("CreateStorefront"),
            Matcher::PartialJson(json!({ "variables": { "title": "My App" } })),
        ]))
        .with_status(200)
        .with_body(graphql_data(&json!({
            "hydrogenStorefrontCreate": {
                "hydrogenStorefront": {
                    "id": "gid://shopify/HydrogenStorefront/3",
                    "title": "My App",
                    "productionUrl": "https://my-app.myshopify.dev"
                },
                "userErrors": [],
                "jobId": "gid://shopify/Job/42"
            }
        })))
        .create_async()
        .await;

    let creation = test_client(&server.url())
        .create_storefront("My App")
        .await
        .unwrap();

    assert!(!creation.is_rejected());
    assert_eq!(creation.storefront.unwrap().title, "My App");
    assert_eq!(creation.job_id, Some(JobId::new("gid://shopify/Job/42")));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_storefront_user_errors() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .match_body(operation("CreateStorefront"))
        .with_status(200)
        .with_body(graphql_data(&json!({
            "hydrogenStorefrontCreate": {
                "hydrogenStorefront": null,
                "userErrors": [
                    {
                        "code": "TAKEN",
                        "field": ["title"],
                        "message": "Title has already been taken"
                    }
                ],
                "jobId": null
            }
        })))
        .create_async()
        .await;

    let creation = test_client(&server.url())
        .create_storefront("Snowdevil")
        .await
        .unwrap();

    assert!(creation.is_rejected());
    assert!(creation.storefront.is_none());
    assert_eq!(creation.user_errors.len(), 1);
    assert_eq!(
        creation.user_errors[0].to_string(),
        "title: Title has already been taken"
    );
}

#[tokio::test]
async fn test_create_storefront_missing_payload() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(graphql_data(&json!({ "hydrogenStorefrontCreate": null })))
        .create_async()
        .await;

    let err = test_client(&server.url())
        .create_storefront("Snowdevil")
        .await
        .unwrap_err();
    assert!(matches!(err, AdminShopifyError::GraphQL(_)));
}

// ============================================================================
// Job polling
// ============================================================================

fn job_body(done: bool, errors: &serde_json::Value) -> String {
    graphql_data(&json!({
        "hydrogenStorefrontJob": {
            "id": "gid://shopify/Job/42",
            "done": done,
            "errors": errors
        }
    }))
}

#[tokio::test]
async fn test_get_job_status() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .match_body(Matcher::AllOf(vec![
            operation("StorefrontJob"),
            Matcher::PartialJson(json!({ "variables": { "id": "gid://shopify/Job/42" } })),
        ]))
        .with_status(200)
        .with_body(job_body(false, &json!([])))
        .create_async()
        .await;

    let job = test_client(&server.url())
        .get_job(&JobId::new("gid://shopify/Job/42"))
        .await
        .unwrap()
        .unwrap();

    assert!(!job.done);
    assert!(!job.succeeded());
}

#[tokio::test]
async fn test_wait_for_job_completes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(operation("StorefrontJob"))
        .with_status(200)
        .with_body(job_body(true, &json!([])))
        .expect(1)
        .create_async()
        .await;

    test_client(&server.url())
        .wait_for_job(&JobId::new("gid://shopify/Job/42"))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_wait_for_job_failed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(job_body(
            true,
            &json!([
                { "code": "PROVISIONING", "message": "Deployment failed" },
                { "code": null, "message": "Domain unavailable" }
            ]),
        ))
        .create_async()
        .await;

    let err = test_client(&server.url())
        .wait_for_job(&JobId::new("gid://shopify/Job/42"))
        .await
        .unwrap_err();

    let AdminShopifyError::JobFailed(message) = err else {
        panic!("expected JobFailed, got {err:?}");
    };
    assert_eq!(message, "Deployment failed; Domain unavailable");
}

#[tokio::test]
async fn test_wait_for_job_missing() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(graphql_data(&json!({ "hydrogenStorefrontJob": null })))
        .create_async()
        .await;

    let err = test_client(&server.url())
        .wait_for_job(&JobId::new("gid://shopify/Job/404"))
        .await
        .unwrap_err();
    assert!(matches!(err, AdminShopifyError::NotFound(_)));
}

#[tokio::test]
async fn test_wait_for_job_times_out() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(job_body(false, &json!([])))
        .create_async()
        .await;

    let config = ShopifyAdminConfig::from_lookup(|key| match key {
        "SHOPIFY_ADMIN_TOKEN" => Some(TEST_TOKEN.to_string()),
        "SHOPIFY_ADMIN_ENDPOINT" => Some(server.url()),
        "H2_JOB_POLL_INTERVAL_MS" => Some("5".to_string()),
        "H2_JOB_TIMEOUT_SECS" => Some("0".to_string()),
        _ => None,
    })
    .unwrap();
    let client = AdminClient::new(&config, &test_shop());

    let err = client
        .wait_for_job(&JobId::new("gid://shopify/Job/42"))
        .await
        .unwrap_err();
    assert!(matches!(err, AdminShopifyError::JobTimeout(0)));
}

// ============================================================================
// Error mapping
// ============================================================================

#[tokio::test]
async fn test_rate_limited_uses_retry_after() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(429)
        .with_header("Retry-After", "7")
        .create_async()
        .await;

    let err = test_client(&server.url()).list_storefronts().await.unwrap_err();
    assert!(matches!(err, AdminShopifyError::RateLimited(7)));
}

#[tokio::test]
async fn test_rate_limited_default_delay() {
    let mut server = Server::new_async().await;
    server.mock("POST", "/").with_status(429).create_async().await;

    let err = test_client(&server.url()).list_storefronts().await.unwrap_err();
    assert!(matches!(err, AdminShopifyError::RateLimited(60)));
}

#[tokio::test]
async fn test_unauthorized() {
    let mut server = Server::new_async().await;
    server.mock("POST", "/").with_status(401).create_async().await;

    let err = test_client(&server.url()).list_storefronts().await.unwrap_err();
    assert!(matches!(err, AdminShopifyError::Unauthorized(_)));
}

#[tokio::test]
async fn test_forbidden_is_unauthorized() {
    let mut server = Server::new_async().await;
    server.mock("POST", "/").with_status(403).create_async().await;

    let err = test_client(&server.url()).list_storefronts().await.unwrap_err();
    assert!(matches!(err, AdminShopifyError::Unauthorized(_)));
}

#[tokio::test]
async fn test_server_error_is_http() {
    let mut server = Server::new_async().await;
    server.mock("POST", "/").with_status(502).create_async().await;

    let err = test_client(&server.url()).list_storefronts().await.unwrap_err();
    assert!(matches!(err, AdminShopifyError::Http(_)));
}

#[tokio::test]
async fn test_graphql_errors() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(
            json!({
                "errors": [
                    {
                        "message": "Access denied for hydrogenStorefronts field.",
                        "locations": [{ "line": 2, "column": 3 }],
                        "path": ["hydrogenStorefronts"]
                    }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = test_client(&server.url()).list_storefronts().await.unwrap_err();
    let AdminShopifyError::GraphQL(errors) = &err else {
        panic!("expected GraphQL errors, got {err:?}");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].locations[0].line, 2);
    assert!(err.to_string().contains("Access denied"));
}

#[tokio::test]
async fn test_missing_data() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(r#"{"data": null}"#)
        .create_async()
        .await;

    let err = test_client(&server.url()).list_storefronts().await.unwrap_err();
    assert!(matches!(err, AdminShopifyError::GraphQL(_)));
}
