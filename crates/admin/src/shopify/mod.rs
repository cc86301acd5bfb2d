//! Shopify Admin API client for Hydrogen storefronts.
//!
//! # Architecture
//!
//! - Uses `graphql-client` crate for type-safe GraphQL queries
//! - Direct API calls to Shopify (no local caching)
//! - One attempt per request; job completion is awaited by polling
//!
//! # Example
//!
//! ```rust,ignore
//! use hydrogen_link_admin::{AdminClient, ShopifyAdminConfig};
//!
//! let client = AdminClient::new(&config, &shop);
//!
//! let storefronts = client.list_storefronts().await?;
//!
//! let creation = client.create_storefront("Snowdevil").await?;
//! if let Some(job_id) = creation.job_id {
//!     client.wait_for_job(&job_id).await?;
//! }
//! ```

mod admin;
pub mod types;

pub use admin::AdminClient;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when interacting with Shopify Admin API.
#[derive(Debug, Error)]
pub enum AdminShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A provisioning job finished with errors.
    #[error("Job failed: {0}")]
    JobFailed(String),

    /// A provisioning job did not finish within the polling timeout.
    #[error("Job did not complete within {0} seconds")]
    JobTimeout(u64),
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

impl GraphQLError {
    /// Build an error that carries only a message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: vec![],
        }
    }
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_shopify_error_display() {
        let err = AdminShopifyError::NotFound("job gid://shopify/Job/1".to_string());
        assert_eq!(err.to_string(), "Not found: job gid://shopify/Job/1");
    }

    #[test]
    fn test_graphql_error_formatting() {
        let errors = vec![
            GraphQLError::message("Field not found"),
            GraphQLError::message("Access denied for hydrogenStorefronts field"),
        ];
        let err = AdminShopifyError::GraphQL(errors);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: Field not found; Access denied for hydrogenStorefronts field"
        );
    }

    #[test]
    fn test_rate_limited_error() {
        let err = AdminShopifyError::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }

    #[test]
    fn test_job_errors() {
        let err = AdminShopifyError::JobFailed("Deployment failed".to_string());
        assert_eq!(err.to_string(), "Job failed: Deployment failed");

        let err = AdminShopifyError::JobTimeout(180);
        assert_eq!(err.to_string(), "Job did not complete within 180 seconds");
    }
}
