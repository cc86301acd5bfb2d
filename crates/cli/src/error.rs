//! Unified error handling for the CLI.

use hydrogen_link_admin::{AdminShopifyError, ConfigError};
use hydrogen_link_core::ShopDomainError;
use thiserror::Error;

use crate::project::ProjectError;
use crate::prompt::PromptError;

/// Errors that abort a command.
///
/// Expected dead ends of a workflow (nothing to link, user declined, unknown
/// storefront name) are not errors; they are reported and the command exits
/// cleanly.
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Shopify API operation failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] AdminShopifyError),

    /// Reading or writing the project link configuration failed.
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    /// An interactive prompt could not be shown or answered.
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// The shop domain could not be parsed.
    #[error("Invalid shop: {0}")]
    InvalidShop(#[from] ShopDomainError),

    /// The working directory could not be determined.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
