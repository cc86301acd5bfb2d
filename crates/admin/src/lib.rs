//! Hydrogen Link Admin library.
//!
//! Thin, typed access to the Shopify Admin API operations needed to manage
//! Hydrogen storefronts: listing, creating, and waiting for provisioning jobs.
//!
//! # Security
//!
//! The Admin API access token grants write access to the shop. It is held as a
//! [`secrecy::SecretString`] and never logged.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod shopify;

pub use config::{ConfigError, JobPolling, ShopifyAdminConfig};
pub use shopify::{AdminClient, AdminShopifyError, JobError, JobStatus};
