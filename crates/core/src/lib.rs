//! Hydrogen Link Core - Shared domain types.
//!
//! This crate provides the types shared by the Hydrogen link components:
//! - `admin` - Shopify Admin API client for storefronts and jobs
//! - `cli` - The `h2` command-line tool (link, list, unlink)
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no terminal access. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, storefronts, shop domains, and user errors
//! - [`naming`] - Humanizing directory names into storefront titles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod naming;
pub mod types;

pub use naming::{DEFAULT_STOREFRONT_TITLE, humanize};
pub use types::*;
