//! Core types for Hydrogen storefront linking.
//!
//! This module provides type-safe wrappers for the domain concepts shared by
//! the Admin API client and the CLI.

pub mod id;
pub mod shop;
pub mod storefront;
pub mod user_error;

pub use id::*;
pub use shop::{ShopDomain, ShopDomainError};
pub use storefront::{LinkedStorefront, Storefront, StorefrontCreation};
pub use user_error::UserError;
