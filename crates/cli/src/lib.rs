//! Hydrogen Link CLI library.
//!
//! This crate provides the `h2` commands as a library, allowing the workflows
//! to be tested against scripted prompts and fake API responses.
//!
//! # Modules
//!
//! - [`api`] - The storefront operations a workflow needs from Shopify
//! - [`commands`] - `link`, `list`, and `unlink`
//! - [`project`] - The project's `.shopify/project.json` link configuration
//! - [`prompt`] - Interactive terminal prompts
//! - [`report`] - User-facing messages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod commands;
pub mod error;
pub mod project;
pub mod prompt;
pub mod report;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::CliError;
