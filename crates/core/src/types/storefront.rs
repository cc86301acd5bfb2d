//! Hydrogen storefront types.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::{JobId, StorefrontId};
use super::user_error::UserError;

/// A Hydrogen storefront as returned by the Admin API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storefront {
    /// Opaque storefront ID (unique within a shop).
    pub id: StorefrontId,
    /// Display title.
    pub title: String,
    /// Production URL, when the storefront has been deployed.
    pub production_url: Option<String>,
}

impl Storefront {
    /// Reduce this storefront to the reference stored in a project.
    #[must_use]
    pub fn to_linked(&self) -> LinkedStorefront {
        LinkedStorefront {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }
}

impl fmt::Display for Storefront {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.production_url {
            Some(url) => write!(f, "{} ({url})", self.title),
            None => f.write_str(&self.title),
        }
    }
}

/// The storefront reference persisted in a project's link configuration.
///
/// Only the ID and title are kept locally; everything else is fetched on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedStorefront {
    /// Opaque storefront ID.
    pub id: StorefrontId,
    /// Title at the time of linking.
    pub title: String,
}

impl From<Storefront> for LinkedStorefront {
    fn from(storefront: Storefront) -> Self {
        Self {
            id: storefront.id,
            title: storefront.title,
        }
    }
}

/// Result of a storefront creation request.
///
/// A creation is accepted when `user_errors` is empty. The storefront only
/// becomes usable once `job_id` (if any) completes successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorefrontCreation {
    /// The storefront record, present when the request was accepted.
    pub storefront: Option<Storefront>,
    /// Validation failures reported by the API.
    pub user_errors: Vec<UserError>,
    /// Background job that finishes provisioning the storefront.
    pub job_id: Option<JobId>,
}

impl StorefrontCreation {
    /// Whether the API rejected the request with validation errors.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        !self.user_errors.is_empty()
    }
}
