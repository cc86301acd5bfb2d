//! Domain types for Shopify Admin API responses.
//!
//! Storefront types live in `hydrogen_link_core`; this module only holds the
//! shapes that never leave the client.

use hydrogen_link_core::JobId;

/// An error attached to a finished job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobError {
    /// Machine-readable error code, when provided.
    pub code: Option<String>,
    /// Human-readable message.
    pub message: String,
}

/// Snapshot of a storefront provisioning job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStatus {
    /// Job ID.
    pub id: JobId,
    /// Whether the job has finished (successfully or not).
    pub done: bool,
    /// Errors reported by the job. Only meaningful once `done` is set.
    pub errors: Vec<JobError>,
}

impl JobStatus {
    /// Whether the job finished without errors.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.done && self.errors.is_empty()
    }

    /// Whether the job finished with errors.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.done && !self.errors.is_empty()
    }
}
