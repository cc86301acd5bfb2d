//! Conversions from generated GraphQL types to domain types.

use hydrogen_link_core::{JobId, Storefront, StorefrontCreation, StorefrontId, UserError};

use crate::shopify::types::{JobError, JobStatus};

use super::queries::{create_storefront, list_storefronts, storefront_job};

// =============================================================================
// ListStorefronts conversions
// =============================================================================

pub fn convert_storefront_list(
    storefronts: Vec<list_storefronts::ListStorefrontsHydrogenStorefronts>,
) -> Vec<Storefront> {
    storefronts
        .into_iter()
        .map(|s| Storefront {
            id: StorefrontId::new(s.id),
            title: s.title,
            production_url: s.production_url,
        })
        .collect()
}

// =============================================================================
// CreateStorefront conversions
// =============================================================================

pub fn convert_storefront_creation(
    payload: create_storefront::CreateStorefrontHydrogenStorefrontCreate,
) -> StorefrontCreation {
    StorefrontCreation {
        storefront: payload.hydrogen_storefront.map(|s| Storefront {
            id: StorefrontId::new(s.id),
            title: s.title,
            production_url: s.production_url,
        }),
        user_errors: payload
            .user_errors
            .into_iter()
            .map(|e| UserError {
                code: e.code,
                field: e.field.unwrap_or_default(),
                message: e.message,
            })
            .collect(),
        job_id: payload.job_id.map(JobId::new),
    }
}

// =============================================================================
// StorefrontJob conversions
// =============================================================================

pub fn convert_job(job: storefront_job::StorefrontJobHydrogenStorefrontJob) -> JobStatus {
    JobStatus {
        id: JobId::new(job.id),
        done: job.done,
        errors: job
            .errors
            .into_iter()
            .map(|e| JobError {
                code: e.code,
                message: e.message,
            })
            .collect(),
    }
}
