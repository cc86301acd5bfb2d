//! The storefront operations a workflow needs from Shopify.
//!
//! Workflows are generic over [`StorefrontApi`] so they can run against the
//! real [`AdminClient`] or a scripted fake.

use hydrogen_link_admin::{AdminClient, AdminShopifyError};
use hydrogen_link_core::{JobId, Storefront, StorefrontCreation};

/// Remote storefront operations.
#[allow(async_fn_in_trait)]
pub trait StorefrontApi {
    /// List the shop's storefronts.
    async fn fetch_storefronts(&self) -> Result<Vec<Storefront>, AdminShopifyError>;

    /// Request creation of a storefront with the given title.
    async fn create_storefront(
        &self,
        title: &str,
    ) -> Result<StorefrontCreation, AdminShopifyError>;

    /// Wait until a provisioning job finishes successfully.
    async fn wait_for_job(&self, job_id: &JobId) -> Result<(), AdminShopifyError>;
}

impl StorefrontApi for AdminClient {
    async fn fetch_storefronts(&self) -> Result<Vec<Storefront>, AdminShopifyError> {
        self.list_storefronts().await
    }

    async fn create_storefront(
        &self,
        title: &str,
    ) -> Result<StorefrontCreation, AdminShopifyError> {
        Self::create_storefront(self, title).await
    }

    async fn wait_for_job(&self, job_id: &JobId) -> Result<(), AdminShopifyError> {
        Self::wait_for_job(self, job_id).await
    }
}
