//! Hydrogen storefront operations for the Admin API.

use hydrogen_link_core::{Storefront, StorefrontCreation};
use tracing::instrument;

use super::{
    AdminClient, AdminShopifyError, GraphQLError,
    conversions::{convert_storefront_creation, convert_storefront_list},
    queries::{CreateStorefront, ListStorefronts, create_storefront, list_storefronts},
};

impl AdminClient {
    /// List the shop's Hydrogen storefronts.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self), fields(shop = %self.inner.shop))]
    pub async fn list_storefronts(&self) -> Result<Vec<Storefront>, AdminShopifyError> {
        let response = self
            .execute::<ListStorefronts>(list_storefronts::Variables)
            .await?;

        let storefronts = convert_storefront_list(response.hydrogen_storefronts);
        tracing::debug!(count = storefronts.len(), "Fetched storefronts");

        Ok(storefronts)
    }

    /// Request creation of a new Hydrogen storefront.
    ///
    /// Validation failures are returned in [`StorefrontCreation::user_errors`]
    /// rather than as an `Err`, so callers can show them field by field.
    ///
    /// # Arguments
    ///
    /// * `title` - Display title of the new storefront
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the mutation payload is missing.
    #[instrument(skip(self), fields(shop = %self.inner.shop))]
    pub async fn create_storefront(
        &self,
        title: &str,
    ) -> Result<StorefrontCreation, AdminShopifyError> {
        let variables = create_storefront::Variables {
            title: title.to_string(),
        };

        let response = self.execute::<CreateStorefront>(variables).await?;

        let payload = response.hydrogen_storefront_create.ok_or_else(|| {
            AdminShopifyError::GraphQL(vec![GraphQLError::message(
                "No payload returned from hydrogenStorefrontCreate",
            )])
        })?;

        let creation = convert_storefront_creation(payload);
        if creation.is_rejected() {
            tracing::debug!(
                errors = creation.user_errors.len(),
                "Storefront creation rejected"
            );
        }

        Ok(creation)
    }
}
