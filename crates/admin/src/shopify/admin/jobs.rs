//! Storefront provisioning job tracking.

use hydrogen_link_core::JobId;
use tokio::time::{Instant, sleep};
use tracing::instrument;

use super::{
    AdminClient, AdminShopifyError,
    conversions::convert_job,
    queries::{StorefrontJob, storefront_job},
};
use crate::shopify::types::JobStatus;

impl AdminClient {
    /// Get the current status of a provisioning job.
    ///
    /// Returns `None` if the job does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self), fields(job_id = %id))]
    pub async fn get_job(&self, id: &JobId) -> Result<Option<JobStatus>, AdminShopifyError> {
        let variables = storefront_job::Variables {
            id: id.as_str().to_string(),
        };

        let response = self.execute::<StorefrontJob>(variables).await?;

        Ok(response.hydrogen_storefront_job.map(convert_job))
    }

    /// Poll a provisioning job until it finishes.
    ///
    /// Checks the job every `job_polling.interval` until it reports `done`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the job does not exist
    /// - `JobFailed` if the job finished with errors
    /// - `JobTimeout` if it is still running after `job_polling.timeout`
    /// - Any request error from [`AdminClient::get_job`]
    #[instrument(skip(self), fields(job_id = %id))]
    pub async fn wait_for_job(&self, id: &JobId) -> Result<(), AdminShopifyError> {
        let polling = self.inner.job_polling;
        let deadline = Instant::now() + polling.timeout;

        loop {
            let job = self
                .get_job(id)
                .await?
                .ok_or_else(|| AdminShopifyError::NotFound(format!("job {id}")))?;

            if job.succeeded() {
                tracing::debug!("Job completed");
                return Ok(());
            }

            if job.failed() {
                let messages: Vec<String> = job.errors.into_iter().map(|e| e.message).collect();
                return Err(AdminShopifyError::JobFailed(messages.join("; ")));
            }

            if Instant::now() + polling.interval > deadline {
                return Err(AdminShopifyError::JobTimeout(polling.timeout.as_secs()));
            }

            tracing::trace!("Job still running");
            sleep(polling.interval).await;
        }
    }
}
