//! List the shop's Hydrogen storefronts.

use std::path::PathBuf;

use hydrogen_link_core::{LinkedStorefront, ShopDomain, Storefront};

use super::{Context, report_missing_storefronts};
use crate::api::StorefrontApi;
use crate::error::CliError;
use crate::prompt::TerminalPrompter;
use crate::report::{ConsoleReporter, Reporter};

/// Run `h2 list` against the terminal, the project directory, and the Admin API.
///
/// # Errors
///
/// Returns an error if configuration, the Admin API, or the project file fails.
pub async fn run(path: Option<PathBuf>, shop_flag: Option<&str>) -> Result<(), CliError> {
    let ctx = Context::load(path.as_deref(), shop_flag, &TerminalPrompter).await?;

    list(
        &ctx.client,
        &ctx.shop,
        ctx.config.storefront.as_ref(),
        &ConsoleReporter,
    )
    .await?;

    Ok(())
}

/// Report every storefront on the shop, marking the one linked to the project.
///
/// # Errors
///
/// Returns an error if the storefronts cannot be fetched.
pub async fn list<A, R>(
    api: &A,
    shop: &ShopDomain,
    linked: Option<&LinkedStorefront>,
    reporter: &R,
) -> Result<Vec<Storefront>, CliError>
where
    A: StorefrontApi,
    R: Reporter,
{
    let storefronts = api.fetch_storefronts().await?;
    if storefronts.is_empty() {
        report_missing_storefronts(shop, reporter);
        return Ok(storefronts);
    }

    reporter.info(&format!(
        "Found {} Hydrogen storefront(s) on {shop}:",
        storefronts.len()
    ));
    for storefront in &storefronts {
        let marker = if linked.is_some_and(|l| l.id == storefront.id) {
            " (linked)"
        } else {
            ""
        };
        let url = storefront
            .production_url
            .as_deref()
            .unwrap_or("not deployed");
        reporter.info(&format!(
            "  {}{marker}  {url}  [{}]",
            storefront.title, storefront.id
        ));
    }

    Ok(storefronts)
}
