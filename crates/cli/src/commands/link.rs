//! Link a local project to a Hydrogen storefront.
//!
//! # Usage
//!
//! ```bash
//! # Pick a storefront (or create one) interactively
//! h2 link
//!
//! # Link a storefront by its exact title, skipping the picker
//! h2 link --storefront "Snowdevil"
//!
//! # Replace an existing link without confirmation
//! h2 link --path ./my-app --force
//! ```

use std::path::{Path, PathBuf};

use hydrogen_link_core::{DEFAULT_STOREFRONT_TITLE, ShopDomain, Storefront, UserError, humanize};

use super::{Context, report_missing_storefronts};
use crate::api::StorefrontApi;
use crate::error::CliError;
use crate::project::ProjectStore;
use crate::prompt::{Choice, Prompter, TerminalPrompter};
use crate::report::{ConsoleReporter, Reporter};

/// Value of the synthetic "create" entry in the storefront picker.
///
/// Storefront IDs are `gid://` URIs, so this can never collide with one.
pub const CREATE_NEW_STOREFRONT: &str = "NEW_STOREFRONT";

const NEXT_STEP_DEV: &str =
    "Run `h2 dev` to start your local development server and start building";

/// Options accepted by `h2 link`.
#[derive(Debug, Clone, Default)]
pub struct LinkOptions {
    /// Project directory. Also used to suggest a title for new storefronts.
    pub path: Option<PathBuf>,
    /// Exact title of the storefront to link.
    pub storefront: Option<String>,
    /// Replace an existing link without asking.
    pub force: bool,
}

/// How a link attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The shop has no storefronts.
    NoStorefronts,
    /// The user chose to keep the existing link.
    Declined,
    /// No storefront has the requested title.
    NotFound(String),
    /// The user dismissed the storefront picker.
    Cancelled,
    /// The API refused to create the storefront.
    Rejected(Vec<UserError>),
    /// The storefront could not be created or its job did not succeed.
    CreateFailed,
    /// The project is now linked to this storefront.
    Linked(Storefront),
}

/// Run `h2 link` against the terminal, the project directory, and the Admin API.
///
/// # Errors
///
/// Returns an error if configuration, the Admin API, the project file, or a
/// prompt fails outside the handled outcomes.
pub async fn run(options: LinkOptions, shop_flag: Option<&str>) -> Result<LinkOutcome, CliError> {
    let prompter = TerminalPrompter;
    let ctx = Context::load(options.path.as_deref(), shop_flag, &prompter).await?;

    link(
        &ctx.client,
        &ctx.project,
        &ctx.shop,
        &prompter,
        &ConsoleReporter,
        &options,
    )
    .await
}

/// The link workflow.
///
/// Fetches the shop's storefronts, confirms before replacing an existing link
/// (unless forced), picks the storefront by title or interactively (optionally
/// creating a new one), then records it in the project.
///
/// Every dead end is reported through `reporter` and returned as a
/// [`LinkOutcome`]; the project file is only written for
/// [`LinkOutcome::Linked`].
///
/// # Errors
///
/// Returns an error if fetching storefronts, creating a storefront, reading or
/// writing the project file, or prompting fails.
pub async fn link<A, P, R>(
    api: &A,
    project: &ProjectStore,
    shop: &ShopDomain,
    prompter: &P,
    reporter: &R,
    options: &LinkOptions,
) -> Result<LinkOutcome, CliError>
where
    A: StorefrontApi,
    P: Prompter,
    R: Reporter,
{
    let storefronts = api.fetch_storefronts().await?;
    if storefronts.is_empty() {
        report_missing_storefronts(shop, reporter);
        return Ok(LinkOutcome::NoStorefronts);
    }

    let config = project.read().await?;
    if let Some(current) = &config.storefront
        && !options.force
    {
        reporter.info(&format!("Your project is currently linked to {}", current.title));
        let proceed = prompter.confirm(
            "Do you want to link to a different Hydrogen storefront on Shopify?",
            false,
        )?;
        if !proceed {
            return Ok(LinkOutcome::Declined);
        }
    }

    let selected = if let Some(name) = &options.storefront {
        let Some(found) = storefronts.iter().find(|s| &s.title == name) else {
            reporter.warn(
                &format!("Couldn't find {name}"),
                &[
                    "Did you type the storefront name correctly?".to_string(),
                    "Run `h2 list` to see all storefronts".to_string(),
                ],
            );
            return Ok(LinkOutcome::NotFound(name.clone()));
        };
        found.clone()
    } else {
        let mut choices: Vec<Choice> = storefronts
            .iter()
            .map(|s| Choice::new(s.to_string(), s.id.as_str()))
            .collect();
        choices.push(Choice::new("Create a new storefront", CREATE_NEW_STOREFRONT));

        let Some(choice) = prompter.select("Choose a Hydrogen storefront to link", &choices)?
        else {
            return Ok(LinkOutcome::Cancelled);
        };

        if choice == CREATE_NEW_STOREFRONT {
            match create_storefront(api, prompter, reporter, options.path.as_deref()).await? {
                Ok(storefront) => storefront,
                Err(outcome) => return Ok(outcome),
            }
        } else {
            let Some(found) = storefronts.iter().find(|s| s.id.as_str() == choice) else {
                return Ok(LinkOutcome::Cancelled);
            };
            found.clone()
        }
    };

    project.set_storefront(shop, &selected.to_linked()).await?;
    tracing::debug!(storefront_id = %selected.id, "Linked storefront");

    reporter.success(
        &format!("Hydrogen storefront {} is now linked", selected.title),
        &[NEXT_STEP_DEV.to_string()],
    );

    Ok(LinkOutcome::Linked(selected))
}

/// Title suggested for a new storefront created from `path`.
#[must_use]
pub fn default_storefront_title(path: Option<&Path>) -> String {
    path.and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .map_or_else(|| DEFAULT_STOREFRONT_TITLE.to_string(), humanize)
}

/// Create a storefront and wait until it is provisioned.
///
/// The inner `Err` carries the outcome to return when creation did not
/// produce a usable storefront; it has already been reported.
async fn create_storefront<A, P, R>(
    api: &A,
    prompter: &P,
    reporter: &R,
    path: Option<&Path>,
) -> Result<Result<Storefront, LinkOutcome>, CliError>
where
    A: StorefrontApi,
    P: Prompter,
    R: Reporter,
{
    let default_title = default_storefront_title(path);
    let answer = prompter.text("New storefront name", &default_title)?;
    let title = match answer.trim() {
        "" => default_title,
        trimmed => trimmed.to_string(),
    };

    let creation = api.create_storefront(&title).await?;

    if creation.is_rejected() {
        reporter.user_errors("Couldn't create storefront", &creation.user_errors);
        return Ok(Err(LinkOutcome::Rejected(creation.user_errors)));
    }

    let Some(storefront) = creation.storefront else {
        report_create_failed(reporter);
        return Ok(Err(LinkOutcome::CreateFailed));
    };

    if let Some(job_id) = &creation.job_id
        && let Err(e) = api.wait_for_job(job_id).await
    {
        tracing::debug!(job_id = %job_id, error = %e, "Storefront job failed");
        report_create_failed(reporter);
        return Ok(Err(LinkOutcome::CreateFailed));
    }

    Ok(Ok(storefront))
}

fn report_create_failed<R: Reporter>(reporter: &R) {
    reporter.error(
        "Couldn't create storefront",
        "Please try again or contact Shopify support.",
    );
}
