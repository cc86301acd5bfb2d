//! `h2` commands.
//!
//! Each command is split in two: a `run` function that wires up the real
//! terminal, filesystem and Admin API client, and a workflow function that is
//! generic over its collaborators.

pub mod link;
pub mod list;
pub mod unlink;

use std::path::{Path, PathBuf};

use hydrogen_link_admin::{AdminClient, ShopifyAdminConfig};
use hydrogen_link_core::ShopDomain;

use crate::error::CliError;
use crate::project::{ProjectConfig, ProjectStore};
use crate::prompt::Prompter;
use crate::report::Reporter;

/// Everything a remote command needs once the project and shop are known.
pub struct Context {
    /// The project's link configuration store.
    pub project: ProjectStore,
    /// Configuration as read at startup.
    pub config: ProjectConfig,
    /// Shop the command operates on.
    pub shop: ShopDomain,
    /// Admin API client for `shop`.
    pub client: AdminClient,
}

impl Context {
    /// Load configuration, resolve the shop, and build the Admin API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment configuration is invalid, the
    /// project file cannot be read, or no valid shop can be determined.
    pub async fn load<P: Prompter>(
        path: Option<&Path>,
        shop_flag: Option<&str>,
        prompter: &P,
    ) -> Result<Self, CliError> {
        let admin_config = ShopifyAdminConfig::from_env()?;
        let project = ProjectStore::new(project_root(path)?);
        let config = project.read().await?;
        let shop = resolve_shop(shop_flag, &config, prompter)?;
        tracing::debug!(shop = %shop, root = %project.root().display(), "Resolved project");

        let client = AdminClient::new(&admin_config, &shop);

        Ok(Self {
            project,
            config,
            shop,
            client,
        })
    }
}

/// Directory the command operates on: `path` if given, otherwise the working directory.
///
/// # Errors
///
/// Returns an error if `path` is absent and the working directory cannot be read.
pub fn project_root(path: Option<&Path>) -> Result<PathBuf, CliError> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Determine which shop to talk to.
///
/// Order: explicit flag (or `SHOPIFY_SHOP`), the shop stored in the project,
/// then an interactive prompt.
///
/// # Errors
///
/// Returns an error if the chosen value is not a valid shop domain or the
/// prompt fails.
pub fn resolve_shop<P: Prompter>(
    flag: Option<&str>,
    config: &ProjectConfig,
    prompter: &P,
) -> Result<ShopDomain, CliError> {
    if let Some(raw) = flag {
        return Ok(ShopDomain::parse(raw)?);
    }

    if let Some(shop) = &config.shop {
        return Ok(shop.clone());
    }

    let raw = prompter.text("Shop domain (e.g. snowdevil.myshopify.com)", "")?;
    Ok(ShopDomain::parse(&raw)?)
}

/// Tell the user the shop has no storefronts and where to create one.
pub fn report_missing_storefronts<R: Reporter>(shop: &ShopDomain, reporter: &R) {
    reporter.info(&format!(
        "There are no Hydrogen storefronts on {shop}. Create one in the Shopify admin: \
         https://admin.shopify.com/store/{}/hydrogen",
        shop.handle()
    ));
}
