//! Hydrogen Link CLI - Connect local projects to Hydrogen storefronts.
//!
//! # Usage
//!
//! ```bash
//! # Link the current directory, choosing a storefront interactively
//! h2 link --shop snowdevil
//!
//! # Link a specific storefront by title, replacing any existing link
//! h2 link --path ./my-app --storefront "Snowdevil" --force
//!
//! # Show the shop's storefronts
//! h2 list
//!
//! # Remove the link
//! h2 unlink
//! ```
//!
//! # Commands
//!
//! - `link` - Link a project to an existing or new storefront
//! - `list` - List storefronts on the shop
//! - `unlink` - Remove the storefront link from a project
//!
//! # Environment Variables
//!
//! - `SHOPIFY_ADMIN_TOKEN` - Admin API access token (required for `link` and `list`)
//! - `SHOPIFY_SHOP` - Default shop domain
//! - `RUST_LOG` - Log filter (default: `hydrogen_link_cli=info,hydrogen_link_admin=info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hydrogen_link_cli::CliError;
use hydrogen_link_cli::commands::{self, link::LinkOptions};

#[derive(Parser)]
#[command(name = "h2")]
#[command(author, version, about = "Link local projects to Hydrogen storefronts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Link a local project to a Hydrogen storefront
    Link {
        #[command(flatten)]
        target: Target,

        /// Title of the storefront to link (exact match)
        #[arg(short, long)]
        storefront: Option<String>,

        /// Replace an existing link without asking
        #[arg(short, long)]
        force: bool,
    },
    /// List the Hydrogen storefronts on the shop
    List {
        #[command(flatten)]
        target: Target,
    },
    /// Remove the storefront link from a project
    Unlink {
        /// Project directory (default: current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Args)]
struct Target {
    /// Project directory (default: current directory)
    #[arg(long)]
    path: Option<PathBuf>,

    /// Shop domain, e.g. snowdevil.myshopify.com
    #[arg(long, env = "SHOPIFY_SHOP")]
    shop: Option<String>,
}

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hydrogen_link_cli=info,hydrogen_link_admin=info".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Link {
            target,
            storefront,
            force,
        } => {
            let options = LinkOptions {
                path: target.path,
                storefront,
                force,
            };
            let outcome = commands::link::run(options, target.shop.as_deref()).await?;
            tracing::debug!(?outcome, "Link finished");
        }
        Commands::List { target } => {
            commands::list::run(target.path, target.shop.as_deref()).await?;
        }
        Commands::Unlink { path } => {
            commands::unlink::run(path).await?;
        }
    }
    Ok(())
}
