//! Remove the storefront link from a project.

use std::path::PathBuf;

use hydrogen_link_core::LinkedStorefront;

use super::project_root;
use crate::error::CliError;
use crate::project::ProjectStore;
use crate::report::{ConsoleReporter, Reporter};

/// Run `h2 unlink` on the project directory.
///
/// Needs no Admin API access.
///
/// # Errors
///
/// Returns an error if the project file cannot be read or written.
pub async fn run(path: Option<PathBuf>) -> Result<Option<LinkedStorefront>, CliError> {
    let project = ProjectStore::new(project_root(path.as_deref())?);
    unlink(&project, &ConsoleReporter).await
}

/// Remove the storefront link, keeping the rest of the project configuration.
///
/// # Errors
///
/// Returns an error if the project file cannot be read or written.
pub async fn unlink<R: Reporter>(
    project: &ProjectStore,
    reporter: &R,
) -> Result<Option<LinkedStorefront>, CliError> {
    let Some(previous) = project.unset_storefront().await? else {
        reporter.warn(
            "This project isn't linked to a Hydrogen storefront",
            &["Run `h2 link` to link one".to_string()],
        );
        return Ok(None);
    };

    reporter.success(
        &format!("You are no longer linked to {}", previous.title),
        &[],
    );

    Ok(Some(previous))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hydrogen_link_core::{ShopDomain, StorefrontId};

    use super::*;
    use crate::testing::{RecordingReporter, Report};

    #[tokio::test]
    async fn test_unlink_removes_storefront() {
        let dir = tempfile::tempdir().unwrap();
        let project = ProjectStore::new(dir.path());
        let linked = LinkedStorefront {
            id: StorefrontId::new("gid://shopify/HydrogenStorefront/1"),
            title: "Snowdevil".to_string(),
        };
        project
            .set_storefront(&ShopDomain::parse("snowdevil").unwrap(), &linked)
            .await
            .unwrap();
        let reporter = RecordingReporter::new();

        let removed = unlink(&project, &reporter).await.unwrap();

        assert_eq!(removed, Some(linked));
        assert!(project.read().await.unwrap().storefront.is_none());
        assert!(matches!(
            reporter.reports().as_slice(),
            [Report::Success { message, .. }] if message.contains("Snowdevil")
        ));
    }

    #[tokio::test]
    async fn test_unlink_without_link_warns() {
        let dir = tempfile::tempdir().unwrap();
        let project = ProjectStore::new(dir.path());
        let reporter = RecordingReporter::new();

        let removed = unlink(&project, &reporter).await.unwrap();

        assert!(removed.is_none());
        assert!(matches!(
            reporter.reports().as_slice(),
            [Report::Warn { .. }]
        ));
    }
}
