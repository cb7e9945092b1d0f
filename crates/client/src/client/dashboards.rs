//! Dashboard API methods for [`GrafanaClient`].
//!
//! # What this module does NOT handle:
//! - Low-level dashboard endpoint HTTP calls (in `crate::endpoints::dashboards`)

use tracing::debug;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{Dashboard, DashboardHit, DashboardSearchOptions};

impl GrafanaClient {
    /// Get a dashboard by slug, with server metadata attached.
    pub async fn get_dashboard(&self, slug: &str) -> Result<Dashboard> {
        endpoints::get_dashboard(
            &self.http,
            &self.base_url,
            self.auth_token(),
            slug,
            self.max_retries,
        )
        .await
    }

    /// Save a dashboard, then refresh it from the server.
    ///
    /// On success `dashboard` is replaced by the stored version, so its id,
    /// version and metadata reflect the save. Panel ids are renumbered first.
    pub async fn save_dashboard(&self, dashboard: &mut Dashboard, overwrite: bool) -> Result<()> {
        let saved = endpoints::save_dashboard(
            &self.http,
            &self.base_url,
            self.auth_token(),
            dashboard,
            overwrite,
            self.max_retries,
        )
        .await?;

        if !saved.is_success() {
            return Err(ClientError::ApiError {
                status: 200,
                url: format!("{}/api/dashboards/db", self.base_url),
                message: format!("unexpected save status '{}'", saved.status),
            });
        }

        debug!(slug = %saved.slug, "Refreshing saved dashboard");
        *dashboard = self.get_dashboard(&saved.slug).await?;
        Ok(())
    }

    /// Search dashboards by title, tags and starred state.
    pub async fn search_dashboards(
        &self,
        options: &DashboardSearchOptions,
    ) -> Result<Vec<DashboardHit>> {
        endpoints::search_dashboards(
            &self.http,
            &self.base_url,
            self.auth_token(),
            options,
            self.max_retries,
        )
        .await
    }

    /// Delete a dashboard by slug.
    pub async fn delete_dashboard(&self, slug: &str) -> Result<()> {
        endpoints::delete_dashboard(
            &self.http,
            &self.base_url,
            self.auth_token(),
            slug,
            self.max_retries,
        )
        .await
    }
}
