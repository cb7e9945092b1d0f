//! Datasource API methods for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Datasource;

impl GrafanaClient {
    /// List all datasources.
    pub async fn list_datasources(&self) -> Result<Vec<Datasource>> {
        endpoints::list_datasources(
            &self.http,
            &self.base_url,
            self.auth_token(),
            self.max_retries,
        )
        .await
    }

    /// Get a datasource by id.
    pub async fn get_datasource(&self, id: u64) -> Result<Datasource> {
        endpoints::get_datasource(
            &self.http,
            &self.base_url,
            self.auth_token(),
            id,
            self.max_retries,
        )
        .await
    }

    /// Get a datasource by name.
    pub async fn get_datasource_by_name(&self, name: &str) -> Result<Datasource> {
        endpoints::get_datasource_by_name(
            &self.http,
            &self.base_url,
            self.auth_token(),
            name,
            self.max_retries,
        )
        .await
    }
}
