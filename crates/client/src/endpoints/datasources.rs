//! Datasource endpoints.

use reqwest::Client;

use crate::endpoints::request::{authorize, not_found_as};
use crate::endpoints::send_request_with_retry;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::models::Datasource;

/// List all datasources of the current organization.
pub async fn list_datasources(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    max_retries: usize,
) -> Result<Vec<Datasource>> {
    let url = format!("{}/api/datasources", base_url);

    let builder = authorize(client.get(&url), auth_token);
    let response = send_request_with_retry(builder, max_retries).await?;

    Ok(response.json().await?)
}

/// Get a datasource by id.
pub async fn get_datasource(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    id: u64,
    max_retries: usize,
) -> Result<Datasource> {
    let url = format!("{}/api/datasources/{}", base_url, id);

    let builder = authorize(client.get(&url), auth_token);
    let response = send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("datasource {}", id)))?;

    Ok(response.json().await?)
}

/// Get a datasource by name.
pub async fn get_datasource_by_name(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    name: &str,
    max_retries: usize,
) -> Result<Datasource> {
    if name.trim().is_empty() {
        return Err(ClientError::InvalidArgument(
            "datasource name must not be empty".to_string(),
        ));
    }

    let url = format!(
        "{}/api/datasources/name/{}",
        base_url,
        encode_path_segment(name)
    );

    let builder = authorize(client.get(&url), auth_token);
    let response = send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("datasource '{}'", name)))?;

    Ok(response.json().await?)
}
