//! Dashboard endpoints.

use reqwest::Client;
use tracing::debug;

use crate::codec;
use crate::endpoints::request::{authorize, not_found_as};
use crate::endpoints::send_request_with_retry;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::models::{Dashboard, DashboardHit, DashboardSearchOptions, SaveDashboardResponse};

/// Fetch a dashboard by slug, with its server metadata attached.
pub async fn get_dashboard(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    slug: &str,
    max_retries: usize,
) -> Result<Dashboard> {
    let url = format!(
        "{}/api/dashboards/db/{}",
        base_url,
        encode_path_segment(slug)
    );

    let builder = authorize(client.get(&url), auth_token);
    let response = send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("dashboard '{}'", slug)))?;

    let body = response.bytes().await?;
    codec::decode_dashboard_envelope(&body)
}

/// Create or update a dashboard.
///
/// Panels are numbered in `dashboard` before it is sent.
pub async fn save_dashboard(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    dashboard: &mut Dashboard,
    overwrite: bool,
    max_retries: usize,
) -> Result<SaveDashboardResponse> {
    let url = format!("{}/api/dashboards/db", base_url);
    let body = codec::encode_save_request(dashboard, overwrite)?;

    let builder = authorize(client.post(&url), auth_token)
        .header("Content-Type", "application/json")
        .body(body);
    let response = send_request_with_retry(builder, max_retries).await?;

    let saved: SaveDashboardResponse = response.json().await?;
    debug!(
        slug = %saved.slug,
        status = %saved.status,
        version = saved.version,
        "Dashboard saved"
    );
    Ok(saved)
}

/// Search dashboards.
pub async fn search_dashboards(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    options: &DashboardSearchOptions,
    max_retries: usize,
) -> Result<Vec<DashboardHit>> {
    let url = format!("{}/api/search", base_url);

    let builder = authorize(client.get(&url), auth_token).query(&options.to_query_params());
    let response = send_request_with_retry(builder, max_retries).await?;

    Ok(response.json().await?)
}

/// Delete a dashboard by slug.
pub async fn delete_dashboard(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    slug: &str,
    max_retries: usize,
) -> Result<()> {
    let url = format!(
        "{}/api/dashboards/db/{}",
        base_url,
        encode_path_segment(slug)
    );

    let builder = authorize(client.delete(&url), auth_token);
    send_request_with_retry(builder, max_retries)
        .await
        .map_err(|e| not_found_as(e, || format!("dashboard '{}'", slug)))?;

    Ok(())
}
