use crate::config::AppConfig;
use crate::utils::error::{ReportError, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub fn build_client(config: &AppConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .build()?;
    Ok(client)
}

/// Sends the request and decodes a JSON body. Any non-2xx status is an error.
pub(crate) async fn get_json<T: DeserializeOwned>(
    source_name: &str,
    request: RequestBuilder,
) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();

    tracing::debug!("{} response status: {}", source_name, status);

    if !status.is_success() {
        return Err(ReportError::UnexpectedStatus {
            source_name: source_name.to_string(),
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    Ok(response.json::<T>().await?)
}
