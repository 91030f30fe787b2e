use crate::error::FetchError;
use reqwest::StatusCode;
use std::time::Duration;

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    "SeedImages"
}

/// Build the client shared by every request of a run.
///
/// Without a timeout the transport default applies.
pub fn build_client(timeout: Option<Duration>) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(get_user_agent());
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// GET `url` and return the body. Anything other than 200 is an error.
pub async fn download_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    tracing::debug!(%url, %status, "Response received");
    if status != StatusCode::OK {
        return Err(FetchError::Status(status));
    }

    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}
