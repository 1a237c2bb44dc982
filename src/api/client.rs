use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::api::{FetchError, MovieSource};
use crate::config::ApiConfig;
use crate::model::Movie;
use crate::signal::OneShot;

/// HTTP client for the fixed movie list endpoint.
///
/// Each [`MovieSource::fetch_all`] call issues one GET on a spawned task;
/// cancelling the returned [`OneShot`] drops the in-flight request. There
/// are no retries here.
pub struct MovieApiClient {
    client: Client,
    endpoint: String,
}

impl MovieApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.base_url.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl MovieSource for MovieApiClient {
    fn fetch_all(&self) -> OneShot<Vec<Movie>, FetchError> {
        let request = self.client.get(self.endpoint.as_str());
        let endpoint = self.endpoint.clone();

        OneShot::spawn(fetch(request, endpoint))
    }
}

async fn fetch(request: RequestBuilder, endpoint: String) -> Result<Vec<Movie>, FetchError> {
    tracing::debug!(endpoint = %endpoint, "Fetching movie list");

    let response = request.send().await.map_err(|e| {
        tracing::warn!(endpoint = %endpoint, error = %e, "Movie request failed");
        FetchError::from(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(
            endpoint = %endpoint,
            status = status.as_u16(),
            "Movie server returned error status"
        );
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.bytes().await?;
    let movies = decode_movies(&body).inspect_err(|e| {
        tracing::warn!(endpoint = %endpoint, error = %e, "Failed to decode movie list");
    })?;

    tracing::info!(count = movies.len(), "Fetched movies from server");
    Ok(movies)
}

/// Decode a response body into movie records.
///
/// A body with no content (or only whitespace) is [`FetchError::EmptyBody`].
/// Any element that fails to decode fails the whole list.
pub fn decode_movies(body: &[u8]) -> Result<Vec<Movie>, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FetchError::EmptyBody);
    }
    Ok(serde_json::from_slice(body)?)
}
