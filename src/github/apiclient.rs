use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::config::Config;

use super::{error::FetchError, models::Event};

/// GitHub rejects anonymous API requests without a User-Agent.
pub const USER_AGENT: &str = "GitHub User Activity CLI";

pub struct Client;

impl Client {
    pub fn new() -> Self {
        Self
    }

    /// Fetches the first page of public events for `username`.
    ///
    /// Either the full parsed list is returned or a single [`FetchError`];
    /// there are no retries and no partial results from the HTTP layer.
    pub async fn fetch_user_events(
        &self,
        config: &Config,
        username: &str,
    ) -> Result<Vec<Event>, FetchError> {
        let url = events_url(config.github_api_url(), username);
        let resp = self
            .create_client()
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        match resp.status() {
            StatusCode::OK => {
                let body = resp.text().await.map_err(FetchError::Transport)?;
                parse_events(&body)
            }
            StatusCode::NOT_FOUND => Err(FetchError::UserNotFound(username.to_owned())),
            StatusCode::FORBIDDEN => Err(FetchError::RateLimited),
            other => Err(FetchError::UnexpectedStatus(other.as_u16())),
        }
    }

    fn create_client(&self) -> reqwest::Client {
        reqwest::ClientBuilder::new()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()
            .unwrap()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushing the username as a path segment percent-encodes it.
fn events_url(root_url: &Url, username: &str) -> Url {
    let mut url = root_url.clone();
    url.path_segments_mut()
        .expect("API URL validated at configuration time")
        .pop_if_empty()
        .extend(["users", username, "events"]);
    url
}

fn parse_events(body: &str) -> Result<Vec<Event>, FetchError> {
    let records: Vec<Value> = serde_json::from_str(body).map_err(FetchError::InvalidResponse)?;

    // A known tag with a malformed payload only drops that record,
    // so one bad entry never aborts the whole batch.
    let events = records
        .into_iter()
        .filter_map(|record| match Event::from_json(record) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!(message = "Skipping malformed event record", error = %e);
                None
            }
        })
        .collect();

    Ok(events)
}
