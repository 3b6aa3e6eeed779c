use std::time::Duration;

use spyglass_shared::Location;

use crate::error::GeoError;

/// Client for the external "where is this user" service.
///
/// Stub: nothing in the dispatcher calls it, and a lookup never yields a
/// real position. The service's body is fetched and parsed, then dropped
/// instead of being written into the result, so every call ends in the zero
/// [`Location`]. Making it return the parsed position would change what the
/// service observably does; see DESIGN.md before wiring it in.
#[derive(Clone, Debug)]
pub struct LocationClient {
    client: reqwest::Client,
    base_url: String,
}

impl LocationClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GeoError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Failures are logged and never surfaced; the caller always gets a
    /// `Location`.
    pub async fn fetch_user_location(&self, user_id: &str) -> Location {
        match self.lookup(user_id).await {
            Ok(location) => location,
            Err(e) => {
                tracing::warn!(user_id, error = %e, "User location lookup failed");
                Location::default()
            }
        }
    }

    async fn lookup(&self, user_id: &str) -> Result<Location, GeoError> {
        let url = format!("{}/getLocation", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[("user", user_id)])
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;
        tracing::debug!(user_id, %body, "Location service answered");

        Err(GeoError::BodyNotApplied)
    }
}
