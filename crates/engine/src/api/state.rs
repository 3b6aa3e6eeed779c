use anyhow::Result;
use std::sync::Arc;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::geo::{Directions, LocationClient};
use crate::messages::Messages;

/// Shared, read-only per-process state. Cloned into every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    /// Held for completeness; no route reaches it.
    pub locations: LocationClient,
    pub strict: bool,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher, locations: LocationClient, strict: bool) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            locations,
            strict,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let messages = match &config.messages_path {
            Some(path) => Messages::load(path)?,
            None => Messages::default(),
        };
        let directions = Directions::new(config.maps_api_key.clone());
        let locations = LocationClient::new(config.location_url.clone(), config.location_timeout)?;

        Ok(Self::new(Dispatcher::new(messages, directions), locations, config.strict))
    }
}
