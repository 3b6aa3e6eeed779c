// crates/engine/src/dispatch/mod.rs

pub mod builders;

use spyglass_shared::{
    DEVICE_PRECISE_LOCATION, Location, WebhookRequest, WebhookResponse, has_permission,
};

use crate::geo::Directions;
use crate::messages::Messages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `input.permissions`: make sure we may read the user's location.
    RequestPermissions,
    /// `input.distance`: how far away is the named user.
    Distance,
    /// `output.permission`: the platform's permission flow came back.
    PermissionGranted,
    Unknown(String),
}

impl From<&str> for Action {
    fn from(action: &str) -> Self {
        match action {
            "input.permissions" => Action::RequestPermissions,
            "input.distance" => Action::Distance,
            "output.permission" => Action::PermissionGranted,
            other => Action::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Respond(WebhookResponse),
    /// The action needs a permission the user has not granted.
    PermissionDenied { action: String },
    Unhandled { action: String },
}

/// Maps one detected intent to one fulfillment. Holds no per-conversation
/// state; the platform's conversation token is ignored.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    messages: Messages,
    directions: Directions,
}

impl Dispatcher {
    pub fn new(messages: Messages, directions: Directions) -> Self {
        Self { messages, directions }
    }

    pub fn handle(&self, req: &WebhookRequest) -> Outcome {
        let outcome = match Action::from(req.action()) {
            Action::RequestPermissions => {
                if self.check_location_permission(req) {
                    Outcome::Respond(builders::simple_reply(&self.messages.spy_prompt))
                } else {
                    tracing::info!("Requesting location permission");
                    Outcome::Respond(builders::permission_request(&self.messages))
                }
            }
            Action::Distance => {
                if !self.check_location_permission(req) {
                    tracing::warn!(
                        action = req.action(),
                        "Distance requested without location permission"
                    );
                    return Outcome::PermissionDenied {
                        action: req.action().to_string(),
                    };
                }
                let distance = self.directions.distance(&Location::default(), &Location::default());
                Outcome::Respond(builders::distance_reply(&self.messages, req.username(), distance))
            }
            Action::PermissionGranted => {
                // Checked for the log line only; the reply is the same either way.
                self.check_location_permission(req);
                Outcome::Respond(builders::simple_reply(&self.messages.permission_granted))
            }
            Action::Unknown(action) => {
                tracing::debug!(%action, "No handler for action");
                return Outcome::Unhandled { action };
            }
        };

        if let Outcome::Respond(resp) = &outcome {
            if !resp.is_deliverable() {
                tracing::error!(
                    action = req.action(),
                    "Fulfillment has nothing to say, check the message copy"
                );
            }
        }
        outcome
    }

    fn check_location_permission(&self, req: &WebhookRequest) -> bool {
        let granted = has_permission(req.permissions(), DEVICE_PRECISE_LOCATION);
        tracing::info!(
            permission = DEVICE_PRECISE_LOCATION,
            granted,
            user_id = %req.user().user_id,
            "Permission check"
        );
        granted
    }
}
