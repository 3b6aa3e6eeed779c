pub mod location;
pub mod permissions;
pub mod schemas;

pub use location::Location;
pub use permissions::{has_permission, DEVICE_PRECISE_LOCATION};
pub use schemas::request::WebhookRequest;
pub use schemas::response::{
    ExpectedInput, FulfillmentMessage, GoogleExtension, InputPrompt, InputValueData, Payload,
    PossibleIntent, SimpleResponse, SimpleResponses, WebhookResponse,
};
