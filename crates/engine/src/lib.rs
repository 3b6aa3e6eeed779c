pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod geo;
pub mod messages;

pub use config::Config;
pub use dispatch::{Action, Dispatcher, Outcome};
pub use error::{GeoError, WebhookError};
pub use messages::Messages;
