// crates/shared/src/schemas/mod.rs
//
// Wire types for the Dialogflow v2 fulfillment webhook. `request` is what the
// agent platform posts to us, `response` is what we answer with.

use serde::{Deserialize, Deserializer};

pub mod request;
pub mod response;

/// Platform tag Actions on Google expects on rich fulfillment messages.
pub const ACTIONS_ON_GOOGLE: &str = "ACTIONS_ON_GOOGLE";

/// `#[serde(default)]` only covers absent fields; this also reads an explicit
/// `null` as the field's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
