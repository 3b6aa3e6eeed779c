// crates/shared/src/schemas/response.rs

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    /// Plain text for clients that don't understand platform messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fulfillment_messages: Vec<FulfillmentMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
}

impl WebhookResponse {
    /// The platform rejects fulfillments with nothing to say and nothing to
    /// ask for, so a response is only worth sending if it carries spoken
    /// text or a permission request.
    pub fn is_deliverable(&self) -> bool {
        let speaks = self
            .fulfillment_messages
            .iter()
            .flat_map(|m| &m.simple_responses.simple_responses)
            .any(SimpleResponse::has_speech);

        let asks = self.payload.as_ref().is_some_and(|p| {
            p.google
                .expected_inputs
                .iter()
                .any(|input| !input.possible_intents.is_empty())
        });

        speaks || asks
    }

    /// Text of the first simple response, if any.
    pub fn first_speech(&self) -> Option<&str> {
        self.fulfillment_messages
            .iter()
            .flat_map(|m| &m.simple_responses.simple_responses)
            .find_map(|r| r.text_to_speech.as_deref())
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default)]
    pub simple_responses: SimpleResponses,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResponses {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub simple_responses: Vec<SimpleResponse>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_to_speech: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}

impl SimpleResponse {
    pub fn speech(text: impl Into<String>) -> Self {
        Self {
            text_to_speech: Some(text.into()),
            display_text: None,
        }
    }

    fn has_speech(&self) -> bool {
        self.text_to_speech.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Payload {
    pub google: GoogleExtension,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoogleExtension {
    pub expect_user_response: bool,
    #[serde(default)]
    pub expected_inputs: Vec<ExpectedInput>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedInput {
    #[serde(default)]
    pub input_prompt: InputPrompt,
    #[serde(default)]
    pub possible_intents: Vec<PossibleIntent>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InputPrompt {
    #[serde(default)]
    pub initial_prompts: Vec<SimpleResponse>,
    #[serde(default)]
    pub no_input_prompts: Vec<SimpleResponse>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PossibleIntent {
    pub intent: String,
    pub input_value_data: InputValueData,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InputValueData {
    #[serde(rename = "@type")]
    pub value_type: String,
    #[serde(default)]
    pub opt_context: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}
