// crates/engine/src/dispatch/builders.rs
//
// Fixed response templates. Everything variable comes from `Messages`.

use spyglass_shared::schemas::ACTIONS_ON_GOOGLE;
use spyglass_shared::{
    DEVICE_PRECISE_LOCATION, ExpectedInput, FulfillmentMessage, GoogleExtension, InputPrompt,
    InputValueData, Payload, PossibleIntent, SimpleResponse, SimpleResponses, WebhookResponse,
};

use crate::messages::Messages;

pub const PERMISSION_INTENT: &str = "actions.intent.PERMISSION";
pub const PERMISSION_VALUE_SPEC: &str = "type.googleapis.com/google.actions.v2.PermissionValueSpec";

fn spoken(text: &str) -> FulfillmentMessage {
    FulfillmentMessage {
        platform: Some(ACTIONS_ON_GOOGLE.to_string()),
        simple_responses: SimpleResponses {
            simple_responses: vec![SimpleResponse::speech(text)],
        },
    }
}

pub fn simple_reply(text: &str) -> WebhookResponse {
    WebhookResponse {
        fulfillment_messages: vec![spoken(text)],
        ..Default::default()
    }
}

pub fn distance_reply(messages: &Messages, username: &str, distance: i64) -> WebhookResponse {
    let text = Messages::render(
        &messages.distance,
        &[("username", username), ("distance", &distance.to_string())],
    );
    simple_reply(&text)
}

/// Ask the platform to run its precise-location permission flow.
pub fn permission_request(messages: &Messages) -> WebhookResponse {
    let prompt = &messages.permission_prompt;

    WebhookResponse {
        source: Some("google".to_string()),
        fulfillment_messages: vec![spoken(prompt)],
        payload: Some(Payload {
            google: GoogleExtension {
                expect_user_response: true,
                expected_inputs: vec![ExpectedInput {
                    input_prompt: InputPrompt {
                        initial_prompts: vec![SimpleResponse::speech(prompt.as_str())],
                        no_input_prompts: vec![],
                    },
                    possible_intents: vec![PossibleIntent {
                        intent: PERMISSION_INTENT.to_string(),
                        input_value_data: InputValueData {
                            value_type: PERMISSION_VALUE_SPEC.to_string(),
                            opt_context: messages.permission_context.clone(),
                            permissions: vec![DEVICE_PRECISE_LOCATION.to_string()],
                        },
                    }],
                }],
            },
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_reply_speaks_once() {
        let resp = simple_reply("hello");
        assert_eq!(resp.fulfillment_messages.len(), 1);
        assert_eq!(resp.fulfillment_messages[0].platform.as_deref(), Some(ACTIONS_ON_GOOGLE));
        assert_eq!(resp.first_speech(), Some("hello"));
        assert!(resp.payload.is_none());
        assert!(resp.source.is_none());
    }

    #[test]
    fn distance_reply_renders_template() {
        let resp = distance_reply(&Messages::default(), "alice", 5);
        assert_eq!(resp.first_speech(), Some("alice is 5 away"));
    }

    #[test]
    fn distance_reply_keeps_username_literal() {
        let resp = distance_reply(&Messages::default(), "{distance}", 5);
        assert_eq!(resp.first_speech(), Some("{distance} is 5 away"));

        let resp = distance_reply(&Messages::default(), "{username} & co", 5);
        assert_eq!(resp.first_speech(), Some("{username} & co is 5 away"));
    }

    #[test]
    fn permission_request_uses_stock_template() {
        let resp = permission_request(&Messages::default());
        assert!(resp.is_deliverable());
        assert_eq!(resp.source.as_deref(), Some("google"));
        assert_eq!(resp.first_speech(), Some("PLACEHOLDER_FOR_PERMISSION"));

        let google = &resp.payload.as_ref().unwrap().google;
        assert!(google.expect_user_response);
        assert_eq!(google.expected_inputs.len(), 1);

        let input = &google.expected_inputs[0];
        assert_eq!(
            input.input_prompt.initial_prompts,
            vec![SimpleResponse::speech("PLACEHOLDER_FOR_PERMISSION")]
        );
        assert_eq!(input.possible_intents.len(), 1);

        let intent = &input.possible_intents[0];
        assert_eq!(intent.intent, PERMISSION_INTENT);
        assert_eq!(intent.input_value_data.value_type, PERMISSION_VALUE_SPEC);
        assert_eq!(intent.input_value_data.opt_context, "To compare");
        assert_eq!(intent.input_value_data.permissions, vec![DEVICE_PRECISE_LOCATION.to_string()]);
    }

    #[test]
    fn permission_request_follows_custom_copy() {
        let messages = Messages {
            permission_prompt: "To find your friends, I need your location.".to_string(),
            permission_context: "To measure the distance".to_string(),
            ..Default::default()
        };
        let resp = permission_request(&messages);
        let payload = resp.payload.clone().unwrap();
        let intent = &payload.google.expected_inputs[0].possible_intents[0];

        assert_eq!(resp.first_speech(), Some("To find your friends, I need your location."));
        assert_eq!(intent.input_value_data.opt_context, "To measure the distance");
    }
}
