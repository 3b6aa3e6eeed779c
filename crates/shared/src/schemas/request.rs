// crates/shared/src/schemas/request.rs
//
// Every field defaults when absent or null: the platform omits whatever does
// not apply to a given turn, and a missing field is not a malformed request.

use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub response_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub session: String,
    #[serde(deserialize_with = "null_as_default")]
    pub query_result: QueryResult,
    #[serde(deserialize_with = "null_as_default")]
    pub original_detect_intent_request: OriginalDetectIntentRequest,
}

impl WebhookRequest {
    pub fn action(&self) -> &str {
        &self.query_result.action
    }

    pub fn username(&self) -> &str {
        &self.query_result.parameters.username
    }

    pub fn user(&self) -> &User {
        &self.original_detect_intent_request.payload.user
    }

    pub fn permissions(&self) -> &[String] {
        &self.user().permissions
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub query_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub parameters: Parameters,
    #[serde(deserialize_with = "null_as_default")]
    pub all_required_params_present: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub fulfillment_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fulfillment_messages: Vec<TextMessage>,
    #[serde(deserialize_with = "null_as_default")]
    pub output_contexts: Vec<OutputContext>,
    #[serde(deserialize_with = "null_as_default")]
    pub intent: Intent,
    #[serde(deserialize_with = "null_as_default")]
    pub intent_detection_confidence: f64,
    pub diagnostic_info: serde_json::Value,
    #[serde(deserialize_with = "null_as_default")]
    pub language_code: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Parameters {
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct TextMessage {
    #[serde(deserialize_with = "null_as_default")]
    pub text: Text,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Text {
    #[serde(deserialize_with = "null_as_default")]
    pub text: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputContext {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifespan_count: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub parameters: ContextParameters,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ContextParameters {
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(rename = "username.original")]
    #[serde(deserialize_with = "null_as_default")]
    pub username_original: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Intent {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OriginalDetectIntentRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payload: AssistantPayload,
}

/// The Actions on Google conversation payload forwarded by Dialogflow.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AssistantPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub is_in_sandbox: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub surface: Surface,
    #[serde(deserialize_with = "null_as_default")]
    pub inputs: Vec<Input>,
    #[serde(deserialize_with = "null_as_default")]
    pub user: User,
    #[serde(deserialize_with = "null_as_default")]
    pub conversation: Conversation,
    #[serde(deserialize_with = "null_as_default")]
    pub available_surfaces: Vec<Surface>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Surface {
    #[serde(deserialize_with = "null_as_default")]
    pub capabilities: Vec<Capability>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Capability {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Input {
    #[serde(deserialize_with = "null_as_default")]
    pub raw_inputs: Vec<RawInput>,
    #[serde(deserialize_with = "null_as_default")]
    pub arguments: Vec<Argument>,
    #[serde(deserialize_with = "null_as_default")]
    pub intent: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RawInput {
    #[serde(deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(deserialize_with = "null_as_default")]
    pub input_type: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Argument {
    #[serde(deserialize_with = "null_as_default")]
    pub raw_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text_value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    /// RFC 3339 timestamp, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub permissions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub locale: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Conversation {
    #[serde(deserialize_with = "null_as_default")]
    pub conversation_id: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub conversation_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub conversation_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERMISSION_TURN: &str = r#"{
      "responseId": "5c7a1b0e-2f1e-4f7b-9a51-3a5b2c1d0e9f",
      "queryResult": {
        "action": "input.distance",
        "queryText": "how far is alice",
        "parameters": { "username": "alice" },
        "allRequiredParamsPresent": true,
        "outputContexts": [
          {
            "name": "projects/spyglass/agent/sessions/1/contexts/actions_capability_screen_output",
            "lifespanCount": 5,
            "parameters": { "username": "alice", "username.original": "Alice" }
          }
        ],
        "intent": { "name": "projects/spyglass/agent/intents/42", "displayName": "distance" },
        "intentDetectionConfidence": 0.87,
        "diagnosticInfo": {},
        "languageCode": "en-us"
      },
      "originalDetectIntentRequest": {
        "source": "google",
        "version": "2",
        "payload": {
          "isInSandbox": true,
          "surface": { "capabilities": [ { "name": "actions.capability.AUDIO_OUTPUT" } ] },
          "inputs": [
            {
              "rawInputs": [ { "query": "how far is alice", "inputType": "VOICE" } ],
              "arguments": [
                { "rawText": "how far is alice", "textValue": "how far is alice", "name": "text" }
              ],
              "intent": "actions.intent.TEXT"
            }
          ],
          "user": {
            "lastSeen": "2017-12-30T13:22:38Z",
            "permissions": ["DEVICE_PRECISE_LOCATION"],
            "locale": "en-US",
            "userId": "ABwppHExi4Hf9MXVT"
          },
          "conversation": {
            "conversationId": "1514640159227",
            "type": "ACTIVE",
            "conversationToken": "[]"
          },
          "availableSurfaces": [
            { "capabilities": [ { "name": "actions.capability.SCREEN_OUTPUT" } ] }
          ]
        }
      },
      "session": "projects/spyglass/agent/sessions/1514640159227"
    }"#;

    #[test]
    fn deserialize_full_turn() {
        let req: WebhookRequest = serde_json::from_str(PERMISSION_TURN).unwrap();

        assert_eq!(req.action(), "input.distance");
        assert_eq!(req.username(), "alice");
        assert_eq!(req.permissions(), ["DEVICE_PRECISE_LOCATION"]);
        assert_eq!(req.user().locale, "en-US");
        assert_eq!(req.user().last_seen.as_deref(), Some("2017-12-30T13:22:38Z"));
        assert_eq!(req.query_result.output_contexts[0].parameters.username_original, "Alice");
        assert_eq!(req.query_result.output_contexts[0].lifespan_count, Some(5));
        let payload = &req.original_detect_intent_request.payload;
        assert_eq!(payload.conversation.conversation_type, "ACTIVE");
        assert_eq!(payload.inputs[0].raw_inputs[0].input_type, "VOICE");
    }

    #[test]
    fn missing_sections_default() {
        let req: WebhookRequest = serde_json::from_str(
            r#"{ "queryResult": { "action": "output.permission" } }"#,
        )
        .unwrap();

        assert_eq!(req.action(), "output.permission");
        assert_eq!(req.username(), "");
        assert!(req.permissions().is_empty());
        assert!(req.user().last_seen.is_none());
    }

    #[test]
    fn null_fields_read_as_defaults() {
        let req: WebhookRequest = serde_json::from_str(
            r#"{
              "responseId": null,
              "queryResult": {
                "action": "output.permission",
                "queryText": null,
                "parameters": { "username": null },
                "allRequiredParamsPresent": null,
                "outputContexts": null,
                "intent": null,
                "intentDetectionConfidence": null,
                "diagnosticInfo": null
              },
              "originalDetectIntentRequest": {
                "source": null,
                "payload": {
                  "isInSandbox": null,
                  "surface": null,
                  "inputs": [ { "rawInputs": null, "arguments": null, "intent": null } ],
                  "user": { "lastSeen": null, "permissions": null, "locale": null, "userId": null },
                  "conversation": {
                    "conversationId": null,
                    "type": null,
                    "conversationToken": null
                  }
                }
              },
              "session": null
            }"#,
        )
        .unwrap();

        assert_eq!(req.action(), "output.permission");
        assert_eq!(req.username(), "");
        assert!(req.permissions().is_empty());
        assert!(req.user().last_seen.is_none());
        assert!(!req.query_result.all_required_params_present);
        assert_eq!(req.query_result.intent, Intent::default());
        assert_eq!(req.original_detect_intent_request.payload.inputs, vec![Input::default()]);
    }

    #[test]
    fn null_sections_read_as_defaults() {
        let req: WebhookRequest = serde_json::from_str(
            r#"{ "queryResult": null, "originalDetectIntentRequest": { "payload": null } }"#,
        )
        .unwrap();
        assert_eq!(req, WebhookRequest::default());
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let err = serde_json::from_str::<WebhookRequest>(r#"{ "queryResult": { "action": 7 } }"#);
        assert!(err.is_err());
    }
}
