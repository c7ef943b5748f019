//! Wire models for the voice-platform webhook.
//!
//! Field names follow the platform's camelCase JSON format. Inbound types
//! are deliberately lenient: missing pieces deserialize to defaults so the
//! dispatcher can decide how to fail, rather than serde.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Discriminant the platform sets on tool-call webhook messages.
pub const TOOL_CALLS_MESSAGE_TYPE: &str = "tool-calls";

/// Top-level webhook payload.
#[derive(Debug, Default, Deserialize)]
pub struct ToolCallPayload {
    #[serde(default)]
    pub message: Option<ToolCallMessage>,
}

/// Webhook message wrapping a batch of tool calls.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallMessage {
    #[serde(rename = "type", default)]
    pub message_type: Option<String>,
    #[serde(default)]
    pub tool_call_list: Vec<ToolCall>,
}

impl ToolCallMessage {
    /// Whether this message carries tool calls.
    pub fn is_tool_calls(&self) -> bool {
        self.message_type.as_deref() == Some(TOOL_CALLS_MESSAGE_TYPE)
    }
}

/// A single named action request from the platform.
#[derive(Debug, Deserialize)]
pub struct ToolCall {
    /// Correlation token echoed back in the matching result.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub function: Option<FunctionCall>,
}

/// Function name and arguments of a tool call.
#[derive(Debug, Default, Deserialize)]
pub struct FunctionCall {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

/// Result of one tool call, correlated by id.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub tool_call_id: String,
    pub result: ToolOutcome,
}

/// Outcome payload for a single tool call.
///
/// Unset fields are omitted from the JSON, matching the platform's expected
/// shape for both success and failure items.
#[derive(Debug, Serialize)]
pub struct ToolOutcome {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
    #[serde(rename = "eventId", skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(rename = "htmlLink", skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolOutcome {
    /// Successful cancellation of the given event.
    pub fn cancelled(event_id: impl Into<String>) -> Self {
        Self {
            ok: true,
            action: Some("cancelled"),
            event_id: Some(event_id.into()),
            html_link: None,
            error: None,
        }
    }

    /// Successful reschedule, with the provider's event link when present.
    pub fn rescheduled(event_id: impl Into<String>, html_link: Option<String>) -> Self {
        Self {
            ok: true,
            action: Some("rescheduled"),
            event_id: Some(event_id.into()),
            html_link,
            error: None,
        }
    }

    /// Failed tool call carrying an error message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            action: None,
            event_id: None,
            html_link: None,
            error: Some(message.into()),
        }
    }
}

/// Response envelope returned to the platform.
#[derive(Debug, Serialize)]
pub struct ToolCallResponse {
    pub results: Vec<ToolResult>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_tool_calls_payload() {
        let payload: ToolCallPayload = serde_json::from_value(json!({
            "message": {
                "type": "tool-calls",
                "toolCallList": [
                    {
                        "id": "a1",
                        "function": {
                            "name": "cancel_appointment",
                            "arguments": { "eventId": "evt123" }
                        }
                    }
                ]
            }
        }))
        .unwrap();

        let message = payload.message.unwrap();
        assert!(message.is_tool_calls());
        assert_eq!(message.tool_call_list.len(), 1);

        let call = &message.tool_call_list[0];
        assert_eq!(call.id, "a1");

        let function = call.function.as_ref().unwrap();
        assert_eq!(function.name, "cancel_appointment");
        assert_eq!(function.arguments["eventId"], "evt123");
    }

    #[test]
    fn test_missing_pieces_default() {
        let payload: ToolCallPayload = serde_json::from_value(json!({
            "message": { "type": "tool-calls" }
        }))
        .unwrap();
        assert!(payload.message.unwrap().tool_call_list.is_empty());

        let payload: ToolCallPayload = serde_json::from_value(json!({})).unwrap();
        assert!(payload.message.is_none());

        let message: ToolCallMessage = serde_json::from_value(json!({
            "type": "end-of-call-report"
        }))
        .unwrap();
        assert!(!message.is_tool_calls());
    }

    #[test]
    fn test_serialize_outcomes() {
        let cancelled = serde_json::to_value(ToolOutcome::cancelled("evt123")).unwrap();
        assert_eq!(
            cancelled,
            json!({ "ok": true, "action": "cancelled", "eventId": "evt123" })
        );

        let rescheduled = serde_json::to_value(ToolOutcome::rescheduled(
            "evt123",
            Some("https://calendar.google.com/event?eid=abc".to_string()),
        ))
        .unwrap();
        assert_eq!(
            rescheduled,
            json!({
                "ok": true,
                "action": "rescheduled",
                "eventId": "evt123",
                "htmlLink": "https://calendar.google.com/event?eid=abc"
            })
        );

        let failed = serde_json::to_value(ToolOutcome::failed("Unknown tool function: foo")).unwrap();
        assert_eq!(
            failed,
            json!({ "ok": false, "error": "Unknown tool function: foo" })
        );
    }

    #[test]
    fn test_result_envelope_uses_camel_case() {
        let response = ToolCallResponse {
            results: vec![ToolResult {
                tool_call_id: "a1".to_string(),
                result: ToolOutcome::cancelled("evt123"),
            }],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["results"][0]["toolCallId"], "a1");
        assert_eq!(value["results"][0]["result"]["ok"], true);
    }
}
