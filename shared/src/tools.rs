//! Tool dispatch for voice-platform tool calls.
//!
//! Each known tool translates into exactly one calendar operation. Unknown
//! tool names produce a failed result item without touching the calendar;
//! every other failure (missing arguments, provider errors) aborts the
//! remaining batch and surfaces as a request-level error.

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::calendar::CalendarClient;
use crate::models::{FunctionCall, ToolCall, ToolOutcome, ToolResult};
use crate::{Error, Result};

/// Tools this service knows how to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    CancelAppointment,
    RescheduleAppointment,
}

impl ToolKind {
    /// Resolve a tool kind from the platform's function name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cancel_appointment" => Some(ToolKind::CancelAppointment),
            "reschedule_appointment" => Some(ToolKind::RescheduleAppointment),
            _ => None,
        }
    }
}

/// Execute a batch of tool calls against the calendar, in input order.
///
/// Results are appended in order, one per call, each echoing the call's id.
pub async fn run_tool_calls(
    client: &CalendarClient,
    calendar_id: &str,
    calls: Vec<ToolCall>,
) -> Result<Vec<ToolResult>> {
    let mut results = Vec::with_capacity(calls.len());

    for call in calls {
        let FunctionCall { name, arguments } = call.function.unwrap_or_default();

        let outcome = match ToolKind::from_name(&name) {
            Some(ToolKind::CancelAppointment) => {
                cancel_appointment(client, calendar_id, &arguments).await?
            }
            Some(ToolKind::RescheduleAppointment) => {
                reschedule_appointment(client, calendar_id, &arguments).await?
            }
            None => {
                warn!("Unknown tool function: {}", name);
                ToolOutcome::failed(format!("Unknown tool function: {}", name))
            }
        };

        results.push(ToolResult {
            tool_call_id: call.id,
            result: outcome,
        });
    }

    Ok(results)
}

/// Cancel an appointment by deleting its calendar event.
async fn cancel_appointment(
    client: &CalendarClient,
    calendar_id: &str,
    args: &Map<String, Value>,
) -> Result<ToolOutcome> {
    let event_id = str_arg(args, "eventId")
        .ok_or_else(|| Error::Validation("cancel_appointment requires eventId".to_string()))?;

    client.delete_event(calendar_id, event_id).await?;
    info!("Cancelled event {}", event_id);

    Ok(ToolOutcome::cancelled(event_id))
}

/// Reschedule an appointment by moving its event boundaries.
async fn reschedule_appointment(
    client: &CalendarClient,
    calendar_id: &str,
    args: &Map<String, Value>,
) -> Result<ToolOutcome> {
    let (event_id, start, end) = match (
        str_arg(args, "eventId"),
        str_arg(args, "start"),
        str_arg(args, "end"),
    ) {
        (Some(event_id), Some(start), Some(end)) => (event_id, start, end),
        _ => {
            return Err(Error::Validation(
                "reschedule_appointment requires eventId, start, end".to_string(),
            ))
        }
    };

    let updated = client.patch_event_times(calendar_id, event_id, start, end).await?;
    info!("Rescheduled event {}", event_id);

    Ok(ToolOutcome::rescheduled(event_id, updated.html_link))
}

/// Non-empty string argument, or None.
fn str_arg<'a>(args: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}
