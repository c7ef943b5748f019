//! Shared library for the appointment webhook service.
//!
//! This crate provides configuration, error types, the voice-platform wire
//! models, and the Google Calendar client used by the webhook binary.

pub mod auth;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod tools;

pub use auth::verify_shared_secret;
pub use calendar::CalendarClient;
pub use config::Config;
pub use error::{Error, Result};
pub use models::{
    FunctionCall, ToolCall, ToolCallMessage, ToolCallPayload, ToolCallResponse, ToolOutcome,
    ToolResult,
};
pub use tools::{run_tool_calls, ToolKind};
