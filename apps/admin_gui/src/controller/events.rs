//! Backend-to-UI events and error modeling for the admin GUI.

use client_core::{EditBuffer, EmployeeRow, Notification, UiMode};
use tokio::sync::oneshot;

pub enum UiEvent {
    Info(String),
    RowsRendered(Vec<EmployeeRow>),
    ModeChanged {
        mode: UiMode,
        buffer: EditBuffer,
    },
    Notify(Notification),
    ConfirmRequested {
        prompt: String,
        reply: oneshot::Sender<bool>,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Configuration,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    General,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid server url")
            || message_lower.contains("config")
        {
            UiErrorCategory::Configuration
        } else if message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("disconnected")
            || message_lower.contains("unreachable")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Network",
        UiErrorCategory::Configuration => "Configuration",
        UiErrorCategory::Unknown => "Unexpected",
    }
}
