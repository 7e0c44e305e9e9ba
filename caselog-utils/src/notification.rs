// caselog notification types
//
// Status messages surfaced to the user after an operation. The client
// shows at most one at a time (last write wins).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual notification style determining color and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationStyle {
    /// Error notification (red, ✗ icon)
    Error,
    /// Success notification (green, ✓ icon)
    Success,
    /// Warning notification (yellow, ⚠ icon)
    Warning,
}

impl NotificationStyle {
    /// Get ANSI color code for this style
    pub fn color_code(&self) -> &'static str {
        match self {
            NotificationStyle::Error => "\x1b[31m",   // Red
            NotificationStyle::Success => "\x1b[32m", // Green
            NotificationStyle::Warning => "\x1b[33m", // Yellow
        }
    }

    /// Get icon character for this style
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationStyle::Error => "✗",
            NotificationStyle::Success => "✓",
            NotificationStyle::Warning => "⚠",
        }
    }
}

impl fmt::Display for NotificationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationStyle::Error => write!(f, "error"),
            NotificationStyle::Success => write!(f, "success"),
            NotificationStyle::Warning => write!(f, "warning"),
        }
    }
}

/// Status message with style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub style: NotificationStyle,
    pub message: String,
}

impl Notification {
    pub fn new(style: NotificationStyle, message: String) -> Self {
        Self { style, message }
    }

    /// Create error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationStyle::Error, message.into())
    }

    /// Create success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationStyle::Success, message.into())
    }

    /// Create warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationStyle::Warning, message.into())
    }
}
