// SPDX-License-Identifier: MPL-2.0
//! Notification kinds and the content each kind maps to.

use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::str::FromStr;

/// Which of the two popups is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationKind {
    /// Data was stored (green, check mark).
    #[default]
    Success,
    /// Data was removed (red, cross).
    Error,
}

impl NotificationKind {
    /// All kinds, in display order.
    pub const ALL: [NotificationKind; 2] = [NotificationKind::Success, NotificationKind::Error];

    /// Returns the content the popup renders for this kind.
    #[must_use]
    pub fn content(self) -> NotificationContent {
        match self {
            NotificationKind::Success => NotificationContent {
                message_key: "notification-success-default",
                icon: '\u{2713}', // ✓
                accent: palette::SUCCESS_500,
                text: palette::SUCCESS_800,
                timer: palette::SUCCESS_400,
            },
            NotificationKind::Error => NotificationContent {
                message_key: "notification-error-default",
                icon: '\u{2715}', // ✕
                accent: palette::ERROR_500,
                text: palette::ERROR_800,
                timer: palette::ERROR_400,
            },
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(NotificationKind::Success),
            "error" => Ok(NotificationKind::Error),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

/// Read-only visual content derived from a [`NotificationKind`].
///
/// Recomputed on every render; nothing here is stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotificationContent {
    /// i18n key of the default message for the kind.
    pub message_key: &'static str,
    /// Glyph drawn inside the round badge.
    pub icon: char,
    /// Badge fill.
    pub accent: Color,
    /// Message text color.
    pub text: Color,
    /// Countdown bar fill.
    pub timer: Color,
}

impl NotificationContent {
    /// Picks the message to display: an explicit override always wins over
    /// the kind's default, which is resolved through `translate`.
    pub fn message<F>(&self, override_message: Option<&str>, translate: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        match override_message {
            Some(message) => message.to_string(),
            None => translate(self.message_key),
        }
    }
}
