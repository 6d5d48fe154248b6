use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::de;
use crate::formatters::parse_datetime;

/// Category of a notification; drives the icon in the dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Alert,
    #[default]
    Info,
    Success,
    Market,
}

impl NotificationKind {
    pub fn icon(&self) -> char {
        match self {
            NotificationKind::Alert => '⚠',
            NotificationKind::Info => 'ℹ',
            NotificationKind::Success => '✔',
            NotificationKind::Market => '⌂',
        }
    }
}

/// A single entry of `GET /notifications`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default, alias = "_id", deserialize_with = "de::id_string")]
    pub id: String,

    /// Unknown types fall back to [`NotificationKind::Info`].
    #[serde(default, rename = "type", deserialize_with = "de::or_default")]
    pub kind: NotificationKind,

    #[serde(default, deserialize_with = "de::null_default")]
    pub title: String,

    #[serde(default, deserialize_with = "de::null_default")]
    pub message: String,

    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default, deserialize_with = "de::null_default")]
    pub read: bool,
}

impl Notification {
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp.as_deref().and_then(parse_datetime)
    }
}

/// Envelope for `GET /notifications`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationsResponse {
    #[serde(default, deserialize_with = "de::null_default")]
    pub notifications: Vec<Notification>,
}
