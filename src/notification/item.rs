// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Notification items and their category/priority enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValueError;

/// Unique identifier for a notification item.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Creates a new unique notification identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = &self.0.to_string()[..8];
        write!(f, "NotificationId({short}...)")
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    /// Security alerts (doors, motion).
    Security,
    /// Energy-saving hints.
    Energy,
    /// Temperature warnings.
    Temperature,
    /// Device/system updates.
    System,
}

impl NotificationType {
    /// All types, in filter-chip display order.
    pub const ALL: [Self; 4] = [
        Self::Security,
        Self::Energy,
        Self::Temperature,
        Self::System,
    ];

    /// Returns the lowercase string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Energy => "energy",
            Self::Temperature => "temperature",
            Self::System => "system",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "security" => Ok(Self::Security),
            "energy" => Ok(Self::Energy),
            "temperature" => Ok(Self::Temperature),
            "system" => Ok(Self::System),
            _ => Err(ValueError::InvalidNotificationType(s.to_string())),
        }
    }
}

/// Urgency of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Informational.
    Low,
    /// Worth a look.
    Medium,
    /// Needs attention now.
    High,
}

/// A single notification.
///
/// # Examples
///
/// ```
/// use domus_lib::notification::{NotificationItem, NotificationType, Priority};
///
/// let item = NotificationItem::new(
///     "Security Alert",
///     "The front door was left open.",
///     "2 minutes ago",
///     NotificationType::Security,
///     Priority::High,
/// );
/// assert!(!item.is_read());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationItem {
    id: NotificationId,
    title: String,
    message: String,
    time: String,
    kind: NotificationType,
    is_read: bool,
    priority: Priority,
}

impl NotificationItem {
    /// Creates a new unread notification.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        time: impl Into<String>,
        kind: NotificationType,
        priority: Priority,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            title: title.into(),
            message: message.into(),
            time: time.into(),
            kind,
            is_read: false,
            priority,
        }
    }

    /// Sets the initial read flag. Intended for seeding.
    #[must_use]
    pub fn with_read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    /// Returns the stable identifier.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the relative-time display label.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the notification category.
    #[must_use]
    pub fn kind(&self) -> NotificationType {
        self.kind
    }

    /// Returns `true` if the notification has been read.
    #[must_use]
    pub fn is_read(&self) -> bool {
        self.is_read
    }

    /// Returns the priority.
    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub(crate) fn flip_read(&mut self) {
        self.is_read = !self.is_read;
    }

    pub(crate) fn mark_read(&mut self) {
        self.is_read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_unread() {
        let item = NotificationItem::new(
            "T",
            "M",
            "now",
            NotificationType::System,
            Priority::Low,
        );
        assert!(!item.is_read());
    }

    #[test]
    fn with_read_seeds_flag() {
        let item = NotificationItem::new(
            "T",
            "M",
            "now",
            NotificationType::System,
            Priority::Low,
        )
        .with_read(true);
        assert!(item.is_read());
    }

    #[test]
    fn type_from_str_round_trip() {
        for kind in NotificationType::ALL {
            assert_eq!(kind.as_str().parse::<NotificationType>().unwrap(), kind);
        }
    }

    #[test]
    fn type_from_str_invalid() {
        let result = "weather".parse::<NotificationType>();
        assert!(matches!(
            result,
            Err(ValueError::InvalidNotificationType(_))
        ));
    }

    #[test]
    fn priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }
}
