// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The notification list manager.

use tracing::debug;

use super::{NotificationId, NotificationItem, NotificationType};

/// Flat, mutable list of notifications.
///
/// Mutations that reference an identifier no longer in the list are no-ops
/// reported through the `bool` return value; they never fault, so a stale
/// swipe action on an already-cleared list is harmless.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationCenter {
    items: Vec<NotificationItem>,
}

impl NotificationCenter {
    /// Creates a center from a seed list.
    #[must_use]
    pub fn new(items: Vec<NotificationItem>) -> Self {
        Self { items }
    }

    /// Creates an empty center.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns all notifications, newest first as seeded.
    #[must_use]
    pub fn items(&self) -> &[NotificationItem] {
        &self.items
    }

    /// Returns the number of notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of unread notifications.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read()).count()
    }

    /// Appends a notification to the list.
    pub fn push(&mut self, item: NotificationItem) {
        self.items.push(item);
    }

    /// Removes the notification with the given id.
    ///
    /// Returns `false` (no-op) if the id is not present.
    pub fn delete(&mut self, id: NotificationId) -> bool {
        let Some(index) = self.items.iter().position(|n| n.id() == id) else {
            debug!(%id, "delete targeted an unknown notification");
            return false;
        };
        self.items.remove(index);
        true
    }

    /// Flips the read flag of the notification with the given id.
    ///
    /// Returns `false` (no-op) if the id is not present.
    pub fn toggle_read(&mut self, id: NotificationId) -> bool {
        let Some(item) = self.items.iter_mut().find(|n| n.id() == id) else {
            debug!(%id, "toggle_read targeted an unknown notification");
            return false;
        };
        item.flip_read();
        true
    }

    /// Marks every notification as read.
    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.mark_read();
        }
    }

    /// Removes every notification. Irreversible; any confirmation dialog is
    /// the caller's responsibility, this method executes unconditionally.
    pub fn clear_all(&mut self) {
        debug!(cleared = self.items.len(), "clearing all notifications");
        self.items.clear();
    }

    /// Notifications matching an optional type filter.
    ///
    /// `None` means unfiltered.
    #[must_use]
    pub fn filtered(&self, filter: Option<NotificationType>) -> Vec<&NotificationItem> {
        self.items
            .iter()
            .filter(|n| filter.is_none_or(|kind| n.kind() == kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Priority;

    fn center() -> NotificationCenter {
        NotificationCenter::new(vec![
            NotificationItem::new(
                "Security Alert",
                "The front door was left open.",
                "2 minutes ago",
                NotificationType::Security,
                Priority::High,
            ),
            NotificationItem::new(
                "Energy Saving",
                "Living room lights have been on for 2 hours.",
                "15 minutes ago",
                NotificationType::Energy,
                Priority::Medium,
            ),
            NotificationItem::new(
                "Device Update",
                "A new update is available for the smart thermostat.",
                "3 hours ago",
                NotificationType::System,
                Priority::Low,
            )
            .with_read(true),
        ])
    }

    #[test]
    fn unread_count_ignores_read_items() {
        assert_eq!(center().unread_count(), 2);
    }

    #[test]
    fn delete_removes_matching_item() {
        let mut center = center();
        let id = center.items()[1].id();

        assert!(center.delete(id));
        assert_eq!(center.len(), 2);
        assert!(center.items().iter().all(|n| n.id() != id));
    }

    #[test]
    fn delete_unknown_is_noop() {
        let mut center = center();
        assert!(!center.delete(NotificationId::new()));
        assert_eq!(center.len(), 3);
    }

    #[test]
    fn toggle_read_flips_both_ways() {
        let mut center = center();
        let id = center.items()[0].id();

        assert!(center.toggle_read(id));
        assert!(center.items()[0].is_read());

        assert!(center.toggle_read(id));
        assert!(!center.items()[0].is_read());
    }

    #[test]
    fn mark_all_read_zeroes_unread_count() {
        let mut center = center();
        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);

        // Idempotent
        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);
    }

    #[test]
    fn clear_all_empties_the_list() {
        let mut center = center();
        let former_id = center.items()[0].id();

        center.clear_all();

        assert!(center.is_empty());
        assert_eq!(center.unread_count(), 0);

        // Former ids are no-ops, not faults
        assert!(!center.delete(former_id));
        assert!(!center.toggle_read(former_id));
    }

    #[test]
    fn filter_by_type() {
        let center = center();

        assert_eq!(center.filtered(None).len(), 3);

        let security = center.filtered(Some(NotificationType::Security));
        assert_eq!(security.len(), 1);
        assert_eq!(security[0].title(), "Security Alert");

        let temperature = center.filtered(Some(NotificationType::Temperature));
        assert!(temperature.is_empty());
    }

    #[test]
    fn push_appends() {
        let mut center = NotificationCenter::empty();
        center.push(NotificationItem::new(
            "T",
            "M",
            "now",
            NotificationType::System,
            Priority::Low,
        ));
        assert_eq!(center.len(), 1);
    }
}
