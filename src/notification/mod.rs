// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Notification list management.
//!
//! Notifications live in a flat, mutable list that is independent of the
//! device registry. The [`NotificationCenter`] supports mark-as-read,
//! single deletion, and clear-all; none of these are undoable, and the
//! center never prompts for confirmation itself. That is the caller's job.
//!
//! # Examples
//!
//! ```
//! use domus_lib::notification::NotificationType;
//!
//! let mut center = domus_lib::seed::sample_notifications();
//! assert!(center.unread_count() > 0);
//!
//! center.mark_all_read();
//! assert_eq!(center.unread_count(), 0);
//!
//! let security = center.filtered(Some(NotificationType::Security));
//! assert!(security.iter().all(|n| n.kind() == NotificationType::Security));
//! ```

mod center;
mod item;

pub use center::NotificationCenter;
pub use item::{NotificationId, NotificationItem, NotificationType, Priority};
