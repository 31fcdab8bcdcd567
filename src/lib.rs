// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Domus` Lib - a Rust library modelling the in-memory state of a
//! simulated smart home.
//!
//! The library provides three pieces:
//!
//! - **Device registry**: sections (rooms/categories) owning typed devices
//!   (lights, thermostats, speakers, doors, windows, sprinkler zones, pool,
//!   TVs, projectors, consoles), with `toggle` and clamped `set_attribute`
//!   writes.
//! - **Aggregation**: pure functions deriving summary values from a section
//!   snapshot — active counts and ratios, door/window security score and
//!   status, kind filters. Recomputed on every call, never cached.
//! - **Notifications**: a flat list manager with mark-as-read, delete,
//!   clear-all and type filters.
//!
//! Everything is synchronous and in-memory: there is no network, no
//! persistence, and no change notification. A [`SharedRegistry`] wraps one
//! registry in a writer lock for consumers that want a single process-wide
//! home state instead of per-screen copies.
//!
//! # Quick Start
//!
//! ```
//! use domus_lib::aggregate;
//!
//! let mut registry = domus_lib::seed::sample_home();
//!
//! // Toggle the first device
//! let id = registry.all_devices().next().unwrap().id();
//! registry.toggle(id)?;
//!
//! // Derived values are recomputed from the current state on every read
//! let sections = registry.sections();
//! println!(
//!     "{} of {} devices on, home is {}",
//!     aggregate::active_count(sections),
//!     aggregate::total_count(sections),
//!     aggregate::security_status(sections),
//! );
//! # Ok::<(), domus_lib::Error>(())
//! ```
//!
//! # Loading a Home From a Fixture
//!
//! ```
//! use domus_lib::seed::HomeSeed;
//!
//! let seed = HomeSeed::from_json(r#"{
//!     "sections": [{
//!         "title": "Lights",
//!         "icon": "lightbulb",
//!         "devices": [{ "name": "Lamp", "type": "light", "isOn": true }]
//!     }]
//! }"#)?;
//!
//! let registry = seed.build_registry();
//! assert_eq!(registry.device_count(), 1);
//! # Ok::<(), domus_lib::Error>(())
//! ```

pub mod aggregate;
pub mod device;
pub mod error;
pub mod notification;
pub mod registry;
mod section;
pub mod seed;
pub mod types;

pub use aggregate::SecurityStatus;
pub use device::{Attribute, Device, DeviceId, DeviceKind, DevicePayload, SectionId};
pub use error::{Error, Result, ValueError};
pub use notification::{
    NotificationCenter, NotificationId, NotificationItem, NotificationType, Priority,
};
pub use registry::{DeviceRegistry, SharedRegistry};
pub use section::Section;
pub use seed::HomeSeed;
pub use types::{Brightness, ClimateMode, Moisture, Temperature, TemperatureClass, Volume};
