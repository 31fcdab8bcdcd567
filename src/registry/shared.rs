// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A shared, process-wide registry handle.
//!
//! Each screen of the original mock re-seeds its own device list, so no two
//! tabs agree on the state of the home. [`SharedRegistry`] is the alternative:
//! one registry instance behind a writer lock, cloned into every consumer as
//! an explicit dependency-injection point. One writer mutates at a time;
//! readers aggregate over a snapshot.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::device::{Attribute, DeviceId};
use crate::error::Error;
use crate::section::Section;

use super::DeviceRegistry;

/// A cloneable handle to a single [`DeviceRegistry`] instance.
///
/// # Examples
///
/// ```
/// use domus_lib::SharedRegistry;
///
/// let home = SharedRegistry::new(domus_lib::seed::sample_home());
/// let for_other_screen = home.clone();
///
/// let snapshot = home.snapshot();
/// assert_eq!(snapshot.len(), for_other_screen.snapshot().len());
/// ```
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<DeviceRegistry>>,
}

impl SharedRegistry {
    /// Wraps a registry in a shared handle.
    #[must_use]
    pub fn new(registry: DeviceRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Runs a closure with read access to the registry.
    pub fn read<T>(&self, f: impl FnOnce(&DeviceRegistry) -> T) -> T {
        f(&self.inner.read())
    }

    /// Runs a closure with exclusive write access to the registry.
    pub fn write<T>(&self, f: impl FnOnce(&mut DeviceRegistry) -> T) -> T {
        f(&mut self.inner.write())
    }

    /// Clones the current sections for aggregation.
    ///
    /// Aggregators are pure functions over a snapshot; cloning decouples
    /// them from the lock.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Section> {
        self.inner.read().sections().to_vec()
    }

    /// Flips the on/off flag of a device. See [`DeviceRegistry::toggle`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if the device does not exist.
    pub fn toggle(&self, id: DeviceId) -> Result<bool, Error> {
        self.inner.write().toggle(id)
    }

    /// Writes an attribute on a device. See [`DeviceRegistry::set_attribute`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] or [`Error::AttributeNotSupported`].
    pub fn set_attribute(&self, id: DeviceId, attribute: Attribute) -> Result<(), Error> {
        self.inner.write().set_attribute(id, attribute)
    }
}

impl From<DeviceRegistry> for SharedRegistry {
    fn from(registry: DeviceRegistry) -> Self {
        Self::new(registry)
    }
}
