// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for simulated device attributes.
//!
//! This module provides type-safe representations of the attribute values
//! devices carry. Each type ensures values are within their valid domain at
//! construction time, preventing out-of-range state from ever entering the
//! registry.
//!
//! # Types
//!
//! - [`Brightness`] - Light brightness (0-100%)
//! - [`Volume`] - Audio volume (0-100%)
//! - [`Moisture`] - Soil moisture for sprinkler zones (0-100%)
//! - [`Temperature`] - Temperature in °C, bound to a [`TemperatureClass`]
//! - [`ClimateMode`] - Thermostat operating mode (Auto/Cool/Heat/Fan)

mod brightness;
mod climate_mode;
mod moisture;
mod temperature;
mod volume;

pub use brightness::Brightness;
pub use climate_mode::ClimateMode;
pub use moisture::Moisture;
pub use temperature::{Temperature, TemperatureClass};
pub use volume::Volume;
