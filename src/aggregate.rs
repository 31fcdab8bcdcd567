// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pure aggregation over section snapshots.
//!
//! Every function here is stateless and recomputed on demand: callers pass
//! the sections they care about and get a derived value back. Nothing is
//! cached and nothing is invalidated; a re-read after a mutation always
//! reflects the mutation.
//!
//! # Examples
//!
//! ```
//! use domus_lib::aggregate;
//!
//! let registry = domus_lib::seed::sample_home();
//! let sections = registry.sections();
//!
//! assert!(aggregate::active_count(sections) <= aggregate::total_count(sections));
//! let ratio = aggregate::active_ratio(sections);
//! assert!((0.0..=1.0).contains(&ratio));
//! ```

use crate::device::{Device, DeviceKind};
use crate::section::Section;

/// Number of devices that are on, across all given sections.
#[must_use]
pub fn active_count(sections: &[Section]) -> usize {
    sections
        .iter()
        .flat_map(Section::devices)
        .filter(|d| d.is_on())
        .count()
}

/// Total number of devices across all given sections.
#[must_use]
pub fn total_count(sections: &[Section]) -> usize {
    sections.iter().map(Section::len).sum()
}

/// Fraction of devices that are on, in `[0, 1]`.
///
/// Defined as `0.0` when there are no devices at all, so an empty snapshot
/// never produces a division fault or NaN.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn active_ratio(sections: &[Section]) -> f64 {
    let total = total_count(sections);
    if total == 0 {
        return 0.0;
    }
    active_count(sections) as f64 / total as f64
}

/// Number of doors/windows currently open.
#[must_use]
pub fn open_count(sections: &[Section]) -> usize {
    openings(sections).filter(|d| d.payload().is_open() == Some(true)).count()
}

/// Number of doors/windows currently closed.
#[must_use]
pub fn closed_count(sections: &[Section]) -> usize {
    openings(sections).filter(|d| d.payload().is_open() == Some(false)).count()
}

/// Number of doors/windows currently unlocked.
#[must_use]
pub fn unlocked_count(sections: &[Section]) -> usize {
    openings(sections).filter(|d| d.payload().is_locked() == Some(false)).count()
}

/// Fraction of doors/windows that are simultaneously locked and closed.
///
/// Only doors and windows participate; all other device kinds are ignored.
/// Returns `None` when the snapshot contains no doors or windows, leaving
/// the "nothing to secure" case to the caller (see [`security_status`]).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn security_score(sections: &[Section]) -> Option<f64> {
    let total = openings(sections).count();
    if total == 0 {
        return None;
    }
    let secure = openings(sections)
        .filter(|d| d.payload().is_locked() == Some(true) && d.payload().is_open() == Some(false))
        .count();
    Some(secure as f64 / total as f64)
}

/// Three-level security status derived from [`security_score`].
///
/// A snapshot with no doors or windows is reported as [`SecurityStatus::Secure`]:
/// there is nothing that could be left open or unlocked.
#[must_use]
pub fn security_status(sections: &[Section]) -> SecurityStatus {
    match security_score(sections) {
        Some(score) => SecurityStatus::from_score(score),
        None => SecurityStatus::Secure,
    }
}

/// Devices matching an optional kind filter, across all given sections.
///
/// `None` means "all", matching the nil filter chip of the original screens.
#[must_use]
pub fn filtered_by_kind<'a>(
    sections: &'a [Section],
    filter: Option<DeviceKind>,
) -> Vec<&'a Device> {
    sections
        .iter()
        .flat_map(Section::devices)
        .filter(|d| filter.is_none_or(|kind| d.kind() == kind))
        .collect()
}

fn openings<'a>(sections: &'a [Section]) -> impl Iterator<Item = &'a Device> {
    sections
        .iter()
        .flat_map(Section::devices)
        .filter(|d| d.kind().is_opening())
}

/// Overall security level of the doors/windows domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityStatus {
    /// Every door and window is locked and closed.
    Secure,
    /// Most entries are secure (score in `[0.6, 1.0)`).
    Caution,
    /// Less than 60% of entries are secure.
    AtRisk,
}

impl SecurityStatus {
    /// Maps a security score to a status level.
    ///
    /// The boundary at exactly `0.6` belongs to `Caution`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 1.0 {
            Self::Secure
        } else if score >= 0.6 {
            Self::Caution
        } else {
            Self::AtRisk
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Secure => "Secure",
            Self::Caution => "Caution",
            Self::AtRisk => "At Risk",
        }
    }
}

impl std::fmt::Display for SecurityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DevicePayload;
    use crate::types::{Brightness, Volume};

    fn door(name: &str, locked: bool, open: bool) -> Device {
        Device::new(name, DevicePayload::door(locked, open, 90))
    }

    fn window(name: &str, locked: bool, open: bool) -> Device {
        Device::new(name, DevicePayload::window(locked, open, 80))
    }

    fn mixed_sections() -> Vec<Section> {
        vec![
            Section::new(
                "Lights",
                "lightbulb",
                vec![
                    Device::new("A", DevicePayload::light(Brightness::MAX)).with_power(true),
                    Device::new("B", DevicePayload::light(Brightness::MAX)),
                ],
            ),
            Section::new(
                "Media",
                "tv",
                vec![Device::new("TV", DevicePayload::tv(Volume::MUTED, None))],
            ),
        ]
    }

    #[test]
    fn active_never_exceeds_total() {
        let sections = mixed_sections();
        assert!(active_count(&sections) <= total_count(&sections));
    }

    #[test]
    fn counts_over_mixed_sections() {
        let sections = mixed_sections();
        assert_eq!(active_count(&sections), 1);
        assert_eq!(total_count(&sections), 3);
    }

    #[test]
    fn ratio_of_empty_snapshot_is_zero() {
        assert_eq!(active_ratio(&[]), 0.0);

        let empty = vec![Section::new("Empty", "questionmark", Vec::new())];
        assert_eq!(active_ratio(&empty), 0.0);
    }

    #[test]
    fn ratio_stays_in_unit_interval() {
        let sections = mixed_sections();
        let ratio = active_ratio(&sections);
        assert!((0.0..=1.0).contains(&ratio));
        assert!((ratio - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn all_locked_and_closed_is_secure() {
        let sections = vec![Section::new(
            "Doors",
            "door.closed",
            vec![
                door("Main", true, false),
                door("Back", true, false),
                door("Garage", true, false),
            ],
        )];

        assert_eq!(security_score(&sections), Some(1.0));
        assert_eq!(security_status(&sections), SecurityStatus::Secure);
    }

    #[test]
    fn one_unlocked_of_four_is_caution() {
        let sections = vec![Section::new(
            "Windows",
            "window",
            vec![
                window("Living Room", true, false),
                window("Kitchen", true, false),
                window("Bedroom", true, false),
                window("Study", false, false),
            ],
        )];

        let score = security_score(&sections).unwrap();
        assert!((score - 0.75).abs() < 1e-9);
        assert_eq!(security_status(&sections), SecurityStatus::Caution);
    }

    #[test]
    fn locked_but_open_is_not_secure() {
        let sections = vec![Section::new(
            "Doors",
            "door.closed",
            vec![door("Main", true, true), door("Back", true, false)],
        )];

        assert_eq!(security_score(&sections), Some(0.5));
        assert_eq!(security_status(&sections), SecurityStatus::AtRisk);
    }

    #[test]
    fn boundary_at_exactly_point_six_is_caution() {
        // 3 of 5 secure = 0.6 exactly
        let sections = vec![Section::new(
            "Doors",
            "door.closed",
            vec![
                door("A", true, false),
                door("B", true, false),
                door("C", true, false),
                door("D", false, false),
                door("E", false, false),
            ],
        )];

        assert_eq!(security_status(&sections), SecurityStatus::Caution);
    }

    #[test]
    fn no_openings_means_secure() {
        let sections = mixed_sections();
        assert_eq!(security_score(&sections), None);
        assert_eq!(security_status(&sections), SecurityStatus::Secure);
    }

    #[test]
    fn non_openings_are_ignored_by_security() {
        let mut sections = mixed_sections();
        sections.push(Section::new(
            "Doors",
            "door.closed",
            vec![door("Main", true, false)],
        ));

        assert_eq!(security_score(&sections), Some(1.0));
    }

    #[test]
    fn open_closed_unlocked_counts() {
        let sections = vec![
            Section::new(
                "Doors",
                "door.closed",
                vec![door("Main", true, false), door("Back", false, true)],
            ),
            Section::new("Windows", "window", vec![window("Kitchen", false, false)]),
        ];

        assert_eq!(open_count(&sections), 1);
        assert_eq!(closed_count(&sections), 2);
        assert_eq!(unlocked_count(&sections), 2);
    }

    #[test]
    fn filter_by_kind() {
        let sections = mixed_sections();

        let all = filtered_by_kind(&sections, None);
        assert_eq!(all.len(), 3);

        let lights = filtered_by_kind(&sections, Some(DeviceKind::Light));
        assert_eq!(lights.len(), 2);

        let locks = filtered_by_kind(&sections, Some(DeviceKind::Door));
        assert!(locks.is_empty());
    }

    #[test]
    fn status_labels() {
        assert_eq!(SecurityStatus::Secure.label(), "Secure");
        assert_eq!(SecurityStatus::from_score(0.75).label(), "Caution");
        assert_eq!(SecurityStatus::from_score(0.2).to_string(), "At Risk");
    }
}
