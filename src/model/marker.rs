// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Movable fielder markers and their stable identities.
//!
//! A `MarkerId` is fixed for the whole session: markers are never created or
//! destroyed after startup, only renamed and moved. Panels key their inputs
//! by id rather than by list index so a marker keeps its identity even if a
//! view presents the list in a different order.

use kurbo::Point;
use std::fmt;

/// Number of movable fielders on the field.
pub const FIELDER_COUNT: usize = 9;

/// Stable identifier for a movable marker (`fielder-1` .. `fielder-9`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(u8);

impl MarkerId {
    /// Id for the fielder in the given one-based slot, if it exists
    pub fn fielder(slot: u8) -> Option<Self> {
        (1..=FIELDER_COUNT as u8)
            .contains(&slot)
            .then_some(Self(slot))
    }

    /// One-based slot number
    pub fn slot(self) -> u8 {
        self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fielder-{}", self.0)
    }
}

/// A draggable fielder on the field diagram
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub name: String,
    /// Position in surface pixels at the time it was last set
    pub position: Point,
}

impl Marker {
    fn new(slot: u8, name: &str, x: f64, y: f64) -> Self {
        Self {
            id: MarkerId(slot),
            name: name.to_string(),
            position: Point::new(x, y),
        }
    }

    /// Name shown under the marker, falling back when the name is empty
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Fielder"
        } else {
            &self.name
        }
    }
}

/// The nine markers a new strategy starts with
pub fn default_markers() -> Vec<Marker> {
    vec![
        Marker::new(1, "Slip", 450.0, 600.0),
        Marker::new(2, "Point", 750.0, 510.0),
        Marker::new(3, "Cover", 550.0, 375.0),
        Marker::new(4, "Long Off", 550.0, 130.0),
        Marker::new(5, "Extra Cover", 700.0, 250.0),
        Marker::new(6, "Mid-Wicket", 250.0, 350.0),
        Marker::new(7, "Square Leg", 80.0, 510.0),
        Marker::new(8, "Fine Leg", 300.0, 700.0),
        Marker::new(9, "Long-On", 300.0, 130.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_nine_distinct_ids() {
        let markers = default_markers();
        assert_eq!(markers.len(), FIELDER_COUNT);
        let mut ids: Vec<MarkerId> = markers.iter().map(|m| m.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), FIELDER_COUNT);
    }

    #[test]
    fn id_displays_its_slot() {
        let id = MarkerId::fielder(7).unwrap();
        assert_eq!(id.slot(), 7);
        assert_eq!(id.to_string(), "fielder-7");
    }

    #[test]
    fn out_of_range_ids_are_rejected() {
        assert_eq!(MarkerId::fielder(0), None);
        assert_eq!(MarkerId::fielder(10), None);
    }

    #[test]
    fn empty_name_falls_back() {
        let mut marker = default_markers().remove(0);
        assert_eq!(marker.display_name(), "Slip");
        marker.name.clear();
        assert_eq!(marker.display_name(), "Fielder");
    }
}
