// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing for draggable markers

use kurbo::Point;

use super::scene::marker_label_box;
use crate::model::{MarkerId, Strategy};
use crate::theme::size;

/// Extra slack around the marker circle, in surface pixels
pub const CLICK_SLOP: f64 = 2.0;

/// Marker under `pos`, if any
///
/// Markers painted later sit on top, so they are tested first. A marker is
/// grabbed by its circle or by its name label.
pub fn marker_at(strategy: &Strategy, pos: Point) -> Option<MarkerId> {
    let reach = size::MARKER_RADIUS + CLICK_SLOP;
    strategy
        .fielders
        .iter()
        .rev()
        .find(|marker| {
            marker.position.distance(pos) <= reach
                || marker_label_box(marker.position).contains(pos)
        })
        .map(|marker| marker.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_circle_and_label() {
        let strategy = Strategy::default();
        let slip = &strategy.fielders[0];
        assert_eq!(marker_at(&strategy, slip.position), Some(slip.id));
        assert_eq!(
            marker_at(&strategy, slip.position + (9.0, 0.0)),
            Some(slip.id)
        );
        assert_eq!(
            marker_at(&strategy, slip.position + (0.0, 14.0)),
            Some(slip.id)
        );
    }

    #[test]
    fn empty_grass_is_a_miss() {
        let strategy = Strategy::default();
        assert_eq!(marker_at(&strategy, Point::new(405.0, 405.0)), None);
        assert_eq!(marker_at(&strategy, Point::new(-100.0, -100.0)), None);
    }

    #[test]
    fn topmost_marker_wins() {
        let mut strategy = Strategy::default();
        let shared = Point::new(200.0, 200.0);
        strategy.fielders[2].position = shared;
        strategy.fielders[5].position = shared;
        assert_eq!(marker_at(&strategy, shared), Some(strategy.fielders[5].id));
    }

    #[test]
    fn markers_outside_the_field_are_still_grabbable() {
        let mut strategy = Strategy::default();
        strategy.fielders[8].position = Point::new(-30.0, 900.0);
        assert_eq!(
            marker_at(&strategy, Point::new(-30.0, 900.0)),
            Some(strategy.fielders[8].id)
        );
    }
}
