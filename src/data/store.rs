// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Strategy store: the single source of truth for the editable model.
//!
//! The store hands out `Arc<Strategy>` snapshots. Every mutation builds a
//! fresh strategy and swaps the `Arc`, so a snapshot a view is holding never
//! changes underneath it and views can detect edits with `Arc::ptr_eq`.

use std::sync::Arc;

use crate::model::{MarkerId, Strategy, StrategyField, default_markers};

/// Owner of the current strategy snapshot
#[derive(Debug, Clone, Default)]
pub struct StrategyStore {
    current: Arc<Strategy>,
}

impl StrategyStore {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            current: Arc::new(strategy),
        }
    }

    /// Current snapshot
    pub fn get(&self) -> Arc<Strategy> {
        Arc::clone(&self.current)
    }

    /// Replace one scalar attribute
    pub fn set_field(&mut self, field: StrategyField) -> Arc<Strategy> {
        tracing::debug!("set_field {:?}", field);
        self.replace(|strategy| field.apply(strategy))
    }

    /// Move a marker. Unknown ids leave the strategy untouched.
    pub fn set_marker_position(&mut self, id: MarkerId, x: f64, y: f64) -> Arc<Strategy> {
        let Some(index) = self.index_of(id) else {
            tracing::debug!("set_marker_position: unknown marker {}", id);
            return self.get();
        };
        tracing::debug!("marker {} moved to ({:.1}, {:.1})", id, x, y);
        self.replace(|strategy| {
            let marker = &mut strategy.fielders[index];
            marker.position.x = x;
            marker.position.y = y;
        })
    }

    /// Rename a marker. Unknown ids leave the strategy untouched.
    pub fn set_marker_name(&mut self, id: MarkerId, name: impl Into<String>) -> Arc<Strategy> {
        let Some(index) = self.index_of(id) else {
            tracing::debug!("set_marker_name: unknown marker {}", id);
            return self.get();
        };
        let name = name.into();
        self.replace(|strategy| strategy.fielders[index].name = name)
    }

    /// Restore the default markers, keeping every scalar field
    pub fn reset_markers(&mut self) -> Arc<Strategy> {
        tracing::info!("Resetting fielders to default positions");
        self.replace(|strategy| strategy.fielders = default_markers())
    }

    fn index_of(&self, id: MarkerId) -> Option<usize> {
        self.current.fielders.iter().position(|m| m.id == id)
    }

    fn replace(&mut self, edit: impl FnOnce(&mut Strategy)) -> Arc<Strategy> {
        let mut next = (*self.current).clone();
        edit(&mut next);
        self.current = Arc::new(next);
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MatchFormat, Strategy};
    use std::num::NonZeroU32;

    fn id(slot: u8) -> MarkerId {
        MarkerId::fielder(slot).unwrap()
    }

    #[test]
    fn set_field_is_visible_on_next_read() {
        let mut store = StrategyStore::default();
        store.set_field(StrategyField::TeamName("Delhi Capitals".into()));
        assert_eq!(store.get().team_name, "Delhi Capitals");
    }

    #[test]
    fn snapshots_are_immutable() {
        let mut store = StrategyStore::default();
        let before = store.get();
        let after = store.set_field(StrategyField::PlacementName("Death overs".into()));

        assert_eq!(before.placement_name, "My Cricket Strategy");
        assert_eq!(after.placement_name, "Death overs");
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn moving_one_marker_leaves_the_rest_alone() {
        let mut store = StrategyStore::default();
        let before = store.get();
        let after = store.set_marker_position(id(3), 12.5, -40.0);

        for (old, new) in before.fielders.iter().zip(after.fielders.iter()) {
            assert_eq!(old.id, new.id);
            assert_eq!(old.name, new.name);
            if new.id == id(3) {
                assert_eq!((new.position.x, new.position.y), (12.5, -40.0));
            } else {
                assert_eq!(old.position, new.position);
            }
        }

        let mut expected = (*before).clone();
        expected.fielders = after.fielders.clone();
        assert_eq!(*after, expected);
    }

    #[test]
    fn setting_same_position_twice_is_stable() {
        let mut store = StrategyStore::default();
        let once = store.set_marker_position(id(1), 100.0, 200.0);
        let twice = store.set_marker_position(id(1), 100.0, 200.0);
        assert_eq!(*once, *twice);
    }

    #[test]
    fn positions_outside_the_field_are_accepted() {
        let mut store = StrategyStore::default();
        let strategy = store.set_marker_position(id(9), -500.0, 5000.0);
        let marker = strategy.fielder(id(9)).unwrap();
        assert_eq!((marker.position.x, marker.position.y), (-500.0, 5000.0));
    }

    #[test]
    fn rename_by_id() {
        let mut store = StrategyStore::default();
        let strategy = store.set_marker_name(id(2), "Gully");
        assert_eq!(strategy.fielder(id(2)).unwrap().name, "Gully");
        assert_eq!(strategy.fielder(id(1)).unwrap().name, "Slip");
    }

    #[test]
    fn reset_restores_defaults_and_keeps_fields() {
        let mut store = StrategyStore::default();
        store.set_field(StrategyField::TeamName("Mumbai".into()));
        store.set_field(StrategyField::MatchFormat(MatchFormat::Custom));
        store.set_field(StrategyField::CustomOvers(NonZeroU32::new(10)));
        for slot in 1..=9 {
            store.set_marker_position(id(slot), 1.0, 2.0);
            store.set_marker_name(id(slot), "renamed");
        }

        let strategy = store.reset_markers();
        assert_eq!(strategy.fielders, default_markers());
        assert_eq!(strategy.team_name, "Mumbai");
        assert_eq!(strategy.match_format, MatchFormat::Custom);
        assert_eq!(strategy.custom_overs, NonZeroU32::new(10));
    }

    #[test]
    fn custom_then_test_match_clears_overs() {
        let mut store = StrategyStore::default();
        store.set_field(StrategyField::MatchFormat(MatchFormat::Custom));
        store.set_field(StrategyField::CustomOvers(NonZeroU32::new(25)));
        let strategy = store.set_field(StrategyField::MatchFormat(MatchFormat::Test));
        assert_eq!(strategy.match_format.label(), "Test Match");
        assert_eq!(strategy.custom_overs, None);
    }

    #[test]
    fn unknown_marker_is_a_no_op() {
        let mut strategy = Strategy::default();
        strategy.fielders.retain(|m| m.id != id(9));
        let mut store = StrategyStore::new(strategy);
        let before = store.get();

        let moved = store.set_marker_position(id(9), 1.0, 1.0);
        let renamed = store.set_marker_name(id(9), "ghost");
        assert!(Arc::ptr_eq(&before, &moved));
        assert!(Arc::ptr_eq(&before, &renamed));
    }

    #[test]
    fn store_starts_from_the_given_strategy() {
        let mut strategy = Strategy::default();
        strategy.bowler_name = "Jasprit Bumrah".into();
        let store = StrategyStore::new(strategy);
        assert_eq!(store.get().bowler_display_name(), "Jasprit Bumrah");
    }
}
