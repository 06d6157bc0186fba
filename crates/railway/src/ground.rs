//! Vertical relation of a feature to the terrain, and its reduction across
//! junction neighbors.

use serde::{Deserialize, Serialize};

use crate::tags::TagStore;

/// Whether a feature sits on, above (bridge) or below (tunnel) the terrain.
/// Computed once per segment during classification, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroundState {
    On,
    Above,
    Below,
}

/// Bridge/tunnel predicates are delegated to an external classification
/// collaborator; this seam keeps their evaluation details out of the core.
pub trait StructureClassifier {
    fn is_bridge(&self, tags: &TagStore) -> bool;
    fn is_tunnel(&self, tags: &TagStore) -> bool;
}

/// Default predicate set: a `bridge`/`tunnel` key present with any value
/// other than "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct TagStructureClassifier;

impl StructureClassifier for TagStructureClassifier {
    fn is_bridge(&self, tags: &TagStore) -> bool {
        marker(tags, "bridge")
    }

    fn is_tunnel(&self, tags: &TagStore) -> bool {
        marker(tags, "tunnel")
    }
}

fn marker(tags: &TagStore, key: &str) -> bool {
    tags.value(key).is_some_and(|value| value != "no")
}

/// Bridge wins over tunnel when both predicates hold.
pub fn resolve_ground_state(
    tags: &TagStore,
    structures: &impl StructureClassifier,
) -> GroundState {
    if structures.is_bridge(tags) {
        GroundState::Above
    } else if structures.is_tunnel(tags) {
        GroundState::Below
    } else {
        GroundState::On
    }
}

/// Reduce the ground states of a junction's neighbors: all equal yields that
/// state, any mismatch falls back to `On`. An empty neighbor set is `On`.
pub fn merge_ground_states(states: impl IntoIterator<Item = GroundState>) -> GroundState {
    let mut states = states.into_iter();
    let Some(first) = states.next() else {
        return GroundState::On;
    };
    if states.all(|state| state == first) {
        first
    } else {
        GroundState::On
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> TagStore {
        TagStore::from_pairs(pairs)
    }

    #[test]
    fn test_no_marker_is_on() {
        let state = resolve_ground_state(&tags(&[("railway", "rail")]), &TagStructureClassifier);
        assert_eq!(state, GroundState::On);
    }

    #[test]
    fn test_bridge_is_above() {
        let state = resolve_ground_state(&tags(&[("bridge", "yes")]), &TagStructureClassifier);
        assert_eq!(state, GroundState::Above);
    }

    #[test]
    fn test_tunnel_is_below() {
        let state = resolve_ground_state(&tags(&[("tunnel", "yes")]), &TagStructureClassifier);
        assert_eq!(state, GroundState::Below);
    }

    #[test]
    fn test_bridge_wins_over_tunnel() {
        let state = resolve_ground_state(
            &tags(&[("bridge", "viaduct"), ("tunnel", "yes")]),
            &TagStructureClassifier,
        );
        assert_eq!(state, GroundState::Above);
    }

    #[test]
    fn test_negated_marker_is_on() {
        let state = resolve_ground_state(&tags(&[("bridge", "no")]), &TagStructureClassifier);
        assert_eq!(state, GroundState::On);
    }

    #[test]
    fn test_merge_all_equal() {
        let merged = merge_ground_states([GroundState::Above, GroundState::Above]);
        assert_eq!(merged, GroundState::Above);
    }

    #[test]
    fn test_merge_mismatch_falls_back_to_on() {
        let merged = merge_ground_states([
            GroundState::Above,
            GroundState::Below,
            GroundState::Above,
        ]);
        assert_eq!(merged, GroundState::On);
    }

    #[test]
    fn test_merge_empty_is_on() {
        assert_eq!(merge_ground_states([]), GroundState::On);
    }
}
