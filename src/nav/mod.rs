// SPDX-FileCopyrightText: 2026 Storyloom contributors
// SPDX-License-Identifier: MIT

//! Directional nearest-neighbor selection between diagram nodes.
//!
//! Pure ranking over node snapshots; `Store::navigate_diagram` owns the
//! selection side effects.

use crate::model::{Node, NodeId, Position};

/// A 2D direction vector, as handed in by keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    pub x: f64,
    pub y: f64,
}

impl Direction {
    pub const LEFT: Self = Self { x: -1.0, y: 0.0 };
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };
    pub const UP: Self = Self { x: 0.0, y: -1.0 };
    pub const DOWN: Self = Self { x: 0.0, y: 1.0 };
}

/// Pick the next node to select when navigating from `current_id` along
/// `direction`.
///
/// Candidates are all nodes except the current one, compared by id. Each
/// candidate is scored by the projection `(candidate.x - current.x) * direction.x`;
/// the candidate with the minimum projection wins. Only the x axis
/// participates: a pure vertical direction scores every candidate 0, so the
/// ordering degenerates to the engine-reported candidate order. Ties keep
/// engine-reported order (stable sort).
pub fn next_node(
    current_id: &NodeId,
    current_position: Position,
    direction: Direction,
    nodes: &[Node],
) -> Option<NodeId> {
    let mut candidates: Vec<&Node> = nodes.iter().filter(|n| n.id() != current_id).collect();

    candidates.sort_by(|a, b| {
        let projection_a = (a.position().x - current_position.x) * direction.x;
        let projection_b = (b.position().x - current_position.x) * direction.x;
        // -0.0 must compare equal to 0.0 here, or a vertical direction would
        // order left-of-current candidates ahead of the rest instead of
        // keeping the engine-reported order. Incomparable values also rank
        // equal, keeping the sort a no-op for them.
        projection_a
            .partial_cmp(&projection_b)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    candidates.first().map(|n| n.id().clone())
}

#[cfg(test)]
mod tests {
    use super::{next_node, Direction};
    use crate::model::{Node, NodeId, NodeTemplate, Position};

    fn node_at(serial: u64, x: f64, y: f64) -> Node {
        let mut node = Node::from_template(serial, &NodeTemplate::new("N", "test"));
        node.set_position(Position::new(x, y));
        node
    }

    #[test]
    fn empty_candidate_set_yields_none() {
        let nodes = vec![node_at(1, 5.0, 0.0)];
        let picked = next_node(
            nodes[0].id(),
            nodes[0].position(),
            Direction::RIGHT,
            &nodes,
        );
        assert_eq!(picked, None);
    }

    #[test]
    fn rightward_direction_picks_minimum_projection() {
        // From x=5 with candidates at x=3 and x=8: projections are -2 and 3,
        // ascending sort puts x=3 first. The literal contract, not intuition.
        let nodes = vec![node_at(1, 5.0, 0.0), node_at(2, 3.0, 0.0), node_at(3, 8.0, 0.0)];
        let picked = next_node(
            nodes[0].id(),
            nodes[0].position(),
            Direction::RIGHT,
            &nodes,
        );
        assert_eq!(picked, Some(NodeId::from_serial(2)));
    }

    #[test]
    fn leftward_direction_negates_projections() {
        // Same layout, direction x=-1: projections flip to 2 and -3, so the
        // x=8 candidate now sorts first.
        let nodes = vec![node_at(1, 5.0, 0.0), node_at(2, 3.0, 0.0), node_at(3, 8.0, 0.0)];
        let picked = next_node(nodes[0].id(), nodes[0].position(), Direction::LEFT, &nodes);
        assert_eq!(picked, Some(NodeId::from_serial(3)));
    }

    #[test]
    fn vertical_direction_degenerates_to_candidate_order() {
        // x component is 0, every projection is 0; stable sort preserves the
        // engine-reported order, so the first candidate wins regardless of y.
        let nodes = vec![node_at(1, 5.0, 5.0), node_at(2, 9.0, -20.0), node_at(3, 1.0, 40.0)];
        let picked = next_node(nodes[0].id(), nodes[0].position(), Direction::DOWN, &nodes);
        assert_eq!(picked, Some(NodeId::from_serial(2)));

        let picked = next_node(nodes[0].id(), nodes[0].position(), Direction::UP, &nodes);
        assert_eq!(picked, Some(NodeId::from_serial(2)));
    }

    #[test]
    fn vertical_direction_ignores_signed_zero_projections() {
        // With direction.x == 0, a candidate left of the current node scores
        // -0.0 and one to the right scores +0.0. Those must rank equal, so
        // the first-enumerated candidate still wins.
        let nodes = vec![node_at(1, 5.0, 0.0), node_at(2, 9.0, 0.0), node_at(3, 1.0, 0.0)];
        let picked = next_node(nodes[0].id(), nodes[0].position(), Direction::DOWN, &nodes);
        assert_eq!(picked, Some(NodeId::from_serial(2)));
    }

    #[test]
    fn equal_projections_keep_engine_order() {
        let nodes = vec![node_at(1, 5.0, 0.0), node_at(2, 7.0, 10.0), node_at(3, 7.0, -10.0)];
        let picked = next_node(
            nodes[0].id(),
            nodes[0].position(),
            Direction::RIGHT,
            &nodes,
        );
        assert_eq!(picked, Some(NodeId::from_serial(2)));
    }

    #[test]
    fn exclusion_compares_by_id_not_position() {
        // A candidate sitting exactly on the current node's position is still
        // a distinct node and must stay in the candidate set.
        let nodes = vec![node_at(1, 5.0, 0.0), node_at(2, 5.0, 0.0)];
        let picked = next_node(
            nodes[0].id(),
            nodes[0].position(),
            Direction::RIGHT,
            &nodes,
        );
        assert_eq!(picked, Some(NodeId::from_serial(2)));
    }
}
