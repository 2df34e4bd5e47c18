//! Complete distance graph over room centers and its minimum spanning tree.

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use super::room::Room;

/// Undirected connection between two rooms, indexed by placement order.
///
/// `from` is the later-placed room; corridors are carved from `from`'s
/// center toward `to`'s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    /// Squared Euclidean distance between the two centers.
    pub distance_squared: i64,
}

impl Edge {
    /// Euclidean distance between the two centers.
    pub fn weight(&self) -> f64 {
        (self.distance_squared as f64).sqrt()
    }
}

/// Kruskal selection over the complete graph of `rooms`.
///
/// Edges are enumerated as `(j, i)` for every `i < j` in placement order and
/// stably sorted by weight, so equal weights keep enumeration order. The
/// result lists accepted edges in acceptance order: `rooms.len() - 1` of
/// them, or none for fewer than two rooms.
pub fn build_mst(rooms: &[Room]) -> Vec<Edge> {
    let mut candidates = complete_graph(rooms);
    candidates.sort_by_key(|edge| edge.distance_squared);

    let target = rooms.len().saturating_sub(1);
    let mut components = DisjointSet::new(rooms.len());
    let mut tree = Vec::with_capacity(target);
    for edge in candidates {
        if tree.len() == target {
            break;
        }
        if components.union(edge.from, edge.to) {
            debug!("spanning edge {} -> {} (weight {:.2})", edge.from, edge.to, edge.weight());
            tree.push(edge);
        }
    }
    tree
}

fn complete_graph(rooms: &[Room]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(rooms.len() * rooms.len().saturating_sub(1) / 2);
    for (newer, newer_room) in rooms.iter().enumerate() {
        for (older, older_room) in rooms[..newer].iter().enumerate() {
            edges.push(Edge {
                from: newer,
                to: older,
                distance_squared: newer_room.center_distance_squared(older_room),
            });
        }
    }
    edges
}

/// Union-find with path halving and union by rank.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self { parent: (0..size).collect(), rank: vec![0; size] }
    }

    fn root_of(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    /// Merges the two components; `false` if they were already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.root_of(a);
        let root_b = self.root_of(b);
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            Ordering::Less => self.parent[root_a] = root_b,
            Ordering::Greater => self.parent[root_b] = root_a,
            Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_centered_at(x: i32, y: i32) -> Room {
        // 5x5 room: center is the corner plus two.
        Room::new(x - 2, y - 2, 5, 5)
    }

    fn is_spanning_tree(node_count: usize, edges: &[Edge]) -> bool {
        let mut components = DisjointSet::new(node_count);
        edges.len() == node_count.saturating_sub(1)
            && edges.iter().all(|edge| components.union(edge.from, edge.to))
    }

    #[test]
    fn fewer_than_two_rooms_yield_no_edges() {
        assert!(build_mst(&[]).is_empty());
        assert!(build_mst(&[room_centered_at(5, 5)]).is_empty());
    }

    #[test]
    fn picks_the_shortest_links_on_a_line() {
        let rooms = [room_centered_at(2, 2), room_centered_at(30, 2), room_centered_at(10, 2)];
        let tree = build_mst(&rooms);

        assert_eq!(
            tree,
            vec![
                Edge { from: 2, to: 0, distance_squared: 64 },
                Edge { from: 2, to: 1, distance_squared: 400 },
            ]
        );
    }

    #[test]
    fn equal_weights_resolve_in_enumeration_order() {
        // Square: four sides of length 10, diagonals longer.
        let rooms = [
            room_centered_at(2, 2),
            room_centered_at(12, 2),
            room_centered_at(12, 12),
            room_centered_at(2, 12),
        ];
        let tree = build_mst(&rooms);

        let pairs: Vec<(usize, usize)> = tree.iter().map(|edge| (edge.from, edge.to)).collect();
        assert_eq!(pairs, vec![(1, 0), (2, 1), (3, 0)]);
    }

    #[test]
    fn total_weight_is_minimal_for_small_layout() {
        let rooms = [
            room_centered_at(3, 3),
            room_centered_at(40, 5),
            room_centered_at(8, 20),
            room_centered_at(35, 22),
            room_centered_at(20, 12),
        ];
        let tree = build_mst(&rooms);
        assert!(is_spanning_tree(rooms.len(), &tree));

        let best: f64 = tree.iter().map(Edge::weight).sum();
        let all = complete_graph(&rooms);
        // Brute force over every 4-edge subset of the 10 candidates.
        for mask in 0_u32..(1 << all.len()) {
            if mask.count_ones() != 4 {
                continue;
            }
            let subset: Vec<Edge> =
                (0..all.len()).filter(|bit| mask & (1 << bit) != 0).map(|bit| all[bit]).collect();
            if is_spanning_tree(rooms.len(), &subset) {
                let weight: f64 = subset.iter().map(Edge::weight).sum();
                assert!(best <= weight + 1e-9, "found lighter tree {subset:?}");
            }
        }
    }

    #[test]
    fn weight_is_euclidean_distance() {
        let edge = Edge { from: 1, to: 0, distance_squared: 25 };
        assert!((edge.weight() - 5.0).abs() < f64::EPSILON);
    }
}
