use std::collections::HashMap;

use crate::maze::Coord;

/// Ordered cells from start to goal inclusive. Empty means no path was found.
pub type Path = Vec<Coord>;

/// For each reached cell, the cell it was reached from.
pub type Predecessors = HashMap<Coord, Coord>;

/// Walks `predecessors` back from `goal` and returns the route from `start` to `goal`.
///
/// Returns an empty path when the walk does not end at `start`, i.e. the goal was never reached.
pub fn reconstruct_path(predecessors: &Predecessors, start: Coord, goal: Coord) -> Path {
    let mut path = Vec::new();
    let mut node = goal;
    while let Some(&parent) = predecessors.get(&node) {
        path.push(node);
        // More steps than entries means the map has a cycle
        if path.len() > predecessors.len() {
            return Vec::new();
        }
        node = parent;
    }

    if node != start {
        return Vec::new();
    }
    path.push(start);
    path.reverse();
    path
}
