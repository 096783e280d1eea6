use std::collections::HashMap;

use itertools::Itertools;
use petgraph::unionfind::UnionFind;

use crate::boundary::Edge;
use crate::grid::{Cell, Direction};

/// A maximal straight run of fence facing one way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    direction: Direction,
    edges: Vec<Edge>,
}

impl Side {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Edges ordered along the run.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Merges a region's exposed edges into sides.
///
/// Edges are grouped by the way they face. Inside a group, an edge joins the
/// edge of the next member cell along the tangent, if that cell has one. Both
/// cells belong to the region, so diagonal contact never links two runs.
pub fn collect_sides(edges: &[Edge]) -> Vec<Side> {
    let mut groups = edges
        .iter()
        .copied()
        .into_group_map_by(|edge| edge.direction);

    Direction::ALL
        .into_iter()
        .filter_map(|direction| groups.remove(&direction).map(|group| (direction, group)))
        .flat_map(|(direction, group)| runs_facing(direction, group))
        .collect()
}

pub fn count_sides(edges: &[Edge]) -> usize {
    collect_sides(edges).len()
}

fn runs_facing(direction: Direction, group: Vec<Edge>) -> Vec<Side> {
    let slots: HashMap<Cell, usize> = group
        .iter()
        .enumerate()
        .map(|(slot, edge)| (edge.cell, slot))
        .collect();

    let tangent = direction.tangent();
    let mut runs = UnionFind::<usize>::new(group.len());

    for (slot, edge) in group.iter().enumerate() {
        let next = edge.cell.step(tangent).and_then(|cell| slots.get(&cell));
        if let Some(&next_slot) = next {
            runs.union(slot, next_slot);
        }
    }

    let labels = runs.into_labeling();

    group
        .into_iter()
        .zip(labels)
        .into_group_map_by(|&(_, label)| label)
        .into_values()
        .map(|members| {
            let mut edges: Vec<Edge> = members.into_iter().map(|(edge, _)| edge).collect();
            edges.sort_unstable_by_key(|edge| (edge.cell.y, edge.cell.x));
            Side { direction, edges }
        })
        .sorted_unstable_by_key(|side| side.edges.first().map(|edge| (edge.cell.y, edge.cell.x)))
        .collect()
}
