use crate::grid::{Cell, Direction};
use crate::region::{Partition, Region};

/// One unit of fence: the face of `cell` looking towards `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub cell: Cell,
    pub direction: Direction,
}

impl Edge {
    pub fn new(cell: Cell, direction: Direction) -> Self {
        Self { cell, direction }
    }
}

/// Every exposed face of `region`: faces looking off the map or into a plot
/// owned by another region. The number of edges is the region's perimeter.
pub fn exposed_edges(partition: &Partition, region: &Region) -> Vec<Edge> {
    let bounds = partition.bounds();

    region
        .plots()
        .iter()
        .flat_map(|&cell| {
            Direction::ALL
                .into_iter()
                .filter(move |&direction| {
                    bounds
                        .step(cell, direction)
                        .and_then(|neighbor| partition.owner(neighbor))
                        != Some(region.id())
                })
                .map(move |direction| Edge::new(cell, direction))
        })
        .collect()
}
