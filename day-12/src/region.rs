use tracing::{debug, trace};

use crate::grid::{Bounds, Cell, Direction, Map};

/// Index of a region in discovery order.
pub type RegionId = usize;

/// A maximal 4-connected group of plots sharing one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    id: RegionId,
    label: char,
    plots: Vec<Cell>,
}

impl Region {
    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn label(&self) -> char {
        self.label
    }

    /// Member cells in row-major order.
    pub fn plots(&self) -> &[Cell] {
        &self.plots
    }

    pub fn area(&self) -> usize {
        self.plots.len()
    }
}

/// The regions of a map together with the owning region of every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    bounds: Bounds,
    owners: Vec<Option<RegionId>>,
    regions: Vec<Region>,
}

impl Partition {
    /// Splits `map` into regions.
    ///
    /// Cells are seeded in row-major order, so region ids follow the position
    /// of each region's top-left-most plot. Growth uses an explicit stack and
    /// claims a cell before pushing it, so no cell is reached by two regions.
    pub fn new(map: &Map) -> Self {
        let bounds = map.bounds();
        let mut owners: Vec<Option<RegionId>> = vec![None; bounds.len()];
        let mut regions = Vec::new();
        let mut stack = Vec::new();

        for (seed, label) in map.plots() {
            let Some(seed_index) = bounds.index_of(seed) else {
                continue;
            };
            if owners[seed_index].is_some() {
                continue;
            }

            let id = regions.len();
            owners[seed_index] = Some(id);
            stack.push(seed);

            let mut plots = Vec::new();
            while let Some(cell) = stack.pop() {
                plots.push(cell);

                for direction in Direction::ALL {
                    let Some(next) = bounds.step(cell, direction) else {
                        continue;
                    };
                    let Some(next_index) = bounds.index_of(next) else {
                        continue;
                    };
                    if owners[next_index].is_none() && map.label(next) == Some(label) {
                        owners[next_index] = Some(id);
                        stack.push(next);
                    }
                }
            }

            plots.sort_unstable_by_key(|cell| (cell.y, cell.x));
            trace!(id, %label, area = plots.len(), "grew region");
            regions.push(Region { id, label, plots });
        }

        debug!("Partitioned {} plots into {} regions", bounds.len(), regions.len());

        Self {
            bounds,
            owners,
            regions,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id)
    }

    /// The region owning `cell`, or `None` when the cell is off the map.
    pub fn owner(&self, cell: Cell) -> Option<RegionId> {
        self.bounds
            .index_of(cell)
            .and_then(|index| self.owners.get(index).copied().flatten())
    }
}
