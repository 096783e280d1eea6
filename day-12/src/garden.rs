use std::sync::OnceLock;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::boundary::{exposed_edges, Edge};
use crate::cost::{RegionCost, Totals};
use crate::grid::{Cell, Map};
use crate::region::{Partition, Region, RegionId};
use crate::sides::count_sides;

/// A partitioned map with lazily derived fence data per region.
///
/// Edge lists and side counts are computed on first request and kept in
/// slots indexed by [`RegionId`]. Slots are written at most once, so a shared
/// `&Garden` can be priced from several threads.
#[derive(Debug)]
pub struct Garden {
    partition: Partition,
    edges: Vec<OnceLock<Vec<Edge>>>,
    sides: Vec<OnceLock<usize>>,
}

impl Garden {
    #[tracing::instrument(skip_all, fields(width = map.width(), height = map.height()))]
    pub fn new(map: &Map) -> Self {
        let partition = Partition::new(map);
        let count = partition.regions().len();

        Self {
            partition,
            edges: (0..count).map(|_| OnceLock::new()).collect(),
            sides: (0..count).map(|_| OnceLock::new()).collect(),
        }
    }

    pub fn regions(&self) -> &[Region] {
        self.partition.regions()
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.partition.region(id)
    }

    pub fn owner(&self, cell: Cell) -> Option<RegionId> {
        self.partition.owner(cell)
    }

    pub fn edges(&self, id: RegionId) -> Option<&[Edge]> {
        self.region(id).map(|region| self.edges_of(region))
    }

    pub fn perimeter(&self, id: RegionId) -> Option<usize> {
        self.edges(id).map(<[Edge]>::len)
    }

    pub fn sides(&self, id: RegionId) -> Option<usize> {
        self.region(id).map(|region| self.sides_of(region))
    }

    pub fn cost(&self, id: RegionId) -> Option<RegionCost> {
        self.region(id).map(|region| self.cost_of(region))
    }

    /// Costs of every region, in region order.
    pub fn costs(&self) -> Vec<RegionCost> {
        self.regions()
            .par_iter()
            .map(|region| self.cost_of(region))
            .collect()
    }

    pub fn totals(&self) -> Totals {
        let totals: Totals = self
            .regions()
            .par_iter()
            .map(|region| Totals::from(self.cost_of(region)))
            .sum();

        debug!(
            regions = self.regions().len(),
            by_perimeter = totals.by_perimeter,
            by_sides = totals.by_sides,
            "priced garden"
        );
        totals
    }

    fn edges_of(&self, region: &Region) -> &[Edge] {
        self.edges[region.id()].get_or_init(|| exposed_edges(&self.partition, region))
    }

    fn sides_of(&self, region: &Region) -> usize {
        *self.sides[region.id()].get_or_init(|| count_sides(self.edges_of(region)))
    }

    fn cost_of(&self, region: &Region) -> RegionCost {
        let cost = RegionCost {
            label: region.label(),
            area: region.area(),
            perimeter: self.edges_of(region).len(),
            sides: self.sides_of(region),
        };
        trace!(id = region.id(), ?cost, "region cost");
        cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn example(#[default("AAAA\nBBCD\nBBCC\nEEEC")] input: &str) -> Map {
        Map::parse(input).unwrap()
    }

    #[rstest]
    #[test_log::test]
    fn test_process_example(example: Map) {
        let garden = Garden::new(&example);
        assert_eq!(
            Totals {
                by_perimeter: 140,
                by_sides: 80
            },
            garden.totals()
        );
    }

    #[rstest]
    fn test_costs_in_region_order(example: Map) {
        let garden = Garden::new(&example);
        let costs: Vec<(char, usize, usize, usize)> = garden
            .costs()
            .into_iter()
            .map(|c| (c.label, c.area, c.perimeter, c.sides))
            .collect();
        assert_eq!(
            vec![
                ('A', 4, 10, 4),
                ('B', 4, 8, 4),
                ('C', 4, 10, 8),
                ('D', 1, 4, 4),
                ('E', 3, 8, 4),
            ],
            costs
        );
    }

    #[rstest]
    fn test_single_cell(#[with("Q")] example: Map) {
        let garden = Garden::new(&example);
        let cost = garden.cost(0).unwrap();
        assert_eq!(1, cost.area);
        assert_eq!(4, cost.perimeter);
        assert_eq!(4, cost.sides);
        assert_eq!(4, cost.price_by_perimeter());
        assert_eq!(4, cost.price_by_sides());
    }

    #[rstest]
    fn test_hole(#[with("AAA\nABA\nAAA")] example: Map) {
        let garden = Garden::new(&example);
        let ring = garden.owner(Cell::new(0, 0)).unwrap();
        let hole = garden.owner(Cell::new(1, 1)).unwrap();

        assert_eq!(Some(8), garden.region(ring).map(Region::area));
        assert_eq!(Some(8), garden.sides(ring));
        assert_eq!(Some(16), garden.perimeter(ring));
        assert_eq!(Some(4), garden.sides(hole));
    }

    #[rstest]
    fn test_memoized_values_are_stable(example: Map) {
        let garden = Garden::new(&example);
        for id in 0..garden.regions().len() {
            let first = garden.edges(id).map(<[Edge]>::to_vec);
            assert_eq!(first.as_deref(), garden.edges(id));
            assert_eq!(garden.sides(id), garden.sides(id));
        }
        assert_eq!(garden.totals(), garden.totals());
    }

    #[rstest]
    fn test_unknown_region(example: Map) {
        let garden = Garden::new(&example);
        assert_eq!(None, garden.edges(99));
        assert_eq!(None, garden.sides(99));
        assert_eq!(None, garden.cost(99));
    }

    #[test]
    fn test_empty_garden() {
        let garden = Garden::new(&Map::default());
        assert!(garden.regions().is_empty());
        assert!(garden.costs().is_empty());
        assert_eq!(Totals::default(), garden.totals());
    }

    #[test]
    fn test_garden_is_shareable() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Garden>();
    }
}
