pub mod boundary;
pub mod cost;
pub mod error;
pub mod garden;
pub mod grid;
pub mod part1;
pub mod part2;
pub mod region;
pub mod sides;

pub use cost::{RegionCost, Totals};
pub use error::GridError;
pub use garden::Garden;
pub use grid::{Cell, Direction, Map};
pub use region::{Region, RegionId};

/// Parses a garden map and prices its fences both ways.
#[tracing::instrument(skip(input))]
pub fn analyze(input: &str) -> miette::Result<Totals> {
    let map = Map::parse(input)?;
    Ok(Garden::new(&map).totals())
}
