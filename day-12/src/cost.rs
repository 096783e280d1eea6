use std::iter::Sum;
use std::ops::Add;

/// Fence measurements for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionCost {
    pub label: char,
    pub area: usize,
    pub perimeter: usize,
    pub sides: usize,
}

impl RegionCost {
    pub fn price_by_perimeter(&self) -> usize {
        self.area * self.perimeter
    }

    pub fn price_by_sides(&self) -> usize {
        self.area * self.sides
    }
}

/// Fence prices summed over a whole garden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub by_perimeter: usize,
    pub by_sides: usize,
}

impl From<RegionCost> for Totals {
    fn from(cost: RegionCost) -> Self {
        Self {
            by_perimeter: cost.price_by_perimeter(),
            by_sides: cost.price_by_sides(),
        }
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, other: Totals) -> Totals {
        Totals {
            by_perimeter: self.by_perimeter + other.by_perimeter,
            by_sides: self.by_sides + other.by_sides,
        }
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Self {
        iter.fold(Totals::default(), Add::add)
    }
}

impl Sum<RegionCost> for Totals {
    fn sum<I: Iterator<Item = RegionCost>>(iter: I) -> Self {
        iter.map(Totals::from).sum()
    }
}
