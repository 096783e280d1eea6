use std::fmt;

use itertools::Itertools;
use nom::{
    character::complete::{line_ending, satisfy},
    multi::{many1, separated_list1},
    IResult, Parser,
};
use nom_locate::LocatedSpan;
use tracing::debug;

use crate::error::GridError;

/// A plot position, `x` counting columns from the left and `y` rows from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit away, or `None` when that would leave
    /// the non-negative quadrant. Upper bounds are checked by [`Bounds`].
    pub fn step(self, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.delta();
        Some(Cell {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// The direction along which fences facing `self` line up into one side.
    pub fn tangent(self) -> Direction {
        match self {
            Direction::Up | Direction::Down => Direction::Right,
            Direction::Left | Direction::Right => Direction::Down,
        }
    }
}

/// Width and height of a map, shared by everything that has to turn a
/// [`Cell`] into a flat index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub width: usize,
    pub height: usize,
}

impl Bounds {
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.y * self.width + cell.x)
    }

    pub fn step(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.step(direction).filter(|next| self.contains(*next))
    }

    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The garden: a rectangular grid of single-character plot labels, stored row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Map {
    bounds: Bounds,
    plots: Vec<char>,
}

impl Map {
    /// Parses newline separated rows of labels. Any character except `\n` and
    /// `\r` is a label; one trailing line break is accepted.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let body = input
            .strip_suffix('\n')
            .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
            .unwrap_or(input);

        if body.is_empty() {
            return Err(GridError::Empty);
        }

        let (rest, rows) = parse_rows(Span::new(body))?;

        if !rest.fragment().is_empty() {
            return Err(GridError::TrailingInput {
                row: rows.len(),
                src: input.to_string(),
                span: (rest.location_offset(), rest.fragment().len()).into(),
            });
        }

        let width = rows.first().map_or(0, Vec::len);

        if let Some((row, plots)) = rows.iter().find_position(|row| row.len() != width) {
            let start = plots.first().map_or(0, |p| p.position.location_offset());
            let end = plots.last().map_or(start, |p| {
                p.position.location_offset() + p.label.len_utf8()
            });
            return Err(GridError::RaggedRow {
                row: row + 1,
                expected: width,
                found: plots.len(),
                src: input.to_string(),
                span: (start, end - start).into(),
            });
        }

        let bounds = Bounds {
            width,
            height: rows.len(),
        };
        let plots: Vec<char> = rows.into_iter().flatten().map(|p| p.label).collect();

        debug!("Parsed garden map of {}x{} plots", bounds.width, bounds.height);

        Ok(Self { bounds, plots })
    }

    pub fn width(&self) -> usize {
        self.bounds.width
    }

    pub fn height(&self) -> usize {
        self.bounds.height
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    pub fn label(&self, cell: Cell) -> Option<char> {
        self.bounds
            .index_of(cell)
            .and_then(|index| self.plots.get(index).copied())
    }

    /// Every cell with its label, in row-major order.
    pub fn plots(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        let width = self.bounds.width;
        self.plots
            .iter()
            .enumerate()
            .map(move |(index, &label)| (Cell::new(index % width, index / width), label))
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.plots().map(|(cell, _)| cell)
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.plots.chunks(self.bounds.width.max(1)) {
            for label in row {
                write!(f, "{}", label)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// region: Nom parser
type Span<'a> = LocatedSpan<&'a str>;

#[derive(Debug, Clone, Copy)]
struct LocatedPlot<'a> {
    label: char,
    position: Span<'a>,
}

fn parse_plot(input: Span) -> IResult<Span, LocatedPlot> {
    satisfy(|c: char| c != '\n' && c != '\r')
        .map(|label| LocatedPlot {
            label,
            position: input,
        })
        .parse(input)
}

fn parse_rows(input: Span) -> IResult<Span, Vec<Vec<LocatedPlot>>> {
    separated_list1(line_ending, many1(parse_plot))(input)
}
// endregion
