use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Reasons a garden map cannot be built from its text form.
///
/// Every variant is fatal: no partial map is produced.
#[derive(Debug, Error, Diagnostic)]
pub enum GridError {
    #[error("garden map has no rows")]
    #[diagnostic(
        code(day12::empty_grid),
        help("the input must contain at least one row of plot labels")
    )]
    Empty,

    #[error("row {row} has {found} plots, expected {expected}")]
    #[diagnostic(
        code(day12::ragged_row),
        help("every row of the garden map must have the same length")
    )]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
        #[source_code]
        src: String,
        #[label("this row")]
        span: SourceSpan,
    },

    #[error("unexpected input after row {row}")]
    #[diagnostic(
        code(day12::trailing_input),
        help("blank rows and stray carriage returns are not allowed inside the map")
    )]
    TrailingInput {
        row: usize,
        #[source_code]
        src: String,
        #[label("map should end here")]
        span: SourceSpan,
    },

    #[error("failed to parse garden map: {0}")]
    #[diagnostic(code(day12::parse_error))]
    Parse(String),
}

impl<E> From<nom::Err<E>> for GridError
where
    E: std::fmt::Debug,
{
    fn from(err: nom::Err<E>) -> Self {
        GridError::Parse(format!("{:?}", err))
    }
}
