use miette::Result;
use tracing::info;

use crate::analyze;

/// Total fence price under the bulk discount, where each straight side costs
/// the same no matter how long it is.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let totals = analyze(input)?;
    info!("Fence price by sides: {}", totals.by_sides);
    Ok(totals.by_sides.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_process() -> miette::Result<()> {
        let input = "RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE";
        assert_eq!("1206", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("AAAA\nBBCD\nBBCC\nEEEC", "80")]
    #[case("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO", "436")]
    #[case("EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE", "236")]
    #[case("AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA", "368")]
    #[case("AAA\nABA\nAAA", "68")]
    #[case("Z", "4")]
    #[test_log::test]
    fn test_process_small(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn test_process_rejects_bad_shape() {
        let err = process("AB\nC").unwrap_err();
        assert!(err.to_string().contains("row 2 has 1 plots, expected 2"));
    }
}
