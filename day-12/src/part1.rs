use miette::Result;
use tracing::info;

use crate::analyze;

/// Total fence price when every unit of perimeter is paid for.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let totals = analyze(input)?;
    info!("Fence price by perimeter: {}", totals.by_perimeter);
    Ok(totals.by_perimeter.to_string())
}
