//! CLI command implementations.

pub mod bounds;
pub mod config;
pub mod dcf;
pub mod ddm;
pub mod growth;
pub mod intrinsic;
pub mod normalized_pe;
pub mod pbv;
pub mod relative;
pub mod terminal;
pub mod topic;

// Re-export submodules for convenience
pub use bounds::BoundsArgs;
pub use config::ConfigArgs;
pub use dcf::DcfArgs;
pub use ddm::DdmArgs;
pub use growth::GrowthArgs;
pub use intrinsic::IntrinsicArgs;
pub use normalized_pe::NormalizedPeArgs;
pub use pbv::PbvArgs;
pub use relative::RelativeArgs;
pub use terminal::TerminalArgs;
pub use topic::TopicArgs;

use valuation_core::bounds::InputBounds;
use valuation_core::types::Rate;

use crate::error::CliResult;

/// Checks a percentage input against its bounds and converts it to a rate.
pub fn rate_within(bounds: &InputBounds, percent: f64) -> CliResult<Rate> {
    Ok(Rate::from_percent(bounds.check(percent)?))
}

/// Checks an amount or multiple against its bounds.
pub fn value_within(bounds: &InputBounds, value: f64) -> CliResult<f64> {
    Ok(bounds.check(value)?)
}

/// Checks a year or count input against its bounds.
pub fn count_within(bounds: &InputBounds, count: u32) -> CliResult<u32> {
    Ok(bounds.check_count(count)?)
}

/// Checks a list: its length against `len_bounds`, each item against `item_bounds`.
pub fn list_within(
    len_bounds: &InputBounds,
    item_bounds: &InputBounds,
    values: &[f64],
) -> CliResult<Vec<f64>> {
    count_within(len_bounds, values.len() as u32)?;
    values
        .iter()
        .map(|&v| value_within(item_bounds, v))
        .collect()
}
