//! Relative valuation command implementation.

use clap::Args;
use serde::Serialize;

use valuation_analytics::relative::{compare, RelativeComparison};
use valuation_core::bounds::{PEER_COUNT, PEER_MULTIPLE, TARGET_MULTIPLE};
use valuation_core::types::PeerMultipleSet;

use crate::commands::{list_within, value_within};
use crate::error::CliResult;
use crate::output::{KeyValue, OutputSettings, Report};

/// Arguments for the relative command.
#[derive(Args, Debug, Clone)]
pub struct RelativeArgs {
    /// Target company's P/E
    #[arg(long, default_value_t = TARGET_MULTIPLE.default)]
    pub target: f64,

    /// Peer P/E ratios, comma separated (1-20 values)
    #[arg(long, value_delimiter = ',', num_args = 1.., default_values_t = default_peers())]
    pub peers: Vec<f64>,
}

fn default_peers() -> Vec<f64> {
    vec![PEER_MULTIPLE.default; PEER_COUNT.default as usize]
}

impl Default for RelativeArgs {
    fn default() -> Self {
        Self {
            target: TARGET_MULTIPLE.default,
            peers: default_peers(),
        }
    }
}

/// JSON payload.
#[derive(Debug, Serialize)]
struct RelativeOutput<'a> {
    peers: &'a PeerMultipleSet,
    #[serde(flatten)]
    comparison: RelativeComparison,
}

/// Execute the relative command.
pub fn execute(args: RelativeArgs, settings: &OutputSettings) -> CliResult<()> {
    let target = value_within(&TARGET_MULTIPLE, args.target)?;
    let peers = PeerMultipleSet::new(list_within(&PEER_COUNT, &PEER_MULTIPLE, &args.peers)?)?;

    let comparison = compare(target, &peers);

    let mut rows: Vec<_> = peers
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, pe)| KeyValue::new(format!("Peer {} P/E", i + 1), settings.multiple(*pe)))
        .collect();
    rows.push(KeyValue::new("Target P/E", settings.multiple(target)));
    rows.push(KeyValue::new(
        "Median P/E of Peer Group",
        settings.multiple(comparison.median),
    ));
    rows.push(KeyValue::new(
        "Standard Deviation of P/E",
        settings.plain(comparison.std_dev),
    ));
    rows.push(KeyValue::new(
        "Signal",
        comparison.classification.signal(),
    ));

    Report {
        title: "Relative Valuation",
        rows,
        primary: comparison.classification.to_string(),
        json: &RelativeOutput {
            peers: &peers,
            comparison,
        },
    }
    .print(settings)
}
