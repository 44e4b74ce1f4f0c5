use anyhow::{Context, Result};

use beatline::{Partition, evaluate, read_units_from_geojson};

use crate::cli::{Cli, ScoreArgs};

pub fn run(_cli: &Cli, args: &ScoreArgs) -> Result<()> {
    let units = read_units_from_geojson(&args.units)?;
    let partition = Partition::read_from_json(&args.assignments)?;

    let evaluation = evaluate(&units, &partition)
        .context("Failed to evaluate the partition")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("{evaluation}");
    }

    Ok(())
}
