use anyhow::Result;

use beatline::{Partition, read_units_from_geojson, render_to_svg_with_size};

use crate::cli::{Cli, RenderArgs};

pub fn run(_cli: &Cli, args: &RenderArgs) -> Result<()> {
    let units = read_units_from_geojson(&args.units)?;
    let partition = Partition::read_from_json(&args.assignments)?;

    render_to_svg_with_size(&units, &partition, &args.output, args.width, args.margin)?;

    println!("Wrote {}", args.output.display());
    Ok(())
}
