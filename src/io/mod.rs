mod geojson;
mod svg;

pub use geojson::{read_units_from_geojson, read_units_from_geojson_bytes};
pub use svg::{render_to_svg, render_to_svg_with_size};
