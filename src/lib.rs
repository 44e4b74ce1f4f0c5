#![doc = "Beatline public API"]
mod district;
mod error;
mod eval;
mod io;
mod partition;
mod unit;

#[doc(inline)]
pub use unit::{Unit, UnitId};

#[doc(inline)]
pub use partition::Partition;

#[doc(inline)]
pub use district::District;

#[doc(inline)]
pub use error::EvalError;

#[doc(inline)]
pub use eval::{Evaluation, aggregate, evaluate, score_balance, score_compactness};

#[doc(inline)]
pub use io::{
    read_units_from_geojson, read_units_from_geojson_bytes, render_to_svg, render_to_svg_with_size,
};
