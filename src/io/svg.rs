//! SVG rendering of a partition: one fill color per district.
//!
//! This is a debugging/plotting aid for a partition, not part of the scoring
//! contract. Each unit is drawn individually; no district outlines are
//! dissolved.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use geo::{BoundingRect, Coord, LineString, Rect};
use log::debug;

use crate::{partition::Partition, unit::Unit};

/// Render `units` colored by district assignment to an SVG file.
/// Small wrapper with defaults.
pub fn render_to_svg(units: &[Unit], partition: &Partition, path: &Path) -> Result<()> {
    render_to_svg_with_size(units, partition, path, 1200, 10)
}

/// Render with an explicit viewport width and margin (pixels).
pub fn render_to_svg_with_size(
    units: &[Unit],
    partition: &Partition,
    path: &Path,
    width: i32,
    margin: i32,
) -> Result<()> {
    let bounds = units.iter()
        .filter_map(|unit| unit.geometry().bounding_rect())
        .reduce(merge_bounds)
        .ok_or_else(|| anyhow!("[render_to_svg] Could not determine bounds; nothing to draw."))?;

    let margin = margin as f64;
    let width = width as f64;
    let scale = (width - 2.0 * margin) / bounds.width();
    let height = bounds.height() * scale + 2.0 * margin;

    // lon/lat -> SVG coords (Y down)
    let project = move |coord: &Coord<f64>| -> (f64, f64) {
        let x = margin + (coord.x - bounds.min().x) * scale;
        let y = margin + (bounds.max().y - coord.y) * scale;
        (x, y)
    };

    let file = File::create(path)
        .with_context(|| format!("[render_to_svg] Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(
        writer,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"##
    )?;

    for unit in units {
        // Unassigned units are drawn unfilled rather than skipped.
        let fill = match partition.label_of(unit.id()) {
            Some(label) => district_color(label),
            None => "none".to_string(),
        };

        let mut path_data = String::new();
        for polygon in &unit.geometry().0 {
            ring_to_path(polygon.exterior(), &project, &mut path_data);
            for hole in polygon.interiors() {
                ring_to_path(hole, &project, &mut path_data);
            }
        }

        writeln!(
            writer,
            r#"<path class="unit" fill-rule="evenodd" style="fill:{fill};stroke:#111827;stroke-width:0.6;fill-opacity:0.85" d="{path_data}"/>"#,
        )?;
    }

    writeln!(writer, "</svg>")?;
    writer.flush()?;

    debug!("rendered {} units to {}", units.len(), path.display());
    Ok(())
}

/// Stable fill color for a district label: hues stepped by the golden angle
/// so nearby labels land on visually distinct colors.
fn district_color(label: u32) -> String {
    const GOLDEN_ANGLE: f64 = 137.50776405;

    let hue = (label as f64 * GOLDEN_ANGLE) % 360.0;
    format!("hsl({hue:.1},70%,55%)")
}

fn merge_bounds(a: Rect<f64>, b: Rect<f64>) -> Rect<f64> {
    Rect::new(
        Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
        Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
    )
}

/// Append one ring as an `M...Z` subpath.
fn ring_to_path(
    ring: &LineString<f64>,
    project: &impl Fn(&Coord<f64>) -> (f64, f64),
    out: &mut String,
) {
    use std::fmt::Write as _;

    for (i, coord) in ring.coords().enumerate() {
        let (x, y) = project(coord);
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(out, "{command}{x:.2} {y:.2} ");
    }
    out.push('Z');
}
