use anyhow::Result;
use geoseries::Series;

use crate::cli::{Cli, InfoArgs};
use crate::shape::Shape;

use super::load;

fn describe(label: &str, series: &Series<'_>) {
    let rect = series.rect();
    println!("{label}: points={} segments={} closed={} convex={} indexed={}",
        series.points().len(), series.segment_count(), series.closed(), series.convex(), series.has_index());
    println!("{label}: rect=[{}, {}, {}, {}]", rect.min.x, rect.min.y, rect.max.x, rect.max.y);
}

pub fn run(cli: &Cli, args: &InfoArgs) -> Result<()> {
    let shape = load(&args.input, cli.index_threshold)?;

    match &shape {
        Shape::Point(p) => println!("point: {} {}", p.x, p.y),
        Shape::LineString(line) => describe("line", line),
        Shape::Polygon { exterior, holes } => {
            describe("exterior", exterior);
            for (i, hole) in holes.iter().enumerate() {
                describe(&format!("hole {i}"), hole);
            }
        }
    }

    let center = shape.center();
    println!("center: {} {}", center.x, center.y);
    Ok(())
}
