use std::path::PathBuf;

use geoseries::{MIN_TREE_POINTS, Point};

/// Spatial predicates over GeoJSON geometries
#[derive(clap::Parser, Debug)]
#[command(name = "geoseries", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Minimum point count before a ring indexes its segments
    #[arg(long, default_value_t = MIN_TREE_POINTS, global = true)]
    pub index_threshold: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Summarise a geometry: point and segment counts, convexity, bounds
    Info(InfoArgs),

    /// Test whether a geometry contains a point
    Contains(ContainsArgs),

    /// Test whether two geometries intersect
    Intersects(RelateArgs),

    /// Test whether the second geometry lies within the first
    Within(RelateArgs),
}

#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    /// GeoJSON Feature or geometry file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ContainsArgs {
    /// GeoJSON Feature or geometry file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Query point as X,Y
    #[arg(short, long, value_parser = parse_point, allow_hyphen_values = true)]
    pub point: Point,

    /// Count points on the boundary as contained
    #[arg(long)]
    pub on_edge: bool,
}

#[derive(clap::Args, Debug)]
pub struct RelateArgs {
    /// First GeoJSON Feature or geometry file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Second GeoJSON Feature or geometry file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub other: PathBuf,

    /// Count boundary contact as intersecting / contained
    #[arg(long)]
    pub on_edge: bool,
}

/// Parse "X,Y" into a point.
fn parse_point(text: &str) -> Result<Point, String> {
    let (x, y) = text.split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {text:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("invalid X {x:?}: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("invalid Y {y:?}: {e}"))?;
    Ok(Point::new(x, y))
}
