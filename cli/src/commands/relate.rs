use anyhow::Result;

use crate::cli::{Cli, ContainsArgs, RelateArgs};

use super::load;

pub fn contains(cli: &Cli, args: &ContainsArgs) -> Result<()> {
    let shape = load(&args.input, cli.index_threshold)?;
    let result = shape.contains_point(args.point, args.on_edge);
    tracing::info!(point = ?args.point, on_edge = args.on_edge, result, "contains");
    println!("{result}");
    Ok(())
}

pub fn intersects(cli: &Cli, args: &RelateArgs) -> Result<()> {
    let a = load(&args.input, cli.index_threshold)?;
    let b = load(&args.other, cli.index_threshold)?;
    let result = a.intersects(&b, args.on_edge);
    tracing::info!(on_edge = args.on_edge, result, "intersects");
    println!("{result}");
    Ok(())
}

pub fn within(cli: &Cli, args: &RelateArgs) -> Result<()> {
    let container = load(&args.input, cli.index_threshold)?;
    let shape = load(&args.other, cli.index_threshold)?;
    let result = container.contains(&shape, args.on_edge);
    tracing::info!(on_edge = args.on_edge, result, "within");
    println!("{result}");
    Ok(())
}
