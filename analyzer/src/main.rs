use std::io::Read;
use std::path::Path;
use std::{fs, io};

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use crossgrid::{GeneratorSettings, Grid};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cli::{Cli, Format};

mod cli;

fn read_grid(path: &Path) -> anyhow::Result<Grid> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("reading grid from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };

    text.parse().with_context(|| format!("invalid grid in {}", path.display()))
}

fn random_grid(cli: &Cli) -> anyhow::Result<Grid> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("generating {}x{} grid with {} blocks, seed {}", cli.rows, cli.cols, cli.blocks, seed);

    let settings = GeneratorSettings { rows: cli.rows, cols: cli.cols, blocks: cli.blocks };
    settings.generate(&mut ChaCha8Rng::seed_from_u64(seed))
        .map_err(|reasons| anyhow!(reasons.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")))
        .context("generating random grid")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    let grid = match (&cli.file, cli.random) {
        (Some(path), false) => read_grid(path)?,
        (None, true) => random_grid(&cli)?,
        _ => bail!("give either a grid file or --random"),
    };

    let analysis = grid.analyze();
    for (location, slot) in analysis.unchecked_cells(&grid) {
        match slot.and_then(|id| analysis.slot(id)) {
            Some(covering) => log::info!("{} is only covered by slot {} and has no {:?} slot",
                                         location.label(), covering.id, covering.direction.perpendicular()),
            None => log::info!("{} is not covered by any slot", location.label()),
        }
    }

    match cli.format {
        Format::Text => {
            println!("{}", grid.labelled());
            print!("{}", analysis.report(cli.crossings));
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
    }

    Ok(())
}
