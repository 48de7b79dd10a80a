use std::io::{self, BufWriter, Write};
use std::process;

use anyhow::{Context, Result};
use env_logger::Env;
use nth_conway::cli::{Command, HELP, RunConfig, parse_args};
use nth_conway::render::{ConsoleRenderer, RasterEncoder};
use nth_conway::{Seed, initialize, run};

fn init_logging() {
    let env = Env::default()
        .filter_or("NTH_CONWAY_LOG", "warn")
        .write_style_or("NTH_CONWAY_LOG_STYLE", "auto");
    env_logger::init_from_env(env);
}

fn simulate(config: &RunConfig) -> Result<()> {
    let seed = config.seed.resolve();
    log::info!(
        "{}x{} board, {} generations, seed {seed}",
        config.width,
        config.height,
        config.generations
    );

    let encoder = RasterEncoder::new(config.pixel_size)?.with_polarity(config.polarity);
    let initial = initialize(config.width, config.height, &mut Seed::Fixed(seed).rng())
        .context("failed to create the initial board")?;
    let run = run(initial, config.generations);

    let renderer = ConsoleRenderer::default();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut last = None;
    for grid in &run {
        if !config.quiet {
            renderer
                .write_generation(&mut out, &grid)
                .context("failed to print generation")?;
        }
        last = Some(grid);
    }
    out.flush().context("failed to flush stdout")?;

    let last = last.context("run produced no generations")?;
    encoder
        .write_png(&last, &config.output)
        .with_context(|| format!("failed to save final board to {}", config.output.display()))?;
    Ok(())
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(Command::Help) => {
            eprint!("{HELP}");
            return;
        }
        Ok(Command::Run(config)) => config,
        Err(err) => {
            eprint!("{HELP}");
            eprintln!("\nerror: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = simulate(&config) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}
