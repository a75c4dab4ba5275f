//! evac — evacuation simulator command line.
//!
//! ```text
//! evac run <MAP> [-p N] [-s N] [-r N] [--config FILE] [--output DIR]
//!                [--frames DIR] [--show [--delay MS]]
//! evac sample <KIND> <LENGTH> <OUT>
//! ```
//!
//! Maps are raster images (one pixel per cell) or, with a `.txt` extension,
//! the one-character-per-cell text format.  Set `RUST_LOG` to change the log
//! level (default `evac=info`).

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use evac_bitmap::{BitmapImporter, BitmapRenderer, DistanceHeatMap, SampleKind};
use evac_core::EvacConfig;
use evac_grid::{Grid, Importer, Renderer, TextImporter, TextRenderer};
use evac_output::{CsvWriter, StatsOutputObserver};
use evac_sim::{Automaton, NoopObserver, Report, Runner};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "evac", version, about = "Simulate the evacuation of a building")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate an evacuation and print the averaged statistics.
    Run(RunArgs),
    /// Write one of the bundled room layouts as an image.
    Sample(SampleArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Map file: an image, or a text layout when the extension is `.txt`.
    map: PathBuf,

    /// Number of people to evacuate.
    #[arg(short, long, default_value_t = 100)]
    people: usize,

    /// Number of initial smoke cells.
    #[arg(short, long, default_value_t = 0)]
    smoke: usize,

    /// Independent runs to average (overrides the config file).
    #[arg(short, long)]
    runs: Option<u32>,

    /// RNG seed (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with simulation parameters.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tick budget per run (overrides the config file).
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Probability of a sideways step (overrides the config file).
    #[arg(long)]
    chaos: Option<f64>,

    /// Smoke spreading rate (overrides the config file).
    #[arg(long)]
    spreading: Option<f64>,

    /// Directory for `tick_summaries.csv` and `run_summaries.csv`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for per-step images of the first run and a distance heat map.
    #[arg(long)]
    frames: Option<PathBuf>,

    /// Print the first run to the terminal, one grid per step.
    #[arg(long)]
    show: bool,

    /// Pause between printed steps, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    delay: u64,
}

#[derive(Args, Debug)]
struct SampleArgs {
    /// square_room, room_with_block, scattered_blocks or wide_exit.
    kind: SampleKind,

    /// Side length in cells.
    length: usize,

    /// Output image path; the extension picks the format.
    out: PathBuf,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("evac=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Run(args) => run(args),
        Command::Sample(args) => sample(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let config = build_config(&args)?;
    let grid = load_map(&args.map)?;
    info!(
        map = %args.map.display(),
        height = grid.height(),
        width = grid.width(),
        people = args.people,
        smoke = args.smoke,
        runs = config.runs,
        "starting simulation"
    );

    let base = Automaton::new(grid, &config);
    let runner = Runner::new(config).reseed_each_run(args.people, args.smoke);

    if args.show || args.frames.is_some() {
        replay_first_run(&runner, &base, &args)?;
    }

    let report = match &args.output {
        Some(dir) => {
            let mut observer = StatsOutputObserver::new(CsvWriter::new(dir)?);
            let report = runner.run(&base, &mut observer)?;
            if let Some(e) = observer.take_error() {
                return Err(anyhow::Error::new(e).context("writing statistics"));
            }
            info!(dir = %dir.display(), "statistics written");
            report
        }
        None => runner.run(&base, &mut NoopObserver)?,
    };

    print_report(&report);
    Ok(())
}

fn sample(args: SampleArgs) -> Result<()> {
    let grid = evac_bitmap::sample(args.kind, args.length)?;
    let img = BitmapRenderer::new(1).render(&grid);
    evac_bitmap::save(&img, &args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;
    info!(kind = %args.kind, length = args.length, out = %args.out.display(), "sample written");
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Defaults, then the config file, then individual flags.
fn build_config(args: &RunArgs) -> Result<EvacConfig> {
    let mut config = match &args.config {
        Some(path) => EvacConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EvacConfig::default(),
    };

    if let Some(runs) = args.runs {
        config.runs = runs;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(max_ticks) = args.max_ticks {
        config.max_ticks = max_ticks;
    }
    if let Some(chaos) = args.chaos {
        config.chaos_rate = chaos;
    }
    if let Some(spreading) = args.spreading {
        config.spreading_rate = spreading;
    }

    config.validate()?;
    Ok(config)
}

fn load_map(path: &Path) -> Result<Grid> {
    let is_text = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    let grid = if is_text {
        TextImporter::from_path(path).load()
    } else {
        BitmapImporter::from_path(path).load()
    };
    grid.with_context(|| format!("loading map {}", path.display()))
}

/// Step through run 0 on its own, printing and/or saving every state.
fn replay_first_run(runner: &Runner, base: &Automaton, args: &RunArgs) -> Result<()> {
    let mut rng = runner.rng_for(0);
    let mut sim = runner.prepare(base, &mut rng)?;

    if let Some(dir) = &args.frames {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        let heat = DistanceHeatMap::default().render(sim.grid());
        evac_bitmap::save(&heat, dir.join("distances.png"))?;
    }

    let renderer = BitmapRenderer::default();
    let max_ticks = runner.config().max_ticks;
    let mut step = 0u64;
    loop {
        if let Some(dir) = &args.frames {
            let frame = renderer.render(sim.grid());
            evac_bitmap::save(&frame, dir.join(format!("step_{step:04}.png")))?;
        }
        if args.show {
            print!("{}", TextRenderer.render(sim.grid()));
            println!("step {step}: {} people left\n", sim.remaining());
            thread::sleep(Duration::from_millis(args.delay));
        }

        if step >= max_ticks {
            warn!(max_ticks, remaining = sim.remaining(), "replay stopped at the tick budget");
            break;
        }
        if !sim.step(&mut rng) {
            break;
        }
        step += 1;
    }

    if let Some(dir) = &args.frames {
        info!(frames = step + 1, dir = %dir.display(), "frames written");
    }
    Ok(())
}

fn print_report(report: &Report) {
    println!("=== evacuation report ===");
    println!("{report}");
}
