//! Ribosome Rush entry point
//!
//! Headless driver: owns the round, feeds it fixed-rate ticks and prints the
//! end-of-round explanation. Rendering and keyboard input belong to a
//! front-end; here the autopilot plays.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use ribosome_rush::Tuning;
use ribosome_rush::consts::MAX_SUBSTEPS;
use ribosome_rush::sim::{RoundPhase, RoundState, TickInput, tick};
use ribosome_rush::ui::RevealAnimation;

#[derive(Debug, Parser)]
#[command(name = "ribosome-rush", about = "Assemble the target protein before time runs out")]
struct Args {
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// JSON file with tuning overrides
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Run at wall-clock speed instead of as fast as possible
    #[arg(long)]
    realtime: bool,
    /// Number of rounds to play back to back
    #[arg(long, default_value_t = 1)]
    rounds: u32,
    /// Print the final snapshot of each round as JSON
    #[arg(long)]
    json: bool,
}

/// Fixed-rate driver holding the round and the frame accumulator
struct Game {
    state: RoundState,
    accumulator: f32,
    input: TickInput,
}

impl Game {
    fn new(seed: u64, tuning: Tuning) -> Result<Self> {
        Ok(Self {
            state: RoundState::try_new(seed, tuning)?,
            accumulator: 0.0,
            input: TickInput {
                autopilot: true,
                ..Default::default()
            },
        })
    }

    /// Run simulation ticks for `dt` seconds of wall time
    fn update(&mut self, dt: f32) {
        let step = self.state.tuning.dt();
        self.accumulator += dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= step && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input);
            self.accumulator -= step;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.reset = false;
        }
    }

    fn run_round_fast(&mut self) {
        while self.state.phase == RoundPhase::Active {
            tick(&mut self.state, &self.input);
        }
    }

    fn run_round_realtime(&mut self) {
        let frame = Duration::from_secs_f32(self.state.tuning.dt());
        let mut last = Instant::now();
        let mut last_shown = u64::MAX;
        while self.state.phase == RoundPhase::Active {
            std::thread::sleep(frame);
            let now = Instant::now();
            self.update((now - last).as_secs_f32());
            last = now;

            let remaining = self.state.remaining_secs();
            if remaining != last_shown && remaining % 10 == 0 {
                log::info!(
                    "Time: {} | collected {}/{}",
                    remaining,
                    self.state.sequence.cursor(),
                    self.state.sequence.target().len()
                );
                last_shown = remaining;
            }
        }
    }

    fn request_reset(&mut self) {
        self.input.reset = true;
        // Reset is handled on the next tick
        tick(&mut self.state, &self.input);
        self.input.reset = false;
    }
}

fn print_report(state: &RoundState, realtime: bool) {
    let Some(report) = state.report.as_ref() else {
        return;
    };
    println!("{}", report.headline(state.tuning.win_threshold_percent));

    let lines = report.explanation_lines();
    if !realtime {
        lines.iter().for_each(|line| println!("  {line}"));
        return;
    }

    // Stage the explanation the way a front-end would
    let mut reveal = RevealAnimation::new(lines.len());
    let mut printed = 0;
    let frame = Duration::from_millis(10);
    while printed < lines.len() {
        std::thread::sleep(frame);
        reveal.advance(frame.as_secs_f32());
        while printed < reveal.revealed() {
            println!("  {}", lines[printed]);
            printed += 1;
        }
    }
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading tuning file {}", path.display()))?;
    Tuning::from_json(&json).with_context(|| format!("loading tuning from {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tuning = load_tuning(args.tuning.as_ref())?;
    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock before UNIX epoch")?
            .as_nanos() as u64,
    };
    log::info!("Ribosome Rush starting (seed {seed})");

    let mut game = Game::new(seed, tuning)?;
    for round in 0..args.rounds {
        if round > 0 {
            game.request_reset();
        }

        if args.realtime {
            game.run_round_realtime();
        } else {
            game.run_round_fast();
        }

        print_report(&game.state, args.realtime);
        if args.json {
            let snapshot = serde_json::to_string_pretty(&game.state.snapshot())
                .context("serializing round snapshot")?;
            println!("{snapshot}");
        }
    }

    Ok(())
}
