//! signal-planner — traffic light schedule for a Hash Code 2021 input file.
//!
//! Reads `input.txt`, gives every street that ends at an intersection a
//! green time proportional to the number of car paths that use it, and
//! writes the submission to `output.txt`.
//!
//! ```text
//! signal-planner --input a.txt --output a.out --csv a.csv --summary-json a.json
//! RUST_LOG=debug signal-planner      # one line per intersection decision
//! ```

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde_json::json;

use ts_core::RoundingRule;
use ts_network::load_problem;
use ts_output::{CsvScheduleWriter, ScheduleWriter, SubmissionWriter};
use ts_schedule::plan;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Problem file: header, streets, then car paths.
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// Submission file to write.
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Tie-break for green durations that land on exactly .5
    /// ("half-even" or "half-away").
    #[arg(long, default_value_t = RoundingRule::HalfEven)]
    rounding: RoundingRule,

    /// Also export one CSV row per green phase.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Also write run totals as JSON.
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    println!("=== signal-planner ===");
    println!("Input: {}  |  Output: {}  |  Rounding: {}", args.input.display(), args.output.display(), args.rounding);
    println!();

    // 1. Load.
    let t0 = Instant::now();
    let problem = load_problem(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let header = problem.header;
    println!(
        "Problem: {} intersections, {} streets, {} cars, D={} s, F={} s",
        header.intersection_count,
        header.street_count,
        header.vehicle_count,
        header.duration,
        header.cycle_length,
    );

    // 2. Schedule.
    let schedule = plan(&problem, args.rounding).context("failed to build schedule")?;

    // 3. Write.
    let mut submission = SubmissionWriter::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    submission.write_schedule(&schedule)?;
    submission.finish()?;
    info!("wrote {}", args.output.display());

    if let Some(path) = &args.csv {
        let mut csv = CsvScheduleWriter::new(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        csv.write_schedule(&schedule)?;
        csv.finish()?;
        info!("wrote {} ({} rows)", path.display(), csv.rows_written());
    }

    let summary = schedule.summary();
    if let Some(path) = &args.summary_json {
        let report = json!({
            "input":        args.input.display().to_string(),
            "cycle_length": header.cycle_length,
            "rounding":     args.rounding.to_string(),
            "summary":      summary,
        });
        fs::write(path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    // 4. Summary.
    println!("Scheduled in {:.3} s", t0.elapsed().as_secs_f64());
    println!();
    println!("{:<22} {:>8}", "Intersections", summary.intersections);
    println!("{}", "-".repeat(31));
    println!("{:<22} {:>8}", "  proportional", summary.proportional);
    println!("{:<22} {:>8}", "  zero demand", summary.zero_demand);
    println!("{:<22} {:>8}", "  degenerate rounding", summary.degenerate_rounding);
    println!("{:<22} {:>8}", "Green phases", summary.green_phases);
    println!("{:<22} {:>8}", "Dropped streets", summary.dropped_streets);

    Ok(())
}
