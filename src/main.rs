//! Command-line front end: loads a points file, simplifies the curve and
//! prints its inflection points.
//!
//! ```text
//! flexpoint                       # reads ./points.txt
//! flexpoint data.csv --raw        # inflections of the unsimplified curve
//! RUST_LOG=flexpoint=debug flexpoint data.csv   # trace derivatives
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use flexpoint::math::Point2;
use flexpoint::operations::analysis::{point_label, AnalysisParams, AnalyzeCurve, TracingObserver};
use flexpoint::operations::source::ReadPoints;

#[derive(Parser)]
#[command(name = "flexpoint", about = "Collinear-run simplification and inflection detection")]
struct Cli {
    /// Points file, one `x,y` record per line
    #[arg(default_value = "points.txt")]
    input: PathBuf,

    /// Segments with |dx| below this are treated as vertical
    #[arg(long, default_value = "1e-9")]
    vertical_tolerance: f64,

    /// Adjacent slopes closer than this are merged into one segment
    #[arg(long, default_value = "1e-9")]
    slope_tolerance: f64,

    /// Detect inflections on the input points instead of the simplified curve
    #[arg(long)]
    raw: bool,
}

fn print_section(title: &str, points: &[Point2]) {
    println!("{title}:");
    for p in points {
        println!("  {}", point_label(p));
    }
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for flexpoint.
    // Override with RUST_LOG (e.g. RUST_LOG=flexpoint=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("flexpoint=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let points = ReadPoints::new(&cli.input).execute_or_empty();
    if points.is_empty() {
        tracing::warn!(path = %cli.input.display(), "no points loaded");
        return ExitCode::FAILURE;
    }

    let params = AnalysisParams {
        vertical_tolerance: cli.vertical_tolerance,
        slope_tolerance: cli.slope_tolerance,
    };
    let report = AnalyzeCurve::new(&points)
        .with_params(params)
        .raw_inflections(cli.raw)
        .execute(&mut TracingObserver);

    print_section("Points", &report.input);
    print_section("Simplified", &report.simplified);
    print_section("Inflection points", &report.inflections);

    if let Some(bounds) = report.plot_bounds() {
        println!(
            "Plot range: x [{}, {}], y [{}, {}]",
            bounds.min.x, bounds.max.x, bounds.min.y, bounds.max.y
        );
    }

    ExitCode::SUCCESS
}
