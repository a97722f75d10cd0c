//! # Footprint CLI Application
//!
//! Terminal frontend for the footprint_core engine. Two modes:
//!
//! - `footprint plan` - interactive trip planner accumulating activities
//!   into one calculator session
//! - `footprint report` - batch pipeline over a CSV of trip records
//!
//! The CLI is the validation boundary: quantities are checked for sign and
//! numeric shape here, before they reach the core (which assumes
//! non-negative inputs by contract).

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;

use footprint_core::errors::{FootprintError, FootprintResult};
use footprint_core::records::{Period, RecordSet};
use footprint_core::summary::TripSummary;
use footprint_core::trip::TripCalculator;
use footprint_core::units::{KgCo2, Kilometers};

#[derive(Parser)]
#[command(name = "footprint", version, about = "Tourism carbon footprint calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive trip planner
    Plan,
    /// Batch report over a CSV of trip records
    Report {
        /// Input CSV with columns date, activity_type, value, unit[, emissions_kg]
        #[arg(long)]
        input: PathBuf,
        /// Aggregation bucket: daily, monthly, or yearly
        #[arg(long, default_value = "monthly")]
        period: String,
        /// Number of rows in the top-activities table
        #[arg(long, default_value_t = 5)]
        top: usize,
        /// Export the cleaned dataset to this path
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Plan => run_plan(),
        Command::Report {
            input,
            period,
            top,
            export,
        } => run_report(&input, &period, top, export.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn print_error(error: &FootprintError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

// ============================================================================
// Interactive planner
// ============================================================================

fn run_plan() -> FootprintResult<()> {
    println!("Footprint - Tourism Carbon Calculator");
    println!("=====================================");
    println!();
    print_plan_help();
    println!();

    let mut trip = TripCalculator::new();

    loop {
        let line = prompt("> ")?;
        match line.to_lowercase().as_str() {
            "" => continue,
            "flight" => report_added("Flight", add_flight(&mut trip)),
            "hotel" => report_added("Hotel stay", add_hotel(&mut trip)),
            "transport" => report_added("Transport", add_transport(&mut trip)),
            "activity" => report_added("Activity", add_activity(&mut trip)),
            "summary" => print_summary(&trip),
            "breakdown" => print_breakdown(&trip),
            "reset" => {
                trip.reset();
                println!("Calculator reset");
            }
            "help" => print_plan_help(),
            "quit" | "exit" => break,
            other => println!("Unknown command '{}' (try 'help')", other),
        }
    }

    Ok(())
}

fn print_plan_help() {
    println!("Commands:");
    println!("  flight     add a flight leg");
    println!("  hotel      add a hotel stay");
    println!("  transport  add ground transport");
    println!("  activity   add leisure activity days");
    println!("  summary    show trip summary (with JSON)");
    println!("  breakdown  show per-item breakdown");
    println!("  reset      start a new trip");
    println!("  quit       exit");
}

fn report_added(what: &str, result: FootprintResult<KgCo2>) {
    match result {
        Ok(emissions) => println!("{} added: {}", what, emissions),
        Err(e) => print_error(&e),
    }
}

fn add_flight(trip: &mut TripCalculator) -> FootprintResult<KgCo2> {
    let distance = parse_quantity("distance_km", &prompt("Distance (km): ")?)?;
    let passengers = parse_count("passengers", &prompt_or("Passengers [1]: ", "1")?)?;
    let class = prompt_or("Class (economy/business/first) [economy]: ", "economy")?;
    Ok(trip.calculate_flight(Kilometers(distance), passengers, &class))
}

fn add_hotel(trip: &mut TripCalculator) -> FootprintResult<KgCo2> {
    let nights = parse_count("nights", &prompt("Nights: ")?)?;
    let tier = prompt_or("Type (budget/standard/luxury) [standard]: ", "standard")?;
    Ok(trip.calculate_hotel(nights, &tier))
}

fn add_transport(trip: &mut TripCalculator) -> FootprintResult<KgCo2> {
    let distance = parse_quantity("distance_km", &prompt("Distance (km): ")?)?;
    let mode = prompt_or("Mode (car/train/bus/taxi) [car]: ", "car")?;
    Ok(trip.calculate_transport(Kilometers(distance), &mode))
}

fn add_activity(trip: &mut TripCalculator) -> FootprintResult<KgCo2> {
    let days = parse_count("days", &prompt("Days: ")?)?;
    let intensity = prompt_or("Intensity (low/medium/high) [medium]: ", "medium")?;
    Ok(trip.calculate_activity(days, &intensity))
}

fn print_summary(trip: &TripCalculator) {
    let summary = TripSummary::from_calculator(trip);

    println!("═══════════════════════════════════════");
    println!("  TRIP SUMMARY");
    println!("═══════════════════════════════════════");
    println!();
    println!("Total emissions:  {}", summary.total_emissions_kg);
    println!("Trees to offset:  {}", summary.trees_needed);
    println!(
        "Vs. average trip: {:.1} kg ({:.0}% of {:.0} kg)",
        summary.comparison.difference_kg,
        summary.comparison.percentage_of_average,
        summary.comparison.average_trip_kg
    );
    println!();

    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&summary) {
        println!("{}", json);
    }
}

fn print_breakdown(trip: &TripCalculator) {
    let breakdown = trip.breakdown();
    if breakdown.is_empty() {
        println!("No activities recorded yet");
        return;
    }

    println!("{:<26} {:>10} {:>8} {:>12}", "Activity", "Quantity", "Unit", "kg CO2");
    for item in &breakdown {
        println!(
            "{:<26} {:>10.1} {:>8} {:>12.1}",
            item.activity, item.quantity, item.unit, item.emissions_kg.0
        );
    }
    println!("{:<46} {:>12.1}", "Total", trip.total_emissions().0);
}

// ============================================================================
// Batch report
// ============================================================================

fn run_report(
    input: &Path,
    period_label: &str,
    top: usize,
    export: Option<&Path>,
) -> FootprintResult<()> {
    let period = Period::from_label(period_label).ok_or_else(|| {
        FootprintError::invalid_input("period", period_label, "Expected daily, monthly, or yearly")
    })?;

    let raw = RecordSet::from_csv_path(input)?;
    info!("loaded {} rows from {}", raw.len(), input.display());

    if let Some(column) = raw.missing_columns().first() {
        return Err(FootprintError::missing_column(*column));
    }

    let cleaned = raw.clean()?;
    info!("{} rows after cleaning", cleaned.len());

    println!("═══════════════════════════════════════");
    println!("  TRIP RECORDS REPORT");
    println!("═══════════════════════════════════════");
    println!();
    println!("Rows loaded:   {}", raw.len());
    println!("Rows cleaned:  {}", cleaned.len());
    println!();

    println!("{} emissions:", period.display_name());
    for (bucket, kg) in cleaned.aggregate_by_period(period) {
        println!("  {:<10} {:>12.1} kg", period.format_bucket(bucket), kg);
    }
    println!();

    println!("By activity type:");
    println!("  {:<16} {:>10} {:>10} {:>7}", "Activity", "Sum", "Mean", "Count");
    for (activity, stats) in cleaned.activity_summary() {
        println!(
            "  {:<16} {:>10.2} {:>10.2} {:>7}",
            activity, stats.sum, stats.mean, stats.count
        );
    }
    println!();

    println!("Top {} activities:", top);
    for row in cleaned.top_activities(top) {
        println!(
            "  {}  {:<16} {:>10.1} kg",
            row.date, row.activity_type, row.emissions_kg
        );
    }

    if let Some(path) = export {
        cleaned.to_csv_path(path)?;
        println!();
        println!("Cleaned dataset exported to {}", path.display());
    }

    Ok(())
}

// ============================================================================
// Input helpers
// ============================================================================

fn prompt(text: &str) -> FootprintResult<String> {
    print!("{}", text);
    io::stdout()
        .flush()
        .map_err(|e| FootprintError::file_error("flush", "stdout", e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| FootprintError::file_error("read", "stdin", e.to_string()))?;
    Ok(input.trim().to_string())
}

fn prompt_or(text: &str, default: &str) -> FootprintResult<String> {
    let input = prompt(text)?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Parse a non-negative quantity; the core assumes sign validation
/// happened out here.
fn parse_quantity(field: &'static str, raw: &str) -> FootprintResult<f64> {
    let value: f64 = raw
        .parse()
        .map_err(|_| FootprintError::invalid_input(field, raw, "Expected a number"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(FootprintError::invalid_input(
            field,
            raw,
            "Must be a non-negative number",
        ));
    }
    Ok(value)
}

fn parse_count(field: &'static str, raw: &str) -> FootprintResult<u32> {
    raw.parse().map_err(|_| {
        FootprintError::invalid_input(field, raw, "Expected a non-negative whole number")
    })
}
