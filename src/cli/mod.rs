use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use exercises::fundamentals::{
    Interval, IntervalsAdjacencyDetector, NegativeNumberValidator, StringDuplicator,
};
use exercises::scenario::{self, Scenario, ScenarioReport, USE_CASES};

#[derive(Clone, Copy)]
pub struct Config {
    pub verbose: bool,
    pub pretty: bool,
}

pub fn run_scenario(path: &Path, config: &Config) -> Result<()> {
    let scenario = Scenario::from_path(path)
        .with_context(|| format!("Failed to load scenario {}", path.display()))?;

    if config.verbose {
        eprintln!("Running {} scenario from {}", scenario.use_case(), path.display());
    }

    let report = scenario::run(&scenario)
        .with_context(|| format!("Failed to run scenario {}", path.display()))?;
    println!("{}", render_report(&report, config.pretty)?);
    Ok(())
}

fn render_report(report: &ScenarioReport, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    rendered.context("Failed to serialize scenario report")
}

pub fn list(config: &Config) {
    if config.verbose {
        eprintln!("{} use case(s) available", USE_CASES.len());
    }
    for use_case in USE_CASES {
        println!("{}", use_case);
    }
}

#[derive(Serialize)]
struct CheckResult<T: Serialize> {
    check: &'static str,
    result: T,
}

fn print_check<T: Serialize>(check: &'static str, result: T) {
    // Serializing a bool or a string into JSON cannot fail.
    if let Ok(line) = serde_json::to_string(&CheckResult { check, result }) {
        println!("{}", line);
    }
}

pub fn check_negative(number: i32) {
    print_check("negative", NegativeNumberValidator.is_negative(number));
}

pub fn check_duplicate(input: &str) {
    print_check("duplicate", StringDuplicator.duplicate(input));
}

pub fn check_adjacent(a: (i32, i32), b: (i32, i32)) -> Result<()> {
    let a = Interval::new(a.0, a.1).context("Invalid first interval")?;
    let b = Interval::new(b.0, b.1).context("Invalid second interval")?;
    print_check("adjacent", IntervalsAdjacencyDetector.is_adjacent(&a, &b));
    Ok(())
}
