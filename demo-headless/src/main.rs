use anyhow::{Context, Result};
use clap::Parser;
use cyclone_risk_core::forecast::Assessor;
use cyclone_risk_core::{
    Celsius, ForecastRequest, InferenceEngine, KilometersPerHour, Label, LabelDegrees, Percent,
    RiskLevel, RiskThresholds, Universe,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Cyclone risk demo with configurable readings
#[derive(Parser, Debug)]
#[command(name = "cyclone-risk-demo")]
#[command(about = "Fuzzy-logic cyclone risk scoring demo", long_about = None)]
struct Args {
    /// Temperature in °C
    #[arg(short, long, default_value_t = 28.0, allow_negative_numbers = true)]
    temperature: f64,

    /// Relative humidity in %
    #[arg(long, default_value_t = 85.0)]
    humidity: f64,

    /// Wind speed in km/h
    #[arg(short, long, default_value_t = 15.0)]
    wind_speed: f64,

    /// Output universe step (1.0 is the production resolution)
    #[arg(long, default_value_t = 1.0)]
    step: f64,

    /// Assess a JSON forecast request instead of a single reading
    #[arg(short, long)]
    forecast: Option<PathBuf>,

    /// Print a temperature sweep at saturated humidity and wind
    #[arg(short, long)]
    sweep: bool,
}

fn print_degrees(name: &str, degrees: &LabelDegrees) {
    let cells: Vec<String> = Label::ALL
        .iter()
        .map(|&label| format!("{label}={:.3}", degrees.get(label)))
        .collect();
    println!("  {name:<12} {}", cells.join("  "));
}

fn evaluate_single(engine: &InferenceEngine, args: &Args) {
    let temperature = Celsius::new(args.temperature);
    let humidity = Percent::new(args.humidity);
    let wind = KilometersPerHour::new(args.wind_speed);

    println!("Readings: {temperature}, {humidity}, {wind}\n");

    let eval = engine.evaluate(temperature, humidity, wind);
    println!("Fuzzified:");
    print_degrees("temperature", &eval.fuzzified.temperature);
    print_degrees("humidity", &eval.fuzzified.humidity);
    print_degrees("wind", &eval.fuzzified.wind);
    println!("\nActivations:");
    print_degrees("risk", &eval.activations);

    println!(
        "\nCentroid: {:.3}  Score: {:.0}  Level: {}",
        eval.centroid,
        eval.score,
        RiskLevel::from_score(eval.score)
    );
}

/// Humidity and wind at the peak of their `high` regions
const SATURATED_HUMIDITY: Percent = Percent::new(100.0);
const SATURATED_WIND: KilometersPerHour = KilometersPerHour::new(120.0);

fn sweep(engine: &InferenceEngine) {
    let humidity = SATURATED_HUMIDITY;
    let wind = SATURATED_WIND;

    println!("Temperature sweep at {humidity}, {wind}\n");
    println!("{:>8}  {:>6}  {:<6}", "temp", "score", "level");
    for t in (0..=45).step_by(3) {
        let temperature = Celsius::new(f64::from(t));
        let score = engine.compute_risk(temperature, humidity, wind);
        println!("{:>8}  {score:>6.0}  {:<6}", temperature.to_string(), RiskLevel::from_score(score).as_str());
    }
}

fn assess_forecast(engine: InferenceEngine, path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read forecast file {}", path.display()))?;
    let request: ForecastRequest = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse forecast file {}", path.display()))?;

    info!(intervals = request.forecast.len(), "assessing forecast");
    let assessment = Assessor::new(engine, RiskThresholds::default()).assess(&request)?;

    if let Some(headline) = assessment.alert.headline() {
        println!("ALERT: {headline}");
    }
    println!("{}", serde_json::to_string_pretty(&assessment)?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("=== Cyclone Risk Demo ===\n");

    let engine = InferenceEngine::with_universe(Universe::with_step(args.step));
    if engine.universe().sample_count() == 0 {
        anyhow::bail!(
            "step must be finite and positive and yield at most {} samples, got {}",
            Universe::MAX_SAMPLES,
            args.step
        );
    }

    if let Some(path) = &args.forecast {
        return assess_forecast(engine, path);
    }

    if args.sweep {
        sweep(&engine);
    } else {
        evaluate_single(&engine, &args);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_readings_reach_high_band() {
        let engine = InferenceEngine::default();
        let peak = engine.compute_risk(Celsius::new(45.0), SATURATED_HUMIDITY, SATURATED_WIND);
        assert_eq!(peak, 80.0);
        assert_eq!(RiskLevel::from_score(peak), RiskLevel::High);
    }

    #[test]
    fn test_cli_rejects_oversampled_step() {
        let engine = InferenceEngine::with_universe(Universe::with_step(1e-9));
        assert_eq!(engine.universe().sample_count(), 0);
    }
}
