//! plan-runner: headless deployment planning pipeline.
//!
//! Usage:
//!   plan-runner --scenario scenario.json --lat 34.0522 --lng -118.2437
//!   plan-runner --mission drone_detection --environment urban --area medium
//!
//! Runs scenario -> recommendation -> placement -> summary with every
//! recommended item selected, then writes the finalized plan document
//! as JSON.

use anyhow::{Context, Result};
use rfdeploy_core::{
    scenario::ScenarioDescriptor,
    types::{AreaSize, CoverageObjective, Environment, GeoPoint, MissionType, TerrainComplexity},
    workflow::EquipmentStage,
};
use std::env;
use std::fs;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let lat = parse_arg(&args, "--lat", 34.0522);
    let lng = parse_arg(&args, "--lng", -118.2437);
    let radius_m = parse_arg(&args, "--radius", 2000.0);
    let center = GeoPoint::new(lat, lng);

    let scenario = load_scenario(&args)?;
    scenario.validate()?;

    println!("RFeye Deployment Planner — plan-runner");
    println!("  project:  {}", scenario.project_name);
    println!("  center:   ({lat}, {lng})");
    println!("  radius:   {radius_m} m");
    println!();

    // Recommendation failures must never crash the surrounding
    // application: log the cause, show a generic message.
    let mut stage = match EquipmentStage::from_form(Some(scenario)) {
        Ok(stage) => stage,
        Err(e) => {
            log::error!("recommendation generation failed: {e}");
            eprintln!("Failed to generate equipment recommendations");
            std::process::exit(1);
        }
    };
    stage.select_all();

    println!("Recommended equipment:");
    for item in stage.recommendations() {
        println!(
            "  {:<16} {:<22} x{:<3} @ ${:>9.2}",
            item.id, item.name, item.quantity, item.unit_price
        );
    }
    println!("  estimated total: ${:.2}", stage.selected_cost());
    println!();

    let mut deployment = stage.proceed(center)?;
    deployment.plan.set_coverage_radius(radius_m);

    let summary = deployment.summary();
    println!("Deployment summary:");
    println!("  sensors:       {}", summary.total_sensors);
    println!("  coverage:      {} km²", summary.coverage_area_km2);
    println!("  total cost:    ${:.2}", summary.total_cost);
    println!();

    let document = deployment.finalize();
    let out_path = args
        .windows(2)
        .find(|w| w[0] == "--out")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| {
            format!("plan-{}.json", chrono::Local::now().format("%Y%m%d-%H%M%S"))
        });
    fs::write(&out_path, document.to_json()?)
        .with_context(|| format!("writing plan document to {out_path}"))?;
    println!("Plan document written to {out_path}");

    Ok(())
}

fn load_scenario(args: &[String]) -> Result<ScenarioDescriptor> {
    if let Some(path) = str_arg(args, "--scenario") {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading scenario file {path}"))?;
        return serde_json::from_str(&raw)
            .with_context(|| format!("parsing scenario file {path}"));
    }

    // Flag-built scenario for quick demo runs. Unknown enum strings
    // deserialize to the catch-all variants, matching the engine's
    // fall-through defaults.
    Ok(ScenarioDescriptor {
        project_name:         str_arg(args, "--project")
            .unwrap_or("RFeye Deployment")
            .to_string(),
        mission_type:         Some(parse_enum::<MissionType>(
            str_arg(args, "--mission").unwrap_or("spectrum_monitoring"),
        )?),
        environment:          parse_enum::<Environment>(
            str_arg(args, "--environment").unwrap_or("rural"),
        )?,
        coverage_objective:   parse_enum::<CoverageObjective>(
            str_arg(args, "--objective").unwrap_or("area_coverage"),
        )?,
        area_size:            parse_enum::<AreaSize>(
            str_arg(args, "--area").unwrap_or("medium"),
        )?,
        terrain_complexity:   parse_enum::<TerrainComplexity>(
            str_arg(args, "--terrain").unwrap_or("medium"),
        )?,
        special_requirements: str_arg(args, "--notes").map(str::to_string),
    })
}

fn parse_enum<T: serde::de::DeserializeOwned>(value: &str) -> Result<T> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .with_context(|| format!("parsing enum value '{value}'"))
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}
