use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use kreisgrenzen::api;
use kreisgrenzen::config::FileConfig;
use kreisgrenzen::districts::extract_unique_districts;
use kreisgrenzen::fetcher::fetch_district;

/// Fetch German district boundaries from OpenStreetMap and save them as GeoJSON
///
/// Examples:
///   # Fetch boundaries for every district named in district_data.csv
///   kreisgrenzen
///
///   # Custom input table and output directory
///   kreisgrenzen --csv bavaria.csv --column kreis -o boundaries
#[derive(Parser, Debug)]
#[command(name = "kreisgrenzen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches kreisgrenzen.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV file holding the district column
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Name of the CSV column holding district labels
    #[arg(long)]
    column: Option<String>,

    /// Directory the per-district boundary files are written to
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .context(format!("Failed to read config file: {:?}", config_path))?;
        Some(toml::from_str(&contents).context("Failed to parse config file")?)
    } else {
        FileConfig::load()
    };

    let csv_path = args
        .csv
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.csv_path.clone()))
        .unwrap_or_else(|| PathBuf::from("district_data.csv"));
    let column = args
        .column
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.district_column.clone()))
        .unwrap_or_else(|| "district".to_string());
    let output_dir = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output_dir.clone()))
        .unwrap_or_else(|| PathBuf::from("shapefiles"));
    let overpass_config = file_config
        .as_ref()
        .and_then(|c| c.overpass.clone())
        .unwrap_or_default();

    println!("kreisgrenzen - District Boundary Collector");
    println!("==========================================");
    println!();

    if args.verbose {
        println!("Configuration:");
        println!("  CSV: {}", csv_path.display());
        println!("  Column: {}", column);
        println!("  Output directory: {}", output_dir.display());
        println!("  Overpass endpoint: {}", overpass_config.url);
        println!();
    }

    let districts = extract_unique_districts(&csv_path, &column)
        .context(format!("Failed to extract districts from {:?}", csv_path))?;

    let client =
        api::build_client(&overpass_config).context("Failed to create HTTP client")?;

    let bar = ProgressBar::new(districts.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner:.green} [{pos}/{len}] {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );

    let mut written = 0usize;
    let mut failed = 0usize;

    for district in &districts {
        bar.set_message(district.clone());

        match fetch_district(&client, &overpass_config, district, &output_dir) {
            Ok(path) => {
                written += 1;
                if args.verbose {
                    bar.println(format!("  {} -> {}", district, path.display()));
                }
            }
            Err(e) => {
                failed += 1;
                bar.println(format!("  {}: {}", district, e));
            }
        }

        bar.inc(1);
    }

    bar.finish_and_clear();

    println!();
    println!(
        "Done! Wrote {} of {} district boundaries ({} failed) in {:.1}s",
        written,
        districts.len(),
        failed,
        total_start.elapsed().as_secs_f32()
    );
    println!();
    println!("Output: {}", output_dir.display());

    Ok(())
}
