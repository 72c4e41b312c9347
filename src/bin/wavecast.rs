use clap::Parser;
use std::path::PathBuf;

use wavecast::campus::Campus;
use wavecast::report::SimulationReport;
use wavecast::sim::engine::DistributionMode;
use wavecast::sim::runner::DailySimulation;
use wavecast::sim::{DEFAULT_CLIENT_TARGET, DEVICES_PER_CLIENT};

#[derive(Parser)]
#[command(name = "wavecast")]
#[command(about = "Campus WiFi client load simulator", long_about = None)]
struct Cli {
    /// Building roster CSV (building name, zone, AP count)
    #[arg(short, long)]
    config: PathBuf,

    /// Output JSON file path
    #[arg(short, long, default_value = "campus_simulation.json")]
    output: PathBuf,

    /// Distribute each zone's quota independently instead of campus-wide
    #[arg(long)]
    quota_based: bool,

    /// Target client population
    #[arg(long, default_value_t = DEFAULT_CLIENT_TARGET)]
    clients: u32,
}

fn print_campus(campus: &Campus) {
    println!("Loading campus configuration:");
    println!("  Buildings: {}", campus.buildings().len());
    println!("  Total APs: {}", campus.total_aps());
    println!("  Zones: {}", campus.zones().len());

    println!("\nClient distribution by zone:");
    for (zone, info) in campus.zones() {
        println!(
            "  Zone {:2}: {:5} clients, {:4} APs, {:2} buildings",
            zone, info.client_quota, info.ap_count, info.building_count
        );
    }

    let allocated: u64 = campus
        .zones()
        .values()
        .map(|info| u64::from(info.client_quota))
        .sum();
    println!(
        "\nTotal clients: {} ({} devices)",
        allocated,
        allocated * DEVICES_PER_CLIENT
    );
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mode = if cli.quota_based {
        DistributionMode::QuotaBased
    } else {
        DistributionMode::FullLoad
    };

    let campus = Campus::from_file(&cli.config, cli.clients)?;
    print_campus(&campus);

    println!("\nStarting campus WiFi simulation...");
    println!(
        "  Target: {} clients ({} devices)",
        campus.client_target(),
        u64::from(campus.client_target()) * DEVICES_PER_CLIENT
    );
    println!(
        "  Infrastructure: {} APs across {} zones",
        campus.total_aps(),
        campus.zones().len()
    );

    let hourly = DailySimulation::new(&campus, mode).run();
    let report = SimulationReport::new(&campus, mode, hourly);
    report.save_to_file(&cli.output)?;

    println!();
    report.print_summary();
    println!("Output: {}", cli.output.display());

    Ok(())
}
