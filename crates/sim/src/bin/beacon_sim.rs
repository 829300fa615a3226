//! beacon broadcast simulation for Mirage

use anyhow::Result;
use colored::Colorize;
use mirage_sim::{scenarios, AirPresets};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    println!("{}", "Mirage Beacon Simulation".bright_blue().bold());
    println!("{}", "========================".bright_blue());
    println!();

    let test_scenarios = vec![
        ("Clean Air", AirPresets::clean_air()),
        ("Busy Air", AirPresets::busy_air()),
        ("Hostile Air", AirPresets::hostile_air()),
    ];

    for (name, config) in test_scenarios {
        println!("{}", format!("\n>>> Scenario: {}", name).bright_green().bold());
        println!("Packet Loss: {}%", (config.packet_loss * 100.0) as u32);
        println!("Latency: {:?}", config.latency);
        println!();

        scenarios::broadcast_demo(config, 48).await;

        println!("{}", "Scenario complete!".bright_yellow());
        println!("{}", "-".repeat(50));
    }

    println!("\n{}", "All scenarios complete!".bright_green().bold());

    Ok(())
}
