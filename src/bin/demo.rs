//! Device Power Consumption - Demo CLI
//!
//! Runs a few usage scenarios through the calculation engine and prints the
//! same output table the form shows, without starting a webview.

use device_power_consumption_lib::calc::{self, DeviceUsage};
use device_power_consumption_lib::core::Config;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let symbol = &config.display.currency_symbol;

    println!("==============================================");
    println!("   Device Power Consumption - Demo CLI");
    println!("==============================================\n");

    let scenarios = [
        ("Reference example", DeviceUsage { watts: 100, hours: 5, minutes: 30, tariff: config.defaults.tariff }),
        ("Fridge, always on", DeviceUsage { watts: 80, hours: 24, minutes: 0, tariff: config.defaults.tariff }),
        ("Unplugged device", DeviceUsage { watts: 0, hours: 12, minutes: 0, tariff: config.defaults.tariff }),
    ];

    for (label, usage) in scenarios {
        println!("=== {} ===", label);
        println!(
            "  Input:  {} W, {} h {} min per day, {:.4} {}/kWh",
            usage.watts, usage.hours, usage.minutes, usage.tariff, symbol
        );

        let formatted = calc::calculate(&usage).formatted();
        println!("  Output:");
        println!("    {:>10} kWh per year", formatted.kwh_per_year);
        println!("    {:>10} {}  per day", formatted.cost_per_day, symbol);
        println!("    {:>10} {}  per week", formatted.cost_per_week, symbol);
        println!("    {:>10} {}  per month", formatted.cost_per_month, symbol);
        println!("    {:>10} {}  per year\n", formatted.cost_per_year, symbol);
    }
}
