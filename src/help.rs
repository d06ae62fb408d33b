use current_platform::CURRENT_PLATFORM;

use crate::operations::Operation;

pub fn print_help(bin_name: &str, operation: &Operation) {
    println!("Version: {}", version_string());
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!("Usage: {bin_name} [--help]");
    println!();
    println!("{}", operation.description());
    println!("Asks for a folder, then processes every .png file below it.");
    println!("Files are overwritten in place.");
    println!();
    println!("Set RUST_LOG=debug to see why each file was or wasn't changed.");
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    format!("{name} {version} {cpu}")
}
