//! Format listing command

use anyhow::Result;
use lutforge_color::LogFormat;

pub fn run() -> Result<()> {
    println!("Supported log formats:");
    println!("{}", "-".repeat(60));
    for format in LogFormat::ALL {
        println!("  {:22} {}", format.name(), format.full_name());
    }
    Ok(())
}
