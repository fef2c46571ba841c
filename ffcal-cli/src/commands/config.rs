use anyhow::Result;
use ffcal_core::config::FfcalConfig;
use owo_colors::OwoColorize;

pub fn run(config: &FfcalConfig) -> Result<()> {
    let config_path = FfcalConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!();
    println!("{}", "Effective settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}
