use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use sheetdemo::config::Config;
use sheetdemo::{logging, ui};

/// Demo application for the sheet-controller crate.
#[derive(Debug, Parser)]
#[command(name = "sheetdemo", version, about)]
struct Args {
    /// Path to an alternate config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the UI tick rate in milliseconds.
    #[arg(long)]
    tick_rate: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::load_from(path).context("loading config")?,
        None => Config::load().context("loading config")?,
    };
    if let Some(tick_rate) = args.tick_rate {
        config.tick_rate_ms = tick_rate;
    }
    config.validate().context("validating config")?;

    ui::run(&config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn args_default_to_nothing() {
        let args = Args::try_parse_from(["sheetdemo"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.tick_rate.is_none());
    }

    #[test]
    fn args_parse_overrides() {
        let args =
            Args::try_parse_from(["sheetdemo", "--config", "alt.toml", "--tick-rate", "100"])
                .unwrap();
        assert_eq!(args.config.as_deref(), Some(std::path::Path::new("alt.toml")));
        assert_eq!(args.tick_rate, Some(100));
    }
}
