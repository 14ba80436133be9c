mod cli;
mod platform;

use clap::Parser;
use cli::Cli;
use platform::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    platform::logging::initialize(cli.log.into(), cli.level());

    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    platform::run_app(config, cli.format)?;
    Ok(())
}
