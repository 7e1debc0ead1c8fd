use anyhow::Result;
use clap::Parser;

use entdesk::cli::Cli;
use entdesk::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    entdesk::trace::init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    tracing::info!(base_url = %config.service.base_url, "starting entitlement desk");
    entdesk::ui::run(config, cli.user.clone())
}
