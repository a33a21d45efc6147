mod argparse;
mod commands;
mod config;
mod utils;

use argparse::parse_args;
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = parse_args();
    utils::init_logger(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    commands::handle_command(cli.command, &config)
}
