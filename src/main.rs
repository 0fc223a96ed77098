mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use commands::handle_runtime_commands;
use services::dataset::load_dataset;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let ayahs = load_dataset(&cli.data)?;
    handle_runtime_commands(&cli, &ayahs)?;

    Ok(())
}
