use clap::Parser;

use pokemon_info::cli::Cli;
use pokemon_info::config::Config;
use pokemon_info::logging::init_tracing;
use pokemon_info::ui;

fn main() {
    let cli = Cli::parse();

    // Config problems are reported before the terminal is taken over
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = init_tracing(&config) {
        eprintln!("Warning: logging disabled: {}", err);
    }

    if let Err(err) = ui::run(&config, &cli.initial_name()) {
        tracing::error!(error = %err, "Fatal error");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load_from(&cli.config_path())?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}
