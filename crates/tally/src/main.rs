#![forbid(unsafe_code)]

//! The `tally` binary: mounts the counter widget in a terminal program.

use clap::Parser;
use runloop::Program;
use tracing_subscriber::EnvFilter;

use tally::{App, Cli, Command, Config, Descriptor};

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so they never corrupt the widget's screen.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    if cli.command == Some(Command::Describe) {
        println!("{}", Descriptor::for_widget().to_json()?);
        return Ok(());
    }

    let config = Config::from_cli(&cli);
    tint::set_color_enabled(config.color);

    let app = App::from_config(&config);
    Program::new(app).with_alt_screen().run()?;

    Ok(())
}
