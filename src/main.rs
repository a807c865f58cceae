#[macro_use]
extern crate tracing;

use std::path::PathBuf;

use berlin_clock::{config::Config, BerlinClock, TimeConverter};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Berlin Clock time converter")]
struct Opts {
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u32,
    /// Path to the configuration file
    #[structopt(short, long = "config", parse(from_os_str))]
    config_path: Option<PathBuf>,
    /// Print the effective configuration and exit
    #[structopt(long)]
    dump_config: bool,
    /// Convert the current local time
    #[structopt(long, conflicts_with = "time")]
    now: bool,
    /// Time to convert, as HH:MM:SS
    time: Option<String>,
}

fn run(opts: Opts) -> color_eyre::eyre::Result<()> {
    // Load configuration
    let config = if let Some(config_path) = opts.config_path.as_deref() {
        Config::load_file(config_path)?
    } else {
        Config::load_default()?
    };

    // Dump configuration if this was asked
    if opts.dump_config {
        print!("{}", config.to_string()?);
        return Ok(());
    }

    let time = if opts.now {
        berlin_clock::time::TimeComponents::from(&chrono::Local::now()).to_string()
    } else {
        opts.time.unwrap_or_default()
    };

    let clock = BerlinClock::from(&config);
    info!(%time, separator = ?clock.separator(), "converting");

    println!("{}", clock.convert_time(&time)?);
    Ok(())
}

fn install_tracing(opts: &Opts) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let fmt_layer = fmt::layer().with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_env("BERLIN_CLOCK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(match opts.verbose {
            0 => "berlin_clock=warn",
            1 => "berlin_clock=info",
            2 => "berlin_clock=debug",
            _ => "berlin_clock=trace",
        })
    });

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .try_init()
}

#[paw::main]
fn main(opts: Opts) -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    install_tracing(&opts)?;

    run(opts)
}
