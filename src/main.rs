use clap::Parser;
use itinerary::cli::commands::Cli;
use itinerary::cli::handlers;
use itinerary::io::{config_io, trip_io};
use itinerary::util::logging::{LogSink, init_logging};

fn main() {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it only logs when given a file
    let sink = match (&cli.command, cli.log_file.as_deref()) {
        (_, Some(path)) => LogSink::File(path),
        (None, None) => LogSink::Off,
        (Some(_), None) => LogSink::Stderr,
    };
    if let Err(e) = init_logging(sink) {
        eprintln!("warning: could not open log file: {}", e);
    }

    let result = match cli.command {
        None => launch_tui(&cli),
        Some(_) => handlers::dispatch(cli),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn launch_tui(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref(), &cwd)?;
    let trip = trip_io::load_trip(cli.trip_file.as_deref())?;
    tracing::info!(days = trip.day_count(), "starting tui");
    itinerary::tui::run(trip, config)
}
