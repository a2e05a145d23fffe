use clap::Parser;
use meminspect_lib::host_inspector;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod banner;
mod output;

use output::MemoryReadings;

/// Print the GriCom Basic runtime banner with total and free system memory
#[derive(Parser)]
#[command(name = "meminspect", version, about)]
struct Cli {
    /// Output the memory readings as JSON instead of the banner
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let readings = MemoryReadings::read(&host_inspector());

    if cli.json {
        output::print_json(&readings)?;
    } else {
        output::print_banner(&readings)?;
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    // RUST_LOG wins over -v flags
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,meminspect_lib=info,meminspect=info".to_string(),
            2 => "info,meminspect_lib=debug,meminspect=debug".to_string(),
            _ => "debug,meminspect_lib=trace,meminspect=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
