use clap::Parser;
use mapkit::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init(cli.verbose)?;

    let stdout = std::io::stdout();
    cli::run(cli, &mut stdout.lock())
}

fn init(verbose: bool) -> anyhow::Result<()> {
    mapkit::init_logging(verbose)?;
    tracing::debug!(version = mapkit::VERSION, built = mapkit::BUILD_DATE, "Starting mapkit");
    Ok(())
}
