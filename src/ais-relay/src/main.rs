#![deny(warnings)]
#![deny(rust_2018_idioms)]

use std::path::PathBuf;

use ais_relay::{
    Result,
    settings::{DEFAULT_CONFIG_PATH, Settings},
    startup::App,
};
use clap::Parser;
use tracing::{Level, info};

/// AIS vessel to Lattice mesh integration.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the yaml configuration file.
    #[arg(long = "config", default_value = DEFAULT_CONFIG_PATH)]
    config_path: PathBuf,
}

#[snafu::report]
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::new(&args.config_path)?;

    tracing_subscriber::fmt()
        .with_max_level(Level::from(&settings.log_level))
        .init();

    info!("starting ais-relay");

    let app = App::build(&settings).await?;

    info!("press ctrl+c to exit");

    app.run().await
}
