use std::path::PathBuf;

use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid configuration"), context(false))]
    Config {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: config::ConfigError,
    },
    #[snafu(display("Failed to read dataset '{}'", path.display()))]
    Dataset {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
        #[snafu(source)]
        error: csv::Error,
    },
    #[snafu(display("Failed to publish vessel entity"), context(false))]
    Sink {
        #[snafu(implicit)]
        location: Location,
        source: ais_relay_core::Error,
    },
    #[snafu(display("Failed to construct the http client"), context(false))]
    HttpClient {
        #[snafu(implicit)]
        location: Location,
        source: http_client::Error,
    },
    #[snafu(display("Failed to listen for shutdown signals"))]
    Signal {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: std::io::Error,
    },
}
