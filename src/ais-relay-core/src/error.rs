use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Snafu)]
#[snafu(module(sink_error), visibility(pub))]
pub enum Error {
    #[snafu(display("Timed out publishing entity '{entity_id}'"))]
    Timeout {
        #[snafu(implicit)]
        location: Location,
        entity_id: String,
    },
    #[snafu(display("Failed to publish entity '{entity_id}'"))]
    Publish {
        #[snafu(implicit)]
        location: Location,
        entity_id: String,
        #[snafu(source)]
        error: BoxedError,
    },
}

impl Error {
    pub fn entity_id(&self) -> &str {
        match self {
            Error::Timeout { entity_id, .. } | Error::Publish { entity_id, .. } => entity_id,
        }
    }
}
