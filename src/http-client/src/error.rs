use reqwest::StatusCode;
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("HTTP reqwest error"), context(false))]
    Reqwest {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: reqwest::Error,
    },
    #[snafu(display("HTTP middleware error"), context(false))]
    Middleware {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: reqwest_middleware::Error,
    },
    #[snafu(display("Invalid header value"), context(false))]
    InvalidHeader {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: http::header::InvalidHeaderValue,
    },
    #[snafu(display("HTTP request failed, status: '{status}', url: '{url}', body: '{body}'"))]
    FailedRequest {
        #[snafu(implicit)]
        location: Location,
        url: String,
        status: StatusCode,
        body: String,
    },
}

impl Error {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::FailedRequest { status, .. } => Some(*status),
            Error::Reqwest { error, .. } => error.status(),
            Error::Middleware {
                error: reqwest_middleware::Error::Reqwest(error),
                ..
            } => error.status(),
            Error::Middleware { .. } => None,
            Error::InvalidHeader { .. } => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Reqwest { error, .. } => error.is_timeout(),
            Error::Middleware {
                error: reqwest_middleware::Error::Reqwest(error),
                ..
            } => error.is_timeout(),
            _ => false,
        }
    }
}
