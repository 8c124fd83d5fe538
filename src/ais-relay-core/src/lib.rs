#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Domain types and ports shared between the ais-relay binary and its entity sinks.

mod domain;
mod error;
mod ports;

#[cfg(any(test, feature = "test"))]
mod test_helper;

pub use domain::*;
pub use error::*;
pub use ports::*;

#[cfg(any(test, feature = "test"))]
pub use test_helper::*;
