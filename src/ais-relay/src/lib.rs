#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Implements a binary that replays a recorded AIS dataset into a per-vessel cache of latest
//! known positions and periodically publishes that cache as entities to a Lattice mesh.

pub mod dataset;
pub mod error;
pub mod lattice;
pub mod publisher;
pub mod record_stream;
pub mod scheduler;
pub mod settings;
pub mod startup;
pub mod vessel_cache;

pub use error::{Error, Result};
