mod ais;
mod entity;

pub use ais::*;
pub use entity::*;
