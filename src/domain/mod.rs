mod cell;
mod board;
mod engine;
mod pattern;
pub mod catalog;

pub use cell::Cell;
pub use board::Board;
pub use engine::Engine;
pub use pattern::Pattern;
pub use catalog::{Catalog, catalog};
