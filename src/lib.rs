// Domain layer - board, engine and patterns
pub mod domain;
pub mod error;

// Application layer - playback loop and configuration
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Board, Catalog, Cell, Engine, Pattern, catalog};
pub use error::{LifeError, Result};
pub use application::{PlayConfig, Renderer, Simulation};
