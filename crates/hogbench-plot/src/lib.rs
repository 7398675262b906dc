//! Chart rendering for hogbench.
//!
//! This crate defines the `ChartRenderer` trait that turns backend-independent
//! chart descriptions into files, and the `plotters` implementation used by
//! the CLI.

pub mod draw;
pub mod font;
pub mod renderer;

pub use draw::PlottersRenderer;
pub use renderer::ChartRenderer;
