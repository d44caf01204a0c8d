//! Fire effect: heat grid simulation, palette and frame rendering

mod grid;
mod palette;
mod renderer;
mod simulator;

pub use grid::HeatGrid;
pub use palette::{Palette, Rgb8, PALETTE_SIZE};
pub use renderer::FrameRenderer;
pub use simulator::FireSimulator;
