//! Heat grid → RGB pixel buffer

use super::grid::HeatGrid;
use super::palette::Palette;
use tracing::debug;

/// Owns the RGB output buffer and fills it from a heat grid.
///
/// The buffer is allocated once at `3 * width * height` bytes and overwritten in place
/// on every render.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    width: usize,
    height: usize,
    buffer: Vec<u8>,
}

impl FrameRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let len = width * height * 3;
        debug!("Allocating {}x{} RGB frame buffer ({} bytes)", width, height, len);
        Self {
            width,
            height,
            buffer: vec![0; len],
        }
    }

    /// Map every cell through the palette, row-major, three bytes per pixel.
    ///
    /// # Panics
    ///
    /// Panics if `grid` does not have the renderer's dimensions.
    pub fn render(&mut self, grid: &HeatGrid, palette: &Palette) -> &[u8] {
        assert_eq!(
            (grid.width(), grid.height()),
            (self.width, self.height),
            "grid and frame buffer dimensions differ"
        );

        for (pixel, &heat) in self.buffer.chunks_exact_mut(3).zip(grid.cells()) {
            pixel.copy_from_slice(&palette.get(heat).to_array());
        }
        &self.buffer
    }

    /// The most recently rendered frame.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Bytes per scanline.
    pub fn stride(&self) -> usize {
        self.width * 3
    }
}
