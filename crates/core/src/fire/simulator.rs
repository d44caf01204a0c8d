//! Fire simulation: heat injection and diffusion
//!
//! Each tick has two phases:
//!
//! 1. **Seed**: every cell of the bottom row gets a fresh uniform value in `0..=255`.
//! 2. **Diffuse**: every other row, scanned top to bottom and updated in place, becomes
//!    a decayed average of the cells below it:
//!
//!    ```text
//!    new(y, x) = (g(y+1, x-1) + g(y+1, x) + g(y+1, x+1) + g(y+2, x)) * 32 / 129
//!    ```
//!
//!    Columns wrap horizontally and rows wrap vertically, so the row just above the
//!    bottom reads row `0` (already updated this tick) as its "two below" neighbour.
//!
//! With bottom values at most 255 no diffused value exceeds `4 * 255 * 32 / 129 = 253`,
//! so heat stays inside the palette. Flames rise because each row only reads from below
//! and cool because the weights sum to `128/129`.

use super::grid::HeatGrid;
use super::palette::Palette;
use super::renderer::FrameRenderer;
use crate::config::FireConfig;
use crate::error::FireError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, trace};

/// Offset added to each raw draw before reduction.
const SEED_OFFSET: i32 = 32768;

const DIFFUSION_NUMERATOR: u32 = 32;
const DIFFUSION_DENOMINATOR: u32 = 129;

/// Fire effect state: heat grid, palette, frame buffer and random source.
///
/// # Example
///
/// ```
/// use fire_effect_core::{FireConfig, FireSimulator};
///
/// let mut sim = FireSimulator::new(FireConfig::default().with_seed(1)).unwrap();
/// let frame = sim.update();
/// assert_eq!(frame.len(), 30 * 100 * 3);
/// ```
#[derive(Debug)]
pub struct FireSimulator<R = StdRng> {
    grid: HeatGrid,
    palette: Palette,
    renderer: FrameRenderer,
    rng: R,
    frame: u64,
}

impl FireSimulator<StdRng> {
    /// Create a simulator with a zeroed grid and the fire palette.
    ///
    /// Uses `config.seed` when set, otherwise seeds from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`FireError::Config`] for invalid dimensions and [`FireError::Color`] if the
    /// palette cannot be built.
    pub fn new(config: FireConfig) -> Result<Self, FireError> {
        let rng = match config.seed {
            Some(seed) => {
                info!("Seeding fire simulator from config (seed={})", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                info!("Seeding fire simulator from the operating system");
                StdRng::from_os_rng()
            }
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> FireSimulator<R> {
    /// Create a simulator that draws heat from the given generator.
    ///
    /// `config.seed` is ignored; the generator's own state decides the sequence.
    ///
    /// # Errors
    ///
    /// See [`FireSimulator::new`].
    pub fn with_rng(config: FireConfig, rng: R) -> Result<Self, FireError> {
        config.validate()?;
        let palette = Palette::fire()?;

        info!(
            "Creating fire simulator: {}x{} grid",
            config.width, config.height
        );

        Ok(Self {
            grid: HeatGrid::new(config.width, config.height),
            palette,
            renderer: FrameRenderer::new(config.width, config.height),
            rng,
            frame: 0,
        })
    }

    /// Advance one step and render it.
    ///
    /// The returned buffer is row-major RGB, `3 * width * height` bytes. It is borrowed
    /// from the simulator and is overwritten by the next call; copy it to keep a frame.
    pub fn update(&mut self) -> &[u8] {
        self.tick();
        self.render()
    }

    /// Render the current grid without advancing it.
    pub fn render(&mut self) -> &[u8] {
        self.renderer.render(&self.grid, &self.palette)
    }

    /// Advance one step without rendering.
    pub fn tick(&mut self) {
        seed_bottom_row(&mut self.grid, &mut self.rng);
        diffuse(&mut self.grid);
        self.frame += 1;

        trace!(
            "Fire tick {}: bottom row heat={}",
            self.frame,
            self.grid
                .row(self.grid.height() - 1)
                .iter()
                .map(|&h| u64::from(h))
                .sum::<u64>()
        );
    }

    /// Current heat values.
    pub fn grid(&self) -> &HeatGrid {
        &self.grid
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Last rendered frame (all black before the first [`update`](Self::update)).
    pub fn buffer(&self) -> &[u8] {
        self.renderer.buffer()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Bytes per scanline of the rendered buffer.
    pub fn stride(&self) -> usize {
        self.renderer.stride()
    }

    /// Number of ticks run so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}

/// Fill the bottom row with uniform heat in `0..=255`.
fn seed_bottom_row<R: Rng>(grid: &mut HeatGrid, rng: &mut R) {
    let bottom = grid.height() - 1;
    for cell in grid.row_mut(bottom) {
        *cell = seed_heat(rng.random_range(0..i32::MAX));
    }
}

/// Reduce a raw draw to a heat value: `|32768 + draw| mod 256` in wrapping `i32`.
#[inline]
fn seed_heat(draw: i32) -> u32 {
    SEED_OFFSET.wrapping_add(draw).unsigned_abs() % 256
}

/// Apply the decay filter to every row except the bottom one, in place.
fn diffuse(grid: &mut HeatGrid) {
    let width = grid.width();
    let height = grid.height();
    let cells = grid.cells_mut();

    for y in 0..height - 1 {
        let below = ((y + 1) % height) * width;
        let two_below = ((y + 2) % height) * width;
        for x in 0..width {
            let left = (x + width - 1) % width;
            let right = (x + 1) % width;
            let sum = cells[below + left]
                + cells[below + x]
                + cells[below + right]
                + cells[two_below + x];
            cells[y * width + x] = sum * DIFFUSION_NUMERATOR / DIFFUSION_DENOMINATOR;
        }
    }
}
