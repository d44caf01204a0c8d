//! Heat grid storage

/// Row-major grid of heat intensities.
///
/// Rows are scanlines; row `0` is the top of the image and the last row is where heat
/// is injected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatGrid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl HeatGrid {
    /// Zeroed grid. Callers validate that both dimensions are positive.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.height && column < self.width);
        row * self.width + column
    }

    /// Heat at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> u32 {
        self.cells[self.index(row, column)]
    }

    /// Set the heat at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, heat: u32) {
        let idx = self.index(row, column);
        self.cells[idx] = heat;
    }

    /// One scanline.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not below the grid height.
    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [u32] {
        let start = row * self.width;
        &mut self.cells[start..start + self.width]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u32] {
        &mut self.cells
    }

    /// Hottest cell, `0` for a cold grid.
    pub fn max_heat(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all heat values.
    pub fn total_heat(&self) -> u64 {
        self.cells.iter().map(|&h| u64::from(h)).sum()
    }
}
