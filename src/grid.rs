use rand::Rng;

/// Fixed size of the field in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of whole cells of side `cell_px` that fit into the viewport.
    ///
    /// Returns `None` if the viewport can't hold a single row or column.
    pub fn from_viewport(width_px: f32, height_px: f32, cell_px: f32) -> Option<Self> {
        if cell_px.is_nan() || cell_px <= 0. {
            return None;
        }
        let rows = (height_px / cell_px).floor();
        let cols = (width_px / cell_px).floor();
        if rows >= 1. && cols >= 1. {
            Some(Self::new(rows as usize, cols as usize))
        } else {
            None
        }
    }

    pub fn area(&self) -> usize {
        self.rows * self.cols
    }
}

/// Rectangular field of cells, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a field filled with dead cells.
    pub fn blank(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1);
        Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    pub fn with_dimensions(dims: Dimensions) -> Self {
        Self::blank(dims.rows, dims.cols)
    }

    /// Builds a grid from rows of cells; all rows must have the same non-zero length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Option<Self> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Grid with exactly the given cells alive.
    pub fn with_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::blank(rows, cols);
        for &(row, col) in alive {
            grid.set(row, col, true);
        }
        grid
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = !self.cells[idx];
    }

    /// Each cell becomes alive only if three fair coin flips all succeed,
    /// so about one cell in eight is alive.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(0.5) && rng.gen_bool(0.5) && rng.gen_bool(0.5);
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Copy of `self` resized to `dims`: the overlapping region is kept,
    /// cells outside of it are dead.
    pub fn fitted_to(&self, dims: Dimensions) -> Grid {
        if self.dimensions() == dims {
            return self.clone();
        }
        let mut result = Self::with_dimensions(dims);
        for row in 0..self.rows.min(dims.rows) {
            for col in 0..self.cols.min(dims.cols) {
                result.set(row, col, self.get(row, col));
            }
        }
        result
    }

    /// Cells of `self` that differ from `other`, as `(row, col, alive_in_self)`.
    pub fn diff<'a>(
        &'a self,
        other: &'a Grid,
    ) -> impl Iterator<Item = (usize, usize, bool)> + 'a {
        assert_eq!(self.dimensions(), other.dimensions());
        let cols = self.cols;
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (&a, _))| (i / cols, i % cols, a))
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside of {}x{} grid",
            self.rows,
            self.cols
        );
        col + row * self.cols
    }
}

/// Immutable copy of a grid taken when a pattern is saved.
///
/// A snapshot owns its cells, so edits to the live grid never leak into
/// saved history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot(Grid);

impl Snapshot {
    pub fn capture(grid: &Grid) -> Self {
        Self(grid.clone())
    }

    pub fn grid(&self) -> &Grid {
        &self.0
    }
}

impl From<Grid> for Snapshot {
    fn from(grid: Grid) -> Self {
        Self(grid)
    }
}
