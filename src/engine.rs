use crate::Grid;

/// Number of live cells among the up to 8 neighbours of `(row, col)`.
///
/// The field is bounded: cells beyond the edges are not counted.
pub fn neighbor_count(grid: &Grid, row: usize, col: usize) -> u8 {
    let r1 = row.saturating_sub(1);
    let r2 = (row + 1).min(grid.rows() - 1);
    let c1 = col.saturating_sub(1);
    let c2 = (col + 1).min(grid.cols() - 1);

    let mut count = 0;
    for r in r1..=r2 {
        for c in c1..=c2 {
            if (r, c) != (row, col) && grid.get(r, c) {
                count += 1;
            }
        }
    }
    count
}

/// Computes the next generation. Every cell is decided from `grid` alone,
/// which is never modified.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::with_dimensions(grid.dimensions());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let neibs = neighbor_count(grid, row, col);
            let alive = if grid.get(row, col) {
                neibs == 2 || neibs == 3
            } else {
                neibs == 3
            };
            next.set(row, col, alive);
        }
    }
    next
}

/// Successive generations of a grid, starting with the one after it.
///
/// Ends once a generation maps onto itself (not yielded twice) or after
/// yielding an empty grid.
pub fn generations(grid: &Grid) -> Generations {
    Generations {
        current: Some(grid.clone()),
    }
}

pub struct Generations {
    current: Option<Grid>,
}

impl Iterator for Generations {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        let current = self.current.take()?;
        if current.is_empty() {
            return None;
        }
        let next = step(&current);
        if next == current {
            return None;
        }
        self.current = Some(next.clone());
        Some(next)
    }
}
