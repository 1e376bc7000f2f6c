#[cfg(test)]
mod tests {
    use lifepad::{Dimensions, Grid, Snapshot};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const SEED: u64 = 42;

    #[test]
    fn test_blank() {
        let grid = Grid::blank(3, 5);
        assert_eq!(grid.dimensions(), Dimensions::new(3, 5));
        assert!(grid.is_empty());
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.iter_rows().count(), 3);
        assert!(grid.iter_rows().all(|row| row.len() == 5));
    }

    #[test]
    #[should_panic]
    fn test_blank_rejects_zero_rows() {
        Grid::blank(0, 4);
    }

    #[test]
    fn test_dimensions_from_viewport() {
        assert_eq!(
            Dimensions::from_viewport(1000., 610., 20.),
            Some(Dimensions::new(30, 50))
        );
        assert_eq!(Dimensions::from_viewport(19., 100., 20.), None);
        assert_eq!(Dimensions::from_viewport(100., 100., 0.), None);
    }

    #[test]
    fn test_toggle() {
        let mut grid = Grid::blank(4, 4);
        grid.toggle(1, 2);
        assert!(grid.get(1, 2));
        assert!(!grid.is_empty());
        grid.toggle(1, 2);
        assert!(!grid.get(1, 2));
        assert!(grid.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_toggle_out_of_bounds() {
        let mut grid = Grid::blank(4, 4);
        grid.toggle(4, 0);
    }

    #[test]
    fn test_clear_keeps_dimensions() {
        let mut grid = Grid::with_alive(3, 7, &[(0, 0), (2, 6), (1, 3)]);
        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.dimensions(), Dimensions::new(3, 7));
    }

    #[test]
    fn test_equality() {
        let a = Grid::with_alive(3, 3, &[(1, 1)]);
        let b = Grid::with_alive(3, 3, &[(1, 1)]);
        let c = Grid::with_alive(3, 3, &[(1, 2)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(Grid::blank(3, 3), Grid::blank(3, 4));
    }

    #[test]
    fn test_randomize_is_sparse() {
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let mut grid = Grid::blank(100, 100);
        let mut alive = 0;
        const TRIALS: usize = 20;
        for _ in 0..TRIALS {
            grid.randomize(&mut rng);
            alive += grid.population();
        }
        let rate = alive as f64 / (TRIALS * 100 * 100) as f64;
        // 1/8 expected; the standard deviation over 200'000 cells is ~0.0007
        assert!((rate - 0.125).abs() < 0.01, "rate={rate}");
    }

    #[test]
    fn test_randomize_is_reproducible() {
        let mut a = Grid::blank(20, 20);
        let mut b = Grid::blank(20, 20);
        a.randomize(&mut ChaCha8Rng::seed_from_u64(SEED));
        b.randomize(&mut ChaCha8Rng::seed_from_u64(SEED));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
        assert_eq!(grid, Grid::with_alive(2, 2, &[(0, 0), (1, 1)]));
        assert!(Grid::from_rows(vec![]).is_none());
        assert!(Grid::from_rows(vec![vec![]]).is_none());
        assert!(Grid::from_rows(vec![vec![true], vec![true, false]]).is_none());
    }

    #[test]
    fn test_fitted_to() {
        let grid = Grid::with_alive(3, 3, &[(0, 0), (2, 2), (1, 2)]);

        let smaller = grid.fitted_to(Dimensions::new(2, 4));
        assert_eq!(smaller, Grid::with_alive(2, 4, &[(0, 0), (1, 2)]));

        let larger = grid.fitted_to(Dimensions::new(5, 5));
        assert_eq!(larger, Grid::with_alive(5, 5, &[(0, 0), (2, 2), (1, 2)]));

        assert_eq!(grid.fitted_to(grid.dimensions()), grid);
    }

    #[test]
    fn test_diff() {
        let a = Grid::with_alive(3, 4, &[(0, 0), (1, 3)]);
        let b = Grid::with_alive(3, 4, &[(0, 0), (2, 1)]);
        let mut changes = a.diff(&b).collect::<Vec<_>>();
        changes.sort();
        assert_eq!(changes, vec![(1, 3, true), (2, 1, false)]);
        assert_eq!(a.diff(&a).count(), 0);
    }

    #[test]
    fn test_snapshot_isolation() {
        let mut grid = Grid::with_alive(4, 4, &[(1, 1)]);
        let snapshot = Snapshot::capture(&grid);
        grid.toggle(1, 1);
        grid.toggle(3, 3);
        assert_eq!(snapshot.grid(), &Grid::with_alive(4, 4, &[(1, 1)]));
    }
}
