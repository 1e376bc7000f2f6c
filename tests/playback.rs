#[cfg(test)]
mod tests {
    use lifepad::{Grid, Playback, PlaybackState, TickOutcome, Ticker, MAX_CATCH_UP_TICKS};
    use std::time::{Duration, Instant};

    const PERIOD: Duration = Duration::from_millis(100);

    fn block() -> Grid {
        Grid::with_alive(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)])
    }

    fn blinker() -> Grid {
        Grid::with_alive(5, 5, &[(2, 1), (2, 2), (2, 3)])
    }

    #[test]
    fn test_empty_grid_does_not_start() {
        let mut playback = Playback::new(PERIOD);
        assert!(!playback.start(&Grid::blank(4, 4), Instant::now()));
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert_eq!(playback.until_next_tick(Instant::now()), None);
    }

    #[test]
    fn test_toggle() {
        let now = Instant::now();
        let grid = blinker();
        let mut playback = Playback::new(PERIOD);
        playback.toggle(&grid, now);
        assert!(playback.is_running());
        playback.toggle(&grid, now);
        assert!(!playback.is_running());
        assert_eq!(playback.until_next_tick(now), None);
    }

    #[test]
    fn test_start_is_idempotent() {
        let t0 = Instant::now();
        let mut grid = blinker();
        let mut playback = Playback::new(PERIOD);
        assert!(playback.start(&grid, t0));
        // a second start must not reschedule or add a second timer
        assert!(playback.start(&grid, t0 + PERIOD / 2));
        assert_eq!(playback.until_next_tick(t0), Some(PERIOD));

        assert_eq!(playback.update(&mut grid, t0 + PERIOD), Some(TickOutcome::Advanced));
        assert_eq!(playback.generation(), 1);
    }

    #[test]
    fn test_no_tick_before_period() {
        let t0 = Instant::now();
        let mut grid = blinker();
        let mut playback = Playback::new(PERIOD);
        playback.start(&grid, t0);
        assert_eq!(playback.update(&mut grid, t0 + PERIOD / 2), None);
        assert_eq!(grid, blinker());
        assert_eq!(playback.generation(), 0);
    }

    #[test]
    fn test_oscillator_keeps_running() {
        let t0 = Instant::now();
        let mut grid = blinker();
        let mut playback = Playback::new(PERIOD);
        playback.start(&grid, t0);
        for i in 1..=10 {
            let outcome = playback.update(&mut grid, t0 + PERIOD * i);
            assert_eq!(outcome, Some(TickOutcome::Advanced));
        }
        assert!(playback.is_running());
        assert_eq!(playback.generation(), 10);
        assert_eq!(grid, blinker());
    }

    #[test]
    fn test_still_life_stops_on_first_tick() {
        let t0 = Instant::now();
        let mut grid = block();
        let mut playback = Playback::new(PERIOD);
        playback.start(&grid, t0);
        assert_eq!(playback.update(&mut grid, t0 + PERIOD), Some(TickOutcome::Stable));
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert_eq!(grid, block());
        assert_eq!(playback.until_next_tick(t0), None);
    }

    #[test]
    fn test_reaching_still_life_stops() {
        let t0 = Instant::now();
        let mut grid = Grid::with_alive(6, 6, &[(2, 2), (2, 3), (3, 2)]);
        let mut playback = Playback::new(PERIOD);
        playback.start(&grid, t0);
        assert_eq!(playback.update(&mut grid, t0 + PERIOD), Some(TickOutcome::Advanced));
        assert_eq!(grid, block());
        assert_eq!(
            playback.update(&mut grid, t0 + PERIOD * 2),
            Some(TickOutcome::Stable)
        );
        assert!(!playback.is_running());
        assert_eq!(grid, block());
    }

    #[test]
    fn test_extinction_stops() {
        let t0 = Instant::now();
        let mut grid = Grid::with_alive(5, 5, &[(2, 2)]);
        let mut playback = Playback::new(PERIOD);
        playback.start(&grid, t0);
        assert_eq!(playback.update(&mut grid, t0 + PERIOD), Some(TickOutcome::Extinct));
        assert!(grid.is_empty());
        assert!(!playback.is_running());
        assert_eq!(playback.generation(), 1);
    }

    #[test]
    fn test_stalled_updates_catch_up_partially() {
        let t0 = Instant::now();
        let mut grid = blinker();
        let mut playback = Playback::new(PERIOD);
        playback.start(&grid, t0);
        let late = t0 + PERIOD * 50;
        assert_eq!(playback.update(&mut grid, late), Some(TickOutcome::Advanced));
        assert_eq!(playback.generation(), MAX_CATCH_UP_TICKS as u64);
        assert_eq!(playback.until_next_tick(late), Some(PERIOD));
    }

    #[test]
    fn test_stop_cancels_pending_ticks() {
        let t0 = Instant::now();
        let mut grid = blinker();
        let mut playback = Playback::new(PERIOD);
        playback.start(&grid, t0);
        playback.stop();
        assert_eq!(playback.update(&mut grid, t0 + PERIOD * 3), None);
        assert_eq!(grid, blinker());
    }

    #[test]
    fn test_ticker() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(PERIOD, 3);
        assert_eq!(ticker.due(t0 + PERIOD), 0);

        ticker.start(t0);
        assert!(ticker.is_active());
        assert_eq!(ticker.due(t0 + PERIOD / 2), 0);
        assert_eq!(ticker.due(t0 + PERIOD * 2), 2);
        assert_eq!(ticker.until_next(t0 + PERIOD * 2), Some(PERIOD));
        assert_eq!(ticker.due(t0 + PERIOD * 3), 1);

        ticker.stop();
        assert!(!ticker.is_active());
        assert_eq!(ticker.due(t0 + PERIOD * 10), 0);
    }
}
