use crate::{step, Grid, Ticker};
use log::{debug, trace};
use std::time::{Duration, Instant};

/// Time between two generations while running.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Upper bound on generations computed in one `update` after a stall.
pub const MAX_CATCH_UP_TICKS: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Running,
}

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new generation replaced the previous one.
    Advanced,
    /// The grid maps onto itself; playback stopped.
    Stable,
    /// No live cells are left; playback stopped.
    Extinct,
}

/// Drives the grid through generations on a fixed period.
pub struct Playback {
    state: PlaybackState,
    ticker: Ticker,
    generation: u64,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Playback {
    pub fn new(period: Duration) -> Self {
        Self {
            state: PlaybackState::Idle,
            ticker: Ticker::new(period, MAX_CATCH_UP_TICKS),
            generation: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    /// Generations computed since the grid was last replaced from outside.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reset_generation(&mut self) {
        self.generation = 0;
    }

    /// Starts ticking unless `grid` is empty. Starting twice keeps the
    /// schedule of the first start.
    ///
    /// Returns whether playback is running afterwards.
    pub fn start(&mut self, grid: &Grid, now: Instant) -> bool {
        if self.is_running() {
            return true;
        }
        if grid.is_empty() {
            debug!("refusing to start playback on an empty grid");
            return false;
        }
        self.state = PlaybackState::Running;
        self.ticker.start(now);
        debug!("playback started at generation {}", self.generation);
        true
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            debug!("playback stopped at generation {}", self.generation);
        }
        self.state = PlaybackState::Idle;
        self.ticker.stop();
    }

    pub fn toggle(&mut self, grid: &Grid, now: Instant) {
        if self.is_running() {
            self.stop();
        } else {
            self.start(grid, now);
        }
    }

    /// Runs every tick that became due by `now`.
    ///
    /// Returns the outcome of the last tick, `None` if no tick was due.
    pub fn update(&mut self, grid: &mut Grid, now: Instant) -> Option<TickOutcome> {
        if !self.is_running() {
            return None;
        }
        let mut outcome = None;
        for _ in 0..self.ticker.due(now) {
            let o = self.tick(grid);
            outcome = Some(o);
            if o != TickOutcome::Advanced {
                break;
            }
        }
        outcome
    }

    /// Computes one generation. Stops playback when the grid is stable or extinct.
    pub fn tick(&mut self, grid: &mut Grid) -> TickOutcome {
        let next = step(grid);
        if next == *grid {
            trace!("generation {} is stable", self.generation);
            self.stop();
            return TickOutcome::Stable;
        }
        *grid = next;
        self.generation += 1;
        trace!(
            "generation {}: {} live cells",
            self.generation,
            grid.population()
        );

        if grid.is_empty() {
            self.stop();
            return TickOutcome::Extinct;
        }
        TickOutcome::Advanced
    }

    /// Time left until the next tick while running.
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.until_next(now)
    }
}
