use crate::{Dimensions, Grid, History, KeyValueStore, Playback, PlaybackState, TickOutcome};
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// User-level operations on the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Kill every cell, stopping playback.
    ClearGrid,
    /// Start playback on a non-empty grid, or stop it.
    TogglePlayback,
    /// Stop playback and fill the grid randomly.
    Randomize,
    SaveSnapshot,
    RestoreLatest,
    ShowOlder,
    ShowNewer,
    ClearHistory,
    ToggleCell { row: usize, col: usize },
}

/// Everything the simulator owns: the live grid, playback and saved patterns.
pub struct Session {
    grid: Grid,
    playback: Playback,
    history: History,
    rng: ChaCha8Rng,
}

impl Session {
    /// `seed` - random seed for the random fill (if `None`, then random seed is generated)
    pub fn new(dims: Dimensions, history: History, seed: Option<u64>) -> Self {
        let rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self {
            grid: Grid::with_dimensions(dims),
            playback: Playback::default(),
            history,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    /// Executes `command`. Commands that don't make sense in the current
    /// playback state are ignored.
    ///
    /// Returns whether the grid changed.
    pub fn apply(
        &mut self,
        command: Command,
        now: Instant,
        store: &mut dyn KeyValueStore,
    ) -> bool {
        debug!("{command:?} while {:?}", self.state());
        let idle = !self.playback.is_running();
        match command {
            Command::ClearGrid => {
                self.playback.stop();
                self.playback.reset_generation();
                let changed = !self.grid.is_empty();
                self.grid.clear();
                changed
            }
            Command::TogglePlayback => {
                self.playback.toggle(&self.grid, now);
                false
            }
            Command::Randomize => {
                self.playback.stop();
                self.playback.reset_generation();
                self.grid.randomize(&mut self.rng);
                true
            }
            Command::SaveSnapshot => {
                if idle {
                    self.history.save(&self.grid, store);
                }
                false
            }
            Command::RestoreLatest if idle => {
                let dims = self.grid.dimensions();
                let grid = self.history.restore_latest().map(|s| s.grid().fitted_to(dims));
                self.show(grid)
            }
            Command::ShowOlder if idle => {
                let dims = self.grid.dimensions();
                let grid = self.history.navigate_older().map(|s| s.grid().fitted_to(dims));
                self.show(grid)
            }
            Command::ShowNewer if idle => {
                let dims = self.grid.dimensions();
                let grid = self.history.navigate_newer().map(|s| s.grid().fitted_to(dims));
                self.show(grid)
            }
            Command::RestoreLatest | Command::ShowOlder | Command::ShowNewer => false,
            Command::ClearHistory => {
                self.history.clear_all(store);
                false
            }
            Command::ToggleCell { row, col } => {
                if row < self.grid.rows() && col < self.grid.cols() {
                    self.grid.toggle(row, col);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Advances playback to `now`.
    pub fn update(&mut self, now: Instant) -> Option<TickOutcome> {
        self.playback.update(&mut self.grid, now)
    }

    // `grid` is a copy of a snapshot, so later edits never reach the history.
    fn show(&mut self, grid: Option<Grid>) -> bool {
        let Some(grid) = grid else {
            return false;
        };
        self.grid = grid;
        self.playback.reset_generation();
        true
    }
}
