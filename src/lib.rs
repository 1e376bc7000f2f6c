#![warn(clippy::all)]

mod engine;
mod grid;
pub mod gui;
mod history;
mod playback;
mod render;
mod session;
mod storage;
mod utils;

pub use engine::{generations, neighbor_count, step, Generations};
pub use grid::{Dimensions, Grid, Snapshot};
pub use gui::{App, Config};
pub use history::{History, STORAGE_KEY};
pub use playback::{Playback, PlaybackState, TickOutcome, MAX_CATCH_UP_TICKS, TICK_PERIOD};
pub use render::Renderer;
pub use session::{Command, Session};
pub use storage::{decode, encode, KeyValueStore, MemoryStorage};
pub use utils::Ticker;
