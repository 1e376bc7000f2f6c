mod app;
mod config;
mod draw;
mod frame_storage;
mod input;
mod texture;

pub use app::App;
pub use config::Config;
pub use frame_storage::FrameStorage;
pub use input::{action_for_key, cell_at, Action};
pub use texture::FieldTexture;
