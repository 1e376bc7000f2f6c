use crate::Dimensions;
use eframe::egui::Color32;

pub struct Config;

impl Config {
    /// Side of one cell on screen, in pixels.
    pub const CELL_SIZE: f32 = 20.;
    /// Part of the window showing the field, in pixels.
    pub const FIELD_SIZE: [f32; 2] = [1000., 600.];

    pub const FRAME_MARGIN: f32 = 20.;
    pub const STATUS_HEIGHT: f32 = 64.;
    pub const STATUS_MARGIN: f32 = 8.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const HELP_TEXT_SIZE: f32 = 13.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const PANEL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const ALIVE_COLOR: Color32 = Color32::WHITE;
    pub const DEAD_COLOR: Color32 = Color32::BLACK;

    /// Above this many changed cells the whole texture is uploaded at once.
    pub const MAX_PARTIAL_UPDATES: usize = 64;

    /// Environment variable with a seed for the random fill.
    pub const SEED_VAR: &'static str = "LIFEPAD_SEED";

    pub const KEY_HELP: &'static str = "Space: play/pause   Backspace: clear   R: random   \
        S: save   Enter: latest   ←/→: older/newer   C: clear history   Click: toggle cell";

    pub fn window_size() -> [f32; 2] {
        [
            Self::FIELD_SIZE[0] + 2. * Self::FRAME_MARGIN,
            Self::FIELD_SIZE[1] + 2. * Self::FRAME_MARGIN + Self::STATUS_HEIGHT,
        ]
    }

    pub fn dimensions() -> Dimensions {
        let [w, h] = Self::FIELD_SIZE;
        Dimensions::from_viewport(w, h, Self::CELL_SIZE).unwrap_or(Dimensions::new(1, 1))
    }

    pub fn seed() -> Option<u64> {
        std::env::var(Self::SEED_VAR).ok()?.trim().parse().ok()
    }
}
