use crate::{Command, Dimensions};
use eframe::egui::{Key, Pos2, Rect};

/// What a key press or click asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Session(Command),
    ShowDialog,
    HideDialog,
}

pub fn action_for_key(key: Key) -> Option<Action> {
    let command = match key {
        Key::Backspace => Command::ClearGrid,
        Key::Space => Command::TogglePlayback,
        Key::R => Command::Randomize,
        Key::S => Command::SaveSnapshot,
        Key::Enter => Command::RestoreLatest,
        Key::ArrowLeft => Command::ShowOlder,
        Key::ArrowRight => Command::ShowNewer,
        Key::C => return Some(Action::ShowDialog),
        Key::Escape => return Some(Action::HideDialog),
        _ => return None,
    };
    Some(Action::Session(command))
}

/// `(row, col)` of the cell under `pos` when the field is drawn into `field`.
pub fn cell_at(field: Rect, pos: Pos2, dims: Dimensions) -> Option<(usize, usize)> {
    if !field.contains(pos) || field.width() <= 0. || field.height() <= 0. {
        return None;
    }
    let p = pos - field.min;
    let col = (p.x / field.width() * dims.cols as f32) as usize;
    let row = (p.y / field.height() * dims.rows as f32) as usize;
    // `contains` is inclusive on the far edges
    Some((row.min(dims.rows - 1), col.min(dims.cols - 1)))
}
