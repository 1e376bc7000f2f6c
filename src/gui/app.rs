use super::{action_for_key, Action, Config, FieldTexture, FrameStorage};
use crate::{History, KeyValueStore, MemoryStorage, Renderer, Session, STORAGE_KEY};
use eframe::egui::{CentralPanel, Context, Event, Frame, Margin, TopBottomPanel};
use log::warn;
use std::time::Instant;

pub struct App {
    pub(super) session: Session,    // Grid, playback and saved patterns.
    pub(super) field: FieldTexture, // Texture the grid is rendered into.
    pub(super) dialog_open: bool,   // Whether the clear-history dialog is shown.
    fallback_storage: MemoryStorage, // Used when eframe has no persistent storage.
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let history = match cc.storage {
            Some(storage) => {
                History::decode_or_default(storage.get_string(STORAGE_KEY).as_deref())
            }
            None => {
                warn!("no persistent storage; saved patterns will be lost on exit");
                History::new()
            }
        };
        let dims = Config::dimensions();
        Self {
            session: Session::new(dims, history, Config::seed()),
            field: FieldTexture::new(&cc.egui_ctx, dims),
            dialog_open: false,
            fallback_storage: MemoryStorage::new(),
        }
    }

    fn handle(&mut self, action: Action, now: Instant, frame: &mut eframe::Frame) {
        match action {
            Action::ShowDialog => self.dialog_open = true,
            Action::HideDialog => self.dialog_open = false,
            Action::Session(command) => {
                let mut frame_storage;
                let store: &mut dyn KeyValueStore = match frame.storage_mut() {
                    Some(storage) => {
                        frame_storage = FrameStorage(storage);
                        &mut frame_storage
                    }
                    None => &mut self.fallback_storage,
                };
                self.session.apply(command, now, store);
            }
        }
    }

    fn key_actions(ctx: &Context) -> Vec<Action> {
        ctx.input(|input| {
            input
                .events
                .iter()
                .filter_map(|event| match event {
                    Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } if !modifiers.command => action_for_key(*key),
                    _ => None,
                })
                .collect()
        })
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        let now = Instant::now();

        let mut actions = Self::key_actions(ctx);
        for action in actions.drain(..) {
            self.handle(action, now, frame);
        }
        self.session.update(now);
        self.field.render(self.session.grid());

        let status_frame = Frame::default()
            .inner_margin(Margin::symmetric(Config::FRAME_MARGIN, Config::STATUS_MARGIN))
            .fill(Config::PANEL_COLOR);
        TopBottomPanel::top("status")
            .frame(status_frame)
            .show(ctx, |ui| self.draw_status(ui));

        let field_frame = Frame::default()
            .inner_margin(Margin::same(Config::FRAME_MARGIN))
            .fill(Config::PANEL_COLOR);
        CentralPanel::default().frame(field_frame).show(ctx, |ui| {
            actions.extend(self.draw_field(ui));
        });

        actions.extend(self.draw_dialog(ctx));

        if !actions.is_empty() {
            for action in actions {
                self.handle(action, now, frame);
            }
            ctx.request_repaint();
        }

        if let Some(delay) = self.session.playback().until_next_tick(now) {
            ctx.request_repaint_after(delay);
        }
    }
}
