use super::Config;
use crate::{Dimensions, Grid, Renderer};
use eframe::egui::{Color32, ColorImage, Context, TextureHandle, TextureId, TextureOptions};

/// Field texture with one pixel per cell, scaled up when drawn.
pub struct FieldTexture {
    texture: TextureHandle,
    shown: Option<Grid>, // What the texture currently holds.
}

fn cell_color(alive: bool) -> Color32 {
    if alive {
        Config::ALIVE_COLOR
    } else {
        Config::DEAD_COLOR
    }
}

impl FieldTexture {
    pub fn new(ctx: &Context, dims: Dimensions) -> Self {
        let image = ColorImage::new([dims.cols, dims.rows], Config::DEAD_COLOR);
        Self {
            texture: ctx.load_texture("Game of Life field", image, TextureOptions::NEAREST),
            shown: Some(Grid::with_dimensions(dims)),
        }
    }

    pub fn id(&self) -> TextureId {
        self.texture.id()
    }

    fn upload(&mut self, grid: &Grid) {
        let image = ColorImage {
            size: [grid.cols(), grid.rows()],
            pixels: grid.iter_rows().flatten().map(|&c| cell_color(c)).collect(),
        };
        self.texture.set(image, TextureOptions::NEAREST);
    }
}

impl Renderer for FieldTexture {
    fn render(&mut self, grid: &Grid) {
        let changes = self
            .shown
            .as_ref()
            .filter(|shown| shown.dimensions() == grid.dimensions())
            .map(|shown| grid.diff(shown).collect::<Vec<_>>());

        match changes {
            Some(changes) if changes.is_empty() => return,
            Some(changes) if changes.len() <= Config::MAX_PARTIAL_UPDATES => {
                for (row, col, alive) in changes {
                    let pixel = ColorImage::new([1, 1], cell_color(alive));
                    self.texture.set_partial([col, row], pixel, TextureOptions::NEAREST);
                }
            }
            _ => self.upload(grid),
        }
        self.shown = Some(grid.clone());
    }
}
