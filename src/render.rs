use crate::Grid;

/// Display surface for the field.
///
/// Implementations keep what they have already shown and only need to
/// update the cells that changed since the previous call.
pub trait Renderer {
    fn render(&mut self, grid: &Grid);
}
