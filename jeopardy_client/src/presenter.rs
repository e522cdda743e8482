use jeopardy::{Board, CellStyle};

use crate::StartError;

/// The view of a game. It only ever shows what the controller tells it to;
/// the [`Board`] stays the source of truth.
pub trait Presenter {
    fn show_loading(&mut self);
    fn hide_loading(&mut self);
    /// Draws a freshly built board, replacing whatever was shown before.
    fn render_board(&mut self, board: &Board);
    /// Redraws a single cell after a click.
    fn render_cell_update(&mut self, col: usize, row: usize, text: &str, style: CellStyle);
    /// Shows that starting a game failed. The user may start again.
    fn show_error(&mut self, err: &StartError);
}
