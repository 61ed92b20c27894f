//! Read-only snapshot handed to renderers.

use crate::grid::Grid;

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View<'a> {
    pub grid: &'a Grid,
    pub score: u32,
    pub high_score: u32,
    /// No move is left; the game-over message should be shown.
    pub game_over: bool,
    /// The game-over pause has elapsed and a key press is awaited.
    pub prompt: bool,
}

impl View<'_> {
    /// The same frame with the "press any key" prompt showing.
    pub fn with_prompt(self) -> Self {
        View {
            prompt: self.game_over,
            ..self
        }
    }
}

/// Something that can draw a [`View`], such as a terminal.
pub trait Renderer {
    type Error;

    fn render(&mut self, view: &View<'_>) -> Result<(), Self::Error>;
}

/// Color class of a tile: `log2(value)`, or `None` for an empty cell.
pub fn color_class(value: u32) -> Option<u32> {
    (value != 0).then(|| value.ilog2())
}
