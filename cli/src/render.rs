//! Crossterm renderer: draws a [`View`] centered in the alternate screen.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use term2048_core::view::color_class;
use term2048_core::{Renderer, View, SIZE};

/// Width of one tile in character cells.
pub const TILE_WIDTH: u16 = 5;
/// Height of one tile in character cells.
pub const TILE_HEIGHT: u16 = 3;

const BROWN: Color = Color::Rgb { r: 119, g: 110, b: 100 };
const WHITE: Color = Color::Rgb { r: 248, g: 245, b: 241 };
const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };

/// (foreground, background) per color class 1..=11; class 12 and up use the last entry.
const PALETTE: [(Color, Color); 12] = [
    (BROWN, Color::Rgb { r: 237, g: 227, b: 217 }),
    (BROWN, Color::Rgb { r: 236, g: 223, b: 199 }),
    (WHITE, Color::Rgb { r: 241, g: 176, b: 121 }),
    (WHITE, Color::Rgb { r: 244, g: 148, b: 99 }),
    (WHITE, Color::Rgb { r: 245, g: 123, b: 95 }),
    (WHITE, Color::Rgb { r: 245, g: 94, b: 59 }),
    (BLACK, Color::Rgb { r: 236, g: 206, b: 113 }),
    (BLACK, Color::Rgb { r: 236, g: 203, b: 97 }),
    (BLACK, Color::Rgb { r: 236, g: 199, b: 80 }),
    (BLACK, Color::Rgb { r: 236, g: 196, b: 63 }),
    (BLACK, Color::Rgb { r: 236, g: 193, b: 46 }),
    (WHITE, Color::Rgb { r: 60, g: 58, b: 50 }),
];

fn tile_colors(class: u32) -> (Color, Color) {
    let index = (class.max(1) as usize - 1).min(PALETTE.len() - 1);
    PALETTE[index]
}

/// Top-left corner of the board for a terminal of `cols`×`rows`.
pub fn origin(cols: u16, rows: u16) -> (u16, u16) {
    ((cols / 2).saturating_sub(10), (rows / 2).saturating_sub(7))
}

/// Raw-mode alternate screen. Restores the terminal on drop.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut term = Terminal { out: io::stdout() };
        execute!(term.out, EnterAlternateScreen, cursor::Hide)?;
        Ok(term)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Renderer for Terminal {
    type Error = io::Error;

    fn render(&mut self, view: &View<'_>) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let (base_x, base_y) = origin(cols, rows);
        let out = &mut self.out;

        queue!(out, ResetColor, terminal::Clear(ClearType::All))?;

        for row in 0..SIZE {
            for col in 0..SIZE {
                let x = base_x + col as u16 * TILE_WIDTH;
                let y = base_y + row as u16 * TILE_HEIGHT;
                let value = view.grid.get(row, col);

                match color_class(value) {
                    Some(class) => {
                        let (fg, bg) = tile_colors(class);
                        queue!(
                            out,
                            SetAttribute(Attribute::Bold),
                            SetForegroundColor(fg),
                            SetBackgroundColor(bg),
                            MoveTo(x, y),
                            Print("     "),
                            MoveTo(x, y + 1),
                            Print(format!("{:4} ", value)),
                            MoveTo(x, y + 2),
                            Print("     "),
                            SetAttribute(Attribute::Reset),
                            ResetColor,
                        )?;
                    }
                    None => {
                        queue!(
                            out,
                            MoveTo(x + 3, y + 1),
                            SetForegroundColor(WHITE),
                            Print("."),
                            ResetColor,
                        )?;
                    }
                }
            }
        }

        let below = base_y + SIZE as u16 * TILE_HEIGHT;
        queue!(
            out,
            SetForegroundColor(WHITE),
            MoveTo(base_x, below + 1),
            Print(format!("{} pts", view.score)),
            MoveTo(base_x, below + 2),
            Print(format!("best: {}", view.high_score)),
        )?;

        if view.game_over {
            queue!(
                out,
                SetAttribute(Attribute::Bold),
                MoveTo(base_x, below + 4),
                Print("GAME OVER"),
                SetAttribute(Attribute::Reset),
            )?;
            if view.prompt {
                queue!(
                    out,
                    SetForegroundColor(WHITE),
                    MoveTo(base_x, below + 5),
                    Print("q: quit, any other key: new game"),
                )?;
            }
        } else {
            queue!(
                out,
                SetAttribute(Attribute::Dim),
                MoveTo(base_x, below + 4),
                Print("arrows/hjkl/wasd move, r reset, q quit"),
                SetAttribute(Attribute::Reset),
            )?;
        }

        queue!(out, ResetColor)?;
        out.flush()
    }
}
