//! The play / game-over / quit state machine driven by a front end.

use crate::direction::Direction;
use crate::store::HighScoreStore;
use crate::view::View;
use crate::Game;

/// What the player asked for, independent of the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Reset,
    Quit,
    /// Any other key. Ignored while playing; starts a new game after game over.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
    Terminated,
}

/// A game plus the phase of the interaction loop around it.
#[derive(Debug)]
pub struct Session<S> {
    game: Game<S>,
    phase: Phase,
}

impl<S: HighScoreStore> Session<S> {
    pub fn new(game: Game<S>) -> Self {
        let phase = if game.is_done() {
            Phase::GameOver
        } else {
            Phase::Playing
        };
        Session { game, phase }
    }

    /// Apply one command and return the phase it leads to.
    pub fn handle(&mut self, command: Command) -> Phase {
        self.phase = match (self.phase, command) {
            (Phase::Terminated, _) => Phase::Terminated,
            (_, Command::Quit) => Phase::Terminated,
            (Phase::Playing, Command::Move(dir)) => {
                if self.game.step(dir).done {
                    Phase::GameOver
                } else {
                    Phase::Playing
                }
            }
            (Phase::Playing, Command::Reset) | (Phase::GameOver, _) => {
                self.game.reset();
                Phase::Playing
            }
            (Phase::Playing, Command::Other) => Phase::Playing,
        };
        self.phase
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game(&self) -> &Game<S> {
        &self.game
    }

    /// Snapshot for the renderer.
    pub fn view(&self) -> View<'_> {
        View {
            grid: self.game.grid(),
            score: self.game.score(),
            high_score: self.game.high_score(),
            game_over: self.phase == Phase::GameOver,
            prompt: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, SIZE};
    use crate::store::MemoryStore;

    const LAST_MOVE: [[u32; SIZE]; SIZE] = [
        [2, 2, 8, 16],
        [8, 16, 32, 64],
        [16, 32, 64, 128],
        [32, 64, 128, 256],
    ];

    fn session_with(rows: [[u32; SIZE]; SIZE]) -> Session<MemoryStore> {
        Session::new(Game::from_grid(Grid::from_rows(rows), 0, MemoryStore::default()))
    }

    fn over_session() -> Session<MemoryStore> {
        let mut session = session_with(LAST_MOVE);
        assert_eq!(session.handle(Command::Move(Direction::Left)), Phase::GameOver);
        session
    }

    #[test]
    fn test_move_keeps_playing() {
        let mut session = Session::new(Game::new(9, MemoryStore::default()));
        assert_eq!(session.phase(), Phase::Playing);
        for dir in Direction::ALL {
            assert_eq!(session.handle(Command::Move(dir)), Phase::Playing);
        }
    }

    #[test]
    fn test_other_key_ignored_while_playing() {
        let mut session = session_with([[2, 0, 0, 0], [0; SIZE], [0; SIZE], [0; SIZE]]);
        let before = *session.game().grid();
        assert_eq!(session.handle(Command::Other), Phase::Playing);
        assert_eq!(*session.game().grid(), before);
    }

    #[test]
    fn test_quit_while_playing() {
        let mut session = Session::new(Game::new(1, MemoryStore::default()));
        assert_eq!(session.handle(Command::Quit), Phase::Terminated);
        assert_eq!(session.handle(Command::Reset), Phase::Terminated);
    }

    #[test]
    fn test_reset_while_playing() {
        let mut session = session_with([[2, 2, 0, 0], [0; SIZE], [0; SIZE], [0; SIZE]]);
        session.handle(Command::Move(Direction::Left));
        assert_eq!(session.game().score(), 4);
        assert_eq!(session.handle(Command::Reset), Phase::Playing);
        assert_eq!(session.game().score(), 0);
        assert_eq!(session.game().high_score(), 4);
        assert_eq!(session.game().grid().tile_count(), 2);
    }

    #[test]
    fn test_last_move_enters_game_over() {
        let session = over_session();
        let view = session.view();
        assert!(view.game_over);
        assert!(!view.prompt);
        assert!(view.with_prompt().prompt);
    }

    #[test]
    fn test_quit_from_game_over() {
        let mut session = over_session();
        assert_eq!(session.handle(Command::Quit), Phase::Terminated);
    }

    #[test]
    fn test_any_key_after_game_over_starts_new_game() {
        for command in [
            Command::Other,
            Command::Reset,
            Command::Move(Direction::Up),
        ] {
            let mut session = over_session();
            assert_eq!(session.handle(command), Phase::Playing);
            assert_eq!(session.game().score(), 0);
            assert_eq!(session.game().grid().tile_count(), 2);
            assert!(!session.view().game_over);
        }
    }

    #[test]
    fn test_session_starting_from_dead_grid() {
        let session = session_with([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert_eq!(session.phase(), Phase::GameOver);
    }

    #[test]
    fn test_view_reports_scores() {
        let mut session = session_with([[4, 4, 0, 0], [0; SIZE], [0; SIZE], [0; SIZE]]);
        session.handle(Command::Move(Direction::Right));
        let view = session.view();
        assert_eq!(view.score, 8);
        assert_eq!(view.high_score, 8);
        assert_eq!(view.grid.get(0, 3), 8);
    }
}
