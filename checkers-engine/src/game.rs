//! Game structure.

use std::fmt::{self, Display};
use std::time::Instant;

use crate::coretypes::{Move, Side, Square};
use crate::engine::{Engine, EngineBuilder};
use crate::error::{self, ErrorKind};
use crate::movegen::{self, Moves};
use crate::movelist::{display, Line};
use crate::position::Position;
use crate::settings::Settings;

/// Final outcome of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameResult {
    /// The other side had no legal move at the start of its turn.
    Winner(Side),
    /// The turn limit was reached.
    Draw,
}

impl Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameResult::Winner(side) => write!(f, "{side} wins"),
            GameResult::Draw => f.write_str("draw"),
        }
    }
}

/// State of the current turn after a move is played.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TurnStatus {
    /// The turn is over, the other side moves next.
    Done,
    /// The piece that just captured must capture again from this square.
    Continue(Square),
}

/// Game contains information for an in progress game:
/// the current position, the side to move, the number of completed turns,
/// the moves played so far, and the settings and engine used by bot players.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    side: Side,
    turn: u32,
    chain: Option<Square>,
    history: Vec<Move>,
    result: Option<GameResult>,
    settings: Settings,
    engine: Engine,
    started: Instant,
}

impl Game {
    /// Create a new game from the start position, white to move.
    pub fn new(settings: Settings) -> Self {
        let engine = EngineBuilder::from_settings(&settings.bot).build();
        let mut game = Self {
            position: Position::start_position(),
            side: Side::White,
            turn: 0,
            chain: None,
            history: Vec::new(),
            result: None,
            settings,
            engine,
            started: Instant::now(),
        };
        game.check_end();
        game
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Side to move.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of completed turns.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Square of the piece that must continue its capture chain, if any.
    pub fn chain(&self) -> Option<Square> {
        self.chain
    }

    /// Every move played since the game started, chain steps included.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Returns the outcome of the game, or None while it is in progress.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true if the side to move is played by the engine.
    pub fn is_bot_to_move(&self) -> bool {
        self.settings.bot.is_bot(self.side)
    }

    /// Restart from the start position. Settings that came from a file are read again first;
    /// if that fails the previous settings are kept.
    pub fn new_game(&mut self) {
        if let Err(err) = self.settings.reload() {
            log::warn!("keeping previous settings: {err}");
        }
        self.engine.reconfigure(&self.settings.bot);
        self.set_position(Position::start_position(), Side::White);
    }

    /// Read the settings file again and apply it to the engine. The board is unchanged.
    pub fn reload_settings(&mut self) -> error::Result<()> {
        self.settings.reload()?;
        self.engine.reconfigure(&self.settings.bot);
        if self.result.is_none() {
            self.check_end();
        }
        Ok(())
    }

    /// Replace the board and side to move, starting the turn count over.
    pub fn set_position(&mut self, position: Position, side: Side) {
        self.position = position;
        self.side = side;
        self.turn = 0;
        self.chain = None;
        self.history.clear();
        self.result = None;
        self.started = Instant::now();
        self.check_end();
    }

    /// Legal moves for the side to move. In the middle of a capture chain,
    /// only the captures of the chaining piece.
    pub fn legal_moves(&mut self) -> Moves {
        match self.chain {
            Some(square) => movegen::piece_moves(&self.position, square),
            None => self.engine.generate_moves_for_side(&self.position, self.side),
        }
    }

    /// Play one move for the side to move.
    /// The move is matched against the legal moves by its squares only.
    pub fn play_move(&mut self, move_: Move) -> error::Result<TurnStatus> {
        if self.result.is_some() {
            return Err(ErrorKind::GameOver.into());
        }
        let move_ = self
            .legal_moves()
            .find(&move_)
            .ok_or_else(|| error::Error::from((ErrorKind::GameIllegalMove, move_)))?;

        self.position.do_move(move_);
        self.history.push(move_);

        if move_.is_capture() && movegen::piece_moves(&self.position, move_.to()).has_capture {
            self.chain = Some(move_.to());
            return Ok(TurnStatus::Continue(move_.to()));
        }
        self.end_turn();
        Ok(TurnStatus::Done)
    }

    /// Search and play the full turn of the bot playing the side to move.
    pub fn bot_turn(&mut self) -> error::Result<Line> {
        if self.result.is_some() {
            return Err(ErrorKind::GameOver.into());
        }
        if !self.is_bot_to_move() {
            return Err((ErrorKind::GameWrongPlayer, self.side).into());
        }
        if self.chain.is_some() {
            return Err((ErrorKind::GameWrongPlayer, "capture chain in progress").into());
        }

        let start = Instant::now();
        let level = self.settings.bot.level(self.side);
        let line = self.engine.find_best_turns(&self.position, self.side, level);
        log::info!(
            "bot {} turn {}: {} in {} ms",
            self.side,
            self.turn,
            display(&line),
            start.elapsed().as_millis()
        );

        for move_ in &line {
            self.play_move(*move_)?;
        }
        Ok(line)
    }

    /// Let bots play until a human must move or the game is over.
    pub fn play_bots(&mut self) -> error::Result<Option<GameResult>> {
        while self.result.is_none() && self.chain.is_none() && self.is_bot_to_move() {
            self.bot_turn()?;
        }
        Ok(self.result)
    }

    fn end_turn(&mut self) {
        self.chain = None;
        self.side = !self.side;
        self.turn += 1;
        self.check_end();
    }

    fn check_end(&mut self) {
        self.result = if self.turn >= self.settings.game.max_num_turns {
            Some(GameResult::Draw)
        } else if movegen::side_moves(&self.position, self.side).is_empty() {
            Some(GameResult::Winner(!self.side))
        } else {
            None
        };

        if let Some(result) = self.result {
            log::info!(
                "game over after {} turns, {result}, game time {} ms",
                self.turn,
                self.started.elapsed().as_millis()
            );
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
