//! Line based text protocol used to drive a game from stdin.
//!
//! Commands:
//! * `newgame`: reload the settings file and restart from the start position
//! * `position start` or `position <layout> [white | black]`: set the board
//! * `show`: print the board
//! * `moves`: legal moves of the side to move, `moves <rc>`: legal moves of one piece
//! * `move <move> ...`: play moves for the side to move, for example `move 52x34 34x16`
//! * `go` or `go depth <n>`: search the best turn without playing it
//! * `play`: let bots move until a human must move or the game is over
//! * `perft <n>`: count full turns to depth n
//! * `reload`: read the settings file again
//! * `quit`

use std::fmt::{self, Display, Write};
use std::io;
use std::str::{FromStr, SplitWhitespace};

use crate::coretypes::{Move, PlyKind, Side, Square};
use crate::error::{self, ErrorKind};
use crate::game::GameResult;
use crate::layout::Layout;
use crate::movelist::{display, Line, MoveList};
use crate::position::Position;
use crate::search::SearchResult;

/// Commands sent to the engine, one per line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    NewGame,
    Pos(Position, Side),
    Show,
    Moves(Option<Square>),
    Move(Vec<Move>),
    Go(Option<PlyKind>),
    Play,
    Perft(PlyKind),
    Reload,
    Quit,
}

impl Command {
    /// Parse a single input line into a Command if possible.
    pub fn parse_command(input_str: &str) -> error::Result<Self> {
        let mut input = input_str.split_whitespace();
        let head = input.next().ok_or(ErrorKind::CommandNoCommand)?;

        match head {
            "newgame" => Ok(Command::NewGame),
            "position" => Self::parse_pos(input),
            "show" => Ok(Command::Show),
            "moves" => Self::parse_moves(input),
            "move" => Self::parse_move(input),
            "go" => Self::parse_go(input),
            "play" => Ok(Command::Play),
            "perft" => Self::parse_perft(input),
            "reload" => Ok(Command::Reload),
            "quit" => Ok(Command::Quit),
            _ => Err((ErrorKind::CommandUnknown, head).into()),
        }
    }

    /// Extract a `position` command if possible.
    /// command: `position [start | layout (white | black)]`
    fn parse_pos(mut input: SplitWhitespace) -> error::Result<Self> {
        let position_input = input.next().ok_or((
            ErrorKind::CommandNoArgument,
            "position missing description [start | layout]",
        ))?;

        let position = match position_input {
            "start" => Position::start_position(),
            layout => Position::parse_layout(layout)?,
        };
        let side = match input.next() {
            Some(side_str) => side_str.parse()?,
            None => Side::White,
        };

        Ok(Command::Pos(position, side))
    }

    /// Extract a `moves` command if possible.
    /// command: `moves (square)`
    fn parse_moves(mut input: SplitWhitespace) -> error::Result<Self> {
        input
            .next()
            .map(Square::from_str)
            .transpose()
            .map(Command::Moves)
    }

    /// Extract a `move` command if possible.
    /// command: `move move_str ...`
    fn parse_move(input: SplitWhitespace) -> error::Result<Self> {
        let moves = input.map(Move::from_str).collect::<error::Result<Vec<_>>>()?;
        (!moves.is_empty())
            .then(|| Command::Move(moves))
            .ok_or_else(|| (ErrorKind::CommandNoArgument, "move missing argument").into())
    }

    /// Extract a `go` command if possible.
    /// command: `go (depth n)`
    fn parse_go(mut input: SplitWhitespace) -> error::Result<Self> {
        match input.next() {
            None => Ok(Command::Go(None)),
            Some("depth") => Self::parse_ply(input.next()).map(|ply| Command::Go(Some(ply))),
            Some(other) => Err((ErrorKind::CommandUnknown, format!("go {other}")).into()),
        }
    }

    /// Extract a `perft` command if possible.
    /// command: `perft n`
    fn parse_perft(mut input: SplitWhitespace) -> error::Result<Self> {
        Self::parse_ply(input.next()).map(Command::Perft)
    }

    fn parse_ply(argument: Option<&str>) -> error::Result<PlyKind> {
        argument
            .ok_or(ErrorKind::CommandNoArgument)?
            .parse()
            .map_err(|err| (ErrorKind::CommandCannotParseInt, err).into())
    }
}

impl FromStr for Command {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        Self::parse_command(s)
    }
}

/// Engine responses, one or more lines each.
#[derive(Debug, Clone)]
pub enum Response {
    Board(Position, Side),
    Moves(MoveList),
    Played(Option<Square>),
    BestTurn(SearchResult),
    BotTurn(Line),
    Perft(u64),
    GameOver(GameResult),
    Error(String),
}

impl Response {
    /// Send this Response over stdout.
    pub fn send(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        <io::StdoutLock as io::Write>::write_all(&mut handle, self.to_string().as_ref())?;
        <io::StdoutLock as io::Write>::flush(&mut handle)
    }
}

impl Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Board(position, side) => {
                write!(f, "{position}")?;
                writeln!(f, "layout {}", position.to_layout())?;
                writeln!(f, "{side} to move")
            }
            Self::Moves(moves) => writeln!(f, "moves {}", display(moves)),
            Self::Played(None) => f.write_str("ok\n"),
            Self::Played(Some(square)) => writeln!(f, "continue {square}"),
            Self::BestTurn(result) => {
                writeln!(
                    f,
                    "info depth {} score {:.4} nodes {} time {}",
                    result.depth,
                    result.score,
                    result.nodes,
                    result.elapsed.as_millis()
                )?;
                f.write_str("bestturn ")?;
                f.write_str(&display(&result.line))?;
                f.write_char('\n')
            }
            Self::BotTurn(line) => writeln!(f, "botturn {}", display(line)),
            Self::Perft(nodes) => writeln!(f, "perft {nodes}"),
            Self::GameOver(result) => writeln!(f, "result {result}"),
            Self::Error(s) => writeln!(f, "error {s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_singles() {
        let input_command_pairs = [
            ("newgame", Command::NewGame),
            ("show\n", Command::Show),
            ("moves", Command::Moves(None)),
            ("go", Command::Go(None)),
            ("play", Command::Play),
            ("reload", Command::Reload),
            ("quit", Command::Quit),
        ];
        for (input_str, expected_command) in input_command_pairs {
            let command = Command::parse_command(input_str).unwrap();
            assert_eq!(command, expected_command);
        }
    }

    #[test]
    fn parse_command_pos() {
        let command = Command::parse_command("position start").unwrap();
        assert_eq!(command, Command::Pos(Position::start_position(), Side::White));

        let layout = "......../......../......../......../...b..../..w...../......../........";
        let command = Command::parse_command(&format!("position {layout} black")).unwrap();
        let expected = Position::parse_layout(layout).unwrap();
        assert_eq!(command, Command::Pos(expected, Side::Black));

        let error = Command::parse_command("position").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CommandNoArgument);
        let error = Command::parse_command("position w.w/b.b").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::LayoutMalformed);
        let error = Command::parse_command("position start red").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ParseSideMalformed);
    }

    #[test]
    fn parse_command_moves_and_move() {
        let command = Command::parse_command("moves 52").unwrap();
        assert_eq!(command, Command::Moves(Some(Square::new(5, 2))));

        let command = Command::parse_command("move 52x34 34x16").unwrap();
        let expected = vec![
            Move::new(Square::new(5, 2), Square::new(3, 4)),
            Move::new(Square::new(3, 4), Square::new(1, 6)),
        ];
        assert_eq!(command, Command::Move(expected));

        let error = Command::parse_command("move").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CommandNoArgument);
        let error = Command::parse_command("move 5x").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ParseMoveMalformed);
    }

    #[test]
    fn parse_command_go_and_perft() {
        assert_eq!(Command::parse_command("go depth 5").unwrap(), Command::Go(Some(5)));
        assert_eq!(Command::parse_command("perft 3").unwrap(), Command::Perft(3));

        let error = Command::parse_command("go depth").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CommandNoArgument);
        let error = Command::parse_command("go depth many").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CommandCannotParseInt);
        let error = Command::parse_command("go fast").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CommandUnknown);
    }

    #[test]
    fn parse_command_errors() {
        let error = Command::parse_command("   ").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CommandNoCommand);
        let error = Command::parse_command("dance").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CommandUnknown);
    }

    #[test]
    fn display_responses() {
        assert_eq!(Response::Played(None).to_string(), "ok\n");
        assert_eq!(Response::Played(Some(Square::new(3, 4))).to_string(), "continue 34\n");
        assert_eq!(Response::GameOver(GameResult::Draw).to_string(), "result draw\n");
        assert_eq!(
            Response::GameOver(GameResult::Winner(Side::Black)).to_string(),
            "result black wins\n"
        );
        let mut line = Line::new();
        line.push(Move::capture(Square::new(5, 2), Square::new(3, 4), Square::new(4, 3)));
        assert_eq!(Response::BotTurn(line).to_string(), "botturn 52x34\n");
    }
}
