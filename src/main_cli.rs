//! Interactive terminal game against the Checkers engine.
//!
//! Usage: `checkers-cli [settings.json]`. The settings file selects which sides are bots.

use std::env;
use std::io::{self, Write};

use checkers_engine::coretypes::Move;
use checkers_engine::movelist::display;
use checkers_engine::settings::{Settings, SETTINGS_FILENAME};
use checkers_engine::{Game, TurnStatus};

enum InputKind {
    Exit,
    Newgame,
    Help,
    Moves,
    Error,
    GameMove(Move),
}

impl From<&str> for InputKind {
    fn from(s: &str) -> Self {
        let maybe_move: Result<Move, _> = s.trim().parse();
        if let Ok(move_) = maybe_move {
            Self::GameMove(move_)
        } else {
            match s {
                "exit" => Self::Exit,
                "newgame" | "ng" => Self::Newgame,
                "help" => Self::Help,
                "moves" => Self::Moves,
                _ => Self::Error,
            }
        }
    }
}

fn prompt(input: &mut String) -> io::Result<usize> {
    print!("> ");
    io::stdout().flush()?;
    input.clear();
    io::stdin().read_line(input)
}

fn main() -> io::Result<()> {
    env_logger::init();
    println!("Checkers CLI 0.1.0\n");

    let path = env::args().nth(1).unwrap_or_else(|| SETTINGS_FILENAME.to_string());
    let mut game = Game::new(Settings::load_or_default(&path));
    let mut input = String::new();

    loop {
        // Bots move until a human has to.
        while game.result().is_none() && game.chain().is_none() && game.is_bot_to_move() {
            let side = game.side();
            match game.bot_turn() {
                Ok(line) => println!("{side} bot played {}.", display(&line)),
                Err(err) => {
                    println!("Bot failed to move: {err}");
                    break;
                }
            }
        }

        println!("{}", game.position());
        if let Some(result) = game.result() {
            println!("Game over after {} turns: {result}.", game.turn());
            println!("Press Enter to start a new game, or type exit.");
            if prompt(&mut input)? == 0 || input.trim() == "exit" {
                break;
            }
            game.new_game();
            continue;
        }

        match game.chain() {
            Some(square) => println!("{} must keep capturing with {square}.", game.side()),
            None => println!("{} to move.", game.side()),
        }
        if prompt(&mut input)? == 0 {
            break;
        }

        match InputKind::from(input.trim()) {
            InputKind::Exit => break,
            InputKind::Newgame => {
                println!("Starting new game...");
                game.new_game();
            }
            InputKind::Help => {
                println!("Commands:");
                println!("newgame | ng => Begin a new game, reloading the settings file.");
                println!("moves => List the legal moves.");
                println!("help => Print this help text.");
                println!("exit => end CLI.");
                println!("\nTo make a move, enter its squares as row and column digits.");
                println!("Examples: 52-43 -> step from row 5 col 2 to row 4 col 3, 52x34 -> capture.");
            }
            InputKind::Moves => {
                println!("Legal moves: {}", display(&game.legal_moves().list));
            }
            InputKind::Error => {
                println!("Invalid command: {}", input.trim());
            }
            InputKind::GameMove(move_) => match game.play_move(move_) {
                Ok(TurnStatus::Done) => (),
                Ok(TurnStatus::Continue(square)) => println!("Capture again from {square}."),
                Err(err) => println!("That move was illegal! No action taken. ({err})"),
            },
        }
    }
    Ok(())
}
