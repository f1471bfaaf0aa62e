//! Line based command interface to the Checkers engine.
//!
//! Usage: `checkers [settings.json]`. Set `RUST_LOG=info` to see bot and game timings.

use std::env;
use std::io;

use checkers_engine::movegen;
use checkers_engine::perft::perft;
use checkers_engine::protocol::{Command, Response};
use checkers_engine::settings::{Settings, SETTINGS_FILENAME};
use checkers_engine::{Game, TurnStatus};

fn main() -> io::Result<()> {
    env_logger::init();
    println!("Checkers 0.1.0");

    let path = env::args().nth(1).unwrap_or_else(|| SETTINGS_FILENAME.to_string());
    let mut game = Game::new(Settings::load_or_default(&path));
    let mut reported = None;

    loop {
        // Wait to receive a line of input, stop at end of input.
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        let command = match input.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                Response::Error(err.to_string()).send()?;
                continue;
            }
        };

        match command {
            // Restart, picking up any change to the settings file.
            Command::NewGame => {
                game.new_game();
                log::debug!("new game, settings {:?}", game.settings());
                Response::Board(*game.position(), game.side()).send()?;
            }

            Command::Pos(position, side) => {
                game.set_position(position, side);
                Response::Board(*game.position(), game.side()).send()?;
            }

            Command::Show => {
                Response::Board(*game.position(), game.side()).send()?;
            }

            Command::Moves(None) => {
                Response::Moves(game.legal_moves().list).send()?;
            }
            Command::Moves(Some(square)) => {
                Response::Moves(movegen::piece_moves(game.position(), square).list).send()?;
            }

            // Play moves for whoever is to move, stopping at the first illegal one.
            Command::Move(moves) => {
                for move_ in moves {
                    match game.play_move(move_) {
                        Ok(TurnStatus::Done) => Response::Played(None).send()?,
                        Ok(TurnStatus::Continue(square)) => Response::Played(Some(square)).send()?,
                        Err(err) => {
                            Response::Error(err.to_string()).send()?;
                            break;
                        }
                    }
                }
            }

            // Search without playing. Mid chain, there is no full turn to search.
            Command::Go(depth) => {
                if game.chain().is_some() {
                    Response::Error("capture chain in progress".to_string()).send()?;
                    continue;
                }
                let side = game.side();
                let depth = depth.unwrap_or_else(|| game.settings().bot.level(side));
                let position = *game.position();
                let result = game.engine_mut().search(&position, side, depth);
                Response::BestTurn(result).send()?;
            }

            Command::Play => {
                while game.result().is_none() && game.chain().is_none() && game.is_bot_to_move() {
                    match game.bot_turn() {
                        Ok(line) => Response::BotTurn(line).send()?,
                        Err(err) => {
                            Response::Error(err.to_string()).send()?;
                            break;
                        }
                    }
                }
            }

            Command::Perft(ply) => {
                if game.chain().is_some() {
                    Response::Error("capture chain in progress".to_string()).send()?;
                    continue;
                }
                let threads = std::thread::available_parallelism().map_or(1, |n| n.get());
                let info = perft(*game.position(), game.side(), ply, threads);
                Response::Perft(info.nodes).send()?;
            }

            Command::Reload => {
                if let Err(err) = game.reload_settings() {
                    Response::Error(err.to_string()).send()?;
                }
            }

            Command::Quit => break,
        }

        if game.result() != reported {
            reported = game.result();
            if let Some(result) = reported {
                Response::GameOver(result).send()?;
            }
        }
    }

    Ok(())
}
