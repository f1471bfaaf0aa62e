//! Whole games driven through the controller and the command protocol.

use std::fs;

use checkers_engine::coretypes::Side;
use checkers_engine::protocol::Command;
use checkers_engine::*;

fn bots(level: u8, max_num_turns: u32) -> Settings {
    let mut settings = Settings::default();
    settings.bot.is_white_bot = true;
    settings.bot.is_black_bot = true;
    settings.bot.white_bot_level = level;
    settings.bot.black_bot_level = level;
    settings.bot.no_random = true;
    settings.game.max_num_turns = max_num_turns;
    settings
}

#[test]
fn bot_games_are_reproducible() {
    let mut first = Game::new(bots(2, 40));
    let mut second = Game::new(bots(2, 40));
    let first_result = first.play_bots().unwrap();
    let second_result = second.play_bots().unwrap();

    assert!(first_result.is_some());
    assert_eq!(first_result, second_result);
    assert_eq!(first.history(), second.history());
    assert_eq!(first.position(), second.position());
}

#[test]
fn bot_game_ends_by_rule() {
    let mut game = Game::new(bots(1, 200));
    let result = game.play_bots().unwrap().unwrap();
    match result {
        GameResult::Draw => assert_eq!(game.turn(), 200),
        GameResult::Winner(winner) => {
            assert_eq!(game.side(), !winner);
            assert!(movegen::side_moves(game.position(), game.side()).is_empty());
        }
    }
}

#[test]
fn protocol_commands_drive_a_game() {
    let mut game = Game::default();

    let command: Command = "position ......../......../......../......../...b..../..w...../......../........ white"
        .parse()
        .unwrap();
    if let Command::Pos(position, side) = command {
        game.set_position(position, side);
    }
    assert_eq!(game.side(), Side::White);

    if let Command::Move(moves) = "move 52x34".parse::<Command>().unwrap() {
        for move_ in moves {
            assert_eq!(game.play_move(move_).unwrap(), TurnStatus::Done);
        }
    }
    assert_eq!(game.result(), Some(GameResult::Winner(Side::White)));
}

#[test]
fn new_game_reloads_settings_file() {
    let path = std::env::temp_dir().join(format!("checkers-game-{}.json", std::process::id()));
    fs::write(&path, r#"{ "Bot": { "IsBlackBot": false } }"#).unwrap();

    let mut game = Game::new(Settings::load(&path).unwrap());
    assert!(!game.settings().bot.is_bot(Side::Black));
    game.play_move("52-43".parse().unwrap()).unwrap();

    fs::write(&path, r#"{ "Bot": { "IsBlackBot": true, "NoRandom": true } }"#).unwrap();
    game.new_game();
    assert!(game.settings().bot.is_bot(Side::Black));
    assert!(game.engine_mut().no_random());
    assert_eq!(game.turn(), 0);
    assert!(game.history().is_empty());
    assert_eq!(game.position(), &Position::start_position());

    fs::remove_file(&path).unwrap();
}
