pub mod coretypes;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod layout;
pub mod movegen;
pub mod movelist;
pub mod perft;
pub mod position;
pub mod protocol;
pub mod search;
pub mod settings;

pub use engine::{Engine, EngineBuilder};
pub use game::{Game, GameResult, TurnStatus};
pub use layout::Layout;
pub use position::Position;
pub use settings::Settings;
