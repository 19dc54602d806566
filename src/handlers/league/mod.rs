pub mod league_handler;
pub mod match_handler;
pub mod player_handler;
pub mod roster_handler;
