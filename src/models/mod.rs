pub mod auth;
pub mod common;
pub mod league;
pub mod match_stats;
pub mod player;
pub mod roster;
pub mod scoring;
pub mod user;
