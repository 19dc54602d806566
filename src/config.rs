pub mod jwt;
pub mod league;
pub mod settings;
