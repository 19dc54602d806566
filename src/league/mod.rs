pub mod league;
pub mod roster;
pub mod validation;

pub use league::LeagueService;
pub use roster::RosterService;
