use serde::Deserialize;

/// Roster shape and join code settings applied when a user enters a league
#[derive(Debug, Deserialize, Clone)]
pub struct LeagueSettings {
    pub field_slots: u8,
    pub goalkeeper_slots: u8,
    pub join_code_length: usize,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self {
            field_slots: 4,
            goalkeeper_slots: 1,
            join_code_length: 8,
        }
    }
}
