use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

/// Display text shown around the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strings {
    pub game_title: String,
    pub target_number: String,
    pub remaining_flips: String,
    pub flips: String,
    pub congratulations: String,
    pub game_over: String,
    pub reset_game: String,
    pub hidden_card: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            game_title: "Guess The Number".to_string(),
            target_number: "Target Number: ".to_string(),
            remaining_flips: "Remaining Flips: ".to_string(),
            flips: "Flips: ".to_string(),
            congratulations: "Congratulations! You found the number ".to_string(),
            game_over: "Game Over! You ran out of flips.".to_string(),
            reset_game: "Reset Game".to_string(),
            hidden_card: "!".to_string(),
        }
    }
}
