use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CardFace {
    Hidden,
    Revealed(Number),
}

impl CardFace {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub fn label(self, strings: &Strings) -> String {
        match self {
            Self::Hidden => strings.hidden_card.clone(),
            Self::Revealed(number) => format!("{}", number),
        }
    }
}

impl Default for CardFace {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub value: Number,
    pub face: CardFace,
    /// Whether tapping the card can still change anything.
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeaderView {
    pub title: String,
    pub target: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterView {
    pub remaining_flips: String,
    pub flip_count: String,
    pub reset: String,
}

/// Everything needed to draw one frame of the board, derived only from a [`GameState`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub header: HeaderView,
    pub result: Option<String>,
    pub rows: Vec<Vec<CardView>>,
    pub footer: FooterView,
}

impl BoardView {
    pub fn render(state: &GameState, strings: &Strings, columns: CardCount) -> Self {
        let header = HeaderView {
            title: strings.game_title.clone(),
            target: format!("{}{}", strings.target_number, state.target()),
        };

        let result = match (state.status(), state.guess()) {
            (GameStatus::InProgress, _) => None,
            (GameStatus::Won, Some(guess)) => Some(format!("{}{}", strings.congratulations, guess)),
            (GameStatus::Won, None) | (GameStatus::Lost, _) => Some(strings.game_over.clone()),
        };

        let cards: Vec<CardView> = state
            .pool()
            .iter()
            .map(|&value| CardView {
                value,
                face: if state.is_revealed(value) {
                    CardFace::Revealed(value)
                } else {
                    CardFace::Hidden
                },
                enabled: state.can_flip(value),
            })
            .collect();
        let rows = cards
            .chunks(usize::from(columns.max(1)))
            .map(|row| row.to_vec())
            .collect();

        let footer = FooterView {
            remaining_flips: format!("{}{}", strings.remaining_flips, state.remaining_flips()),
            flip_count: format!("{}{}", strings.flips, state.flip_count()),
            reset: strings.reset_game.clone(),
        };

        Self {
            header,
            result,
            rows,
            footer,
        }
    }

    pub fn cards(&self) -> impl Iterator<Item = &CardView> {
        self.rows.iter().flatten()
    }
}
