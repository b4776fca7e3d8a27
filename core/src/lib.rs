#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use controller::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use strings::*;
pub use types::*;

mod board;
mod controller;
mod engine;
mod error;
mod generator;
mod layout;
mod strings;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// How many distinct cards are dealt per session.
    pub pool_size: CardCount,
    /// Card values are drawn from `1..=max_number`.
    pub max_number: Number,
    /// Distinct flips allowed before the session is lost.
    pub flip_budget: CardCount,
    /// Cards per board row.
    pub columns: CardCount,
}

impl GameConfig {
    pub const fn new_unchecked(
        pool_size: CardCount,
        max_number: Number,
        flip_budget: CardCount,
        columns: CardCount,
    ) -> Self {
        Self {
            pool_size,
            max_number,
            flip_budget,
            columns,
        }
    }

    pub fn new(
        pool_size: CardCount,
        max_number: Number,
        flip_budget: CardCount,
        columns: CardCount,
    ) -> Self {
        let max_number = max_number.max(1);
        let pool_size = pool_size.clamp(1, max_number.into());
        let flip_budget = flip_budget.max(1);
        let columns = columns.max(1);
        Self::new_unchecked(pool_size, max_number, flip_budget, columns)
    }

    /// 30 cards out of `1..=100`, 20 flips, 5 per row.
    pub const fn classic() -> Self {
        Self::new_unchecked(30, 100, 20, 5)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pool_size == 0 {
            return Err(GameError::EmptyPool);
        }
        if self.pool_size > CardCount::from(self.max_number) {
            return Err(GameError::TooManyCards);
        }
        if self.flip_budget == 0 {
            return Err(GameError::ZeroBudget);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FlipOutcome {
    NoChange,
    Revealed,
    Won,
    Lost,
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        use FlipOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Won => true,
            Lost => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_config_is_default_and_valid() {
        let config = GameConfig::default();

        assert_eq!(config, GameConfig::classic());
        assert_eq!(config.pool_size, 30);
        assert_eq!(config.max_number, 100);
        assert_eq!(config.flip_budget, 20);
        assert_eq!(config.columns, 5);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn new_clamps_into_playable_range() {
        let config = GameConfig::new(300, 0, 0, 0);

        assert_eq!(config, GameConfig::new_unchecked(1, 1, 1, 1));
        assert_eq!(config.validate(), Ok(()));

        let config = GameConfig::new(120, 100, 20, 5);
        assert_eq!(config.pool_size, 100);
    }

    #[test]
    fn validate_rejects_unsatisfiable_configs() {
        assert_eq!(
            GameConfig::new_unchecked(101, 100, 20, 5).validate(),
            Err(GameError::TooManyCards)
        );
        assert_eq!(
            GameConfig::new_unchecked(0, 100, 20, 5).validate(),
            Err(GameError::EmptyPool)
        );
        assert_eq!(
            GameConfig::new_unchecked(30, 100, 0, 5).validate(),
            Err(GameError::ZeroBudget)
        );
    }

    #[test]
    fn config_survives_json() {
        let json = serde_json::to_string(&GameConfig::classic()).unwrap();
        let config: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, GameConfig::classic());
    }

    #[test]
    fn only_no_change_has_no_update() {
        assert!(!FlipOutcome::NoChange.has_update());
        assert!(FlipOutcome::Revealed.has_update());
        assert!(FlipOutcome::Won.has_update());
        assert!(FlipOutcome::Lost.has_update());
    }
}
