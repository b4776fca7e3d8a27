use alloc::collections::BTreeSet;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Snapshot of one session. Transitions build a new snapshot and leave the old one untouched.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameState {
    layout: CardLayout,
    revealed: BTreeSet<Number>,
    flip_count: Saturating<CardCount>,
    flip_budget: CardCount,
    status: GameStatus,
    guess: Option<Number>,
}

impl GameState {
    pub fn new(layout: CardLayout, flip_budget: CardCount) -> Self {
        Self {
            layout,
            revealed: BTreeSet::new(),
            flip_count: Saturating(0),
            flip_budget,
            status: Default::default(),
            guess: None,
        }
    }

    pub fn start_session(config: &GameConfig, generator: impl LayoutGenerator) -> Self {
        Self::new(generator.generate(config), config.flip_budget)
    }

    /// Same as [`GameState::start_session`], nothing carries over from the previous session.
    pub fn reset_session(config: &GameConfig, generator: impl LayoutGenerator) -> Self {
        Self::start_session(config, generator)
    }

    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    pub fn pool(&self) -> &[Number] {
        self.layout.numbers()
    }

    pub fn target(&self) -> Number {
        self.layout.target()
    }

    pub fn revealed(&self) -> &BTreeSet<Number> {
        &self.revealed
    }

    pub fn is_revealed(&self, number: Number) -> bool {
        self.revealed.contains(&number)
    }

    pub fn flip_count(&self) -> CardCount {
        self.flip_count.0
    }

    pub fn flip_budget(&self) -> CardCount {
        self.flip_budget
    }

    pub fn remaining_flips(&self) -> CardCount {
        self.flip_budget.saturating_sub(self.flip_count.0)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn guess(&self) -> Option<Number> {
        self.guess
    }

    pub fn can_flip(&self, number: Number) -> bool {
        !self.is_finished() && self.layout.contains(number) && !self.is_revealed(number)
    }

    /// Strict flip: reports why a flip was refused instead of swallowing it.
    pub fn flip(&self, number: Number) -> Result<(Self, FlipOutcome)> {
        let number = self.layout.validate_card(number)?;
        self.check_not_finished()?;

        if self.is_revealed(number) {
            return Ok((self.clone(), FlipOutcome::NoChange));
        }

        let mut next = self.clone();
        next.revealed.insert(number);
        next.flip_count += 1;

        // a winning flip on the last allowed flip still counts as a win
        let outcome = if number == next.layout.target() {
            next.status = GameStatus::Won;
            next.guess = Some(number);
            FlipOutcome::Won
        } else if next.flip_count.0 >= next.flip_budget {
            next.status = GameStatus::Lost;
            FlipOutcome::Lost
        } else {
            FlipOutcome::Revealed
        };

        Ok((next, outcome))
    }

    /// Flips `number`, or returns an unchanged copy when the flip is not allowed.
    pub fn flip_card(&self, number: Number) -> Self {
        match self.flip(number) {
            Ok((next, _)) => next,
            Err(err) => {
                log::debug!("ignored flip of {}: {}", number, err);
                self.clone()
            }
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    /// 30 cards starting with 3, 7, 12, target 12.
    fn scenario() -> GameState {
        let mut numbers = vec![3, 7, 12];
        numbers.extend(40..67);
        GameState::new(CardLayout::from_numbers(numbers, 12).unwrap(), 20)
    }

    fn non_targets(state: &GameState) -> Vec<Number> {
        state
            .pool()
            .iter()
            .copied()
            .filter(|&n| n != state.target())
            .collect()
    }

    #[test]
    fn fresh_session_is_in_progress() {
        let state = scenario();

        assert_eq!(state.pool().len(), 30);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.revealed().is_empty());
        assert_eq!(state.flip_count(), 0);
        assert_eq!(state.remaining_flips(), 20);
        assert_eq!(state.guess(), None);
    }

    #[test]
    fn flip_miss_then_target_wins() {
        let state = scenario();

        let state = state.flip_card(7);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.revealed(), &BTreeSet::from([7]));
        assert_eq!(state.flip_count(), 1);
        assert_eq!(state.remaining_flips(), 19);

        let (state, outcome) = state.flip(12).unwrap();
        assert_eq!(outcome, FlipOutcome::Won);
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.guess(), Some(12));
    }

    #[test]
    fn flip_does_not_touch_the_original_snapshot() {
        let state = scenario();
        let next = state.flip_card(3);

        assert!(state.revealed().is_empty());
        assert!(next.is_revealed(3));
        assert_eq!(next.layout(), state.layout());
    }

    #[test]
    fn reflip_is_ignored() {
        let state = scenario().flip_card(7);

        let (again, outcome) = state.flip(7).unwrap();

        assert_eq!(outcome, FlipOutcome::NoChange);
        assert_eq!(again, state);
        assert_eq!(again.flip_count(), 1);
    }

    #[test]
    fn twentieth_miss_loses() {
        let mut state = scenario();
        let misses = non_targets(&state);

        for (i, &number) in misses.iter().take(20).enumerate() {
            let (next, outcome) = state.flip(number).unwrap();
            state = next;
            if i < 19 {
                assert_eq!(outcome, FlipOutcome::Revealed);
            } else {
                assert_eq!(outcome, FlipOutcome::Lost);
            }
        }

        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.flip_count(), 20);
        assert_eq!(state.remaining_flips(), 0);
        assert_eq!(state.guess(), None);
    }

    #[test]
    fn target_on_last_flip_wins() {
        let mut state = scenario();
        for &number in non_targets(&state).iter().take(19) {
            state = state.flip_card(number);
        }
        assert_eq!(state.status(), GameStatus::InProgress);

        let (state, outcome) = state.flip(12).unwrap();

        assert_eq!(outcome, FlipOutcome::Won);
        assert_eq!(state.flip_count(), 20);
        assert_eq!(state.guess(), Some(12));
    }

    #[test]
    fn finished_session_absorbs_flips() {
        let won = scenario().flip_card(12);

        assert_eq!(won.flip(3), Err(GameError::AlreadyEnded));
        assert_eq!(won.flip_card(3), won);
        assert!(!won.can_flip(3));
    }

    #[test]
    fn card_outside_pool_is_ignored() {
        let state = scenario();

        assert_eq!(state.flip(99), Err(GameError::NotInPool));
        assert_eq!(state.flip_card(99), state);
    }

    #[test]
    fn random_sessions_keep_invariants() {
        let config = GameConfig::classic();
        for seed in 0..50 {
            let mut state = GameState::start_session(&config, RandomLayoutGenerator::new(seed));
            assert!(state.layout().contains(state.target()));

            for &number in state.pool().to_vec().iter().rev() {
                let before = state.clone();
                state = state.flip_card(number);

                assert!(state.revealed().iter().all(|&n| state.layout().contains(n)));
                assert_eq!(usize::from(state.flip_count()), state.revealed().len());
                assert!(state.flip_count() >= before.flip_count());
                if before.is_finished() {
                    assert_eq!(state, before);
                }
            }

            assert!(state.is_finished());
        }
    }

    #[test]
    fn reset_session_starts_over() {
        let config = GameConfig::classic();
        let finished = GameState::start_session(&config, RandomLayoutGenerator::new(1));
        let target = finished.target();
        let finished = finished.flip_card(target);
        assert!(finished.is_finished());

        let state = GameState::reset_session(&config, RandomLayoutGenerator::new(2));

        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.revealed().is_empty());
        assert_eq!(state.flip_count(), 0);
        assert_eq!(state.remaining_flips(), 20);
    }
}
