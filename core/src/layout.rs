use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// The cards dealt for one session, in display order, plus the number to find.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCardLayout")]
pub struct CardLayout {
    numbers: Vec<Number>,
    target: Number,
}

#[derive(Deserialize)]
struct RawCardLayout {
    numbers: Vec<Number>,
    target: Number,
}

impl TryFrom<RawCardLayout> for CardLayout {
    type Error = GameError;

    fn try_from(raw: RawCardLayout) -> Result<Self> {
        Self::from_numbers(raw.numbers, raw.target)
    }
}

impl CardLayout {
    pub fn from_numbers(numbers: Vec<Number>, target: Number) -> Result<Self> {
        if numbers.is_empty() {
            return Err(GameError::EmptyPool);
        }

        let mut seen = BTreeSet::new();
        if !numbers.iter().all(|&number| seen.insert(number)) {
            return Err(GameError::DuplicateCard);
        }

        if !seen.contains(&target) {
            return Err(GameError::TargetNotInPool);
        }

        Ok(Self::new_unchecked(numbers, target))
    }

    pub(crate) fn new_unchecked(numbers: Vec<Number>, target: Number) -> Self {
        Self { numbers, target }
    }

    pub fn numbers(&self) -> &[Number] {
        &self.numbers
    }

    pub fn target(&self) -> Number {
        self.target
    }

    pub fn len(&self) -> CardCount {
        to_count(self.numbers.len())
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn contains(&self, number: Number) -> bool {
        self.numbers.contains(&number)
    }

    pub fn validate_card(&self, number: Number) -> Result<Number> {
        if self.contains(number) {
            Ok(number)
        } else {
            Err(GameError::NotInPool)
        }
    }
}
