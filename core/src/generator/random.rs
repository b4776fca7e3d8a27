use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use super::*;

/// Draws the pool by rejection sampling over `1..=max_number`, then picks the target uniformly among the drawn cards.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: &GameConfig) -> CardLayout {
        use rand::prelude::*;

        let max_number = config.max_number.max(1);
        let pool_size = if config.pool_size > CardCount::from(max_number) {
            log::warn!(
                "Pool cannot be filled, requested {} cards but only {} numbers exist",
                config.pool_size,
                max_number
            );
            CardCount::from(max_number)
        } else {
            config.pool_size.max(1)
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut seen = BTreeSet::new();
        let mut numbers = Vec::with_capacity(pool_size.into());
        while to_count(numbers.len()) < pool_size {
            let number: Number = rng.random_range(1..=max_number);
            if seen.insert(number) {
                numbers.push(number);
            }
        }

        let target = numbers[rng.random_range(0..numbers.len())];
        log::debug!("Dealt {} cards, target: {}", numbers.len(), target);
        CardLayout::new_unchecked(numbers, target)
    }
}
