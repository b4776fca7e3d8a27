use rand::prelude::*;

use crate::*;

/// Owns the current session and replaces it wholesale on every transition.
///
/// Session seeds are drawn from one seeded generator, so a run of sessions can be replayed from a single seed.
#[derive(Clone, Debug)]
pub struct GameController {
    config: GameConfig,
    seeds: SmallRng,
    state: GameState,
    session_count: u32,
}

impl GameController {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut seeds = SmallRng::seed_from_u64(seed);
        let state = GameState::start_session(&config, RandomLayoutGenerator::new(seeds.random()));
        log::debug!("session 1 started, target: {}", state.target());
        Self {
            config,
            seeds,
            state,
            session_count: 1,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn session_count(&self) -> u32 {
        self.session_count
    }

    pub fn start_session(&mut self) -> &GameState {
        let generator = RandomLayoutGenerator::new(self.seeds.random());
        self.state = GameState::start_session(&self.config, generator);
        self.session_count = self.session_count.saturating_add(1);
        log::debug!(
            "session {} started, target: {}",
            self.session_count,
            self.state.target()
        );
        &self.state
    }

    pub fn reset_session(&mut self) -> &GameState {
        log::debug!(
            "resetting session {} after {} flips",
            self.session_count,
            self.state.flip_count()
        );
        self.start_session()
    }

    pub fn flip_card(&mut self, number: Number) -> FlipOutcome {
        let outcome = match self.state.flip(number) {
            Ok((next, outcome)) => {
                self.state = next;
                outcome
            }
            Err(err) => {
                log::debug!("ignored flip of {}: {}", number, err);
                FlipOutcome::NoChange
            }
        };

        match outcome {
            FlipOutcome::Won => log::info!(
                "found {} after {} flips",
                number,
                self.state.flip_count()
            ),
            FlipOutcome::Lost => log::info!(
                "out of flips, target was {}",
                self.state.target()
            ),
            FlipOutcome::Revealed => log::trace!("revealed {}", number),
            FlipOutcome::NoChange => {}
        }
        outcome
    }
}
