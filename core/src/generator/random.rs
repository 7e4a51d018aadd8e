use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Deals rounds from a seeded RNG: random cells, random distinct values, randomly paired.
#[derive(Clone, Debug)]
pub struct RandomRoundGenerator {
    rng: SmallRng,
}

impl RandomRoundGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RoundGenerator for RandomRoundGenerator {
    fn generate(&mut self, config: &GameConfig) -> Result<RoundLayout> {
        let count = usize::from(config.number_count);

        let cell_ids = unique_random_integers(&mut self.rng, 1, config.grid_size.into(), count)?;
        let values = unique_random_integers(
            &mut self.rng,
            config.min_value.into(),
            config.max_value.into(),
            count,
        )?;
        let values = shuffle(&mut self.rng, &values);

        let assignments = cell_ids
            .into_iter()
            .zip(values)
            .map(|(id, value)| {
                let id = CellId::try_from(id).map_err(|_| GameError::InvalidCell)?;
                let value = Digit::try_from(value).map_err(|_| GameError::InvalidRange)?;
                Ok((id, value))
            })
            .collect::<Result<Vec<_>>>()?;

        log::trace!("generated round assignments: {:?}", assignments);
        RoundLayout::from_assignments(config, &assignments)
    }
}
