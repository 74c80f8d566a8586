use bevy::prelude::*;
use bevy_prng::WyRand;
use rand::{Rng, SeedableRng};
use crate::core::seeded_or_not::SeededOrNot;

/// Uniform sample in `[-bound, bound]`. A zero bound always yields zero.
pub fn sample_symmetric<R: Rng + ?Sized>(rng: &mut R, bound: f32) -> f32 {
    if bound <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-bound..=bound)
}

#[derive(Resource)]
pub struct GenRng(WyRand);

impl GenRng {

    pub fn new(seed: u64) -> Self {
        GenRng(WyRand::seed_from_u64(seed))
    }

    pub fn from_seed_option(seed: &SeededOrNot) -> Self {
        Self::new(seed.resolve())
    }

    pub fn rng_mut(&mut self) -> &mut WyRand {
        &mut self.0
    }
}
