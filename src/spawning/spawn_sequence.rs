use std::ops::Range;
use std::time::Duration;
use bevy::prelude::*;
use rand::Rng;
use crate::core::child_layout::CHILD_COUNT;
use crate::core::components::FractalNode;
use crate::spawning::helpers::GenRng;
use crate::spawning::node_spawning::spawn_fractal_child;

/// Seconds waited before each successful spawn attempt.
pub const SPAWN_DELAY: Range<f32> = 0.1..0.5;

/// Suspendable walk over the child directions of one node.
///
/// Each direction gets one independent probability roll. A successful roll
/// suspends the walk for a random delay, after which that direction is handed
/// back for spawning. A failed roll moves straight on to the next direction and
/// is never retried. The walk is advanced once per frame and finishes after the
/// last direction.
#[derive(Component, Debug, Clone, Default)]
pub struct SpawnSequence {
    next_direction: usize,
    delay: Option<Timer>,
}

impl SpawnSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self) -> bool {
        self.delay.is_none() && self.next_direction >= CHILD_COUNT
    }

    pub fn pending_delay(&self) -> Option<Duration> {
        self.delay.as_ref().map(|timer| timer.duration())
    }

    /// Returns the direction whose delay ran out during this step, if any.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        delta: Duration,
        spawn_probability: f32,
        rng: &mut R,
    ) -> Option<usize> {
        let mut ready = None;

        if let Some(timer) = self.delay.as_mut() {
            timer.tick(delta);
            if !timer.finished() {
                return None;
            }
            ready = Some(self.next_direction);
            self.delay = None;
            self.next_direction += 1;
        }

        while self.next_direction < CHILD_COUNT {
            if rng.gen::<f32>() < spawn_probability {
                let seconds = rng.gen_range(SPAWN_DELAY);
                self.delay = Some(Timer::from_seconds(seconds, TimerMode::Once));
                break;
            }
            self.next_direction += 1;
        }

        ready
    }
}

pub fn advance_spawn_sequences(
    mut commands: Commands,
    time: Res<Time>,
    mut gen_rng: ResMut<GenRng>,
    mut query: Query<(Entity, &FractalNode, &mut SpawnSequence)>,
) {
    for (entity, node, mut sequence) in query.iter_mut() {
        let ready = sequence.advance(time.delta(), node.settings.spawn_probability, gen_rng.rng_mut());

        if let Some(direction) = ready {
            spawn_fractal_child(&mut commands, entity, node, direction);
        }

        if sequence.is_finished() {
            commands.entity(entity).remove::<SpawnSequence>();
        }
    }
}
