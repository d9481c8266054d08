//! Seeded random walk for probing a maze
//!
//! Same seed, same instructions. This only wanders; it does not search for the goal.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::moves::{ALPHABET, MoveInstruction};
use super::state::MazeState;

/// Apply `steps` random instructions and return them in order
pub fn random_walk(state: &mut MazeState, steps: usize, seed: u64) -> Vec<MoveInstruction> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut applied = Vec::with_capacity(steps);
    let mut moved = 0usize;

    for _ in 0..steps {
        let instruction = ALPHABET[rng.random_range(0..ALPHABET.len())];
        if state.apply_move(instruction) {
            moved += 1;
        }
        applied.push(instruction);
    }

    log::debug!(
        "Random walk (seed {}): {} steps, {} moved, {} blocked",
        seed,
        steps,
        moved,
        steps - moved
    );
    applied
}
