use cube_core::{StickerSet, apply_moves, create_initial_cube_state, generate_scramble_with};

/// A handful of reachable states, the solved one first
pub fn sample_states(seed: u64, count: usize) -> Vec<StickerSet> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let solved = create_initial_cube_state();

    std::iter::once(solved.clone())
        .chain((1..count).map(|_| {
            let length = rng.usize(1..40);
            apply_moves(&solved, &generate_scramble_with(&mut rng, length))
        }))
        .collect()
}
