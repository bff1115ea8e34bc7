pub mod chat;
pub mod d20;
pub mod list;
pub mod roll;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Build the roll RNG: seeded for reproducible output, OS entropy
/// otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
