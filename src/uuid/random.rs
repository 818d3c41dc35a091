//! Random UUID generation.

use rand::Rng;

use super::id::Id;

impl Id {
    /// Generates a random UUID with version 4 and variant 1.
    pub fn random() -> Id {
        Id::random_from(&mut rand::thread_rng())
    }

    /// Like [`Id::random`] with a caller-supplied source of randomness.
    pub fn random_from<R: Rng + ?Sized>(rng: &mut R) -> Id {
        let higher: u64 = rng.r#gen();
        let lower: u64 = rng.r#gen();
        Id {
            higher: (higher & 0xffff_ffff_ffff_0fff) | 0x4000,
            lower: (lower & 0x3fff_ffff_ffff_ffff) | 0x8000_0000_0000_0000,
        }
    }
}
