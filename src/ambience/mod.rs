pub mod engine;
pub mod scheduler;
pub mod session;
pub mod voice;

use rand::Rng;

use crate::constants::NOTE_SCALE;

/// One tone of the generative background ambience
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub frequency: f32,
}

impl Note {
    /// Uniformly chosen tone from the ambient scale
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            frequency: NOTE_SCALE[rng.gen_range(0..NOTE_SCALE.len())],
        }
    }
}
