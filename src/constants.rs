pub const SAMPLE_RATE: u32 = 44_100;
/// UI refresh rate target
pub const UI_FPS: u64 = 60;
/// Channel capacity for control -> audio messages
pub const CHANNEL_CAPACITY: usize = 64;

/// Ambient scale (C major 9-ish): C3, E3, G3, B3, D4, E4, G4
pub const NOTE_SCALE: [f32; 7] = [130.81, 164.81, 196.00, 246.94, 293.66, 329.63, 392.00];
/// Default master volume for the ambience session
pub const MASTER_GAIN: f32 = 0.25;
/// Low-pass cutoff for the muffled "felt piano" timbre
pub const NOTE_CUTOFF_HZ: f32 = 600.0;
/// Envelope peak reached at the end of the attack
pub const NOTE_PEAK: f32 = 0.3;
/// Envelope target at the end of the tail
pub const NOTE_FLOOR: f32 = 0.001;
pub const NOTE_ATTACK_SECS: f32 = 0.2;
/// Total note length; the voice stops here
pub const NOTE_DURATION_SECS: f32 = 5.0;
/// Simultaneous voices rendered by the audio callback
pub const MAX_VOICES: usize = 4;

/// Delay between note onsets, drawn uniformly from this range
pub const NOTE_DELAY_MIN_SECS: f64 = 2.5;
pub const NOTE_DELAY_MAX_SECS: f64 = 5.0;

/// How long a randomly focused card stays highlighted
pub const FOCUS_HIGHLIGHT_MS: u64 = 2000;
/// Intro overlay fade-out before it is removed
pub const INTRO_EXIT_MS: u64 = 800;
