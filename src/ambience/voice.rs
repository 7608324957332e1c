use crate::constants::{NOTE_ATTACK_SECS, NOTE_CUTOFF_HZ, NOTE_DURATION_SECS, NOTE_FLOOR, NOTE_PEAK};

/// Envelope gain `t` seconds after note onset: linear rise to the peak over
/// the attack, then an exponential ramp to the floor at the end of the note.
pub fn envelope_at(t: f32) -> f32 {
    if t <= 0.0 || t >= NOTE_DURATION_SECS {
        0.0
    } else if t < NOTE_ATTACK_SECS {
        NOTE_PEAK * t / NOTE_ATTACK_SECS
    } else {
        let progress = (t - NOTE_ATTACK_SECS) / (NOTE_DURATION_SECS - NOTE_ATTACK_SECS);
        NOTE_PEAK * (NOTE_FLOOR / NOTE_PEAK).powf(progress)
    }
}

/// "Felt piano" voice: triangle oscillator through a low-pass filter, shaped
/// by `envelope_at`. Stops by itself once the tail has elapsed.
#[derive(Debug, Clone, Copy)]
pub struct FeltVoice {
    frequency: f32,
    phase: f64,
    phase_inc: f64,
    sample_rate: f32,
    elapsed: u32,
    length: u32,
    // State-variable filter
    f: f32,
    q: f32,
    lp: f32,
    bp: f32,
    active: bool,
}

impl FeltVoice {
    pub fn new(frequency: f32, sample_rate: u32) -> Self {
        let sr = sample_rate as f32;
        let f = 2.0 * (std::f32::consts::PI * NOTE_CUTOFF_HZ / sr).sin();
        Self {
            frequency,
            phase: 0.0,
            phase_inc: frequency as f64 / sample_rate as f64,
            sample_rate: sr,
            elapsed: 0,
            length: (NOTE_DURATION_SECS * sr) as u32,
            f: f.clamp(0.001, 0.99),
            q: 1.0,
            lp: 0.0,
            bp: 0.0,
            active: true,
        }
    }

    pub fn next_sample(&mut self) -> f32 {
        if !self.active {
            return 0.0;
        }

        let env = envelope_at(self.elapsed as f32 / self.sample_rate);

        let osc = (4.0 * (self.phase - 0.5).abs() - 1.0) as f32;
        self.phase += self.phase_inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        self.lp += self.f * self.bp;
        let hp = osc - self.lp - self.q * self.bp;
        self.bp += self.f * hp;

        self.elapsed += 1;
        if self.elapsed >= self.length {
            self.active = false;
        }

        self.lp * env
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }
}

/// Bounded set of sounding voices, owned by the audio callback.
#[derive(Debug)]
pub struct VoicePool {
    voices: Vec<FeltVoice>,
    capacity: usize,
    sample_rate: u32,
}

impl VoicePool {
    pub fn new(capacity: usize, sample_rate: u32) -> Self {
        Self {
            voices: Vec::with_capacity(capacity),
            capacity,
            sample_rate,
        }
    }

    /// Starts a note. When every voice is busy the oldest one is stolen.
    pub fn trigger(&mut self, frequency: f32) {
        if self.capacity == 0 {
            return;
        }
        if self.voices.len() >= self.capacity {
            self.voices.remove(0);
        }
        self.voices.push(FeltVoice::new(frequency, self.sample_rate));
    }

    /// Fills an interleaved buffer, writing the same mono mix to every
    /// channel, then drops voices whose tail has finished.
    pub fn render(&mut self, data: &mut [f32], channels: usize, gain: f32) {
        for frame in data.chunks_mut(channels.max(1)) {
            let sum: f32 = self.voices.iter_mut().map(FeltVoice::next_sample).sum();
            let sample = (sum * gain).clamp(-1.0, 1.0);
            frame.fill(sample);
        }
        self.voices.retain(FeltVoice::is_active);
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    pub fn frequencies(&self) -> impl Iterator<Item = f32> + '_ {
        self.voices.iter().map(FeltVoice::frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_VOICES, SAMPLE_RATE};

    fn rms(voice: &mut FeltVoice, samples: usize) -> f32 {
        let sum: f32 = (0..samples).map(|_| voice.next_sample().powi(2)).sum();
        (sum / samples as f32).sqrt()
    }

    #[test]
    fn envelope_shape() {
        assert_eq!(envelope_at(0.0), 0.0);
        assert!((envelope_at(0.1) - 0.15).abs() < 1e-6);
        assert!((envelope_at(NOTE_ATTACK_SECS) - NOTE_PEAK).abs() < 1e-6);
        assert!((envelope_at(NOTE_DURATION_SECS - 1e-4) - NOTE_FLOOR).abs() < 1e-4);
        assert_eq!(envelope_at(NOTE_DURATION_SECS), 0.0);
    }

    #[test]
    fn envelope_decays_after_attack() {
        let mut prev = envelope_at(NOTE_ATTACK_SECS);
        let mut t = NOTE_ATTACK_SECS + 0.1;
        while t < NOTE_DURATION_SECS {
            let e = envelope_at(t);
            assert!(e < prev);
            prev = e;
            t += 0.1;
        }
    }

    #[test]
    fn voice_stops_after_tail() {
        let mut voice = FeltVoice::new(196.0, SAMPLE_RATE);
        let length = (NOTE_DURATION_SECS * SAMPLE_RATE as f32) as usize;
        for _ in 0..length - 1 {
            voice.next_sample();
        }
        assert!(voice.is_active());
        voice.next_sample();
        assert!(!voice.is_active());
        assert_eq!(voice.next_sample(), 0.0);
    }

    #[test]
    fn output_stays_bounded() {
        let mut voice = FeltVoice::new(392.0, SAMPLE_RATE);
        for _ in 0..SAMPLE_RATE {
            assert!(voice.next_sample().abs() <= 1.0);
        }
    }

    #[test]
    fn full_pool_steals_oldest_voice() {
        let mut pool = VoicePool::new(MAX_VOICES, SAMPLE_RATE);
        for freq in [100.0, 200.0, 300.0, 400.0, 500.0] {
            pool.trigger(freq);
        }
        assert_eq!(pool.len(), MAX_VOICES);
        let freqs: Vec<f32> = pool.frequencies().collect();
        assert_eq!(freqs, vec![200.0, 300.0, 400.0, 500.0]);
    }

    #[test]
    fn finished_voices_are_dropped() {
        let mut pool = VoicePool::new(MAX_VOICES, SAMPLE_RATE);
        pool.trigger(196.0);
        pool.trigger(246.94);

        let mut buf = vec![0.0f32; 2 * 1024];
        pool.render(&mut buf, 2, 1.0);
        assert_eq!(pool.len(), 2);
        assert!(buf.chunks(2).all(|f| f[0] == f[1]));
        assert!(buf.iter().any(|s| *s != 0.0));

        let length = (NOTE_DURATION_SECS * SAMPLE_RATE as f32) as usize;
        let mut tail = vec![0.0f32; 2 * length];
        pool.render(&mut tail, 2, 1.0);
        assert!(pool.is_empty());

        buf.fill(1.0);
        pool.render(&mut buf, 2, 1.0);
        assert!(buf.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn low_pass_muffles_high_notes() {
        let n = SAMPLE_RATE as usize / 2;
        let low = rms(&mut FeltVoice::new(130.81, SAMPLE_RATE), n);
        let high = rms(&mut FeltVoice::new(6000.0, SAMPLE_RATE), n);
        assert!(high < low * 0.25, "low={low} high={high}");
    }
}
