use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::ambience::session::{AudioOutput, AudioSession};
use crate::ambience::Note;
use crate::constants::{NOTE_DELAY_MAX_SECS, NOTE_DELAY_MIN_SECS, NOTE_DURATION_SECS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbienceState {
    Stopped,
    Running,
    Suspended,
}

/// Plays randomly spaced notes while enabled.
///
/// Driven from the UI loop: `tick` is the timer callback and must be called
/// regularly with the current instant. There is at most one pending note
/// timer at any time.
pub struct AmbienceScheduler {
    state: AmbienceState,
    next_note_at: Option<Instant>,
    tail_ends_at: Option<Instant>,
    suspend_at: Option<Instant>,
    rng: StdRng,
}

impl AmbienceScheduler {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            state: AmbienceState::Stopped,
            next_note_at: None,
            tail_ends_at: None,
            suspend_at: None,
            rng,
        }
    }

    pub fn state(&self) -> AmbienceState {
        self.state
    }

    pub fn next_note_at(&self) -> Option<Instant> {
        self.next_note_at
    }

    pub fn set_enabled<O: AudioOutput>(
        &mut self,
        enabled: bool,
        now: Instant,
        session: &mut AudioSession<O>,
    ) {
        if enabled {
            self.enable(now, session);
        } else {
            self.disable(now, session);
        }
    }

    pub fn enable<O: AudioOutput>(&mut self, now: Instant, session: &mut AudioSession<O>) {
        if self.state == AmbienceState::Running {
            return;
        }
        info!("ambience enabled");
        self.state = AmbienceState::Running;
        self.suspend_at = None;
        session.resume();
        self.play_and_reschedule(now, session);
    }

    /// Cancels the pending note. The session is suspended once the last
    /// note's tail has finished.
    pub fn disable<O: AudioOutput>(&mut self, now: Instant, session: &mut AudioSession<O>) {
        if self.state != AmbienceState::Running {
            return;
        }
        info!("ambience disabled");
        self.state = AmbienceState::Suspended;
        self.next_note_at = None;
        self.suspend_at = Some(match self.tail_ends_at {
            Some(end) if end > now => end,
            _ => now,
        });
        self.tick(now, session);
    }

    pub fn tick<O: AudioOutput>(&mut self, now: Instant, session: &mut AudioSession<O>) {
        match self.state {
            AmbienceState::Running => {
                if self.next_note_at.is_some_and(|due| now >= due) {
                    self.play_and_reschedule(now, session);
                }
            }
            AmbienceState::Suspended => {
                if self.suspend_at.is_some_and(|at| now >= at) {
                    self.suspend_at = None;
                    session.suspend();
                }
            }
            AmbienceState::Stopped => {}
        }
    }

    /// Stops immediately without waiting for the tail
    pub fn shutdown<O: AudioOutput>(&mut self, session: &mut AudioSession<O>) {
        self.next_note_at = None;
        self.suspend_at = None;
        if self.state == AmbienceState::Running {
            self.state = AmbienceState::Suspended;
        }
        session.suspend();
    }

    fn play_and_reschedule<O: AudioOutput>(&mut self, now: Instant, session: &mut AudioSession<O>) {
        let note = Note::random(&mut self.rng);
        debug!(frequency = note.frequency, "ambience note");
        session.play(note);
        self.tail_ends_at = Some(now + Duration::from_secs_f32(NOTE_DURATION_SECS));

        let delay = self.rng.gen_range(NOTE_DELAY_MIN_SECS..=NOTE_DELAY_MAX_SECS);
        self.next_note_at = Some(now + Duration::from_secs_f64(delay));
    }
}

impl Default for AmbienceScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambience::session::SessionState;
    use crate::constants::NOTE_SCALE;
    use crate::error::AudioError;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Event {
        Resume,
        Suspend,
        Play(f32),
    }

    #[derive(Clone, Default)]
    struct Log(Rc<RefCell<Vec<Event>>>);

    impl Log {
        fn events(&self) -> Vec<Event> {
            self.0.borrow().clone()
        }

        fn plays(&self) -> usize {
            self.0
                .borrow()
                .iter()
                .filter(|e| matches!(e, Event::Play(_)))
                .count()
        }
    }

    struct FakeOutput {
        log: Log,
    }

    impl AudioOutput for FakeOutput {
        fn resume(&mut self) -> Result<(), AudioError> {
            self.log.0.borrow_mut().push(Event::Resume);
            Ok(())
        }

        fn suspend(&mut self) -> Result<(), AudioError> {
            self.log.0.borrow_mut().push(Event::Suspend);
            Ok(())
        }

        fn play(&mut self, note: Note) -> Result<(), AudioError> {
            self.log.0.borrow_mut().push(Event::Play(note.frequency));
            Ok(())
        }
    }

    fn fake_session(log: &Log, opened: &Rc<Cell<usize>>) -> AudioSession<FakeOutput> {
        let log = log.clone();
        let opened = Rc::clone(opened);
        AudioSession::new(move || {
            opened.set(opened.get() + 1);
            Ok(FakeOutput { log: log.clone() })
        })
    }

    fn scheduler() -> AmbienceScheduler {
        AmbienceScheduler::with_rng(StdRng::seed_from_u64(7))
    }

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn enable_opens_session_lazily_and_plays() {
        let log = Log::default();
        let opened = Rc::new(Cell::new(0));
        let mut session = fake_session(&log, &opened);
        assert_eq!(session.state(), SessionState::Uninitialized);
        assert_eq!(opened.get(), 0);

        let mut amb = scheduler();
        let t0 = Instant::now();
        amb.enable(t0, &mut session);

        assert_eq!(opened.get(), 1);
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(amb.state(), AmbienceState::Running);
        assert_eq!(log.plays(), 1);
        assert_eq!(log.events()[0], Event::Resume);
    }

    #[test]
    fn enable_twice_keeps_one_chain() {
        let log = Log::default();
        let opened = Rc::new(Cell::new(0));
        let mut session = fake_session(&log, &opened);
        let mut amb = scheduler();
        let t0 = Instant::now();

        amb.enable(t0, &mut session);
        let due = amb.next_note_at();
        amb.enable(t0 + secs(0.5), &mut session);

        assert_eq!(amb.next_note_at(), due);
        assert_eq!(log.plays(), 1);
        assert_eq!(opened.get(), 1);
    }

    #[test]
    fn next_note_is_two_and_a_half_to_five_seconds_out() {
        let log = Log::default();
        let opened = Rc::new(Cell::new(0));
        let mut session = fake_session(&log, &opened);
        let mut amb = scheduler();
        let mut now = Instant::now();
        amb.enable(now, &mut session);

        for _ in 0..200 {
            let due = amb.next_note_at().unwrap();
            let delay = due - now;
            assert!(delay >= secs(NOTE_DELAY_MIN_SECS) && delay <= secs(NOTE_DELAY_MAX_SECS));

            amb.tick(due - Duration::from_millis(1), &mut session);
            assert_eq!(amb.next_note_at(), Some(due));

            amb.tick(due, &mut session);
            now = due;
        }
        assert_eq!(log.plays(), 201);
    }

    #[test]
    fn notes_come_from_the_scale() {
        let log = Log::default();
        let opened = Rc::new(Cell::new(0));
        let mut session = fake_session(&log, &opened);
        let mut amb = scheduler();
        let mut now = Instant::now();
        amb.enable(now, &mut session);
        for _ in 0..100 {
            now += secs(5.0);
            amb.tick(now, &mut session);
        }

        for event in log.events() {
            if let Event::Play(freq) = event {
                assert!(NOTE_SCALE.contains(&freq), "{freq} not in scale");
            }
        }
    }

    #[test]
    fn disable_cancels_pending_note() {
        let log = Log::default();
        let opened = Rc::new(Cell::new(0));
        let mut session = fake_session(&log, &opened);
        let mut amb = scheduler();
        let t0 = Instant::now();

        amb.enable(t0, &mut session);
        amb.disable(t0 + secs(1.0), &mut session);
        assert_eq!(amb.next_note_at(), None);
        assert_eq!(amb.state(), AmbienceState::Suspended);

        for i in 1..20 {
            amb.tick(t0 + secs(i as f64), &mut session);
        }
        assert_eq!(log.plays(), 1);
    }

    #[test]
    fn disable_mid_note_lets_tail_finish() {
        let log = Log::default();
        let opened = Rc::new(Cell::new(0));
        let mut session = fake_session(&log, &opened);
        let mut amb = scheduler();
        let t0 = Instant::now();

        amb.enable(t0, &mut session);
        amb.disable(t0 + secs(1.0), &mut session);
        assert!(!log.events().contains(&Event::Suspend));
        assert_eq!(session.state(), SessionState::Running);

        amb.tick(t0 + secs(4.9), &mut session);
        assert_eq!(session.state(), SessionState::Running);

        amb.tick(t0 + secs(5.0), &mut session);
        assert_eq!(session.state(), SessionState::Suspended);
        assert_eq!(log.events().last(), Some(&Event::Suspend));
    }

    #[test]
    fn disable_after_tail_suspends_at_once() {
        let log = Log::default();
        let opened = Rc::new(Cell::new(0));
        let mut session = fake_session(&log, &opened);
        let mut amb = scheduler();
        let t0 = Instant::now();

        amb.enable(t0, &mut session);
        amb.disable(t0 + secs(6.0), &mut session);
        assert_eq!(session.state(), SessionState::Suspended);
    }

    #[test]
    fn disable_is_idempotent() {
        let log = Log::default();
        let opened = Rc::new(Cell::new(0));
        let mut session = fake_session(&log, &opened);
        let mut amb = scheduler();
        let t0 = Instant::now();

        amb.disable(t0, &mut session);
        assert_eq!(amb.state(), AmbienceState::Stopped);
        assert!(log.events().is_empty());
        assert_eq!(opened.get(), 0);

        amb.enable(t0, &mut session);
        amb.disable(t0 + secs(10.0), &mut session);
        amb.disable(t0 + secs(11.0), &mut session);
        let suspends = log.events().iter().filter(|e| **e == Event::Suspend).count();
        assert_eq!(suspends, 1);
    }

    #[test]
    fn reenable_resumes_existing_session() {
        let log = Log::default();
        let opened = Rc::new(Cell::new(0));
        let mut session = fake_session(&log, &opened);
        let mut amb = scheduler();
        let t0 = Instant::now();

        amb.enable(t0, &mut session);
        amb.disable(t0 + secs(6.0), &mut session);
        amb.enable(t0 + secs(7.0), &mut session);

        assert_eq!(opened.get(), 1);
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(amb.state(), AmbienceState::Running);
        assert_eq!(log.plays(), 2);
    }

    #[test]
    fn reenable_during_tail_cancels_pending_suspend() {
        let log = Log::default();
        let opened = Rc::new(Cell::new(0));
        let mut session = fake_session(&log, &opened);
        let mut amb = scheduler();
        let t0 = Instant::now();

        amb.enable(t0, &mut session);
        amb.disable(t0 + secs(1.0), &mut session);
        amb.enable(t0 + secs(2.0), &mut session);
        amb.tick(t0 + secs(5.0), &mut session);

        assert!(!log.events().contains(&Event::Suspend));
        assert_eq!(session.state(), SessionState::Running);
    }

    #[test]
    fn unavailable_audio_degrades_silently() {
        let attempts = Rc::new(Cell::new(0));
        let counter = Rc::clone(&attempts);
        let mut session: AudioSession<FakeOutput> = AudioSession::new(move || {
            counter.set(counter.get() + 1);
            Err(AudioError::NoDevice)
        });
        let mut amb = scheduler();
        let t0 = Instant::now();

        amb.enable(t0, &mut session);
        assert_eq!(session.state(), SessionState::Unavailable);
        assert_eq!(amb.state(), AmbienceState::Running);
        assert!(amb.next_note_at().is_some());

        amb.tick(t0 + secs(5.0), &mut session);
        amb.disable(t0 + secs(6.0), &mut session);
        amb.enable(t0 + secs(7.0), &mut session);
        assert_eq!(attempts.get(), 1);
    }

    #[test]
    fn shutdown_suspends_immediately() {
        let log = Log::default();
        let opened = Rc::new(Cell::new(0));
        let mut session = fake_session(&log, &opened);
        let mut amb = scheduler();
        let t0 = Instant::now();

        amb.enable(t0, &mut session);
        amb.shutdown(&mut session);
        assert_eq!(session.state(), SessionState::Suspended);
        assert_eq!(amb.next_note_at(), None);
    }
}
