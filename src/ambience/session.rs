use tracing::{debug, info, warn};

use crate::ambience::Note;
use crate::error::AudioError;

/// Audio synthesis backend used by the ambience.
pub trait AudioOutput {
    fn resume(&mut self) -> Result<(), AudioError>;
    fn suspend(&mut self) -> Result<(), AudioError>;
    fn play(&mut self, note: Note) -> Result<(), AudioError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Running,
    Suspended,
    /// Opening the output failed; the session stays silent for good
    Unavailable,
}

pub type Opener<O> = Box<dyn FnMut() -> Result<O, AudioError>>;

/// Owned audio session. The output is opened lazily on the first `resume`
/// and is only ever suspended afterwards, never torn down.
///
/// Every failure is absorbed here: the ambience is cosmetic and degrades to
/// silence rather than reporting errors.
pub struct AudioSession<O: AudioOutput> {
    output: Option<O>,
    state: SessionState,
    opener: Opener<O>,
}

impl<O: AudioOutput> AudioSession<O> {
    pub fn new(opener: impl FnMut() -> Result<O, AudioError> + 'static) -> Self {
        Self {
            output: None,
            state: SessionState::Uninitialized,
            opener: Box::new(opener),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    fn ensure_open(&mut self) -> Option<&mut O> {
        if self.state == SessionState::Uninitialized {
            match (self.opener)() {
                Ok(output) => {
                    info!("audio session opened");
                    self.output = Some(output);
                    self.state = SessionState::Suspended;
                }
                Err(e) => {
                    warn!(error = %e, "audio unavailable, ambience will be silent");
                    self.state = SessionState::Unavailable;
                }
            }
        }
        self.output.as_mut()
    }

    pub fn resume(&mut self) {
        let Some(output) = self.ensure_open() else {
            return;
        };
        match output.resume() {
            Ok(()) => self.state = SessionState::Running,
            Err(e) => debug!(error = %e, "resume failed"),
        }
    }

    pub fn suspend(&mut self) {
        if self.state != SessionState::Running {
            return;
        }
        if let Some(output) = self.output.as_mut() {
            match output.suspend() {
                Ok(()) => self.state = SessionState::Suspended,
                Err(e) => debug!(error = %e, "suspend failed"),
            }
        }
    }

    pub fn play(&mut self, note: Note) {
        if let Some(output) = self.output.as_mut() {
            if let Err(e) = output.play(note) {
                debug!(error = %e, "note dropped");
            }
        }
    }
}
