/// User intents emitted by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    ToggleTheme,
    ToggleSound,
    /// Highlight a random card
    RandomFocus,
    /// Move the card grid by one row
    ScrollUp,
    ScrollDown,
    /// Show (or re-roll) a random metric's trivia
    Surprise,
    DismissModal,
    /// Leave the intro overlay
    StartWatching,
    Quit,
}

/// Messages from control thread → audio callback
#[derive(Debug, Clone, Copy)]
pub enum VoiceCmd {
    /// Start a new voice at this frequency (Hz)
    Trigger(f32),
}
