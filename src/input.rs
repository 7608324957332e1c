use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::UiState;
use crate::messages::UiEvent;

/// Which layer currently receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLayer {
    Intro,
    Modal,
    Dashboard,
}

impl InputLayer {
    pub fn of(ui: &UiState) -> Self {
        if ui.intro.is_some() {
            InputLayer::Intro
        } else if ui.surprise.is_some() {
            InputLayer::Modal
        } else {
            InputLayer::Dashboard
        }
    }
}

/// Map keyboard input to UiEvent based on the active layer
pub fn handle_key(key: KeyEvent, layer: InputLayer) -> Option<UiEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(UiEvent::Quit);
    }

    match layer {
        InputLayer::Intro => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::StartWatching),
            KeyCode::Esc | KeyCode::Char('q') => Some(UiEvent::Quit),
            _ => None,
        },
        InputLayer::Modal => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x') => Some(UiEvent::DismissModal),
            KeyCode::Char('n') | KeyCode::Char('f') | KeyCode::Char(' ') => Some(UiEvent::Surprise),
            KeyCode::Char('q') => Some(UiEvent::Quit),
            _ => handle_control_key(key),
        },
        InputLayer::Dashboard => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('f') | KeyCode::Char(' ') => Some(UiEvent::Surprise),
            KeyCode::Char('r') => Some(UiEvent::RandomFocus),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::ScrollDown),
            _ => handle_control_key(key),
        },
    }
}

/// Floating controls, available on the dashboard and behind the modal
fn handle_control_key(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('t') => Some(UiEvent::ToggleTheme),
        KeyCode::Char('s') => Some(UiEvent::ToggleSound),
        _ => None,
    }
}

/// Key labels for the hint bar
pub fn key_hints(layer: InputLayer, sound_enabled: bool, is_dark_mode: bool) -> Vec<(&'static str, &'static str)> {
    match layer {
        InputLayer::Intro => vec![("Enter", "Start Watching"), ("Esc", "Quit")],
        InputLayer::Modal => vec![
            ("N", "Another Fact"),
            ("Esc", "Close"),
            ("S", if sound_enabled { "Mute" } else { "Unmute" }),
            ("T", if is_dark_mode { "Light Mode" } else { "Dark Mode" }),
        ],
        InputLayer::Dashboard => vec![
            ("F", "Surprise Me"),
            ("R", "Random Focus"),
            ("↑↓", "Scroll"),
            ("S", if sound_enabled { "Mute" } else { "Unmute" }),
            ("T", if is_dark_mode { "Light Mode" } else { "Dark Mode" }),
            ("Q", "Quit"),
        ],
    }
}
