use std::time::{Duration, Instant};

use chrono::{DateTime, TimeZone};
use rand::Rng;
use tracing::debug;

use crate::constants::{FOCUS_HIGHLIGHT_MS, INTRO_EXIT_MS};
use crate::counter::frame::{FrameHandle, FrameScheduler};
use crate::counter::CounterAnimation;
use crate::messages::UiEvent;
use crate::metrics::{MetricKind, METRICS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    pub is_dark_mode: bool,
    pub sound_enabled: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            is_dark_mode: true,
            sound_enabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleTheme,
    ToggleSound,
}

/// Notification produced by every `AppState` mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Theme { is_dark_mode: bool },
    Sound { enabled: bool },
}

impl AppState {
    pub fn apply(&mut self, action: Action) -> StateChange {
        match action {
            Action::ToggleTheme => {
                self.is_dark_mode = !self.is_dark_mode;
                StateChange::Theme {
                    is_dark_mode: self.is_dark_mode,
                }
            }
            Action::ToggleSound => {
                self.sound_enabled = !self.sound_enabled;
                StateChange::Sound {
                    enabled: self.sound_enabled,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub kind: MetricKind,
    pub until: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroState {
    Showing,
    Exiting { since: Instant },
}

impl IntroState {
    /// Fade progress in 0.0..=1.0 (0 while fully shown)
    pub fn fade(self, now: Instant) -> f32 {
        match self {
            IntroState::Showing => 0.0,
            IntroState::Exiting { since } => {
                let elapsed = now.saturating_duration_since(since).as_secs_f32();
                (elapsed / (INTRO_EXIT_MS as f32 / 1000.0)).clamp(0.0, 1.0)
            }
        }
    }
}

/// How many card rows and columns the dashboard can show at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridViewport {
    pub columns: usize,
    pub visible_rows: usize,
}

impl GridViewport {
    pub fn total_rows(&self) -> usize {
        MetricKind::ALL.len().div_ceil(self.columns.max(1))
    }

    pub fn max_scroll(&self) -> usize {
        self.total_rows().saturating_sub(self.visible_rows)
    }

    pub fn row_of(&self, kind: MetricKind) -> usize {
        kind.index() / self.columns.max(1)
    }
}

impl Default for GridViewport {
    /// Single column with every card visible, until the terminal is measured
    fn default() -> Self {
        Self {
            columns: 1,
            visible_rows: MetricKind::ALL.len(),
        }
    }
}

/// Ephemeral view state, never persisted
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub focused: Option<Focus>,
    pub surprise: Option<MetricKind>,
    pub intro: Option<IntroState>,
    /// First card row shown on the dashboard
    pub scroll_row: usize,
    pub viewport: GridViewport,
    pub should_quit: bool,
}

impl UiState {
    pub fn new(show_intro: bool) -> Self {
        Self {
            focused: None,
            surprise: None,
            intro: show_intro.then_some(IntroState::Showing),
            scroll_row: 0,
            viewport: GridViewport::default(),
            should_quit: false,
        }
    }

    pub fn focused_kind(&self) -> Option<MetricKind> {
        self.focused.map(|f| f.kind)
    }

    /// Records the measured grid and pulls the scroll offset back in range.
    /// Returns true if the scroll offset moved.
    pub fn set_viewport(&mut self, viewport: GridViewport) -> bool {
        self.viewport = viewport;
        let clamped = self.scroll_row.min(viewport.max_scroll());
        let moved = clamped != self.scroll_row;
        self.scroll_row = clamped;
        moved
    }

    pub fn scroll_up(&mut self) {
        self.scroll_row = self.scroll_row.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_row = (self.scroll_row + 1).min(self.viewport.max_scroll());
    }

    /// Scrolls just enough for `kind`'s card to be on screen
    pub fn reveal(&mut self, kind: MetricKind) {
        let visible = self.viewport.visible_rows;
        if visible == 0 {
            return;
        }
        let row = self.viewport.row_of(kind);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible {
            self.scroll_row = row + 1 - visible;
        }
    }

    /// Clears timed-out focus and finished intro fades. Returns true if
    /// anything changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.focused.is_some_and(|f| now >= f.until) {
            self.focused = None;
            changed = true;
        }
        if let Some(IntroState::Exiting { since }) = self.intro {
            if now.saturating_duration_since(since) >= Duration::from_millis(INTRO_EXIT_MS) {
                self.intro = None;
                changed = true;
            }
        }
        changed
    }
}

/// One counter animation per metric, all driven by one frame scheduler
pub struct Dashboard {
    frames: FrameScheduler,
    fired: Vec<FrameHandle>,
    cards: Vec<CounterAnimation>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            frames: FrameScheduler::new(),
            fired: Vec::with_capacity(METRICS.len()),
            cards: METRICS
                .iter()
                .map(|m| CounterAnimation::new(m.rate_per_second))
                .collect(),
        }
    }

    pub fn mount(&mut self) {
        for card in &mut self.cards {
            card.mount(&mut self.frames);
        }
    }

    pub fn unmount(&mut self) {
        for card in &mut self.cards {
            card.unmount(&mut self.frames);
        }
    }

    /// Runs one redraw tick. Returns true if any card's display changed.
    pub fn on_frame<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> bool {
        self.frames.begin_frame(&mut self.fired);
        let mut changed = false;
        for card in &mut self.cards {
            changed |= card.on_frame(&self.fired, now, &mut self.frames);
        }
        changed
    }

    pub fn display(&self, kind: MetricKind) -> &str {
        self.cards[kind.index()].display()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level view controller: owns app state and ephemeral UI state, and
/// turns user intents into state changes.
pub struct App {
    pub state: AppState,
    pub ui: UiState,
    pub dashboard: Dashboard,
}

impl App {
    pub fn new(state: AppState, show_intro: bool) -> Self {
        Self {
            state,
            ui: UiState::new(show_intro),
            dashboard: Dashboard::new(),
        }
    }

    /// Applies a user intent. `AppState` mutations are reported back so the
    /// caller can notify whatever depends on them.
    pub fn handle<R: Rng + ?Sized>(
        &mut self,
        event: UiEvent,
        now: Instant,
        rng: &mut R,
    ) -> Option<StateChange> {
        debug!(?event, "ui event");
        match event {
            UiEvent::Quit => {
                self.ui.should_quit = true;
                None
            }
            UiEvent::ToggleTheme => Some(self.state.apply(Action::ToggleTheme)),
            UiEvent::ToggleSound => Some(self.state.apply(Action::ToggleSound)),
            UiEvent::RandomFocus => {
                let kind = random_metric(rng);
                self.ui.reveal(kind);
                self.ui.focused = Some(Focus {
                    kind,
                    until: now + Duration::from_millis(FOCUS_HIGHLIGHT_MS),
                });
                None
            }
            UiEvent::ScrollUp => {
                self.ui.scroll_up();
                None
            }
            UiEvent::ScrollDown => {
                self.ui.scroll_down();
                None
            }
            UiEvent::Surprise => {
                self.ui.surprise = Some(random_metric(rng));
                None
            }
            UiEvent::DismissModal => {
                self.ui.surprise = None;
                None
            }
            UiEvent::StartWatching => {
                if self.ui.intro == Some(IntroState::Showing) {
                    self.ui.intro = Some(IntroState::Exiting { since: now });
                }
                None
            }
        }
    }
}

fn random_metric<R: Rng + ?Sized>(rng: &mut R) -> MetricKind {
    MetricKind::ALL[rng.gen_range(0..MetricKind::ALL.len())]
}
