#![allow(dead_code)]

mod ambience;
mod app;
mod cli;
mod config;
mod constants;
mod counter;
mod error;
mod input;
mod logging;
mod messages;
mod metrics;
mod terminal;
mod ui;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use chrono::Local;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::info;

use crate::ambience::engine::CpalOutput;
use crate::ambience::scheduler::AmbienceScheduler;
use crate::ambience::session::{AudioOutput, AudioSession};
use crate::app::{App, AppState, IntroState, StateChange};
use crate::cli::Cli;
use crate::config::{Config, ThemeMode};
use crate::input::InputLayer;
use crate::messages::UiEvent;
use crate::ui::layout::screen_viewport;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    run(&config)?;
    Ok(())
}

fn load_config(cli: &Cli) -> error::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    cli.apply(&mut config);
    Ok(config)
}

fn run(config: &Config) -> error::Result<()> {
    // --- Ambience: session opened lazily on first enable ---
    let master_gain = config.ambience.master_gain;
    let mut session = AudioSession::new(move || CpalOutput::open(master_gain));
    let mut ambience = AmbienceScheduler::new();

    // --- App state ---
    let state = AppState {
        is_dark_mode: config.display.theme == ThemeMode::Dark,
        sound_enabled: false,
    };
    let mut app = App::new(state, config.display.show_intro);
    let mut rng = StdRng::from_entropy();

    if config.ambience.enabled {
        if let Some(change) = app.handle(UiEvent::ToggleSound, Instant::now(), &mut rng) {
            notify(change, Instant::now(), &mut ambience, &mut session);
        }
    }

    // --- Terminal setup ---
    terminal::install_panic_hook();
    let guard = terminal::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_ui_loop(
        &mut terminal,
        &mut app,
        &mut ambience,
        &mut session,
        &mut rng,
        config.frame_duration(),
    );

    // --- Cleanup ---
    app.dashboard.unmount();
    ambience.shutdown(&mut session);
    drop(guard);

    info!("shutdown complete");
    result
}

fn run_ui_loop<O: AudioOutput>(
    terminal: &mut Tui,
    app: &mut App,
    ambience: &mut AmbienceScheduler,
    session: &mut AudioSession<O>,
    rng: &mut StdRng,
    frame_duration: Duration,
) -> error::Result<()> {
    app.dashboard.mount();
    let size = terminal.size()?;
    app.ui.set_viewport(screen_viewport(Rect::new(0, 0, size.width, size.height)));
    let mut dirty = true;

    loop {
        let frame_start = Instant::now();

        // --- Process keyboard input ---
        if event::poll(Duration::from_millis(1))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(evt) = input::handle_key(key, InputLayer::of(&app.ui)) {
                        if let Some(change) = app.handle(evt, frame_start, rng) {
                            notify(change, frame_start, ambience, session);
                        }
                        dirty = true;
                    }
                }
                Event::Resize(width, height) => {
                    app.ui.set_viewport(screen_viewport(Rect::new(0, 0, width, height)));
                    dirty = true;
                }
                _ => {}
            }
        }

        if app.ui.should_quit {
            break;
        }

        // --- Timers ---
        let now = Instant::now();
        ambience.tick(now, session);
        dirty |= app.ui.expire(now);
        dirty |= matches!(app.ui.intro, Some(IntroState::Exiting { .. }));

        // --- Counter frames ---
        dirty |= app.dashboard.on_frame(&Local::now());

        // --- Render ---
        if dirty {
            terminal.draw(|frame| ui::draw(frame, app, now))?;
            dirty = false;
        }

        // --- Frame rate limiting ---
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }

    Ok(())
}

/// Forwards app state changes to the parts of the system that observe them
fn notify<O: AudioOutput>(
    change: StateChange,
    now: Instant,
    ambience: &mut AmbienceScheduler,
    session: &mut AudioSession<O>,
) {
    match change {
        StateChange::Sound { enabled } => ambience.set_enabled(enabled, now, session),
        StateChange::Theme { is_dark_mode } => info!(is_dark_mode, "theme changed"),
    }
}
