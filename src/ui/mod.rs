pub mod layout;
pub mod theme;
pub mod views;
pub mod widgets;

use std::time::Instant;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::App;
use crate::input::{key_hints, InputLayer};
use crate::ui::layout::ScreenLayout;
use crate::ui::views::dashboard_view::DashboardView;
use crate::ui::views::View;
use crate::ui::widgets::footer::FooterWidget;
use crate::ui::widgets::header::HeaderWidget;
use crate::ui::widgets::intro::IntroWidget;
use crate::ui::widgets::surprise_modal::SurpriseModalWidget;

/// Draws one full frame: header, card grid, key hints, then overlays.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    let palette = theme::palette(app.state.is_dark_mode);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        area,
    );

    let layout = ScreenLayout::new(area);
    frame.render_widget(
        HeaderWidget {
            state: app.state,
            palette,
        },
        layout.header,
    );
    DashboardView.render(app, frame, layout.main);

    let hints = key_hints(
        InputLayer::of(&app.ui),
        app.state.sound_enabled,
        app.state.is_dark_mode,
    );
    frame.render_widget(FooterWidget { hints, palette }, layout.footer);

    if let Some(kind) = app.ui.surprise {
        frame.render_widget(
            SurpriseModalWidget {
                metric: kind.definition(),
                is_dark_mode: app.state.is_dark_mode,
                palette,
            },
            layout.main,
        );
    }

    if let Some(intro) = app.ui.intro {
        frame.render_widget(
            IntroWidget {
                fade: intro.fade(now),
                palette,
            },
            area,
        );
    }
}
