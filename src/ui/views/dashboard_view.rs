use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::metrics::METRICS;
use crate::ui::layout::{card_grid, grid_viewport, CARD_HEIGHT};
use crate::ui::theme;
use crate::ui::views::View;
use crate::ui::widgets::counter_card::CounterCardWidget;

/// Grid of live counter cards, scrolled by whole rows
pub struct DashboardView;

impl View for DashboardView {
    fn render(&self, app: &App, frame: &mut Frame, area: Rect) {
        let palette = theme::palette(app.state.is_dark_mode);
        let focused = app.ui.focused_kind();

        let viewport = grid_viewport(area);
        if viewport.visible_rows == 0 {
            frame.render_widget(
                Paragraph::new("Enlarge the terminal to see the counters")
                    .style(Style::default().fg(palette.dim)),
                area,
            );
            return;
        }

        let scroll = app.ui.scroll_row.min(viewport.max_scroll());
        let first = scroll * viewport.columns;
        let shown = &METRICS[first..];
        let cells = card_grid(area, shown.len());

        for (metric, cell) in shown.iter().zip(&cells) {
            frame.render_widget(
                CounterCardWidget {
                    metric,
                    value: app.dashboard.display(metric.kind),
                    focused: focused == Some(metric.kind),
                    is_dark_mode: app.state.is_dark_mode,
                    palette,
                },
                *cell,
            );
        }

        let below = shown.len() - cells.len();
        let used = viewport.visible_rows as u16 * CARD_HEIGHT;
        if (first > 0 || below > 0) && area.height > used {
            let mut marker = String::new();
            if first > 0 {
                marker.push_str(&format!("▲ {first} above  "));
            }
            if below > 0 {
                marker.push_str(&format!("▼ {below} below"));
            }
            let line = Rect::new(area.x + 1, area.y + used, area.width.saturating_sub(2), 1);
            frame.render_widget(
                Paragraph::new(marker).style(Style::default().fg(palette.dim)),
                line,
            );
        }
    }
}
