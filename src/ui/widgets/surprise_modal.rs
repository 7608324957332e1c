use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap};

use crate::metrics::MetricDefinition;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Palette;

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 12;

/// Trivia card for one metric, centered over the dashboard
pub struct SurpriseModalWidget<'a> {
    pub metric: &'a MetricDefinition,
    pub is_dark_mode: bool,
    pub palette: &'a Palette,
}

impl Widget for SurpriseModalWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        if rect.width < 20 || rect.height < 5 {
            return;
        }
        let p = self.palette;
        let color = self.metric.color.for_mode(self.is_dark_mode);

        Clear.render(rect, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(Span::styled(" Did you know? ", Style::default().fg(p.accent)))
            .style(Style::default().bg(p.panel).fg(p.fg));

        let lines = vec![
            Line::from(vec![
                Span::styled(self.metric.icon, Style::default().fg(color)),
                Span::raw("  "),
                Span::styled(
                    self.metric.label,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
            .centered(),
            Line::raw(""),
            Line::raw(self.metric.trivia).centered(),
            Line::raw(""),
            Line::styled("[N] Another Fact?   [Esc] Close", Style::default().fg(p.dim)).centered(),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(rect, buf);
    }
}
