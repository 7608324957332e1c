use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use crate::counter::FORMATTER;
use crate::metrics::MetricDefinition;
use crate::ui::theme::Palette;

pub struct CounterCardWidget<'a> {
    pub metric: &'a MetricDefinition,
    pub value: &'a str,
    pub focused: bool,
    pub is_dark_mode: bool,
    pub palette: &'a Palette,
}

/// "+1,234/s", or with two decimals for fractional rates
pub fn rate_label(rate: f64) -> String {
    if rate.fract() == 0.0 && rate >= 0.0 {
        format!("+{}/s", FORMATTER.format(rate as u64))
    } else {
        format!("+{rate:.2}/s")
    }
}

impl Widget for CounterCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 3 {
            return;
        }

        let color = self.metric.color.for_mode(self.is_dark_mode);
        let border = if self.focused { color } else { self.palette.border };
        let border_type = if self.focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(self.palette.panel));
        let inner = block.inner(area);
        block.render(area, buf);

        let x = inner.x + 1;
        let max_width = inner.width.saturating_sub(2) as usize;

        let title = format!("{} {}", self.metric.icon, self.metric.label);
        buf.set_stringn(x, inner.y, &title, max_width, Style::default().fg(self.palette.dim));

        if inner.height >= 2 {
            let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
            if self.focused {
                style = style.add_modifier(Modifier::REVERSED);
            }
            buf.set_stringn(x, inner.y + 1, self.value, max_width, style);
        }

        if inner.height >= 3 {
            let rate = rate_label(self.metric.rate_per_second);
            buf.set_stringn(x, inner.y + 2, &rate, max_width, Style::default().fg(self.palette.dim));
        }
    }
}
