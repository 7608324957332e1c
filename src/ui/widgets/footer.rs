use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::ui::theme::Palette;

pub const SOURCES: &str = "Sources: Worldometer, Cisco VNI, Statista";

/// Bottom bar: key chips on the left, data sources on the right when there
/// is room for both.
pub struct FooterWidget<'a> {
    pub hints: Vec<(&'static str, &'static str)>,
    pub palette: &'a Palette,
}

impl FooterWidget<'_> {
    /// Hint spans that fit in `width` columns, and the columns they use
    fn hint_line(&self, width: usize) -> (Line<'static>, usize) {
        let p = self.palette;
        let mut spans = vec![Span::raw(" ")];
        let mut used = 1;
        for (key, desc) in &self.hints {
            let chip = Span::styled(format!(" {key} "), Style::default().fg(p.bg).bg(p.accent));
            let label = Span::styled(format!(" {desc}  "), Style::default().fg(p.fg));
            let w = chip.width() + label.width();
            if used + w > width {
                break;
            }
            used += w;
            spans.push(chip);
            spans.push(label);
        }
        (Line::from(spans), used)
    }
}

impl Widget for FooterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(self.palette.bg));

        let (line, used) = self.hint_line(area.width as usize);
        buf.set_line(area.x, area.y, &line, area.width);

        let sources = SOURCES.chars().count() as u16;
        if used as u16 + sources + 1 <= area.width {
            buf.set_string(
                area.x + area.width - sources - 1,
                area.y,
                SOURCES,
                Style::default().fg(self.palette.dim),
            );
        }
    }
}
