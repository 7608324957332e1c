use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::app::AppState;
use crate::ui::theme::Palette;

const TITLE: &str = "◉ DataPulse";
const TAGLINE: &str = "Real-time planetary metrics. Live estimates from the global datasphere.";

/// Title, tagline and the floating control indicators
pub struct HeaderWidget<'a> {
    pub state: AppState,
    pub palette: &'a Palette,
}

impl HeaderWidget<'_> {
    fn controls(&self) -> [(&'static str, bool); 2] {
        let sound = if self.state.sound_enabled {
            ("♪ SOUND ON", false)
        } else {
            // Highlighted while muted
            ("♪ MUTED", true)
        };
        let theme = if self.state.is_dark_mode {
            ("☾ NIGHT", false)
        } else {
            ("☀ DAY", false)
        };
        [sound, theme]
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || area.width < 20 {
            return;
        }
        let p = self.palette;
        buf.set_style(area, Style::default().bg(p.bg));

        let title_x = area.x + area.width.saturating_sub(TITLE.chars().count() as u16) / 2;
        buf.set_string(
            title_x,
            area.y + 1,
            TITLE,
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        );

        if area.height >= 3 {
            let width = TAGLINE.len().min(area.width as usize);
            let x = area.x + (area.width - width as u16) / 2;
            buf.set_stringn(x, area.y + 2, TAGLINE, width, Style::default().fg(p.dim));
        }

        // Controls, right-aligned on the title row
        let mut x = area.x + area.width;
        for (label, active) in self.controls().iter().rev() {
            let text = format!(" {label} ");
            let w = text.chars().count() as u16;
            if x < area.x + w + 1 {
                break;
            }
            x -= w + 1;
            let style = if *active {
                Style::default().fg(p.focus).bg(p.active_bg)
            } else {
                Style::default().fg(p.fg).bg(p.panel)
            };
            buf.set_string(x, area.y, &text, style);
        }
    }
}
