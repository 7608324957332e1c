use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::ui::theme::Palette;

const TITLE: &str = "DataPulse";
const SUBTITLE: &str = "Witness the scale of our digital world in real-time.";
const BUTTON: &str = "[ Enter ]  Start Watching  →";

/// Full-screen intro overlay. `fade` goes from 0.0 (opaque) to 1.0 (gone).
pub struct IntroWidget<'a> {
    pub fade: f32,
    pub palette: &'a Palette,
}

/// Linear blend between two RGB colors; other colors snap at the midpoint
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

fn centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    let len = text.chars().count() as u16;
    let x = area.x + area.width.saturating_sub(len) / 2;
    buf.set_stringn(x, y, text, area.width as usize, style);
}

impl Widget for IntroWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.fade >= 1.0 || area.height < 5 {
            return;
        }
        let p = self.palette;
        let overlay = Color::Rgb(2, 6, 23);
        let fg = blend(p.fg, overlay, self.fade);
        let accent = blend(p.accent, overlay, self.fade);
        let dim = blend(p.dim, overlay, self.fade);

        buf.set_style(area, Style::default().bg(overlay));

        let mid = area.y + area.height / 2;
        centered(buf, area, mid - 2, "◉", Style::default().fg(accent));
        centered(
            buf,
            area,
            mid - 1,
            TITLE,
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        );
        centered(buf, area, mid + 1, SUBTITLE, Style::default().fg(dim));
        if mid + 3 < area.y + area.height {
            centered(buf, area, mid + 3, BUTTON, Style::default().fg(accent));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::NIGHT;

    #[test]
    fn blend_endpoints() {
        let a = Color::Rgb(0, 100, 200);
        let b = Color::Rgb(200, 100, 0);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(100, 100, 100));
    }

    #[test]
    fn fully_faded_intro_draws_nothing() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        IntroWidget { fade: 1.0, palette: &NIGHT }.render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn intro_shows_call_to_action() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        IntroWidget { fade: 0.0, palette: &NIGHT }.render(area, &mut buf);
        let row: String = (0..area.width)
            .map(|x| buf[(x, 15u16)].symbol().to_string())
            .collect();
        assert!(row.contains("Start Watching"));
    }
}
