pub mod dashboard_view;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::App;

pub trait View {
    fn render(&self, app: &App, frame: &mut Frame, area: Rect);
}
